//! Export functionality
//!
//! Renders the namelist definition document as indented XML and persists it
//! to disk atomically.

pub mod namelist;

use std::path::PathBuf;

/// Result of an export operation
#[derive(Debug)]
pub struct ExportResult {
    /// Rendered content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The destination's parent directory does not exist; it is never created
    #[error("destination directory {0} does not exist")]
    MissingParentDir(PathBuf),

    #[error("failed to write {path}: {message}")]
    WriteError { path: PathBuf, message: String },
}

// Re-export for convenience
pub use namelist::NamelistDefinitionExporter;
