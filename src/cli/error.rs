//! CLI error type and exit-code mapping

use std::path::PathBuf;

use crate::export::ExportError;
use crate::import::ImportError;
use crate::transform::TransformError;

/// Error surfaced by the CLI, one variant per failure class.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The registry path does not exist or cannot be read
    #[error("cannot read registry file {path}: {message}")]
    InputNotFound { path: PathBuf, message: String },

    #[error("malformed registry: {0}")]
    MalformedInput(#[from] ImportError),

    #[error(transparent)]
    InvalidType(#[from] TransformError),

    #[error("cannot write output: {0}")]
    OutputWrite(#[from] ExportError),
}

impl CliError {
    /// Process exit code for this failure class; zero is reserved for
    /// success.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InputNotFound { .. } => 2,
            CliError::MalformedInput(_) => 3,
            CliError::InvalidType(_) => 4,
            CliError::OutputWrite(_) => 5,
        }
    }
}
