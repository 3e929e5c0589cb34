//! Import functionality
//!
//! Parses the namelist sections of an MPAS-A Registry.xml into the
//! in-memory [`Registry`](crate::models::Registry) model. Everything else
//! in the registry (dimensions, var structs, packages) is ignored.

pub mod registry;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The document is not well-formed XML
    #[error("XML parsing error at position {position}: {message}")]
    Xml { position: u64, message: String },

    /// A record or option lacks one of its required attributes
    #[error("<{element}> is missing required attribute '{attribute}'{location}")]
    MissingAttribute {
        element: String,
        attribute: String,
        /// Empty, or ` in record '...'` when the enclosing record is known
        location: String,
    },

    /// An option appeared outside of any record
    #[error("<nml_option> found outside of a <nml_record>")]
    OrphanOption,

    /// A record element was opened inside another record
    #[error("nested <nml_record> inside record '{record}'")]
    NestedRecord { record: String },
}

// Re-export for convenience
pub use registry::RegistryImporter;
