//! MPAS Registry to CAM-SIMA namelist definition converter
//!
//! Converts the namelist options contained in an MPAS-A `Registry.xml` into
//! the `namelist_definition.xml` format consumed by CAM-SIMA:
//! - Import: parse the registry's `<nml_record>`/`<nml_option>` elements
//! - Transform: drop excluded records and options, translate names and
//!   types, assemble the formatted descriptions
//! - Export: render the indented XML output and persist it atomically

pub mod cli;
pub mod export;
pub mod import;
pub mod models;
pub mod transform;

// Re-export commonly used types
pub use export::{ExportError, ExportResult, NamelistDefinitionExporter};
pub use import::{ImportError, RegistryImporter};
pub use models::{NamelistDefinition, NamelistEntry, NamelistOption, NamelistRecord, Registry};
pub use transform::{FilterPolicy, RegistryConverter, TransformError};
