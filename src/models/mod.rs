//! Data model for the converter
//!
//! Source side: the namelist sections of an MPAS-A Registry.
//! Target side: the CAM-SIMA namelist definition document.

pub mod namelist;
pub mod registry;

// Re-export for convenience
pub use namelist::{NamelistDefinition, NamelistEntry};
pub use registry::{NamelistOption, NamelistRecord, Registry};
