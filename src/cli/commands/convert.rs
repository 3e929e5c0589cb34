//! Convert command implementation

use std::path::Path;

use tracing::info;

use crate::cli::error::CliError;
use crate::export::{NamelistDefinitionExporter, namelist};
use crate::import::RegistryImporter;
use crate::transform::{FilterPolicy, RegistryConverter};

/// Run the full conversion: load the registry, convert it, write the result.
///
/// Returns the number of entries written.
pub fn handle_convert(registry_path: &Path, output_path: &Path) -> Result<usize, CliError> {
    handle_convert_with_policy(registry_path, output_path, FilterPolicy::default())
}

/// [`handle_convert`] with a caller-supplied exclusion policy.
pub fn handle_convert_with_policy(
    registry_path: &Path,
    output_path: &Path,
    policy: FilterPolicy,
) -> Result<usize, CliError> {
    let content =
        std::fs::read_to_string(registry_path).map_err(|e| CliError::InputNotFound {
            path: registry_path.to_path_buf(),
            message: e.to_string(),
        })?;

    let registry = RegistryImporter::new().import(&content)?;
    info!(records = registry.records.len(), "parsed registry");

    let definition = RegistryConverter::with_policy(policy).convert(&registry)?;
    info!(
        entries = definition.entries.len(),
        "converted namelist options"
    );

    let result = NamelistDefinitionExporter::export(&definition)?;
    namelist::write_file(output_path, &result.content)?;

    Ok(definition.entries.len())
}
