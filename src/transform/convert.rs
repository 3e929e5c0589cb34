//! Registry-to-namelist-definition conversion.

use tracing::debug;

use super::TransformError;
use super::policy::FilterPolicy;
use super::wrap;
use crate::models::{NamelistDefinition, NamelistEntry, NamelistOption, Registry};

/// Namespace prefix on Registry option names
const SOURCE_PREFIX: &str = "config_";

/// Namespace prefix on namelist definition entry ids
const TARGET_PREFIX: &str = "mpas_";

/// Category emitted on every entry
const CATEGORY: &str = "mpas";

/// Suffix appended to every option description
const DESCRIPTION_SUFFIX: &str = " in MPAS.";

/// Valid Registry option types
const VALID_TYPES: [&str; 4] = ["character", "integer", "logical", "real"];

/// Target type emitted for `character` options
const CHARACTER_TARGET_TYPE: &str = "char*256";

/// Converter from Registry namelist records to CAM-SIMA definition entries.
///
/// Owns the exclusion policy; the translation rules themselves are fixed.
#[derive(Debug, Default)]
pub struct RegistryConverter {
    policy: FilterPolicy,
}

impl RegistryConverter {
    /// Converter with the production [`FilterPolicy`]
    pub fn new() -> Self {
        Self {
            policy: FilterPolicy::default(),
        }
    }

    /// Converter with a caller-supplied policy
    pub fn with_policy(policy: FilterPolicy) -> Self {
        Self { policy }
    }

    /// Convert every surviving option, in document order, one entry each.
    ///
    /// Returns the frozen [`NamelistDefinition`]; the caller hands it to the
    /// exporter unchanged.
    pub fn convert(&self, registry: &Registry) -> Result<NamelistDefinition, TransformError> {
        let mut entries = Vec::new();

        for record in &registry.records {
            if self.policy.excludes_record(&record.name) {
                debug!(record = %record.name, "skipping excluded record");
                continue;
            }
            for option in &record.options {
                if self.policy.excludes_option(SOURCE_PREFIX, &option.name) {
                    debug!(option = %option.name, "skipping excluded option");
                    continue;
                }
                entries.push(NamelistEntry {
                    id: translate_name(&option.name),
                    entry_type: translate_type(&record.name, option)?,
                    category: CATEGORY.to_string(),
                    group: record.name.clone(),
                    desc: build_description(option),
                    value: option.default_value.clone(),
                });
            }
        }

        Ok(NamelistDefinition { entries })
    }
}

/// Replace the first occurrence of the source prefix with the target prefix.
///
/// Names without the prefix pass through unchanged. No further rewriting is
/// done on the result, even when it ends up containing the target prefix
/// twice.
pub(crate) fn translate_name(name: &str) -> String {
    name.replacen(SOURCE_PREFIX, TARGET_PREFIX, 1)
}

/// Map a declared Registry type to its namelist definition type token.
///
/// Matching is case-insensitive; the canonical lowercase spelling is what
/// gets emitted. Anything outside the valid set aborts the conversion.
pub(crate) fn translate_type(
    record: &str,
    option: &NamelistOption,
) -> Result<String, TransformError> {
    let lower = option.option_type.to_ascii_lowercase();
    match lower.as_str() {
        "character" => Ok(CHARACTER_TARGET_TYPE.to_string()),
        "integer" | "logical" | "real" => Ok(lower),
        _ => Err(TransformError::InvalidType {
            record: record.to_string(),
            option: option.name.clone(),
            value: option.option_type.clone(),
            valid: VALID_TYPES.join(", "),
        }),
    }
}

/// Assemble the three-part `<desc>` text: the description itself, the
/// possible values, and the default, each wrapped. The closing line of four
/// spaces is kept for byte compatibility with previously generated files.
pub(crate) fn build_description(option: &NamelistOption) -> String {
    let summary = wrap::fill(&format!("{}{}", option.description, DESCRIPTION_SUFFIX));
    let possible = wrap::fill(&format!("Possible values: {}", option.possible_values));
    let default = wrap::fill(&format!("Default: {}", option.default_value));
    [
        format!("\n{summary}"),
        format!("\n{possible}"),
        format!("{default}\n    "),
    ]
    .join("\n")
}
