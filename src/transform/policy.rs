//! Declarative exclusion policy for records and options.

/// Records whose options CAM-SIMA drives through CIME instead of the MPAS
/// namelist.
const EXCLUDED_RECORDS: [&str; 5] = [
    "io",
    "decomposition",
    "restart",
    "limited_area",
    "assimilation",
];

/// Option-name fragments for settings owned by the host model's time
/// management. Each is prefixed with the source namespace prefix before
/// matching.
const EXCLUDED_OPTION_FRAGMENTS: [&str; 6] = [
    "start_time",
    "stop_time",
    "run_duration",
    "calendar_type",
    "do_restart",
    "restart_timestamp_name",
];

/// Which Registry records and options are dropped during conversion.
///
/// Record names match case-insensitively and exactly; option fragments are
/// prefixed with the source namespace prefix and matched case-insensitively
/// as substrings of the option name, so excluding `start_time` also drops
/// an option named `config_start_time_offset`.
#[derive(Debug, Clone)]
pub struct FilterPolicy {
    /// Record names skipped wholesale
    pub excluded_records: Vec<String>,
    /// Option-name fragments skipped wherever they occur
    pub excluded_fragments: Vec<String>,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            excluded_records: EXCLUDED_RECORDS.iter().map(|s| s.to_string()).collect(),
            excluded_fragments: EXCLUDED_OPTION_FRAGMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl FilterPolicy {
    /// Policy with the production exclusion lists
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy that keeps every record and option
    pub fn keep_all() -> Self {
        Self {
            excluded_records: Vec::new(),
            excluded_fragments: Vec::new(),
        }
    }

    /// Whether a whole record is excluded
    pub fn excludes_record(&self, record_name: &str) -> bool {
        self.excluded_records
            .iter()
            .any(|r| r.eq_ignore_ascii_case(record_name))
    }

    /// Whether an option is excluded. `prefix` is the source namespace
    /// prefix put in front of each fragment before the substring match.
    pub fn excludes_option(&self, prefix: &str, option_name: &str) -> bool {
        let name = option_name.to_ascii_lowercase();
        self.excluded_fragments.iter().any(|fragment| {
            let needle = format!("{prefix}{fragment}").to_ascii_lowercase();
            name.contains(&needle)
        })
    }
}
