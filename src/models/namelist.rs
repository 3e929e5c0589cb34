//! In-memory model of the CAM-SIMA namelist definition output.

/// A complete namelist definition document.
///
/// Built append-only by the converter, one entry per surviving option, and
/// frozen before it is handed to the exporter.
#[derive(Debug, Clone, PartialEq)]
pub struct NamelistDefinition {
    /// Entries in source document order
    pub entries: Vec<NamelistEntry>,
}

/// One `<entry>` element of the namelist definition.
#[derive(Debug, Clone, PartialEq)]
pub struct NamelistEntry {
    /// Value of the `id` attribute
    pub id: String,
    /// Text of the `<type>` child (`char*256`, `integer`, `logical`, `real`)
    pub entry_type: String,
    pub category: String,
    /// Name of the Registry record the option came from, unmodified
    pub group: String,
    /// Multi-line formatted description
    pub desc: String,
    /// Default value, emitted verbatim as `<values><value>`
    pub value: String,
}
