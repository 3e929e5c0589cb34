//! In-memory model of the MPAS-A Registry namelist sections.

/// The namelist content of a parsed Registry.xml.
///
/// Produced once by the importer and only read afterwards; the converter
/// never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    /// Namelist records in document order
    pub records: Vec<NamelistRecord>,
}

/// A `<nml_record>` element: a named group of namelist options.
#[derive(Debug, Clone, PartialEq)]
pub struct NamelistRecord {
    pub name: String,
    /// Options in document order
    pub options: Vec<NamelistOption>,
}

/// A `<nml_option>` element.
///
/// All attributes are kept verbatim; the declared type is validated during
/// conversion, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct NamelistOption {
    pub name: String,
    /// Declared Fortran type (`character`, `integer`, `logical`, `real`)
    pub option_type: String,
    pub description: String,
    pub possible_values: String,
    pub default_value: String,
}
