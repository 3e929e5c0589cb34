//! Registry importer
//!
//! Reads the `<nml_record>`/`<nml_option>` elements of an MPAS-A
//! Registry.xml with a streaming parser.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::ImportError;
use crate::models::{NamelistOption, NamelistRecord, Registry};

/// Registry importer
///
/// Parses MPAS-A Registry XML content into a [`Registry`] struct. The load
/// is all-or-nothing: the first structural problem aborts it.
#[derive(Debug, Default)]
pub struct RegistryImporter;

impl RegistryImporter {
    /// Create a new RegistryImporter
    pub fn new() -> Self {
        Self
    }

    /// Parse Registry XML content.
    ///
    /// Only namelist records and their options are read; registry elements
    /// describing dimensions, var structs or packages are skipped.
    pub fn import(&self, xml_content: &str) -> Result<Registry, ImportError> {
        let mut reader = Reader::from_str(xml_content);
        reader.config_mut().trim_text(true);

        let mut records: Vec<NamelistRecord> = Vec::new();
        let mut open_record: Option<NamelistRecord> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                    b"nml_record" => {
                        let record =
                            Self::open_record(e, &open_record, reader.buffer_position() as u64)?;
                        open_record = Some(record);
                    }
                    b"nml_option" => {
                        Self::read_option(e, &mut open_record, reader.buffer_position() as u64)?;
                    }
                    _ => {}
                },
                Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                    b"nml_record" => {
                        // Self-closing record: valid, just has no options
                        let record =
                            Self::open_record(e, &open_record, reader.buffer_position() as u64)?;
                        records.push(record);
                    }
                    b"nml_option" => {
                        Self::read_option(e, &mut open_record, reader.buffer_position() as u64)?;
                    }
                    _ => {}
                },
                Ok(Event::End(ref e)) => {
                    if e.local_name().as_ref() == b"nml_record" {
                        if let Some(record) = open_record.take() {
                            records.push(record);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ImportError::Xml {
                        position: reader.error_position() as u64,
                        message: e.to_string(),
                    });
                }
                _ => {}
            }
        }

        Ok(Registry { records })
    }

    fn open_record(
        e: &BytesStart<'_>,
        open_record: &Option<NamelistRecord>,
        position: u64,
    ) -> Result<NamelistRecord, ImportError> {
        if let Some(record) = open_record {
            return Err(ImportError::NestedRecord {
                record: record.name.clone(),
            });
        }
        let name = required_attr(e, "name", "", position)?;
        Ok(NamelistRecord {
            name,
            options: Vec::new(),
        })
    }

    fn read_option(
        e: &BytesStart<'_>,
        open_record: &mut Option<NamelistRecord>,
        position: u64,
    ) -> Result<(), ImportError> {
        let record = open_record.as_mut().ok_or(ImportError::OrphanOption)?;
        let location = format!(" in record '{}'", record.name);
        let option = NamelistOption {
            name: required_attr(e, "name", &location, position)?,
            option_type: required_attr(e, "type", &location, position)?,
            description: required_attr(e, "description", &location, position)?,
            possible_values: required_attr(e, "possible_values", &location, position)?,
            default_value: required_attr(e, "default_value", &location, position)?,
        };
        record.options.push(option);
        Ok(())
    }
}

/// Look up a required attribute, XML-unescaping its value.
fn required_attr(
    e: &BytesStart<'_>,
    name: &str,
    location: &str,
    position: u64,
) -> Result<String, ImportError> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == name.as_bytes() {
            let value = attr.unescape_value().map_err(|err| ImportError::Xml {
                position,
                message: err.to_string(),
            })?;
            return Ok(value.into_owned());
        }
    }
    Err(ImportError::MissingAttribute {
        element: String::from_utf8_lossy(e.local_name().as_ref()).to_string(),
        attribute: name.to_string(),
        location: location.to_string(),
    })
}
