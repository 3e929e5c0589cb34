//! Namelist definition exporter
//!
//! Writes the CAM-SIMA `namelist_definition.xml` format: an `entry_id_pg`
//! root, one leading comment, then one `<entry>` per converted option.

use std::io::Write;
use std::path::{Path, PathBuf};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::{ExportError, ExportResult};
use crate::models::{NamelistDefinition, NamelistEntry};

/// Root element of the namelist definition schema
const ROOT_TAG: &str = "entry_id_pg";

/// Schema version emitted on the root element
const SCHEMA_VERSION: &str = "2.0";

/// Leading comment identifying the provenance of the file
const HEADER_COMMENT: &str = " MPAS dycore namelist options, generated from the MPAS-A Registry ";

/// Exporter for the CAM-SIMA namelist definition XML format.
///
/// Receives the finished document and performs no transformation logic.
pub struct NamelistDefinitionExporter;

impl NamelistDefinitionExporter {
    /// Render the document as XML indented with two spaces per level.
    ///
    /// Output is deterministic for a given document: elements and attributes
    /// appear in insertion order.
    pub fn export(definition: &NamelistDefinition) -> Result<ExportResult, ExportError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(ser)?;

        let mut root = BytesStart::new(ROOT_TAG);
        root.push_attribute(("version", SCHEMA_VERSION));
        writer.write_event(Event::Start(root)).map_err(ser)?;
        writer
            .write_event(Event::Comment(BytesText::new(HEADER_COMMENT)))
            .map_err(ser)?;

        for entry in &definition.entries {
            write_entry(&mut writer, entry)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(ROOT_TAG)))
            .map_err(ser)?;

        let mut xml = writer.into_inner();
        xml.push(b'\n');
        let content =
            String::from_utf8(xml).map_err(|e| ExportError::SerializationError(e.to_string()))?;

        Ok(ExportResult {
            content,
            format: "xml".to_string(),
        })
    }
}

/// Persist rendered content at `path`, replacing any existing file.
///
/// The content is written to a temporary file in the destination directory
/// and renamed into place, so a failed run never leaves a partial file. The
/// destination's parent directory must already exist.
pub fn write_file(path: &Path, content: &str) -> Result<(), ExportError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !parent.is_dir() {
        return Err(ExportError::MissingParentDir(parent));
    }

    let mut tmp = tempfile::NamedTempFile::new_in(&parent).map_err(|e| write_error(path, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| write_error(path, e))?;
    tmp.persist(path).map_err(|e| write_error(path, e))?;
    Ok(())
}

fn write_entry(writer: &mut Writer<Vec<u8>>, entry: &NamelistEntry) -> Result<(), ExportError> {
    let mut start = BytesStart::new("entry");
    start.push_attribute(("id", entry.id.as_str()));
    writer.write_event(Event::Start(start)).map_err(ser)?;

    write_text_element(writer, "type", &entry.entry_type)?;
    write_text_element(writer, "category", &entry.category)?;
    write_text_element(writer, "group", &entry.group)?;
    write_text_element(writer, "desc", &entry.desc)?;

    writer
        .write_event(Event::Start(BytesStart::new("values")))
        .map_err(ser)?;
    write_text_element(writer, "value", &entry.value)?;
    writer
        .write_event(Event::End(BytesEnd::new("values")))
        .map_err(ser)?;

    writer
        .write_event(Event::End(BytesEnd::new("entry")))
        .map_err(ser)?;
    Ok(())
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    tag: &str,
    text: &str,
) -> Result<(), ExportError> {
    writer
        .write_event(Event::Start(BytesStart::new(tag)))
        .map_err(ser)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(ser)?;
    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(ser)?;
    Ok(())
}

fn ser<E: std::fmt::Display>(e: E) -> ExportError {
    ExportError::SerializationError(e.to_string())
}

fn write_error<E: std::fmt::Display>(path: &Path, e: E) -> ExportError {
    ExportError::WriteError {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}
