//! End-to-end conversion tests

use std::path::Path;

use mpas_registry_converter::cli::commands::convert::{
    handle_convert, handle_convert_with_policy,
};
use mpas_registry_converter::transform::FilterPolicy;
use mpas_registry_converter::{
    NamelistDefinitionExporter, RegistryConverter, RegistryImporter,
};

/// Count `<entry>` elements in rendered output with an independent parse.
fn count_entries(xml: &str) -> usize {
    use quick_xml::Reader;
    use quick_xml::events::Event;

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut count = 0;
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if e.local_name().as_ref() == b"entry" {
                    count += 1;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("output is not well-formed XML: {}", e),
            _ => {}
        }
    }
    count
}

mod pipeline_tests {
    use super::*;

    #[test]
    fn test_single_option_scenario() {
        let registry_xml = r#"<registry>
  <nml_record name="dycore">
    <nml_option name="config_dt" type="real" default_value="2.0"
                description="timestep" possible_values="positive real"/>
  </nml_record>
</registry>"#;

        let registry = RegistryImporter::new().import(registry_xml).unwrap();
        let definition = RegistryConverter::new().convert(&registry).unwrap();

        assert_eq!(definition.entries.len(), 1);
        let entry = &definition.entries[0];
        assert_eq!(entry.id, "mpas_dt");
        assert_eq!(entry.entry_type, "real");
        assert_eq!(entry.group, "dycore");
        assert_eq!(entry.value, "2.0");
        assert_eq!(
            entry.desc,
            "\n      timestep in MPAS.\n\n      Possible values: positive real\n      Default: 2.0\n    "
        );

        let result = NamelistDefinitionExporter::export(&definition).unwrap();
        assert!(result.content.contains("<entry id=\"mpas_dt\">"));
        assert!(result.content.contains("<type>real</type>"));
        assert!(result.content.contains("<group>dycore</group>"));
        assert!(result.content.contains("<value>2.0</value>"));
        assert_eq!(count_entries(&result.content), 1);
    }

    #[test]
    fn test_cardinality_with_default_policy() {
        let registry_xml = r#"<registry>
  <nml_record name="io">
    <nml_option name="config_pio_num_iotasks" type="integer" default_value="0"
                description="io tasks" possible_values="non-negative integers"/>
  </nml_record>
  <nml_record name="dycore">
    <nml_option name="config_dt" type="real" default_value="720.0"
                description="model timestep" possible_values="positive reals"/>
    <nml_option name="config_start_time_offset" type="real" default_value="0.0"
                description="offset" possible_values="reals"/>
    <nml_option name="config_scheme" type="character" default_value="SRK3"
                description="scheme" possible_values="SRK3"/>
  </nml_record>
</registry>"#;

        let registry = RegistryImporter::new().import(registry_xml).unwrap();
        let definition = RegistryConverter::new().convert(&registry).unwrap();

        // 4 options in, minus the whole io record and the start_time
        // substring match
        assert_eq!(definition.entries.len(), 2);
        let ids: Vec<&str> = definition.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["mpas_dt", "mpas_scheme"]);
        assert!(
            !NamelistDefinitionExporter::export(&definition)
                .unwrap()
                .content
                .contains("pio_num_iotasks")
        );
    }

    #[test]
    fn test_character_type_becomes_char256() {
        let registry_xml = r#"<registry>
  <nml_record name="physics">
    <nml_option name="config_radt_scheme" type="Character" default_value="RRTMG"
                description="radiation scheme" possible_values="RRTMG, CAM_RAD"/>
  </nml_record>
</registry>"#;

        let registry = RegistryImporter::new().import(registry_xml).unwrap();
        let definition = RegistryConverter::new().convert(&registry).unwrap();
        assert_eq!(definition.entries[0].entry_type, "char*256");
    }
}

mod file_tests {
    use super::*;

    fn write_registry(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("Registry.xml");
        std::fs::write(&path, content).unwrap();
        path
    }

    const SMALL_REGISTRY: &str = r#"<registry>
  <nml_record name="dycore">
    <nml_option name="config_dt" type="real" default_value="2.0"
                description="timestep" possible_values="positive real"/>
  </nml_record>
</registry>"#;

    #[test]
    fn test_convert_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let registry = write_registry(dir.path(), SMALL_REGISTRY);
        let output = dir.path().join("namelist_definition.xml");

        let count = handle_convert(&registry, &output).unwrap();
        assert_eq!(count, 1);

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(content.contains("<entry_id_pg version=\"2.0\">"));
        assert_eq!(count_entries(&content), 1);
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let registry = write_registry(dir.path(), SMALL_REGISTRY);
        let output = dir.path().join("namelist_definition.xml");

        handle_convert(&registry, &output).unwrap();
        let first = std::fs::read(&output).unwrap();
        handle_convert(&registry, &output).unwrap();
        let second = std::fs::read(&output).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_registry_is_exit_code_2() {
        let dir = tempfile::tempdir().unwrap();
        let err = handle_convert(
            &dir.path().join("no_such_registry.xml"),
            &dir.path().join("out.xml"),
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_malformed_registry_is_exit_code_3() {
        let dir = tempfile::tempdir().unwrap();
        let registry = write_registry(dir.path(), "<registry><nml_record></registry>");
        let output = dir.path().join("out.xml");
        let err = handle_convert(&registry, &output).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(!output.exists());
    }

    #[test]
    fn test_invalid_type_is_exit_code_4_and_writes_nothing() {
        let registry_xml = r#"<registry>
  <nml_record name="dycore">
    <nml_option name="config_name" type="string" default_value="x"
                description="a name" possible_values="any"/>
  </nml_record>
</registry>"#;
        let dir = tempfile::tempdir().unwrap();
        let registry = write_registry(dir.path(), registry_xml);
        let output = dir.path().join("out.xml");

        let err = handle_convert(&registry, &output).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        let message = err.to_string();
        assert!(message.contains("'string'"));
        assert!(message.contains("character, integer, logical, real"));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_output_dir_is_exit_code_5() {
        let dir = tempfile::tempdir().unwrap();
        let registry = write_registry(dir.path(), SMALL_REGISTRY);
        let output = dir.path().join("missing").join("out.xml");
        let err = handle_convert(&registry, &output).unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_custom_policy_is_honored() {
        let registry_xml = r#"<registry>
  <nml_record name="io">
    <nml_option name="config_frames_per_outfile" type="integer" default_value="0"
                description="frames per file" possible_values="non-negative integers"/>
  </nml_record>
</registry>"#;
        let dir = tempfile::tempdir().unwrap();
        let registry = write_registry(dir.path(), registry_xml);
        let output = dir.path().join("out.xml");

        let count =
            handle_convert_with_policy(&registry, &output, FilterPolicy::keep_all()).unwrap();
        assert_eq!(count, 1);
        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("<entry id=\"mpas_frames_per_outfile\">"));
    }
}
