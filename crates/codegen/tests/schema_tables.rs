#![forbid(unsafe_code)]

use std::path::PathBuf;

use kwire_codegen::{
    generate_registry_source, generate_schema_source, load_message_specs, write_output_file,
    DefaultSpec, MessageFieldSpec, MessageType, ProtocolMessageSpec, VersionRange,
};
use kwire_protocol::api_registry::{self, PROTOCOL_MESSAGE_REGISTRY};
use kwire_protocol::schema::{FieldDefault, FieldSchema, FieldType, StructSchema};

fn schema_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../protocol/schema")
}

fn load_specs() -> Vec<ProtocolMessageSpec> {
    load_message_specs(&schema_dir()).expect("load schema definitions")
}

fn same_range(spec: VersionRange, table: kwire_protocol::VersionRange) -> bool {
    if spec.is_none() {
        return table.is_none();
    }
    spec.low == table.low && spec.high == table.high
}

fn same_default(spec: DefaultSpec, table: FieldDefault) -> bool {
    match (spec, table) {
        (DefaultSpec::Zero, FieldDefault::Zero) | (DefaultSpec::Null, FieldDefault::Null) => true,
        (DefaultSpec::Int(a), FieldDefault::Int(b)) => a == b,
        (DefaultSpec::Bool(a), FieldDefault::Bool(b)) => a == b,
        _ => false,
    }
}

fn nested_struct(field: &FieldSchema) -> Option<&'static StructSchema> {
    match field.field_type {
        FieldType::Struct(schema) => Some(schema),
        FieldType::Array(element) => match element.as_field_type() {
            FieldType::Struct(schema) => Some(schema),
            _ => None,
        },
        _ => None,
    }
}

fn assert_fields_match(path: &str, spec: &[MessageFieldSpec], table: &StructSchema) {
    assert_eq!(
        spec.len(),
        table.fields.len(),
        "{path}: field count differs from {}",
        table.name
    );
    for (spec_field, table_field) in spec.iter().zip(table.fields) {
        let here = format!("{path}.{}", spec_field.name);
        assert_eq!(spec_field.name, table_field.name, "{here}: name");
        assert_eq!(
            spec_field.field_type.to_string(),
            table_field.field_type.type_name(),
            "{here}: type"
        );
        assert!(same_range(spec_field.versions, table_field.versions), "{here}: versions");
        assert!(
            same_range(spec_field.nullable_versions, table_field.nullable_versions),
            "{here}: nullable versions"
        );
        assert_eq!(spec_field.tag, table_field.tag, "{here}: tag");
        assert!(
            same_range(spec_field.tagged_versions, table_field.tagged_versions),
            "{here}: tagged versions"
        );
        assert!(
            same_default(spec_field.default, table_field.default),
            "{here}: default {:?} vs {:?}",
            spec_field.default,
            table_field.default
        );
        match nested_struct(table_field) {
            Some(nested) => assert_fields_match(&here, &spec_field.fields, nested),
            None => assert!(spec_field.fields.is_empty(), "{here}: unexpected nested fields"),
        }
    }
}

#[test]
fn schema_definitions_agree_with_static_tables() {
    let specs = load_specs();
    assert_eq!(specs.len(), PROTOCOL_MESSAGE_REGISTRY.len());

    for spec in &specs {
        let table = api_registry::find_by_name(&spec.name)
            .unwrap_or_else(|| panic!("{} is not registered", spec.name));
        assert_eq!(spec.api_key, Some(table.api_key), "{}: api key", spec.name);
        let expected_type = match table.message_type {
            kwire_protocol::MessageType::Request => MessageType::Request,
            kwire_protocol::MessageType::Response => MessageType::Response,
            kwire_protocol::MessageType::Header => MessageType::Header,
            kwire_protocol::MessageType::Data => MessageType::Data,
        };
        assert_eq!(spec.message_type, expected_type, "{}: type", spec.name);
        assert!(same_range(spec.valid_versions, table.valid_versions), "{}: valid", spec.name);
        assert!(
            same_range(spec.flexible_versions, table.flexible_versions),
            "{}: flexible",
            spec.name
        );
        assert_eq!(table.body.name, spec.name);
        assert_fields_match(&spec.name, &spec.fields, table.body);
    }
}

#[test]
fn checked_in_registry_is_up_to_date() {
    let generated = generate_registry_source(&load_specs());
    let checked_in = include_str!("../../protocol/src/generated_api_registry.rs");
    assert_eq!(generated, checked_in);
}

#[test]
fn checked_in_schema_tables_are_up_to_date() {
    let generated = generate_schema_source(&load_specs(), &[]).expect("schema source");
    let checked_in = include_str!("../../protocol/src/generated_schema.rs");
    assert_eq!(generated, checked_in);
}

#[test]
fn schema_source_names_match_message_statics() {
    let specs = load_specs();
    let source = generate_schema_source(
        &specs,
        &["ShareFetchRequest", "StreamsGroupDescribeResponse", "DescribeShareGroupOffsetsResponse"],
    )
    .expect("schema source");
    for name in [
        "pub static SHARE_FETCH_REQUEST: MessageSchema",
        "pub static SHARE_FETCH_REQUEST_BODY: StructSchema",
        "pub static SHARE_FETCH_REQUEST_FETCH_PARTITION: StructSchema",
        "pub static SHARE_FETCH_REQUEST_ACKNOWLEDGEMENT_BATCH: StructSchema",
        "pub static STREAMS_GROUP_DESCRIBE_RESPONSE_TASK_IDS: StructSchema",
        "pub static STREAMS_GROUP_DESCRIBE_RESPONSE_DESCRIBED_GROUP: StructSchema",
        "pub static DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_PARTITION: StructSchema",
    ] {
        assert!(source.contains(name), "missing {name}");
    }
    // Shared structs are emitted once per message.
    assert_eq!(
        source
            .matches("pub static STREAMS_GROUP_DESCRIBE_RESPONSE_TASK_IDS:")
            .count(),
        1
    );
    assert!(source.contains(".default_value(FieldDefault::Int(2147483647))"));
    assert!(source.contains(".default_value(FieldDefault::Int(-2147483648))"));
    assert!(source.contains("FieldSchema::new(\"Port\", FieldType::Uint16, VersionRange::from(0))"));
}

#[test]
fn writes_outputs_into_nested_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let specs = load_specs();

    let registry_path = dir.path().join("out/registry.rs");
    write_output_file(&registry_path, &generate_registry_source(&specs)).expect("write registry");
    let written = std::fs::read_to_string(&registry_path).expect("read registry");
    assert!(written.contains("&crate::messages::STREAMS_GROUP_DESCRIBE_RESPONSE,"));

    let schema_path = dir.path().join("out/nested/schema.rs");
    let source = generate_schema_source(&specs, &[]).expect("schema source");
    write_output_file(&schema_path, &source).expect("write schema");
    assert_eq!(std::fs::read_to_string(&schema_path).expect("read schema"), source);
    assert_eq!(source.matches(": MessageSchema = MessageSchema {").count(), 8);
}

#[test]
fn loads_only_json_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("README.md"), "not a schema").expect("write readme");
    std::fs::write(
        dir.path().join("PingRequest.json"),
        r#"// comment
        { "apiKey": 999, "type": "request", "name": "PingRequest",
          "validVersions": "0", "flexibleVersions": "none", "fields": [] }"#,
    )
    .expect("write spec");
    let specs = load_message_specs(dir.path()).expect("load");
    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].name, "PingRequest");
    assert!(specs[0].flexible_versions.is_none());
}

#[test]
fn malformed_json_reports_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("Broken.json"), "{ \"name\": ").expect("write");
    let err = load_message_specs(dir.path()).expect_err("parse error");
    assert!(err.to_string().contains("Broken.json"), "{err}");
}
