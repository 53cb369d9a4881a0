#![forbid(unsafe_code)]

//! Reads Kafka JSON message definitions and emits kwire descriptor tables.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display, Formatter, Write as _};
use std::fs;
use std::path::{Path, PathBuf};

use jsonc_parser::{parse_to_serde_value, ParseOptions};
use serde::Deserialize;

pub const GENERATED_HEADER: &str = "// @generated by kwire-codegen. DO NOT EDIT.\n";

#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("jsonc parse error in {}: {message}", .path.display())]
    JsonParse { path: PathBuf, message: String },
    #[error("json decode error in {}: {source}", .path.display())]
    JsonDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} contains no json value", .0.display())]
    MissingJsonValue(PathBuf),
    #[error("invalid version range: {0}")]
    InvalidVersionRange(String),
    #[error("invalid tag value: {0}")]
    InvalidTag(String),
    #[error("unsupported field type: {0}")]
    UnsupportedFieldType(String),
    #[error("invalid default {value:?} for field {field}")]
    InvalidDefault { field: String, value: String },
    #[error("struct {name} referenced by {message} has no definition")]
    UnknownStruct { message: String, name: String },
    #[error("message {0} has no api key")]
    MissingApiKey(String),
    #[error("target message not found: {0}")]
    MissingTargetMessage(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    Request,
    Response,
    Header,
    Data,
}

impl MessageType {
    fn as_generated_enum_variant(self) -> &'static str {
        match self {
            Self::Request => "Request",
            Self::Response => "Response",
            Self::Header => "Header",
            Self::Data => "Data",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionRange {
    pub low: i16,
    pub high: i16,
}

impl VersionRange {
    pub const fn none() -> Self {
        Self { low: 0, high: -1 }
    }

    pub const fn is_none(self) -> bool {
        self.low > self.high
    }

    fn source(self) -> String {
        if self.is_none() {
            "VersionRange::NONE".to_string()
        } else if self.high == i16::MAX {
            format!("VersionRange::from({})", self.low)
        } else if self.low == self.high {
            format!("VersionRange::exact({})", self.low)
        } else {
            format!("VersionRange::new({}, {})", self.low, self.high)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldTypeSpec {
    Bool,
    Int8,
    Int16,
    Uint16,
    Uint32,
    Int32,
    Int64,
    Float64,
    String,
    Bytes,
    Records,
    Uuid,
    Struct(String),
    Array(Box<FieldTypeSpec>),
}

impl FieldTypeSpec {
    /// The struct this field refers to, directly or as an array element.
    pub fn struct_name(&self) -> Option<&str> {
        match self {
            Self::Struct(name) => Some(name),
            Self::Array(inner) => inner.struct_name(),
            _ => None,
        }
    }

    fn scalar_variant(&self) -> Option<&'static str> {
        Some(match self {
            Self::Bool => "Bool",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Uint16 => "Uint16",
            Self::Uint32 => "Uint32",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Float64 => "Float64",
            Self::String => "String",
            Self::Bytes => "Bytes",
            Self::Records => "Records",
            Self::Uuid => "Uuid",
            Self::Struct(_) | Self::Array(_) => return None,
        })
    }
}

impl Display for FieldTypeSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int8 => f.write_str("int8"),
            Self::Int16 => f.write_str("int16"),
            Self::Uint16 => f.write_str("uint16"),
            Self::Uint32 => f.write_str("uint32"),
            Self::Int32 => f.write_str("int32"),
            Self::Int64 => f.write_str("int64"),
            Self::Float64 => f.write_str("float64"),
            Self::String => f.write_str("string"),
            Self::Bytes => f.write_str("bytes"),
            Self::Records => f.write_str("records"),
            Self::Uuid => f.write_str("uuid"),
            Self::Struct(name) => f.write_str(name),
            Self::Array(inner) => write!(f, "[]{inner}"),
        }
    }
}

/// Default of a field, normalized so an explicit zero reads as `Zero`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultSpec {
    Zero,
    Int(i64),
    Bool(bool),
    Null,
}

impl DefaultSpec {
    fn source(self) -> Option<String> {
        match self {
            Self::Zero => None,
            Self::Int(value) => Some(format!("FieldDefault::Int({value})")),
            Self::Bool(value) => Some(format!("FieldDefault::Bool({value})")),
            Self::Null => Some("FieldDefault::Null".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFieldSpec {
    pub name: String,
    pub field_type: FieldTypeSpec,
    pub versions: VersionRange,
    pub nullable_versions: VersionRange,
    pub tagged_versions: VersionRange,
    pub tag: Option<u32>,
    pub default: DefaultSpec,
    /// Fields of the referenced struct, inline or resolved from `commonStructs`.
    pub fields: Vec<MessageFieldSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolMessageSpec {
    pub name: String,
    pub api_key: Option<i16>,
    pub message_type: MessageType,
    pub valid_versions: VersionRange,
    pub flexible_versions: VersionRange,
    pub fields: Vec<MessageFieldSpec>,
    pub source_file: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMessageSpec {
    name: String,
    #[serde(rename = "type")]
    message_type: RawMessageType,
    valid_versions: String,
    flexible_versions: Option<String>,
    #[serde(default)]
    api_key: Option<i16>,
    #[serde(default)]
    fields: Vec<RawFieldSpec>,
    #[serde(default)]
    common_structs: Vec<RawCommonStruct>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFieldSpec {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    versions: String,
    #[serde(default)]
    nullable_versions: Option<String>,
    #[serde(default)]
    tagged_versions: Option<String>,
    #[serde(default)]
    tag: Option<RawTag>,
    #[serde(default)]
    default: Option<RawDefault>,
    #[serde(default)]
    fields: Vec<RawFieldSpec>,
}

#[derive(Debug, Deserialize)]
struct RawCommonStruct {
    name: String,
    #[serde(default)]
    fields: Vec<RawFieldSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTag {
    Number(u32),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDefault {
    Bool(bool),
    Number(i64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum RawMessageType {
    Request,
    Response,
    Header,
    Data,
}

impl From<RawMessageType> for MessageType {
    fn from(value: RawMessageType) -> Self {
        match value {
            RawMessageType::Request => Self::Request,
            RawMessageType::Response => Self::Response,
            RawMessageType::Header => Self::Header,
            RawMessageType::Data => Self::Data,
        }
    }
}

pub fn parse_version_range(input: &str) -> Result<VersionRange, CodegenError> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("none") {
        return Ok(VersionRange::none());
    }
    if let Some(low) = trimmed.strip_suffix('+') {
        let low = parse_non_negative_i16(low, trimmed)?;
        return Ok(VersionRange {
            low,
            high: i16::MAX,
        });
    }
    if let Some((low, high)) = trimmed.split_once('-') {
        let low = parse_non_negative_i16(low, trimmed)?;
        let high = parse_non_negative_i16(high, trimmed)?;
        if low > high {
            return Err(CodegenError::InvalidVersionRange(trimmed.to_string()));
        }
        return Ok(VersionRange { low, high });
    }
    let single = parse_non_negative_i16(trimmed, trimmed)?;
    Ok(VersionRange {
        low: single,
        high: single,
    })
}

fn parse_non_negative_i16(value: &str, full: &str) -> Result<i16, CodegenError> {
    let parsed = value
        .trim()
        .parse::<i16>()
        .map_err(|_| CodegenError::InvalidVersionRange(full.to_string()))?;
    if parsed < 0 {
        return Err(CodegenError::InvalidVersionRange(full.to_string()));
    }
    Ok(parsed)
}

pub fn parse_field_type(input: &str) -> Result<FieldTypeSpec, CodegenError> {
    let trimmed = input.trim();
    if let Some(inner) = trimmed.strip_prefix("[]") {
        return Ok(FieldTypeSpec::Array(Box::new(parse_field_type(inner)?)));
    }
    let ty = match trimmed {
        "bool" => FieldTypeSpec::Bool,
        "int8" => FieldTypeSpec::Int8,
        "int16" => FieldTypeSpec::Int16,
        "uint16" => FieldTypeSpec::Uint16,
        "uint32" => FieldTypeSpec::Uint32,
        "int32" => FieldTypeSpec::Int32,
        "int64" => FieldTypeSpec::Int64,
        "float64" => FieldTypeSpec::Float64,
        "string" => FieldTypeSpec::String,
        "bytes" => FieldTypeSpec::Bytes,
        "records" => FieldTypeSpec::Records,
        "uuid" => FieldTypeSpec::Uuid,
        other => {
            if other
                .chars()
                .next()
                .is_some_and(|ch| ch.is_ascii_uppercase())
            {
                FieldTypeSpec::Struct(other.to_string())
            } else {
                return Err(CodegenError::UnsupportedFieldType(other.to_string()));
            }
        }
    };
    Ok(ty)
}

fn parse_integer_literal(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => i64::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<i64>().ok()?,
    };
    Some(if negative { -magnitude } else { magnitude })
}

pub fn parse_default(
    field: &str,
    field_type: &FieldTypeSpec,
    nullable_versions: VersionRange,
    raw: &str,
) -> Result<DefaultSpec, CodegenError> {
    let invalid = || CodegenError::InvalidDefault {
        field: field.to_string(),
        value: raw.to_string(),
    };
    let text = raw.trim();
    if text == "null" {
        if nullable_versions.is_none() {
            return Err(invalid());
        }
        return Ok(DefaultSpec::Null);
    }
    match field_type {
        FieldTypeSpec::Bool => match text {
            "true" => Ok(DefaultSpec::Bool(true)),
            "false" => Ok(DefaultSpec::Zero),
            _ => Err(invalid()),
        },
        FieldTypeSpec::Int8
        | FieldTypeSpec::Int16
        | FieldTypeSpec::Uint16
        | FieldTypeSpec::Uint32
        | FieldTypeSpec::Int32
        | FieldTypeSpec::Int64 => match parse_integer_literal(text).ok_or_else(invalid)? {
            0 => Ok(DefaultSpec::Zero),
            value => Ok(DefaultSpec::Int(value)),
        },
        // Only the empty literal maps onto a zero value for the remaining types.
        _ if text.is_empty() => Ok(DefaultSpec::Zero),
        _ => Err(invalid()),
    }
}

fn raw_default_text(raw: &RawDefault) -> String {
    match raw {
        RawDefault::Bool(value) => value.to_string(),
        RawDefault::Number(value) => value.to_string(),
        RawDefault::String(value) => value.clone(),
    }
}

fn parse_fields(
    message: &str,
    raw_fields: &[RawFieldSpec],
    common: &BTreeMap<&str, &[RawFieldSpec]>,
    depth: usize,
) -> Result<Vec<MessageFieldSpec>, CodegenError> {
    let mut parsed = Vec::with_capacity(raw_fields.len());
    for raw in raw_fields {
        let versions = parse_version_range(&raw.versions)?;
        let nullable_versions = match raw.nullable_versions.as_deref() {
            Some(v) => parse_version_range(v)?,
            None => VersionRange::none(),
        };
        let tagged_versions = match raw.tagged_versions.as_deref() {
            Some(v) => parse_version_range(v)?,
            None => VersionRange::none(),
        };
        let field_type = parse_field_type(&raw.type_name)?;
        let tag = match &raw.tag {
            Some(RawTag::Number(value)) => Some(*value),
            Some(RawTag::String(value)) => Some(
                value
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| CodegenError::InvalidTag(value.clone()))?,
            ),
            None => None,
        };
        let default = match &raw.default {
            Some(value) => parse_default(
                &raw.name,
                &field_type,
                nullable_versions,
                &raw_default_text(value),
            )?,
            None => DefaultSpec::Zero,
        };
        let fields = match field_type.struct_name() {
            Some(_) if !raw.fields.is_empty() => parse_fields(message, &raw.fields, common, depth + 1)?,
            Some(name) => {
                // A self-referencing common struct would recurse forever.
                let body = common
                    .get(name)
                    .filter(|_| depth < 32)
                    .ok_or_else(|| CodegenError::UnknownStruct {
                        message: message.to_string(),
                        name: name.to_string(),
                    })?;
                parse_fields(message, body, common, depth + 1)?
            }
            None => Vec::new(),
        };
        parsed.push(MessageFieldSpec {
            name: raw.name.clone(),
            field_type,
            versions,
            nullable_versions,
            tagged_versions,
            tag,
            default,
            fields,
        });
    }
    Ok(parsed)
}

pub fn parse_message_spec(text: &str, path: &Path) -> Result<ProtocolMessageSpec, CodegenError> {
    let parsed = parse_to_serde_value(text, &ParseOptions::default())
        .map_err(|err| CodegenError::JsonParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?
        .ok_or_else(|| CodegenError::MissingJsonValue(path.to_path_buf()))?;
    let raw: RawMessageSpec =
        serde_json::from_value(parsed).map_err(|source| CodegenError::JsonDecode {
            path: path.to_path_buf(),
            source,
        })?;
    let valid_versions = parse_version_range(&raw.valid_versions)?;
    let flexible_versions = match raw.flexible_versions.as_deref() {
        Some(v) => parse_version_range(v)?,
        None => VersionRange::none(),
    };
    let common = raw
        .common_structs
        .iter()
        .map(|common| (common.name.as_str(), common.fields.as_slice()))
        .collect::<BTreeMap<_, _>>();
    let fields = parse_fields(&raw.name, &raw.fields, &common, 0)?;
    Ok(ProtocolMessageSpec {
        name: raw.name,
        api_key: raw.api_key,
        message_type: raw.message_type.into(),
        valid_versions,
        flexible_versions,
        fields,
        source_file: path.to_path_buf(),
    })
}

pub fn load_message_specs(input_dir: &Path) -> Result<Vec<ProtocolMessageSpec>, CodegenError> {
    let io_error = |source| CodegenError::Io {
        path: input_dir.to_path_buf(),
        source,
    };
    let mut entries = fs::read_dir(input_dir)
        .map_err(io_error)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect::<Vec<_>>();
    entries.sort();

    let mut specs = Vec::with_capacity(entries.len());
    for path in entries {
        let raw_text = fs::read_to_string(&path).map_err(|source| CodegenError::Io {
            path: path.clone(),
            source,
        })?;
        let spec = parse_message_spec(&raw_text, &path)?;
        tracing::debug!(name = %spec.name, path = %path.display(), "loaded message spec");
        specs.push(spec);
    }
    Ok(specs)
}

fn is_api_message(spec: &ProtocolMessageSpec) -> bool {
    matches!(
        spec.message_type,
        MessageType::Request | MessageType::Response
    ) && spec.api_key.is_some()
}

/// Emits `PROTOCOL_MESSAGE_REGISTRY`, referencing the message statics in
/// `crate::messages`, ordered by api key then name.
pub fn generate_registry_source(specs: &[ProtocolMessageSpec]) -> String {
    let mut sorted = specs
        .iter()
        .filter(|spec| is_api_message(spec))
        .collect::<Vec<_>>();
    sorted.sort_by(|a, b| {
        a.api_key
            .cmp(&b.api_key)
            .then(a.name.cmp(&b.name))
            .then(a.source_file.cmp(&b.source_file))
    });

    let mut out = String::from(GENERATED_HEADER);
    out.push_str("pub static PROTOCOL_MESSAGE_REGISTRY: &[&MessageSchema] = &[\n");
    for spec in sorted {
        let _ = writeln!(out, "    &crate::messages::{},", upper_snake(&spec.name));
    }
    out.push_str("];\n");
    out
}

fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    let mut prev_is_lower_or_digit = false;
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if prev_is_lower_or_digit {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_is_lower_or_digit = false;
        } else if matches!(ch, '-' | ' ' | '.') {
            if !out.ends_with('_') {
                out.push('_');
            }
            prev_is_lower_or_digit = false;
        } else {
            out.push(ch.to_ascii_lowercase());
            prev_is_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}

pub fn upper_snake(name: &str) -> String {
    snake_case(name).to_ascii_uppercase()
}

fn strip_word_prefix<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    name.strip_prefix(prefix)
        .filter(|rest| rest.starts_with(|ch: char| ch.is_ascii_uppercase()))
}

/// Static name for a nested struct, e.g. `ShareFetchRequest` + `FetchTopic`
/// gives `SHARE_FETCH_REQUEST_FETCH_TOPIC`. A struct name repeating the
/// message or api name has that prefix dropped.
pub fn struct_static_name(message: &str, struct_name: &str) -> String {
    let stem = message
        .strip_suffix("Request")
        .or_else(|| message.strip_suffix("Response"))
        .unwrap_or(message);
    let suffix = strip_word_prefix(struct_name, message)
        .or_else(|| strip_word_prefix(struct_name, stem))
        .unwrap_or(struct_name);
    format!("{}_{}", upper_snake(message), upper_snake(suffix))
}

fn scalar_variant(field_type: &FieldTypeSpec) -> Result<&'static str, CodegenError> {
    field_type
        .scalar_variant()
        .ok_or_else(|| CodegenError::UnsupportedFieldType(field_type.to_string()))
}

fn field_type_source(
    message: &str,
    field: &MessageFieldSpec,
) -> Result<String, CodegenError> {
    match &field.field_type {
        FieldTypeSpec::Struct(name) => Ok(format!(
            "FieldType::Struct(&{})",
            struct_static_name(message, name)
        )),
        FieldTypeSpec::Array(inner) => {
            let element = match inner.as_ref() {
                FieldTypeSpec::Struct(name) => {
                    format!("ElementType::Struct(&{})", struct_static_name(message, name))
                }
                FieldTypeSpec::Bytes | FieldTypeSpec::Records | FieldTypeSpec::Array(_) => {
                    return Err(CodegenError::UnsupportedFieldType(field.field_type.to_string()));
                }
                scalar => format!("ElementType::{}", scalar_variant(scalar)?),
            };
            Ok(format!("FieldType::Array({element})"))
        }
        scalar => Ok(format!("FieldType::{}", scalar_variant(scalar)?)),
    }
}

fn emit_field(out: &mut String, message: &str, field: &MessageFieldSpec) -> Result<(), CodegenError> {
    let _ = write!(
        out,
        "        FieldSchema::new({:?}, {}, {})",
        field.name,
        field_type_source(message, field)?,
        field.versions.source()
    );
    if !field.nullable_versions.is_none() {
        let _ = write!(out, "\n            .nullable({})", field.nullable_versions.source());
    }
    if let Some(tag) = field.tag {
        let _ = write!(
            out,
            "\n            .tagged({tag}, {})",
            field.tagged_versions.source()
        );
    }
    if let Some(default) = field.default.source() {
        let _ = write!(out, "\n            .default_value({default})");
    }
    out.push_str(",\n");
    Ok(())
}

fn emit_struct(
    out: &mut String,
    message: &str,
    static_name: &str,
    struct_name: &str,
    fields: &[MessageFieldSpec],
) -> Result<(), CodegenError> {
    let _ = writeln!(out, "pub static {static_name}: StructSchema = StructSchema {{");
    let _ = writeln!(out, "    name: {struct_name:?},");
    out.push_str("    fields: &[\n");
    for field in fields {
        emit_field(out, message, field)?;
    }
    out.push_str("    ],\n};\n\n");
    Ok(())
}

/// Emits nested structs before their users, each struct once per message.
fn emit_nested_structs(
    out: &mut String,
    emitted: &mut BTreeSet<String>,
    message: &str,
    fields: &[MessageFieldSpec],
) -> Result<(), CodegenError> {
    for field in fields {
        let Some(name) = field.field_type.struct_name() else {
            continue;
        };
        if !emitted.insert(name.to_string()) {
            continue;
        }
        emit_nested_structs(out, emitted, message, &field.fields)?;
        emit_struct(
            out,
            message,
            &struct_static_name(message, name),
            name,
            &field.fields,
        )?;
    }
    Ok(())
}

fn emit_message(out: &mut String, spec: &ProtocolMessageSpec) -> Result<(), CodegenError> {
    let api_key = spec
        .api_key
        .ok_or_else(|| CodegenError::MissingApiKey(spec.name.clone()))?;
    let upper = upper_snake(&spec.name);
    let mut emitted = BTreeSet::new();
    emit_nested_structs(out, &mut emitted, &spec.name, &spec.fields)?;
    emit_struct(out, &spec.name, &format!("{upper}_BODY"), &spec.name, &spec.fields)?;

    let _ = writeln!(out, "pub static {upper}: MessageSchema = MessageSchema {{");
    let _ = writeln!(out, "    name: {:?},", spec.name);
    let _ = writeln!(out, "    api_key: {api_key},");
    let _ = writeln!(
        out,
        "    message_type: MessageType::{},",
        spec.message_type.as_generated_enum_variant()
    );
    let _ = writeln!(out, "    valid_versions: {},", spec.valid_versions.source());
    let _ = writeln!(out, "    flexible_versions: {},", spec.flexible_versions.source());
    let _ = writeln!(out, "    body: &{upper}_BODY,");
    out.push_str("};\n");
    Ok(())
}

/// Emits `StructSchema`/`MessageSchema` statics for `targets`, or for every
/// request and response when `targets` is empty.
pub fn generate_schema_source(
    specs: &[ProtocolMessageSpec],
    targets: &[&str],
) -> Result<String, CodegenError> {
    let selected = if targets.is_empty() {
        specs.iter().filter(|spec| is_api_message(spec)).collect::<Vec<_>>()
    } else {
        targets
            .iter()
            .map(|target| {
                specs
                    .iter()
                    .find(|spec| spec.name == *target)
                    .ok_or_else(|| CodegenError::MissingTargetMessage((*target).to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut out = String::from(GENERATED_HEADER);
    out.push_str(
        "use crate::schema::{\n    ElementType, FieldDefault, FieldSchema, FieldType, MessageSchema, MessageType, StructSchema,\n    VersionRange,\n};\n",
    );
    for spec in selected {
        out.push('\n');
        emit_message(&mut out, spec)?;
    }
    Ok(out)
}

pub fn write_output_file(output_path: &Path, source: &str) -> Result<(), CodegenError> {
    let io_error = |source| CodegenError::Io {
        path: output_path.to_path_buf(),
        source,
    };
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(output_path, source).map_err(io_error)?;
    Ok(())
}
