#![forbid(unsafe_code)]

//! Schema-driven marshalling of [`StructValue`]s. Fields outside the
//! requested version are skipped on write and decode to their default.

use crate::codec::{self, RawTaggedField, Reader};
use crate::schema::{ElementType, FieldSchema, FieldType, MessageSchema, StructSchema};
use crate::value::{StructValue, Value};
use crate::ProtocolError;

pub fn encode_message(
    message: &MessageSchema,
    value: &StructValue,
    version: i16,
) -> Result<Vec<u8>, ProtocolError> {
    let mut out = Vec::new();
    write_message(&mut out, message, value, version)?;
    Ok(out)
}

pub fn write_message(
    out: &mut Vec<u8>,
    message: &MessageSchema,
    value: &StructValue,
    version: i16,
) -> Result<(), ProtocolError> {
    message.ensure_version(version)?;
    write_struct(out, message.body, value, version, message.is_flexible(version))
}

pub fn decode_message(
    message: &MessageSchema,
    version: i16,
    input: &[u8],
) -> Result<(StructValue, usize), ProtocolError> {
    let mut reader = Reader::new(input);
    let value = read_message(&mut reader, message, version)?;
    Ok((value, reader.position()))
}

pub fn read_message(
    reader: &mut Reader<'_>,
    message: &MessageSchema,
    version: i16,
) -> Result<StructValue, ProtocolError> {
    message.ensure_version(version)?;
    read_struct(reader, message.body, version, message.is_flexible(version))
}

pub fn write_struct(
    out: &mut Vec<u8>,
    schema: &StructSchema,
    value: &StructValue,
    version: i16,
    flexible: bool,
) -> Result<(), ProtocolError> {
    if value.len() != schema.fields.len() {
        return Err(ProtocolError::FieldCountMismatch {
            schema: schema.name,
            expected: schema.fields.len(),
            actual: value.len(),
        });
    }

    let mut tagged = Vec::new();
    for (field, field_value) in schema.fields.iter().zip(value.fields()) {
        if !field.is_present_in(version) {
            continue;
        }
        if flexible && field.is_tagged_in(version) {
            if *field_value != Value::default_for(field) {
                let mut payload = Vec::new();
                write_field(&mut payload, field, field_value, version, flexible)?;
                if let Some(tag) = field.tag {
                    tagged.push(RawTaggedField::new(tag, payload));
                }
            }
            continue;
        }
        write_field(out, field, field_value, version, flexible)?;
    }

    if flexible {
        tagged.extend(value.unknown_tagged_fields().iter().cloned());
        codec::write_tagged_fields(out, &tagged)?;
    }
    Ok(())
}

pub fn read_struct(
    reader: &mut Reader<'_>,
    schema: &StructSchema,
    version: i16,
    flexible: bool,
) -> Result<StructValue, ProtocolError> {
    let mut fields = Vec::with_capacity(schema.fields.len());
    for field in schema.fields {
        if field.is_present_in(version) && !(flexible && field.is_tagged_in(version)) {
            fields.push(read_field(reader, field, version, flexible)?);
        } else {
            fields.push(Value::default_for(field));
        }
    }

    let mut unknown = Vec::new();
    if flexible {
        codec::read_tagged_fields(reader, |tag, payload| {
            match schema.resolve_tag(tag, version) {
                Some((index, field)) => {
                    let mut payload_reader = Reader::new(payload);
                    fields[index] = read_field(&mut payload_reader, field, version, flexible)?;
                }
                None => {
                    tracing::trace!(
                        schema = schema.name,
                        tag,
                        size = payload.len(),
                        "keeping unknown tagged field"
                    );
                    unknown.push(RawTaggedField::new(tag, payload.to_vec()));
                }
            }
            Ok(())
        })?;
    }

    Ok(StructValue::new(fields).with_unknown_tagged_fields(unknown))
}

fn write_field(
    out: &mut Vec<u8>,
    field: &FieldSchema,
    value: &Value,
    version: i16,
    flexible: bool,
) -> Result<(), ProtocolError> {
    write_typed(
        out,
        field.name,
        field.field_type,
        field.is_nullable_in(version),
        value,
        version,
        flexible,
    )
}

fn read_field(
    reader: &mut Reader<'_>,
    field: &FieldSchema,
    version: i16,
    flexible: bool,
) -> Result<Value, ProtocolError> {
    read_typed(
        reader,
        field.name,
        field.field_type,
        field.is_nullable_in(version),
        version,
        flexible,
    )
}

fn write_typed(
    out: &mut Vec<u8>,
    name: &'static str,
    field_type: FieldType,
    nullable: bool,
    value: &Value,
    version: i16,
    flexible: bool,
) -> Result<(), ProtocolError> {
    if value.is_null() && !nullable {
        return Err(ProtocolError::NullValue(name));
    }

    match (field_type, value) {
        (FieldType::Bool, Value::Bool(v)) => codec::write_bool(out, *v),
        (FieldType::Int8, Value::Int8(v)) => codec::write_i8(out, *v),
        (FieldType::Int16, Value::Int16(v)) => codec::write_i16(out, *v),
        (FieldType::Uint16, Value::Uint16(v)) => codec::write_u16(out, *v),
        (FieldType::Int32, Value::Int32(v)) => codec::write_i32(out, *v),
        (FieldType::Uint32, Value::Uint32(v)) => codec::write_u32(out, *v),
        (FieldType::Int64, Value::Int64(v)) => codec::write_i64(out, *v),
        (FieldType::Float64, Value::Float64(v)) => codec::write_f64(out, *v),
        (FieldType::Uuid, Value::Uuid(v)) => codec::write_uuid(out, v),
        (FieldType::String, Value::String(v)) => codec::write_string(out, v, flexible)?,
        (FieldType::String, Value::Null) => codec::write_nullable_string(out, None, flexible)?,
        (FieldType::Bytes | FieldType::Records, Value::Bytes(v)) => {
            codec::write_bytes(out, v, flexible)?
        }
        (FieldType::Bytes | FieldType::Records, Value::Null) => {
            codec::write_nullable_bytes(out, None, flexible)?
        }
        (FieldType::Struct(schema), Value::Struct(v)) => {
            if nullable {
                codec::write_i8(out, 1);
            }
            write_struct(out, schema, v, version, flexible)?;
        }
        (FieldType::Struct(_), Value::Null) => codec::write_i8(out, -1),
        (FieldType::Array(element), Value::Array(items)) => {
            codec::write_array(out, items, flexible, |out, item| {
                write_typed(
                    out,
                    name,
                    element.as_field_type(),
                    false,
                    item,
                    version,
                    flexible,
                )
            })?
        }
        (FieldType::Array(_), Value::Null) => {
            codec::write_nullable_array_len(out, None, flexible)?
        }
        (other, _) => {
            return Err(ProtocolError::UnexpectedValue {
                field: name,
                expected: other.kind(),
            })
        }
    }
    Ok(())
}

fn read_typed(
    reader: &mut Reader<'_>,
    name: &'static str,
    field_type: FieldType,
    nullable: bool,
    version: i16,
    flexible: bool,
) -> Result<Value, ProtocolError> {
    let value = match field_type {
        FieldType::Bool => Value::Bool(reader.read_bool()?),
        FieldType::Int8 => Value::Int8(reader.read_i8()?),
        FieldType::Int16 => Value::Int16(reader.read_i16()?),
        FieldType::Uint16 => Value::Uint16(reader.read_u16()?),
        FieldType::Int32 => Value::Int32(reader.read_i32()?),
        FieldType::Uint32 => Value::Uint32(reader.read_u32()?),
        FieldType::Int64 => Value::Int64(reader.read_i64()?),
        FieldType::Float64 => Value::Float64(reader.read_f64()?),
        FieldType::Uuid => Value::Uuid(reader.read_uuid()?),
        FieldType::String if nullable => codec::read_nullable_string(reader, flexible)?
            .map_or(Value::Null, Value::String),
        FieldType::String => Value::String(codec::read_string(reader, flexible)?),
        FieldType::Bytes | FieldType::Records if nullable => {
            codec::read_nullable_bytes(reader, flexible)?.map_or(Value::Null, Value::Bytes)
        }
        FieldType::Bytes | FieldType::Records => {
            Value::Bytes(codec::read_bytes(reader, flexible)?)
        }
        FieldType::Struct(schema) => {
            if nullable {
                match reader.read_i8()? {
                    -1 => return Ok(Value::Null),
                    1 => {}
                    marker => return Err(ProtocolError::InvalidStructMarker(marker)),
                }
            }
            Value::Struct(Box::new(read_struct(reader, schema, version, flexible)?))
        }
        FieldType::Array(element) => {
            let items = codec::read_nullable_array(reader, flexible, |reader| {
                read_element(reader, name, element, version, flexible)
            })?;
            match items {
                Some(items) => Value::Array(items),
                None if nullable => Value::Null,
                None => return Err(ProtocolError::InvalidLength(-1)),
            }
        }
    };
    Ok(value)
}

fn read_element(
    reader: &mut Reader<'_>,
    name: &'static str,
    element: ElementType,
    version: i16,
    flexible: bool,
) -> Result<Value, ProtocolError> {
    read_typed(reader, name, element.as_field_type(), false, version, flexible)
}
