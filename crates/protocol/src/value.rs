#![forbid(unsafe_code)]

use bytes::Bytes;
use uuid::Uuid;

use crate::codec::RawTaggedField;
use crate::schema::{FieldDefault, FieldSchema, FieldType, StructSchema};
use crate::ProtocolError;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Uint16(u16),
    Int32(i32),
    Uint32(u32),
    Int64(i64),
    Float64(f64),
    String(String),
    Bytes(Bytes),
    Uuid(Uuid),
    Array(Vec<Value>),
    Struct(Box<StructValue>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Zero value of `field_type`; structs are filled with their own defaults.
    pub fn zero(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Bool => Self::Bool(false),
            FieldType::Int8 => Self::Int8(0),
            FieldType::Int16 => Self::Int16(0),
            FieldType::Uint16 => Self::Uint16(0),
            FieldType::Int32 => Self::Int32(0),
            FieldType::Uint32 => Self::Uint32(0),
            FieldType::Int64 => Self::Int64(0),
            FieldType::Float64 => Self::Float64(0.0),
            FieldType::String => Self::String(String::new()),
            FieldType::Bytes | FieldType::Records => Self::Bytes(Bytes::new()),
            FieldType::Uuid => Self::Uuid(Uuid::nil()),
            FieldType::Struct(schema) => Self::Struct(Box::new(StructValue::defaults(schema))),
            FieldType::Array(_) => Self::Array(Vec::new()),
        }
    }

    /// Default of `field`, used wherever the field is absent.
    ///
    /// A null default applies to every version of a field that is nullable
    /// in some version, including versions in which the field is absent.
    pub fn default_for(field: &FieldSchema) -> Self {
        match field.default {
            FieldDefault::Zero => Self::zero(field.field_type),
            FieldDefault::Null if !field.nullable_versions.is_none() => Self::Null,
            FieldDefault::Null => Self::zero(field.field_type),
            FieldDefault::Bool(value) => Self::Bool(value),
            FieldDefault::Int(value) => match field.field_type {
                FieldType::Int8 => Self::Int8(value as i8),
                FieldType::Int16 => Self::Int16(value as i16),
                FieldType::Uint16 => Self::Uint16(value as u16),
                FieldType::Int32 => Self::Int32(value as i32),
                FieldType::Uint32 => Self::Uint32(value as u32),
                FieldType::Int64 => Self::Int64(value),
                FieldType::Float64 => Self::Float64(value as f64),
                other => Self::zero(other),
            },
        }
    }
}

/// Field values in schema order, plus any tagged fields the schema does not
/// know about.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructValue {
    fields: Vec<Value>,
    unknown_tagged_fields: Vec<RawTaggedField>,
}

impl StructValue {
    pub fn new(fields: Vec<Value>) -> Self {
        Self {
            fields,
            unknown_tagged_fields: Vec::new(),
        }
    }

    pub fn defaults(schema: &StructSchema) -> Self {
        Self::new(
            schema
                .fields
                .iter()
                .map(Value::default_for)
                .collect(),
        )
    }

    pub fn with_unknown_tagged_fields(mut self, fields: Vec<RawTaggedField>) -> Self {
        self.unknown_tagged_fields = fields;
        self
    }

    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.fields.get(index)
    }

    /// Looks a field up by its schema name.
    pub fn get_named(&self, schema: &StructSchema, name: &str) -> Option<&Value> {
        schema.field_index(name).and_then(|index| self.fields.get(index))
    }

    pub fn set(&mut self, index: usize, value: Value) -> Option<Value> {
        self.fields
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    pub fn unknown_tagged_fields(&self) -> &[RawTaggedField] {
        &self.unknown_tagged_fields
    }

    pub fn into_fields(self) -> FieldCursor {
        FieldCursor {
            fields: self.fields.into_iter(),
        }
    }
}

/// Hands out a struct's values in order, converting each to a typed field.
#[derive(Debug)]
pub struct FieldCursor {
    fields: std::vec::IntoIter<Value>,
}

impl FieldCursor {
    pub fn next<T: WireValue>(&mut self, name: &'static str) -> Result<T, ProtocolError> {
        let value = self
            .fields
            .next()
            .ok_or(ProtocolError::MissingRequiredField(name))?;
        T::from_value(name, value)
    }
}

/// Conversion between a typed field and its dynamic [`Value`].
pub trait WireValue: Sized {
    fn to_value(&self) -> Value;
    fn from_value(field: &'static str, value: Value) -> Result<Self, ProtocolError>;
}

macro_rules! scalar_wire_value {
    ($ty:ty, $variant:ident, $kind:literal) => {
        impl WireValue for $ty {
            fn to_value(&self) -> Value {
                Value::$variant(self.clone())
            }

            fn from_value(field: &'static str, value: Value) -> Result<Self, ProtocolError> {
                match value {
                    Value::$variant(inner) => Ok(inner),
                    Value::Null => Err(ProtocolError::NullValue(field)),
                    _ => Err(ProtocolError::UnexpectedValue {
                        field,
                        expected: $kind,
                    }),
                }
            }
        }
    };
}

scalar_wire_value!(bool, Bool, "bool");
scalar_wire_value!(i8, Int8, "int8");
scalar_wire_value!(i16, Int16, "int16");
scalar_wire_value!(u16, Uint16, "uint16");
scalar_wire_value!(i32, Int32, "int32");
scalar_wire_value!(u32, Uint32, "uint32");
scalar_wire_value!(i64, Int64, "int64");
scalar_wire_value!(f64, Float64, "float64");
scalar_wire_value!(String, String, "string");
scalar_wire_value!(Bytes, Bytes, "bytes");
scalar_wire_value!(Uuid, Uuid, "uuid");

impl<T: WireValue> WireValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(WireValue::to_value).collect())
    }

    fn from_value(field: &'static str, value: Value) -> Result<Self, ProtocolError> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| T::from_value(field, item))
                .collect(),
            Value::Null => Err(ProtocolError::NullValue(field)),
            _ => Err(ProtocolError::UnexpectedValue {
                field,
                expected: "array",
            }),
        }
    }
}

impl<T: WireValue> WireValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(field: &'static str, value: Value) -> Result<Self, ProtocolError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(field, other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ElementType, VersionRange};

    static LEADER: StructSchema = StructSchema {
        name: "Leader",
        fields: &[
            FieldSchema::new("LeaderId", FieldType::Int32, VersionRange::from(0))
                .default_value(FieldDefault::Int(-1)),
            FieldSchema::new("Rack", FieldType::String, VersionRange::from(0))
                .nullable(VersionRange::from(0))
                .default_value(FieldDefault::Null),
        ],
    };

    #[test]
    fn defaults_follow_schema() {
        let leader = StructValue::defaults(&LEADER);
        assert_eq!(leader.fields(), &[Value::Int32(-1), Value::Null]);
        assert_eq!(
            Value::zero(FieldType::Struct(&LEADER)),
            Value::Struct(Box::new(leader))
        );
        assert_eq!(
            Value::zero(FieldType::Array(ElementType::Int32)),
            Value::Array(vec![])
        );
    }

    #[test]
    fn null_default_falls_back_to_zero_when_never_nullable() {
        let never = FieldSchema::new("Name", FieldType::String, VersionRange::from(0))
            .default_value(FieldDefault::Null);
        assert_eq!(Value::default_for(&never), Value::String(String::new()));

        let later = FieldSchema::new("Name", FieldType::String, VersionRange::from(2))
            .nullable(VersionRange::from(2))
            .default_value(FieldDefault::Null);
        assert_eq!(Value::default_for(&later), Value::Null);
    }

    #[test]
    fn typed_conversions_check_kinds() {
        assert_eq!(7_i32.to_value(), Value::Int32(7));
        assert_eq!(i32::from_value("f", Value::Int32(7)), Ok(7));
        assert_eq!(
            i32::from_value("f", Value::Int64(7)),
            Err(ProtocolError::UnexpectedValue {
                field: "f",
                expected: "int32"
            })
        );
        assert_eq!(
            String::from_value("f", Value::Null),
            Err(ProtocolError::NullValue("f"))
        );
        assert_eq!(Option::<String>::from_value("f", Value::Null), Ok(None));
        assert_eq!(
            Option::<Vec<i8>>::from_value("f", Value::Array(vec![Value::Int8(1)])),
            Ok(Some(vec![1]))
        );
    }

    #[test]
    fn cursor_reports_missing_fields() {
        let mut cursor = StructValue::new(vec![Value::Bool(true)]).into_fields();
        assert_eq!(cursor.next::<bool>("A"), Ok(true));
        assert_eq!(
            cursor.next::<bool>("B"),
            Err(ProtocolError::MissingRequiredField("B"))
        );
    }

    #[test]
    fn set_and_lookup_by_name() {
        let mut leader = StructValue::defaults(&LEADER);
        assert_eq!(leader.set(0, Value::Int32(4)), Some(Value::Int32(-1)));
        assert_eq!(
            leader.get_named(&LEADER, "LeaderId"),
            Some(&Value::Int32(4))
        );
        assert_eq!(leader.set(5, Value::Null), None);
    }
}
