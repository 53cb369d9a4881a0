#![forbid(unsafe_code)]

use crate::codec::Reader;
use crate::engine;
use crate::value::StructValue;
use crate::ProtocolError;

include!("../generated_schema.rs");

/// A struct laid out by a [`StructSchema`].
pub trait Record: Sized {
    fn schema() -> &'static StructSchema;
    fn to_struct(&self) -> StructValue;
    fn from_struct(value: StructValue) -> Result<Self, ProtocolError>;
}

pub trait VersionedCodec: Record {
    const API_NAME: &'static str;
    const API_KEY: i16;
    const MIN_VERSION: i16;
    const MAX_VERSION: i16;

    fn message() -> &'static MessageSchema;

    fn write(&self, out: &mut Vec<u8>, version: i16) -> Result<(), ProtocolError> {
        engine::write_message(out, Self::message(), &self.to_struct(), version)
    }

    fn read(reader: &mut Reader<'_>, version: i16) -> Result<Self, ProtocolError> {
        let value = engine::read_message(reader, Self::message(), version)?;
        if !value.unknown_tagged_fields().is_empty() {
            tracing::trace!(
                api = Self::API_NAME,
                count = value.unknown_tagged_fields().len(),
                "dropping unknown tagged fields"
            );
        }
        Self::from_struct(value)
    }

    fn encode(&self, version: i16) -> Result<Vec<u8>, ProtocolError> {
        let mut out = Vec::new();
        self.write(&mut out, version)?;
        Ok(out)
    }

    fn decode(version: i16, input: &[u8]) -> Result<(Self, usize), ProtocolError> {
        let mut reader = Reader::new(input);
        let decoded = Self::read(&mut reader, version)?;
        Ok((decoded, reader.position()))
    }

    fn request_header_version(version: i16) -> i16 {
        Self::message().request_header_version(version)
    }

    fn response_header_version(version: i16) -> i16 {
        Self::message().response_header_version(version)
    }
}

/// Lets nested records appear as struct fields and array elements.
macro_rules! record_wire_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::value::WireValue for $ty {
                fn to_value(&self) -> $crate::value::Value {
                    $crate::value::Value::Struct(Box::new(
                        <$ty as $crate::messages::Record>::to_struct(self),
                    ))
                }

                fn from_value(
                    field: &'static str,
                    value: $crate::value::Value,
                ) -> Result<Self, $crate::ProtocolError> {
                    match value {
                        $crate::value::Value::Struct(inner) => {
                            <$ty as $crate::messages::Record>::from_struct(*inner)
                        }
                        $crate::value::Value::Null => Err($crate::ProtocolError::NullValue(field)),
                        _ => Err($crate::ProtocolError::UnexpectedValue {
                            field,
                            expected: "struct",
                        }),
                    }
                }
            }
        )*
    };
}

pub mod describe_share_group_offsets;
pub mod describe_user_scram_credentials;
pub mod share_fetch;
pub mod streams_group_describe;

pub use describe_share_group_offsets::*;
pub use describe_user_scram_credentials::*;
pub use share_fetch::*;
pub use streams_group_describe::*;
