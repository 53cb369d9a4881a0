#![forbid(unsafe_code)]

pub mod api_registry;
pub mod codec;
pub mod engine;
pub mod header;
pub mod messages;
pub mod schema;
pub mod value;

pub use codec::{RawTaggedField, Reader};
pub use schema::{FieldType, MessageSchema, MessageType, StructSchema, VersionRange};
pub use value::{StructValue, Value};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("malformed varint (more than 5 bytes)")]
    MalformedVarint,
    #[error("malformed varlong (more than 10 bytes)")]
    MalformedVarlong,
    #[error("invalid length value: {0}")]
    InvalidLength(i64),
    #[error("length {0} does not fit the wire length prefix")]
    LengthOverflow(usize),
    #[error("invalid boolean value: {0}")]
    InvalidBoolean(u8),
    #[error("invalid UTF-8 string")]
    InvalidString,
    #[error("invalid nullable struct marker: {0}")]
    InvalidStructMarker(i8),
    #[error("unsupported version {version} for {api}")]
    InvalidVersion { api: &'static str, version: i16 },
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
    #[error("null value for non-nullable field: {0}")]
    NullValue(&'static str),
    #[error("unexpected value for {field}: expected {expected}")]
    UnexpectedValue {
        field: &'static str,
        expected: &'static str,
    },
    #[error("{schema} expects {expected} fields, value has {actual}")]
    FieldCountMismatch {
        schema: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("unknown api key {api_key}")]
    UnknownApi { api_key: i16 },
    #[error("api key {actual} does not match the expected {expected}")]
    ApiKeyMismatch { expected: i16, actual: i16 },
}

/// Encoded length of a zigzag varint, without encoding it.
pub fn size_of_varint(value: i32) -> usize {
    unsigned_varint_len(u64::from(zigzag_encode_i32(value)))
}

pub fn size_of_varlong(value: i64) -> usize {
    unsigned_varint_len(zigzag_encode_i64(value))
}

pub fn encode_varint(value: i32) -> Vec<u8> {
    let mut out = Vec::with_capacity(size_of_varint(value));
    codec::write_uvarint(&mut out, zigzag_encode_i32(value));
    out
}

/// Returns the value and the number of bytes it occupied.
pub fn decode_varint(input: &[u8]) -> Result<(i32, usize), ProtocolError> {
    let mut reader = Reader::new(input);
    let value = zigzag_decode_i32(reader.read_uvarint()?);
    Ok((value, reader.position()))
}

pub fn encode_varlong(value: i64) -> Vec<u8> {
    let mut out = Vec::with_capacity(size_of_varlong(value));
    codec::write_uvarlong(&mut out, zigzag_encode_i64(value));
    out
}

pub fn decode_varlong(input: &[u8]) -> Result<(i64, usize), ProtocolError> {
    let mut reader = Reader::new(input);
    let value = zigzag_decode_i64(reader.read_uvarlong()?);
    Ok((value, reader.position()))
}

fn unsigned_varint_len(value: u64) -> usize {
    let significant_bits = 64 - value.leading_zeros() as usize;
    significant_bits.div_ceil(7).max(1)
}

fn zigzag_encode_i32(value: i32) -> u32 {
    (value.wrapping_shl(1) ^ (value >> 31)) as u32
}

fn zigzag_decode_i32(raw: u32) -> i32 {
    (raw >> 1) as i32 ^ (raw & 1).wrapping_neg() as i32
}

fn zigzag_encode_i64(value: i64) -> u64 {
    (value.wrapping_shl(1) ^ (value >> 63)) as u64
}

fn zigzag_decode_i64(raw: u64) -> i64 {
    (raw >> 1) as i64 ^ (raw & 1).wrapping_neg() as i64
}
