#![forbid(unsafe_code)]

use crate::engine;
use crate::schema::{MessageSchema, MessageType};
use crate::value::StructValue;
use crate::ProtocolError;

include!("generated_api_registry.rs");

pub fn find_by_name(name: &str) -> Option<&'static MessageSchema> {
    PROTOCOL_MESSAGE_REGISTRY
        .iter()
        .copied()
        .find(|entry| entry.name == name)
}

pub fn find_by_api_key(api_key: i16, message_type: MessageType) -> Option<&'static MessageSchema> {
    PROTOCOL_MESSAGE_REGISTRY
        .iter()
        .copied()
        .find(|entry| entry.api_key == api_key && entry.message_type == message_type)
}

fn lookup(api_key: i16, message_type: MessageType) -> Result<&'static MessageSchema, ProtocolError> {
    find_by_api_key(api_key, message_type).ok_or_else(|| {
        tracing::debug!(api_key, ?message_type, "no descriptor registered");
        ProtocolError::UnknownApi { api_key }
    })
}

pub fn decode_dynamic(
    api_key: i16,
    message_type: MessageType,
    version: i16,
    input: &[u8],
) -> Result<(StructValue, usize), ProtocolError> {
    engine::decode_message(lookup(api_key, message_type)?, version, input)
}

pub fn encode_dynamic(
    api_key: i16,
    message_type: MessageType,
    version: i16,
    value: &StructValue,
) -> Result<Vec<u8>, ProtocolError> {
    engine::encode_message(lookup(api_key, message_type)?, value, version)
}
