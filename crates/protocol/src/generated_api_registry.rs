// @generated by kwire-codegen. DO NOT EDIT.
pub static PROTOCOL_MESSAGE_REGISTRY: &[&MessageSchema] = &[
    &crate::messages::DESCRIBE_USER_SCRAM_CREDENTIALS_REQUEST,
    &crate::messages::DESCRIBE_USER_SCRAM_CREDENTIALS_RESPONSE,
    &crate::messages::SHARE_FETCH_REQUEST,
    &crate::messages::SHARE_FETCH_RESPONSE,
    &crate::messages::STREAMS_GROUP_DESCRIBE_REQUEST,
    &crate::messages::STREAMS_GROUP_DESCRIBE_RESPONSE,
    &crate::messages::DESCRIBE_SHARE_GROUP_OFFSETS_REQUEST,
    &crate::messages::DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE,
];
