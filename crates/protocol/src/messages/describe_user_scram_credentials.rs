#![forbid(unsafe_code)]

use crate::messages::{
    Record, VersionedCodec, DESCRIBE_USER_SCRAM_CREDENTIALS_REQUEST,
    DESCRIBE_USER_SCRAM_CREDENTIALS_REQUEST_BODY, DESCRIBE_USER_SCRAM_CREDENTIALS_REQUEST_USER_NAME,
    DESCRIBE_USER_SCRAM_CREDENTIALS_RESPONSE, DESCRIBE_USER_SCRAM_CREDENTIALS_RESPONSE_BODY,
    DESCRIBE_USER_SCRAM_CREDENTIALS_RESPONSE_CREDENTIAL_INFO,
    DESCRIBE_USER_SCRAM_CREDENTIALS_RESPONSE_RESULT,
};
use crate::schema::{MessageSchema, StructSchema};
use crate::value::{StructValue, WireValue};
use crate::ProtocolError;

pub const DESCRIBE_USER_SCRAM_CREDENTIALS_API_KEY: i16 = 50;
pub const DESCRIBE_USER_SCRAM_CREDENTIALS_MIN_VERSION: i16 = 0;
pub const DESCRIBE_USER_SCRAM_CREDENTIALS_MAX_VERSION: i16 = 0;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DescribeUserScramCredentialsRequest {
    /// `None` describes every user.
    pub users: Option<Vec<DescribeUserScramCredentialsRequestUserName>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DescribeUserScramCredentialsRequestUserName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DescribeUserScramCredentialsResponse {
    pub throttle_time_ms: i32,
    pub error_code: i16,
    pub error_message: Option<String>,
    pub results: Vec<DescribeUserScramCredentialsResponseResult>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DescribeUserScramCredentialsResponseResult {
    pub user: String,
    pub error_code: i16,
    pub error_message: Option<String>,
    pub credential_infos: Vec<DescribeUserScramCredentialsResponseCredentialInfo>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DescribeUserScramCredentialsResponseCredentialInfo {
    /// 1 = SCRAM-SHA-256, 2 = SCRAM-SHA-512.
    pub mechanism: i8,
    pub iterations: i32,
}

record_wire_value!(
    DescribeUserScramCredentialsRequestUserName,
    DescribeUserScramCredentialsResponseResult,
    DescribeUserScramCredentialsResponseCredentialInfo,
);

impl Record for DescribeUserScramCredentialsRequest {
    fn schema() -> &'static StructSchema {
        &DESCRIBE_USER_SCRAM_CREDENTIALS_REQUEST_BODY
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![self.users.to_value()])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            users: fields.next("Users")?,
        })
    }
}

impl Record for DescribeUserScramCredentialsRequestUserName {
    fn schema() -> &'static StructSchema {
        &DESCRIBE_USER_SCRAM_CREDENTIALS_REQUEST_USER_NAME
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![self.name.to_value()])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            name: fields.next("Name")?,
        })
    }
}

impl Record for DescribeUserScramCredentialsResponse {
    fn schema() -> &'static StructSchema {
        &DESCRIBE_USER_SCRAM_CREDENTIALS_RESPONSE_BODY
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.throttle_time_ms.to_value(),
            self.error_code.to_value(),
            self.error_message.to_value(),
            self.results.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            throttle_time_ms: fields.next("ThrottleTimeMs")?,
            error_code: fields.next("ErrorCode")?,
            error_message: fields.next("ErrorMessage")?,
            results: fields.next("Results")?,
        })
    }
}

impl Record for DescribeUserScramCredentialsResponseResult {
    fn schema() -> &'static StructSchema {
        &DESCRIBE_USER_SCRAM_CREDENTIALS_RESPONSE_RESULT
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.user.to_value(),
            self.error_code.to_value(),
            self.error_message.to_value(),
            self.credential_infos.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            user: fields.next("User")?,
            error_code: fields.next("ErrorCode")?,
            error_message: fields.next("ErrorMessage")?,
            credential_infos: fields.next("CredentialInfos")?,
        })
    }
}

impl Record for DescribeUserScramCredentialsResponseCredentialInfo {
    fn schema() -> &'static StructSchema {
        &DESCRIBE_USER_SCRAM_CREDENTIALS_RESPONSE_CREDENTIAL_INFO
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![self.mechanism.to_value(), self.iterations.to_value()])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            mechanism: fields.next("Mechanism")?,
            iterations: fields.next("Iterations")?,
        })
    }
}

impl VersionedCodec for DescribeUserScramCredentialsRequest {
    const API_NAME: &'static str = "DescribeUserScramCredentialsRequest";
    const API_KEY: i16 = DESCRIBE_USER_SCRAM_CREDENTIALS_API_KEY;
    const MIN_VERSION: i16 = DESCRIBE_USER_SCRAM_CREDENTIALS_MIN_VERSION;
    const MAX_VERSION: i16 = DESCRIBE_USER_SCRAM_CREDENTIALS_MAX_VERSION;

    fn message() -> &'static MessageSchema {
        &DESCRIBE_USER_SCRAM_CREDENTIALS_REQUEST
    }
}

impl VersionedCodec for DescribeUserScramCredentialsResponse {
    const API_NAME: &'static str = "DescribeUserScramCredentialsResponse";
    const API_KEY: i16 = DESCRIBE_USER_SCRAM_CREDENTIALS_API_KEY;
    const MIN_VERSION: i16 = DESCRIBE_USER_SCRAM_CREDENTIALS_MIN_VERSION;
    const MAX_VERSION: i16 = DESCRIBE_USER_SCRAM_CREDENTIALS_MAX_VERSION;

    fn message() -> &'static MessageSchema {
        &DESCRIBE_USER_SCRAM_CREDENTIALS_RESPONSE
    }
}
