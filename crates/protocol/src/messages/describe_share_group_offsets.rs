#![forbid(unsafe_code)]

use uuid::Uuid;

use crate::messages::{
    Record, VersionedCodec, DESCRIBE_SHARE_GROUP_OFFSETS_REQUEST,
    DESCRIBE_SHARE_GROUP_OFFSETS_REQUEST_BODY, DESCRIBE_SHARE_GROUP_OFFSETS_REQUEST_GROUP,
    DESCRIBE_SHARE_GROUP_OFFSETS_REQUEST_TOPIC, DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE,
    DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_BODY, DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_GROUP,
    DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_PARTITION, DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_TOPIC,
};
use crate::schema::{MessageSchema, StructSchema};
use crate::value::{StructValue, WireValue};
use crate::ProtocolError;

pub const DESCRIBE_SHARE_GROUP_OFFSETS_API_KEY: i16 = 90;
pub const DESCRIBE_SHARE_GROUP_OFFSETS_MIN_VERSION: i16 = 0;
pub const DESCRIBE_SHARE_GROUP_OFFSETS_MAX_VERSION: i16 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescribeShareGroupOffsetsRequest {
    pub groups: Vec<DescribeShareGroupOffsetsRequestGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescribeShareGroupOffsetsRequestGroup {
    pub group_id: String,
    /// `None` asks for every topic the group has offsets for.
    pub topics: Option<Vec<DescribeShareGroupOffsetsRequestTopic>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescribeShareGroupOffsetsRequestTopic {
    pub topic_name: String,
    pub partitions: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescribeShareGroupOffsetsResponse {
    pub throttle_time_ms: i32,
    pub groups: Vec<DescribeShareGroupOffsetsResponseGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescribeShareGroupOffsetsResponseGroup {
    pub group_id: String,
    pub topics: Vec<DescribeShareGroupOffsetsResponseTopic>,
    pub error_code: i16,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescribeShareGroupOffsetsResponseTopic {
    pub topic_name: String,
    pub topic_id: Uuid,
    pub partitions: Vec<DescribeShareGroupOffsetsResponsePartition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeShareGroupOffsetsResponsePartition {
    pub partition_index: i32,
    pub start_offset: i64,
    pub leader_epoch: i32,
    /// Version 1+; -1 when unknown.
    pub lag: i64,
    pub error_code: i16,
    pub error_message: Option<String>,
}

impl Default for DescribeShareGroupOffsetsResponsePartition {
    fn default() -> Self {
        Self {
            partition_index: 0,
            start_offset: 0,
            leader_epoch: 0,
            lag: -1,
            error_code: 0,
            error_message: None,
        }
    }
}

record_wire_value!(
    DescribeShareGroupOffsetsRequestGroup,
    DescribeShareGroupOffsetsRequestTopic,
    DescribeShareGroupOffsetsResponseGroup,
    DescribeShareGroupOffsetsResponseTopic,
    DescribeShareGroupOffsetsResponsePartition,
);

impl Record for DescribeShareGroupOffsetsRequest {
    fn schema() -> &'static StructSchema {
        &DESCRIBE_SHARE_GROUP_OFFSETS_REQUEST_BODY
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![self.groups.to_value()])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            groups: fields.next("Groups")?,
        })
    }
}

impl Record for DescribeShareGroupOffsetsRequestGroup {
    fn schema() -> &'static StructSchema {
        &DESCRIBE_SHARE_GROUP_OFFSETS_REQUEST_GROUP
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![self.group_id.to_value(), self.topics.to_value()])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            group_id: fields.next("GroupId")?,
            topics: fields.next("Topics")?,
        })
    }
}

impl Record for DescribeShareGroupOffsetsRequestTopic {
    fn schema() -> &'static StructSchema {
        &DESCRIBE_SHARE_GROUP_OFFSETS_REQUEST_TOPIC
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![self.topic_name.to_value(), self.partitions.to_value()])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            topic_name: fields.next("TopicName")?,
            partitions: fields.next("Partitions")?,
        })
    }
}

impl Record for DescribeShareGroupOffsetsResponse {
    fn schema() -> &'static StructSchema {
        &DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_BODY
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![self.throttle_time_ms.to_value(), self.groups.to_value()])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            throttle_time_ms: fields.next("ThrottleTimeMs")?,
            groups: fields.next("Groups")?,
        })
    }
}

impl Record for DescribeShareGroupOffsetsResponseGroup {
    fn schema() -> &'static StructSchema {
        &DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_GROUP
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.group_id.to_value(),
            self.topics.to_value(),
            self.error_code.to_value(),
            self.error_message.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            group_id: fields.next("GroupId")?,
            topics: fields.next("Topics")?,
            error_code: fields.next("ErrorCode")?,
            error_message: fields.next("ErrorMessage")?,
        })
    }
}

impl Record for DescribeShareGroupOffsetsResponseTopic {
    fn schema() -> &'static StructSchema {
        &DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_TOPIC
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.topic_name.to_value(),
            self.topic_id.to_value(),
            self.partitions.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            topic_name: fields.next("TopicName")?,
            topic_id: fields.next("TopicId")?,
            partitions: fields.next("Partitions")?,
        })
    }
}

impl Record for DescribeShareGroupOffsetsResponsePartition {
    fn schema() -> &'static StructSchema {
        &DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_PARTITION
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.partition_index.to_value(),
            self.start_offset.to_value(),
            self.leader_epoch.to_value(),
            self.lag.to_value(),
            self.error_code.to_value(),
            self.error_message.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            partition_index: fields.next("PartitionIndex")?,
            start_offset: fields.next("StartOffset")?,
            leader_epoch: fields.next("LeaderEpoch")?,
            lag: fields.next("Lag")?,
            error_code: fields.next("ErrorCode")?,
            error_message: fields.next("ErrorMessage")?,
        })
    }
}

impl VersionedCodec for DescribeShareGroupOffsetsRequest {
    const API_NAME: &'static str = "DescribeShareGroupOffsetsRequest";
    const API_KEY: i16 = DESCRIBE_SHARE_GROUP_OFFSETS_API_KEY;
    const MIN_VERSION: i16 = DESCRIBE_SHARE_GROUP_OFFSETS_MIN_VERSION;
    const MAX_VERSION: i16 = DESCRIBE_SHARE_GROUP_OFFSETS_MAX_VERSION;

    fn message() -> &'static MessageSchema {
        &DESCRIBE_SHARE_GROUP_OFFSETS_REQUEST
    }
}

impl VersionedCodec for DescribeShareGroupOffsetsResponse {
    const API_NAME: &'static str = "DescribeShareGroupOffsetsResponse";
    const API_KEY: i16 = DESCRIBE_SHARE_GROUP_OFFSETS_API_KEY;
    const MIN_VERSION: i16 = DESCRIBE_SHARE_GROUP_OFFSETS_MIN_VERSION;
    const MAX_VERSION: i16 = DESCRIBE_SHARE_GROUP_OFFSETS_MAX_VERSION;

    fn message() -> &'static MessageSchema {
        &DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE
    }
}
