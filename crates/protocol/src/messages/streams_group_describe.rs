#![forbid(unsafe_code)]

use crate::messages::{
    Record, VersionedCodec, STREAMS_GROUP_DESCRIBE_REQUEST, STREAMS_GROUP_DESCRIBE_REQUEST_BODY,
    STREAMS_GROUP_DESCRIBE_RESPONSE, STREAMS_GROUP_DESCRIBE_RESPONSE_ASSIGNMENT,
    STREAMS_GROUP_DESCRIBE_RESPONSE_BODY, STREAMS_GROUP_DESCRIBE_RESPONSE_DESCRIBED_GROUP,
    STREAMS_GROUP_DESCRIBE_RESPONSE_ENDPOINT, STREAMS_GROUP_DESCRIBE_RESPONSE_KEY_VALUE,
    STREAMS_GROUP_DESCRIBE_RESPONSE_MEMBER, STREAMS_GROUP_DESCRIBE_RESPONSE_SUBTOPOLOGY,
    STREAMS_GROUP_DESCRIBE_RESPONSE_TASK_IDS, STREAMS_GROUP_DESCRIBE_RESPONSE_TASK_OFFSET,
    STREAMS_GROUP_DESCRIBE_RESPONSE_TOPIC_INFO, STREAMS_GROUP_DESCRIBE_RESPONSE_TOPOLOGY,
};
use crate::schema::{MessageSchema, StructSchema};
use crate::value::{StructValue, WireValue};
use crate::ProtocolError;

pub const STREAMS_GROUP_DESCRIBE_API_KEY: i16 = 89;
pub const STREAMS_GROUP_DESCRIBE_MIN_VERSION: i16 = 0;
pub const STREAMS_GROUP_DESCRIBE_MAX_VERSION: i16 = 0;

/// Sentinel meaning the authorized operations were not requested.
pub const AUTHORIZED_OPERATIONS_OMITTED: i32 = i32::MIN;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StreamsGroupDescribeRequest {
    pub group_ids: Vec<String>,
    pub include_authorized_operations: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StreamsGroupDescribeResponse {
    pub throttle_time_ms: i32,
    pub groups: Vec<StreamsGroupDescribeResponseDescribedGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StreamsGroupDescribeResponseDescribedGroup {
    pub error_code: i16,
    pub error_message: Option<String>,
    pub group_id: String,
    pub group_state: String,
    pub group_epoch: i32,
    pub assignment_epoch: i32,
    /// `None` until the group has a configured topology.
    pub topology: Option<StreamsGroupDescribeResponseTopology>,
    pub members: Vec<StreamsGroupDescribeResponseMember>,
    /// Bitfield of ACL operations, or [`AUTHORIZED_OPERATIONS_OMITTED`].
    pub authorized_operations: i32,
}

impl Default for StreamsGroupDescribeResponseDescribedGroup {
    fn default() -> Self {
        Self {
            error_code: 0,
            error_message: None,
            group_id: String::new(),
            group_state: String::new(),
            group_epoch: 0,
            assignment_epoch: 0,
            topology: None,
            members: Vec::new(),
            authorized_operations: AUTHORIZED_OPERATIONS_OMITTED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StreamsGroupDescribeResponseTopology {
    pub epoch: i32,
    pub subtopologies: Option<Vec<StreamsGroupDescribeResponseSubtopology>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StreamsGroupDescribeResponseSubtopology {
    pub subtopology_id: String,
    pub source_topics: Vec<String>,
    pub repartition_sink_topics: Vec<String>,
    pub state_changelog_topics: Vec<StreamsGroupDescribeResponseTopicInfo>,
    pub repartition_source_topics: Vec<StreamsGroupDescribeResponseTopicInfo>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StreamsGroupDescribeResponseMember {
    pub member_id: String,
    pub member_epoch: i32,
    pub instance_id: Option<String>,
    pub rack_id: Option<String>,
    pub client_id: String,
    pub client_host: String,
    pub topology_epoch: i32,
    pub process_id: String,
    pub user_endpoint: Option<StreamsGroupDescribeResponseEndpoint>,
    pub client_tags: Vec<StreamsGroupDescribeResponseKeyValue>,
    pub task_offsets: Vec<StreamsGroupDescribeResponseTaskOffset>,
    pub task_end_offsets: Vec<StreamsGroupDescribeResponseTaskOffset>,
    pub assignment: StreamsGroupDescribeResponseAssignment,
    pub target_assignment: StreamsGroupDescribeResponseAssignment,
    pub is_classic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamsGroupDescribeResponseEndpoint {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamsGroupDescribeResponseKeyValue {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamsGroupDescribeResponseTopicInfo {
    pub name: String,
    /// Zero when the partition count is derived from the source topics.
    pub partitions: i32,
    pub replication_factor: i16,
    pub topic_configs: Vec<StreamsGroupDescribeResponseKeyValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamsGroupDescribeResponseTaskOffset {
    pub subtopology_id: String,
    pub partition: i32,
    pub offset: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamsGroupDescribeResponseAssignment {
    pub active_tasks: Vec<StreamsGroupDescribeResponseTaskIds>,
    pub standby_tasks: Vec<StreamsGroupDescribeResponseTaskIds>,
    pub warmup_tasks: Vec<StreamsGroupDescribeResponseTaskIds>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamsGroupDescribeResponseTaskIds {
    pub subtopology_id: String,
    pub partitions: Vec<i32>,
}

record_wire_value!(
    StreamsGroupDescribeResponseDescribedGroup,
    StreamsGroupDescribeResponseTopology,
    StreamsGroupDescribeResponseSubtopology,
    StreamsGroupDescribeResponseMember,
    StreamsGroupDescribeResponseEndpoint,
    StreamsGroupDescribeResponseKeyValue,
    StreamsGroupDescribeResponseTopicInfo,
    StreamsGroupDescribeResponseTaskOffset,
    StreamsGroupDescribeResponseAssignment,
    StreamsGroupDescribeResponseTaskIds,
);

impl Record for StreamsGroupDescribeRequest {
    fn schema() -> &'static StructSchema {
        &STREAMS_GROUP_DESCRIBE_REQUEST_BODY
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.group_ids.to_value(),
            self.include_authorized_operations.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            group_ids: fields.next("GroupIds")?,
            include_authorized_operations: fields.next("IncludeAuthorizedOperations")?,
        })
    }
}

impl Record for StreamsGroupDescribeResponse {
    fn schema() -> &'static StructSchema {
        &STREAMS_GROUP_DESCRIBE_RESPONSE_BODY
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

impl Record for StreamsGroupDescribeResponseDescribedGroup {
    fn schema() -> &'static StructSchema {
        &STREAMS_GROUP_DESCRIBE_RESPONSE_DESCRIBED_GROUP
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.error_code.to_value(),
            self.error_message.to_value(),
            self.group_id.to_value(),
            self.group_state.to_value(),
            self.group_epoch.to_value(),
            self.assignment_epoch.to_value(),
            self.topology.to_value(),
            self.members.to_value(),
            self.authorized_operations.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            error_code: fields.next("ErrorCode")?,
            error_message: fields.next("ErrorMessage")?,
            group_id: fields.next("GroupId")?,
            group_state: fields.next("GroupState")?,
            group_epoch: fields.next("GroupEpoch")?,
            assignment_epoch: fields.next("AssignmentEpoch")?,
            topology: fields.next("Topology")?,
            members: fields.next("Members")?,
            authorized_operations: fields.next("AuthorizedOperations")?,
        })
    }
}

impl Record for StreamsGroupDescribeResponseTopology {
    fn schema() -> &'static StructSchema {
        &STREAMS_GROUP_DESCRIBE_RESPONSE_TOPOLOGY
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![self.epoch.to_value(), self.subtopologies.to_value()])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            epoch: fields.next("Epoch")?,
            subtopologies: fields.next("Subtopologies")?,
        })
    }
}

impl Record for StreamsGroupDescribeResponseSubtopology {
    fn schema() -> &'static StructSchema {
        &STREAMS_GROUP_DESCRIBE_RESPONSE_SUBTOPOLOGY
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.subtopology_id.to_value(),
            self.source_topics.to_value(),
            self.repartition_sink_topics.to_value(),
            self.state_changelog_topics.to_value(),
            self.repartition_source_topics.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            subtopology_id: fields.next("SubtopologyId")?,
            source_topics: fields.next("SourceTopics")?,
            repartition_sink_topics: fields.next("RepartitionSinkTopics")?,
            state_changelog_topics: fields.next("StateChangelogTopics")?,
            repartition_source_topics: fields.next("RepartitionSourceTopics")?,
        })
    }
}

impl Record for StreamsGroupDescribeResponseMember {
    fn schema() -> &'static StructSchema {
        &STREAMS_GROUP_DESCRIBE_RESPONSE_MEMBER
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.member_id.to_value(),
            self.member_epoch.to_value(),
            self.instance_id.to_value(),
            self.rack_id.to_value(),
            self.client_id.to_value(),
            self.client_host.to_value(),
            self.topology_epoch.to_value(),
            self.process_id.to_value(),
            self.user_endpoint.to_value(),
            self.client_tags.to_value(),
            self.task_offsets.to_value(),
            self.task_end_offsets.to_value(),
            self.assignment.to_value(),
            self.target_assignment.to_value(),
            self.is_classic.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            member_id: fields.next("MemberId")?,
            member_epoch: fields.next("MemberEpoch")?,
            instance_id: fields.next("InstanceId")?,
            rack_id: fields.next("RackId")?,
            client_id: fields.next("ClientId")?,
            client_host: fields.next("ClientHost")?,
            topology_epoch: fields.next("TopologyEpoch")?,
            process_id: fields.next("ProcessId")?,
            user_endpoint: fields.next("UserEndpoint")?,
            client_tags: fields.next("ClientTags")?,
            task_offsets: fields.next("TaskOffsets")?,
            task_end_offsets: fields.next("TaskEndOffsets")?,
            assignment: fields.next("Assignment")?,
            target_assignment: fields.next("TargetAssignment")?,
            is_classic: fields.next("IsClassic")?,
        })
    }
}

impl Record for StreamsGroupDescribeResponseEndpoint {
    fn schema() -> &'static StructSchema {
        &STREAMS_GROUP_DESCRIBE_RESPONSE_ENDPOINT
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![self.host.to_value(), self.port.to_value()])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            host: fields.next("Host")?,
            port: fields.next("Port")?,
        })
    }
}

impl Record for StreamsGroupDescribeResponseKeyValue {
    fn schema() -> &'static StructSchema {
        &STREAMS_GROUP_DESCRIBE_RESPONSE_KEY_VALUE
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![self.key.to_value(), self.value.to_value()])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            key: fields.next("Key")?,
            value: fields.next("Value")?,
        })
    }
}

impl Record for StreamsGroupDescribeResponseTopicInfo {
    fn schema() -> &'static StructSchema {
        &STREAMS_GROUP_DESCRIBE_RESPONSE_TOPIC_INFO
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.name.to_value(),
            self.partitions.to_value(),
            self.replication_factor.to_value(),
            self.topic_configs.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            name: fields.next("Name")?,
            partitions: fields.next("Partitions")?,
            replication_factor: fields.next("ReplicationFactor")?,
            topic_configs: fields.next("TopicConfigs")?,
        })
    }
}

impl Record for StreamsGroupDescribeResponseTaskOffset {
    fn schema() -> &'static StructSchema {
        &STREAMS_GROUP_DESCRIBE_RESPONSE_TASK_OFFSET
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.subtopology_id.to_value(),
            self.partition.to_value(),
            self.offset.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            subtopology_id: fields.next("SubtopologyId")?,
            partition: fields.next("Partition")?,
            offset: fields.next("Offset")?,
        })
    }
}

impl Record for StreamsGroupDescribeResponseAssignment {
    fn schema() -> &'static StructSchema {
        &STREAMS_GROUP_DESCRIBE_RESPONSE_ASSIGNMENT
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.active_tasks.to_value(),
            self.standby_tasks.to_value(),
            self.warmup_tasks.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            active_tasks: fields.next("ActiveTasks")?,
            standby_tasks: fields.next("StandbyTasks")?,
            warmup_tasks: fields.next("WarmupTasks")?,
        })
    }
}

impl Record for StreamsGroupDescribeResponseTaskIds {
    fn schema() -> &'static StructSchema {
        &STREAMS_GROUP_DESCRIBE_RESPONSE_TASK_IDS
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![self.subtopology_id.to_value(), self.partitions.to_value()])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            subtopology_id: fields.next("SubtopologyId")?,
            partitions: fields.next("Partitions")?,
        })
    }
}

impl VersionedCodec for StreamsGroupDescribeRequest {
    const API_NAME: &'static str = "StreamsGroupDescribeRequest";
    const API_KEY: i16 = STREAMS_GROUP_DESCRIBE_API_KEY;
    const MIN_VERSION: i16 = STREAMS_GROUP_DESCRIBE_MIN_VERSION;
    const MAX_VERSION: i16 = STREAMS_GROUP_DESCRIBE_MAX_VERSION;

    fn message() -> &'static MessageSchema {
        &STREAMS_GROUP_DESCRIBE_REQUEST
    }
}

impl VersionedCodec for StreamsGroupDescribeResponse {
    const API_NAME: &'static str = "StreamsGroupDescribeResponse";
    const API_KEY: i16 = STREAMS_GROUP_DESCRIBE_API_KEY;
    const MIN_VERSION: i16 = STREAMS_GROUP_DESCRIBE_MIN_VERSION;
    const MAX_VERSION: i16 = STREAMS_GROUP_DESCRIBE_MAX_VERSION;

    fn message() -> &'static MessageSchema {
        &STREAMS_GROUP_DESCRIBE_RESPONSE
    }
}
