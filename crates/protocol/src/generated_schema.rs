// @generated by kwire-codegen. DO NOT EDIT.
use crate::schema::{
    ElementType, FieldDefault, FieldSchema, FieldType, MessageSchema, MessageType, StructSchema,
    VersionRange,
};

pub static DESCRIBE_SHARE_GROUP_OFFSETS_REQUEST_TOPIC: StructSchema = StructSchema {
    name: "DescribeShareGroupOffsetsRequestTopic",
    fields: &[
        FieldSchema::new("TopicName", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("Partitions", FieldType::Array(ElementType::Int32), VersionRange::from(0)),
    ],
};

pub static DESCRIBE_SHARE_GROUP_OFFSETS_REQUEST_GROUP: StructSchema = StructSchema {
    name: "DescribeShareGroupOffsetsRequestGroup",
    fields: &[
        FieldSchema::new("GroupId", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("Topics", FieldType::Array(ElementType::Struct(&DESCRIBE_SHARE_GROUP_OFFSETS_REQUEST_TOPIC)), VersionRange::from(0))
            .nullable(VersionRange::from(0)),
    ],
};

pub static DESCRIBE_SHARE_GROUP_OFFSETS_REQUEST_BODY: StructSchema = StructSchema {
    name: "DescribeShareGroupOffsetsRequest",
    fields: &[
        FieldSchema::new("Groups", FieldType::Array(ElementType::Struct(&DESCRIBE_SHARE_GROUP_OFFSETS_REQUEST_GROUP)), VersionRange::from(0)),
    ],
};

pub static DESCRIBE_SHARE_GROUP_OFFSETS_REQUEST: MessageSchema = MessageSchema {
    name: "DescribeShareGroupOffsetsRequest",
    api_key: 90,
    message_type: MessageType::Request,
    valid_versions: VersionRange::new(0, 1),
    flexible_versions: VersionRange::from(0),
    body: &DESCRIBE_SHARE_GROUP_OFFSETS_REQUEST_BODY,
};

pub static DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_PARTITION: StructSchema = StructSchema {
    name: "DescribeShareGroupOffsetsResponsePartition",
    fields: &[
        FieldSchema::new("PartitionIndex", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("StartOffset", FieldType::Int64, VersionRange::from(0)),
        FieldSchema::new("LeaderEpoch", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("Lag", FieldType::Int64, VersionRange::from(1))
            .default_value(FieldDefault::Int(-1)),
        FieldSchema::new("ErrorCode", FieldType::Int16, VersionRange::from(0)),
        FieldSchema::new("ErrorMessage", FieldType::String, VersionRange::from(0))
            .nullable(VersionRange::from(0))
            .default_value(FieldDefault::Null),
    ],
};

pub static DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_TOPIC: StructSchema = StructSchema {
    name: "DescribeShareGroupOffsetsResponseTopic",
    fields: &[
        FieldSchema::new("TopicName", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("TopicId", FieldType::Uuid, VersionRange::from(0)),
        FieldSchema::new("Partitions", FieldType::Array(ElementType::Struct(&DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_PARTITION)), VersionRange::from(0)),
    ],
};

pub static DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_GROUP: StructSchema = StructSchema {
    name: "DescribeShareGroupOffsetsResponseGroup",
    fields: &[
        FieldSchema::new("GroupId", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("Topics", FieldType::Array(ElementType::Struct(&DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_TOPIC)), VersionRange::from(0)),
        FieldSchema::new("ErrorCode", FieldType::Int16, VersionRange::from(0)),
        FieldSchema::new("ErrorMessage", FieldType::String, VersionRange::from(0))
            .nullable(VersionRange::from(0))
            .default_value(FieldDefault::Null),
    ],
};

pub static DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_BODY: StructSchema = StructSchema {
    name: "DescribeShareGroupOffsetsResponse",
    fields: &[
        FieldSchema::new("ThrottleTimeMs", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("Groups", FieldType::Array(ElementType::Struct(&DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_GROUP)), VersionRange::from(0)),
    ],
};

pub static DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE: MessageSchema = MessageSchema {
    name: "DescribeShareGroupOffsetsResponse",
    api_key: 90,
    message_type: MessageType::Response,
    valid_versions: VersionRange::new(0, 1),
    flexible_versions: VersionRange::from(0),
    body: &DESCRIBE_SHARE_GROUP_OFFSETS_RESPONSE_BODY,
};

pub static DESCRIBE_USER_SCRAM_CREDENTIALS_REQUEST_USER_NAME: StructSchema = StructSchema {
    name: "UserName",
    fields: &[
        FieldSchema::new("Name", FieldType::String, VersionRange::from(0)),
    ],
};

pub static DESCRIBE_USER_SCRAM_CREDENTIALS_REQUEST_BODY: StructSchema = StructSchema {
    name: "DescribeUserScramCredentialsRequest",
    fields: &[
        FieldSchema::new("Users", FieldType::Array(ElementType::Struct(&DESCRIBE_USER_SCRAM_CREDENTIALS_REQUEST_USER_NAME)), VersionRange::from(0))
            .nullable(VersionRange::from(0)),
    ],
};

pub static DESCRIBE_USER_SCRAM_CREDENTIALS_REQUEST: MessageSchema = MessageSchema {
    name: "DescribeUserScramCredentialsRequest",
    api_key: 50,
    message_type: MessageType::Request,
    valid_versions: VersionRange::exact(0),
    flexible_versions: VersionRange::from(0),
    body: &DESCRIBE_USER_SCRAM_CREDENTIALS_REQUEST_BODY,
};

pub static DESCRIBE_USER_SCRAM_CREDENTIALS_RESPONSE_CREDENTIAL_INFO: StructSchema = StructSchema {
    name: "CredentialInfo",
    fields: &[
        FieldSchema::new("Mechanism", FieldType::Int8, VersionRange::from(0)),
        FieldSchema::new("Iterations", FieldType::Int32, VersionRange::from(0)),
    ],
};

pub static DESCRIBE_USER_SCRAM_CREDENTIALS_RESPONSE_RESULT: StructSchema = StructSchema {
    name: "DescribeUserScramCredentialsResult",
    fields: &[
        FieldSchema::new("User", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("ErrorCode", FieldType::Int16, VersionRange::from(0)),
        FieldSchema::new("ErrorMessage", FieldType::String, VersionRange::from(0))
            .nullable(VersionRange::from(0)),
        FieldSchema::new("CredentialInfos", FieldType::Array(ElementType::Struct(&DESCRIBE_USER_SCRAM_CREDENTIALS_RESPONSE_CREDENTIAL_INFO)), VersionRange::from(0)),
    ],
};

pub static DESCRIBE_USER_SCRAM_CREDENTIALS_RESPONSE_BODY: StructSchema = StructSchema {
    name: "DescribeUserScramCredentialsResponse",
    fields: &[
        FieldSchema::new("ThrottleTimeMs", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("ErrorCode", FieldType::Int16, VersionRange::from(0)),
        FieldSchema::new("ErrorMessage", FieldType::String, VersionRange::from(0))
            .nullable(VersionRange::from(0)),
        FieldSchema::new("Results", FieldType::Array(ElementType::Struct(&DESCRIBE_USER_SCRAM_CREDENTIALS_RESPONSE_RESULT)), VersionRange::from(0)),
    ],
};

pub static DESCRIBE_USER_SCRAM_CREDENTIALS_RESPONSE: MessageSchema = MessageSchema {
    name: "DescribeUserScramCredentialsResponse",
    api_key: 50,
    message_type: MessageType::Response,
    valid_versions: VersionRange::exact(0),
    flexible_versions: VersionRange::from(0),
    body: &DESCRIBE_USER_SCRAM_CREDENTIALS_RESPONSE_BODY,
};

pub static SHARE_FETCH_REQUEST_ACKNOWLEDGEMENT_BATCH: StructSchema = StructSchema {
    name: "AcknowledgementBatch",
    fields: &[
        FieldSchema::new("FirstOffset", FieldType::Int64, VersionRange::from(0)),
        FieldSchema::new("LastOffset", FieldType::Int64, VersionRange::from(0)),
        FieldSchema::new("AcknowledgeTypes", FieldType::Array(ElementType::Int8), VersionRange::from(0)),
    ],
};

pub static SHARE_FETCH_REQUEST_FETCH_PARTITION: StructSchema = StructSchema {
    name: "FetchPartition",
    fields: &[
        FieldSchema::new("PartitionIndex", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("PartitionMaxBytes", FieldType::Int32, VersionRange::exact(0)),
        FieldSchema::new("AcknowledgementBatches", FieldType::Array(ElementType::Struct(&SHARE_FETCH_REQUEST_ACKNOWLEDGEMENT_BATCH)), VersionRange::from(0)),
    ],
};

pub static SHARE_FETCH_REQUEST_FETCH_TOPIC: StructSchema = StructSchema {
    name: "FetchTopic",
    fields: &[
        FieldSchema::new("TopicId", FieldType::Uuid, VersionRange::from(0)),
        FieldSchema::new("Partitions", FieldType::Array(ElementType::Struct(&SHARE_FETCH_REQUEST_FETCH_PARTITION)), VersionRange::from(0)),
    ],
};

pub static SHARE_FETCH_REQUEST_FORGOTTEN_TOPIC: StructSchema = StructSchema {
    name: "ForgottenTopic",
    fields: &[
        FieldSchema::new("TopicId", FieldType::Uuid, VersionRange::from(0)),
        FieldSchema::new("Partitions", FieldType::Array(ElementType::Int32), VersionRange::from(0)),
    ],
};

pub static SHARE_FETCH_REQUEST_BODY: StructSchema = StructSchema {
    name: "ShareFetchRequest",
    fields: &[
        FieldSchema::new("GroupId", FieldType::String, VersionRange::from(0))
            .nullable(VersionRange::from(0))
            .default_value(FieldDefault::Null),
        FieldSchema::new("MemberId", FieldType::String, VersionRange::from(0))
            .nullable(VersionRange::from(0)),
        FieldSchema::new("ShareSessionEpoch", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("MaxWaitMs", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("MinBytes", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("MaxBytes", FieldType::Int32, VersionRange::from(0))
            .default_value(FieldDefault::Int(2147483647)),
        FieldSchema::new("MaxRecords", FieldType::Int32, VersionRange::from(1)),
        FieldSchema::new("BatchSize", FieldType::Int32, VersionRange::from(1)),
        FieldSchema::new("Topics", FieldType::Array(ElementType::Struct(&SHARE_FETCH_REQUEST_FETCH_TOPIC)), VersionRange::from(0)),
        FieldSchema::new("ForgottenTopicsData", FieldType::Array(ElementType::Struct(&SHARE_FETCH_REQUEST_FORGOTTEN_TOPIC)), VersionRange::from(0)),
    ],
};

pub static SHARE_FETCH_REQUEST: MessageSchema = MessageSchema {
    name: "ShareFetchRequest",
    api_key: 78,
    message_type: MessageType::Request,
    valid_versions: VersionRange::new(0, 1),
    flexible_versions: VersionRange::from(0),
    body: &SHARE_FETCH_REQUEST_BODY,
};

pub static SHARE_FETCH_RESPONSE_LEADER_ID_AND_EPOCH: StructSchema = StructSchema {
    name: "LeaderIdAndEpoch",
    fields: &[
        FieldSchema::new("LeaderId", FieldType::Int32, VersionRange::from(0))
            .default_value(FieldDefault::Int(-1)),
        FieldSchema::new("LeaderEpoch", FieldType::Int32, VersionRange::from(0))
            .default_value(FieldDefault::Int(-1)),
    ],
};

pub static SHARE_FETCH_RESPONSE_ACQUIRED_RECORDS: StructSchema = StructSchema {
    name: "AcquiredRecords",
    fields: &[
        FieldSchema::new("FirstOffset", FieldType::Int64, VersionRange::from(0)),
        FieldSchema::new("LastOffset", FieldType::Int64, VersionRange::from(0)),
        FieldSchema::new("DeliveryCount", FieldType::Int16, VersionRange::from(0)),
    ],
};

pub static SHARE_FETCH_RESPONSE_PARTITION_DATA: StructSchema = StructSchema {
    name: "PartitionData",
    fields: &[
        FieldSchema::new("PartitionIndex", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("ErrorCode", FieldType::Int16, VersionRange::from(0)),
        FieldSchema::new("ErrorMessage", FieldType::String, VersionRange::from(0))
            .nullable(VersionRange::from(0))
            .default_value(FieldDefault::Null),
        FieldSchema::new("AcknowledgeErrorCode", FieldType::Int16, VersionRange::from(0)),
        FieldSchema::new("AcknowledgeErrorMessage", FieldType::String, VersionRange::from(0))
            .nullable(VersionRange::from(0))
            .default_value(FieldDefault::Null),
        FieldSchema::new("CurrentLeader", FieldType::Struct(&SHARE_FETCH_RESPONSE_LEADER_ID_AND_EPOCH), VersionRange::from(0)),
        FieldSchema::new("Records", FieldType::Records, VersionRange::from(0))
            .nullable(VersionRange::from(0)),
        FieldSchema::new("AcquiredRecords", FieldType::Array(ElementType::Struct(&SHARE_FETCH_RESPONSE_ACQUIRED_RECORDS)), VersionRange::from(0)),
    ],
};

pub static SHARE_FETCH_RESPONSE_SHARE_FETCHABLE_TOPIC_RESPONSE: StructSchema = StructSchema {
    name: "ShareFetchableTopicResponse",
    fields: &[
        FieldSchema::new("TopicId", FieldType::Uuid, VersionRange::from(0)),
        FieldSchema::new("Partitions", FieldType::Array(ElementType::Struct(&SHARE_FETCH_RESPONSE_PARTITION_DATA)), VersionRange::from(0)),
    ],
};

pub static SHARE_FETCH_RESPONSE_NODE_ENDPOINT: StructSchema = StructSchema {
    name: "NodeEndpoint",
    fields: &[
        FieldSchema::new("NodeId", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("Host", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("Port", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("Rack", FieldType::String, VersionRange::from(0))
            .nullable(VersionRange::from(0))
            .default_value(FieldDefault::Null),
    ],
};

pub static SHARE_FETCH_RESPONSE_BODY: StructSchema = StructSchema {
    name: "ShareFetchResponse",
    fields: &[
        FieldSchema::new("ThrottleTimeMs", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("ErrorCode", FieldType::Int16, VersionRange::from(0)),
        FieldSchema::new("ErrorMessage", FieldType::String, VersionRange::from(0))
            .nullable(VersionRange::from(0))
            .default_value(FieldDefault::Null),
        FieldSchema::new("AcquisitionLockTimeoutMs", FieldType::Int32, VersionRange::from(1)),
        FieldSchema::new("Responses", FieldType::Array(ElementType::Struct(&SHARE_FETCH_RESPONSE_SHARE_FETCHABLE_TOPIC_RESPONSE)), VersionRange::from(0)),
        FieldSchema::new("NodeEndpoints", FieldType::Array(ElementType::Struct(&SHARE_FETCH_RESPONSE_NODE_ENDPOINT)), VersionRange::from(0)),
    ],
};

pub static SHARE_FETCH_RESPONSE: MessageSchema = MessageSchema {
    name: "ShareFetchResponse",
    api_key: 78,
    message_type: MessageType::Response,
    valid_versions: VersionRange::new(0, 1),
    flexible_versions: VersionRange::from(0),
    body: &SHARE_FETCH_RESPONSE_BODY,
};

pub static STREAMS_GROUP_DESCRIBE_REQUEST_BODY: StructSchema = StructSchema {
    name: "StreamsGroupDescribeRequest",
    fields: &[
        FieldSchema::new("GroupIds", FieldType::Array(ElementType::String), VersionRange::from(0)),
        FieldSchema::new("IncludeAuthorizedOperations", FieldType::Bool, VersionRange::from(0)),
    ],
};

pub static STREAMS_GROUP_DESCRIBE_REQUEST: MessageSchema = MessageSchema {
    name: "StreamsGroupDescribeRequest",
    api_key: 89,
    message_type: MessageType::Request,
    valid_versions: VersionRange::exact(0),
    flexible_versions: VersionRange::from(0),
    body: &STREAMS_GROUP_DESCRIBE_REQUEST_BODY,
};

pub static STREAMS_GROUP_DESCRIBE_RESPONSE_KEY_VALUE: StructSchema = StructSchema {
    name: "KeyValue",
    fields: &[
        FieldSchema::new("Key", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("Value", FieldType::String, VersionRange::from(0)),
    ],
};

pub static STREAMS_GROUP_DESCRIBE_RESPONSE_TOPIC_INFO: StructSchema = StructSchema {
    name: "TopicInfo",
    fields: &[
        FieldSchema::new("Name", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("Partitions", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("ReplicationFactor", FieldType::Int16, VersionRange::from(0)),
        FieldSchema::new("TopicConfigs", FieldType::Array(ElementType::Struct(&STREAMS_GROUP_DESCRIBE_RESPONSE_KEY_VALUE)), VersionRange::from(0)),
    ],
};

pub static STREAMS_GROUP_DESCRIBE_RESPONSE_SUBTOPOLOGY: StructSchema = StructSchema {
    name: "Subtopology",
    fields: &[
        FieldSchema::new("SubtopologyId", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("SourceTopics", FieldType::Array(ElementType::String), VersionRange::from(0)),
        FieldSchema::new("RepartitionSinkTopics", FieldType::Array(ElementType::String), VersionRange::from(0)),
        FieldSchema::new("StateChangelogTopics", FieldType::Array(ElementType::Struct(&STREAMS_GROUP_DESCRIBE_RESPONSE_TOPIC_INFO)), VersionRange::from(0)),
        FieldSchema::new("RepartitionSourceTopics", FieldType::Array(ElementType::Struct(&STREAMS_GROUP_DESCRIBE_RESPONSE_TOPIC_INFO)), VersionRange::from(0)),
    ],
};

pub static STREAMS_GROUP_DESCRIBE_RESPONSE_TOPOLOGY: StructSchema = StructSchema {
    name: "Topology",
    fields: &[
        FieldSchema::new("Epoch", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("Subtopologies", FieldType::Array(ElementType::Struct(&STREAMS_GROUP_DESCRIBE_RESPONSE_SUBTOPOLOGY)), VersionRange::from(0))
            .nullable(VersionRange::from(0)),
    ],
};

pub static STREAMS_GROUP_DESCRIBE_RESPONSE_ENDPOINT: StructSchema = StructSchema {
    name: "Endpoint",
    fields: &[
        FieldSchema::new("Host", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("Port", FieldType::Uint16, VersionRange::from(0)),
    ],
};

pub static STREAMS_GROUP_DESCRIBE_RESPONSE_TASK_OFFSET: StructSchema = StructSchema {
    name: "TaskOffset",
    fields: &[
        FieldSchema::new("SubtopologyId", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("Partition", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("Offset", FieldType::Int64, VersionRange::from(0)),
    ],
};

pub static STREAMS_GROUP_DESCRIBE_RESPONSE_TASK_IDS: StructSchema = StructSchema {
    name: "TaskIds",
    fields: &[
        FieldSchema::new("SubtopologyId", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("Partitions", FieldType::Array(ElementType::Int32), VersionRange::from(0)),
    ],
};

pub static STREAMS_GROUP_DESCRIBE_RESPONSE_ASSIGNMENT: StructSchema = StructSchema {
    name: "Assignment",
    fields: &[
        FieldSchema::new("ActiveTasks", FieldType::Array(ElementType::Struct(&STREAMS_GROUP_DESCRIBE_RESPONSE_TASK_IDS)), VersionRange::from(0)),
        FieldSchema::new("StandbyTasks", FieldType::Array(ElementType::Struct(&STREAMS_GROUP_DESCRIBE_RESPONSE_TASK_IDS)), VersionRange::from(0)),
        FieldSchema::new("WarmupTasks", FieldType::Array(ElementType::Struct(&STREAMS_GROUP_DESCRIBE_RESPONSE_TASK_IDS)), VersionRange::from(0)),
    ],
};

pub static STREAMS_GROUP_DESCRIBE_RESPONSE_MEMBER: StructSchema = StructSchema {
    name: "Member",
    fields: &[
        FieldSchema::new("MemberId", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("MemberEpoch", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("InstanceId", FieldType::String, VersionRange::from(0))
            .nullable(VersionRange::from(0))
            .default_value(FieldDefault::Null),
        FieldSchema::new("RackId", FieldType::String, VersionRange::from(0))
            .nullable(VersionRange::from(0))
            .default_value(FieldDefault::Null),
        FieldSchema::new("ClientId", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("ClientHost", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("TopologyEpoch", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("ProcessId", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("UserEndpoint", FieldType::Struct(&STREAMS_GROUP_DESCRIBE_RESPONSE_ENDPOINT), VersionRange::from(0))
            .nullable(VersionRange::from(0))
            .default_value(FieldDefault::Null),
        FieldSchema::new("ClientTags", FieldType::Array(ElementType::Struct(&STREAMS_GROUP_DESCRIBE_RESPONSE_KEY_VALUE)), VersionRange::from(0)),
        FieldSchema::new("TaskOffsets", FieldType::Array(ElementType::Struct(&STREAMS_GROUP_DESCRIBE_RESPONSE_TASK_OFFSET)), VersionRange::from(0)),
        FieldSchema::new("TaskEndOffsets", FieldType::Array(ElementType::Struct(&STREAMS_GROUP_DESCRIBE_RESPONSE_TASK_OFFSET)), VersionRange::from(0)),
        FieldSchema::new("Assignment", FieldType::Struct(&STREAMS_GROUP_DESCRIBE_RESPONSE_ASSIGNMENT), VersionRange::from(0)),
        FieldSchema::new("TargetAssignment", FieldType::Struct(&STREAMS_GROUP_DESCRIBE_RESPONSE_ASSIGNMENT), VersionRange::from(0)),
        FieldSchema::new("IsClassic", FieldType::Bool, VersionRange::from(0)),
    ],
};

pub static STREAMS_GROUP_DESCRIBE_RESPONSE_DESCRIBED_GROUP: StructSchema = StructSchema {
    name: "DescribedGroup",
    fields: &[
        FieldSchema::new("ErrorCode", FieldType::Int16, VersionRange::from(0)),
        FieldSchema::new("ErrorMessage", FieldType::String, VersionRange::from(0))
            .nullable(VersionRange::from(0))
            .default_value(FieldDefault::Null),
        FieldSchema::new("GroupId", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("GroupState", FieldType::String, VersionRange::from(0)),
        FieldSchema::new("GroupEpoch", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("AssignmentEpoch", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("Topology", FieldType::Struct(&STREAMS_GROUP_DESCRIBE_RESPONSE_TOPOLOGY), VersionRange::from(0))
            .nullable(VersionRange::from(0))
            .default_value(FieldDefault::Null),
        FieldSchema::new("Members", FieldType::Array(ElementType::Struct(&STREAMS_GROUP_DESCRIBE_RESPONSE_MEMBER)), VersionRange::from(0)),
        FieldSchema::new("AuthorizedOperations", FieldType::Int32, VersionRange::from(0))
            .default_value(FieldDefault::Int(-2147483648)),
    ],
};

pub static STREAMS_GROUP_DESCRIBE_RESPONSE_BODY: StructSchema = StructSchema {
    name: "StreamsGroupDescribeResponse",
    fields: &[
        FieldSchema::new("ThrottleTimeMs", FieldType::Int32, VersionRange::from(0)),
        FieldSchema::new("Groups", FieldType::Array(ElementType::Struct(&STREAMS_GROUP_DESCRIBE_RESPONSE_DESCRIBED_GROUP)), VersionRange::from(0)),
    ],
};

pub static STREAMS_GROUP_DESCRIBE_RESPONSE: MessageSchema = MessageSchema {
    name: "StreamsGroupDescribeResponse",
    api_key: 89,
    message_type: MessageType::Response,
    valid_versions: VersionRange::exact(0),
    flexible_versions: VersionRange::from(0),
    body: &STREAMS_GROUP_DESCRIBE_RESPONSE_BODY,
};
