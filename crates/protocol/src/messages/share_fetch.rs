#![forbid(unsafe_code)]

use bytes::Bytes;
use uuid::Uuid;

use crate::messages::{
    Record, VersionedCodec, SHARE_FETCH_REQUEST, SHARE_FETCH_REQUEST_ACKNOWLEDGEMENT_BATCH,
    SHARE_FETCH_REQUEST_BODY, SHARE_FETCH_REQUEST_FETCH_PARTITION, SHARE_FETCH_REQUEST_FETCH_TOPIC,
    SHARE_FETCH_REQUEST_FORGOTTEN_TOPIC, SHARE_FETCH_RESPONSE,
    SHARE_FETCH_RESPONSE_ACQUIRED_RECORDS, SHARE_FETCH_RESPONSE_BODY,
    SHARE_FETCH_RESPONSE_LEADER_ID_AND_EPOCH, SHARE_FETCH_RESPONSE_NODE_ENDPOINT,
    SHARE_FETCH_RESPONSE_PARTITION_DATA, SHARE_FETCH_RESPONSE_SHARE_FETCHABLE_TOPIC_RESPONSE,
};
use crate::schema::{MessageSchema, StructSchema};
use crate::value::{StructValue, WireValue};
use crate::ProtocolError;

pub const SHARE_FETCH_API_KEY: i16 = 78;
pub const SHARE_FETCH_MIN_VERSION: i16 = 0;
pub const SHARE_FETCH_MAX_VERSION: i16 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct ShareFetchRequest {
    pub group_id: Option<String>,
    pub member_id: Option<String>,
    pub share_session_epoch: i32,
    pub max_wait_ms: i32,
    pub min_bytes: i32,
    pub max_bytes: i32,
    /// Version 1+.
    pub max_records: i32,
    /// Version 1+.
    pub batch_size: i32,
    pub topics: Vec<ShareFetchRequestFetchTopic>,
    pub forgotten_topics_data: Vec<ShareFetchRequestForgottenTopic>,
}

impl Default for ShareFetchRequest {
    fn default() -> Self {
        Self {
            group_id: None,
            member_id: None,
            share_session_epoch: 0,
            max_wait_ms: 0,
            min_bytes: 0,
            max_bytes: i32::MAX,
            max_records: 0,
            batch_size: 0,
            topics: Vec::new(),
            forgotten_topics_data: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShareFetchRequestFetchTopic {
    pub topic_id: Uuid,
    pub partitions: Vec<ShareFetchRequestFetchPartition>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShareFetchRequestFetchPartition {
    pub partition_index: i32,
    /// Version 0 only.
    pub partition_max_bytes: i32,
    pub acknowledgement_batches: Vec<ShareFetchRequestAcknowledgementBatch>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShareFetchRequestAcknowledgementBatch {
    pub first_offset: i64,
    pub last_offset: i64,
    /// 0 = gap, 1 = accept, 2 = release, 3 = reject.
    pub acknowledge_types: Vec<i8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShareFetchRequestForgottenTopic {
    pub topic_id: Uuid,
    pub partitions: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShareFetchResponse {
    pub throttle_time_ms: i32,
    pub error_code: i16,
    pub error_message: Option<String>,
    /// Version 1+.
    pub acquisition_lock_timeout_ms: i32,
    pub responses: Vec<ShareFetchResponseTopic>,
    pub node_endpoints: Vec<ShareFetchResponseNodeEndpoint>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShareFetchResponseTopic {
    pub topic_id: Uuid,
    pub partitions: Vec<ShareFetchResponsePartitionData>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShareFetchResponsePartitionData {
    pub partition_index: i32,
    pub error_code: i16,
    pub error_message: Option<String>,
    pub acknowledge_error_code: i16,
    pub acknowledge_error_message: Option<String>,
    pub current_leader: ShareFetchResponseLeaderIdAndEpoch,
    pub records: Option<Bytes>,
    pub acquired_records: Vec<ShareFetchResponseAcquiredRecords>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareFetchResponseLeaderIdAndEpoch {
    pub leader_id: i32,
    pub leader_epoch: i32,
}

impl Default for ShareFetchResponseLeaderIdAndEpoch {
    fn default() -> Self {
        Self {
            leader_id: -1,
            leader_epoch: -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShareFetchResponseAcquiredRecords {
    pub first_offset: i64,
    pub last_offset: i64,
    pub delivery_count: i16,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShareFetchResponseNodeEndpoint {
    pub node_id: i32,
    pub host: String,
    pub port: i32,
    pub rack: Option<String>,
}

record_wire_value!(
    ShareFetchRequestFetchTopic,
    ShareFetchRequestFetchPartition,
    ShareFetchRequestAcknowledgementBatch,
    ShareFetchRequestForgottenTopic,
    ShareFetchResponseTopic,
    ShareFetchResponsePartitionData,
    ShareFetchResponseLeaderIdAndEpoch,
    ShareFetchResponseAcquiredRecords,
    ShareFetchResponseNodeEndpoint,
);

impl Record for ShareFetchRequest {
    fn schema() -> &'static StructSchema {
        &SHARE_FETCH_REQUEST_BODY
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.group_id.to_value(),
            self.member_id.to_value(),
            self.share_session_epoch.to_value(),
            self.max_wait_ms.to_value(),
            self.min_bytes.to_value(),
            self.max_bytes.to_value(),
            self.max_records.to_value(),
            self.batch_size.to_value(),
            self.topics.to_value(),
            self.forgotten_topics_data.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            group_id: fields.next("GroupId")?,
            member_id: fields.next("MemberId")?,
            share_session_epoch: fields.next("ShareSessionEpoch")?,
            max_wait_ms: fields.next("MaxWaitMs")?,
            min_bytes: fields.next("MinBytes")?,
            max_bytes: fields.next("MaxBytes")?,
            max_records: fields.next("MaxRecords")?,
            batch_size: fields.next("BatchSize")?,
            topics: fields.next("Topics")?,
            forgotten_topics_data: fields.next("ForgottenTopicsData")?,
        })
    }
}

impl Record for ShareFetchRequestFetchTopic {
    fn schema() -> &'static StructSchema {
        &SHARE_FETCH_REQUEST_FETCH_TOPIC
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![self.topic_id.to_value(), self.partitions.to_value()])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            topic_id: fields.next("TopicId")?,
            partitions: fields.next("Partitions")?,
        })
    }
}

impl Record for ShareFetchRequestFetchPartition {
    fn schema() -> &'static StructSchema {
        &SHARE_FETCH_REQUEST_FETCH_PARTITION
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.partition_index.to_value(),
            self.partition_max_bytes.to_value(),
            self.acknowledgement_batches.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            partition_index: fields.next("PartitionIndex")?,
            partition_max_bytes: fields.next("PartitionMaxBytes")?,
            acknowledgement_batches: fields.next("AcknowledgementBatches")?,
        })
    }
}

impl Record for ShareFetchRequestAcknowledgementBatch {
    fn schema() -> &'static StructSchema {
        &SHARE_FETCH_REQUEST_ACKNOWLEDGEMENT_BATCH
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.first_offset.to_value(),
            self.last_offset.to_value(),
            self.acknowledge_types.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            first_offset: fields.next("FirstOffset")?,
            last_offset: fields.next("LastOffset")?,
            acknowledge_types: fields.next("AcknowledgeTypes")?,
        })
    }
}

impl Record for ShareFetchRequestForgottenTopic {
    fn schema() -> &'static StructSchema {
        &SHARE_FETCH_REQUEST_FORGOTTEN_TOPIC
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![self.topic_id.to_value(), self.partitions.to_value()])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            topic_id: fields.next("TopicId")?,
            partitions: fields.next("Partitions")?,
        })
    }
}

impl Record for ShareFetchResponse {
    fn schema() -> &'static StructSchema {
        &SHARE_FETCH_RESPONSE_BODY
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.throttle_time_ms.to_value(),
            self.error_code.to_value(),
            self.error_message.to_value(),
            self.acquisition_lock_timeout_ms.to_value(),
            self.responses.to_value(),
            self.node_endpoints.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            throttle_time_ms: fields.next("ThrottleTimeMs")?,
            error_code: fields.next("ErrorCode")?,
            error_message: fields.next("ErrorMessage")?,
            acquisition_lock_timeout_ms: fields.next("AcquisitionLockTimeoutMs")?,
            responses: fields.next("Responses")?,
            node_endpoints: fields.next("NodeEndpoints")?,
        })
    }
}

impl Record for ShareFetchResponseTopic {
    fn schema() -> &'static StructSchema {
        &SHARE_FETCH_RESPONSE_SHARE_FETCHABLE_TOPIC_RESPONSE
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![self.topic_id.to_value(), self.partitions.to_value()])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            topic_id: fields.next("TopicId")?,
            partitions: fields.next("Partitions")?,
        })
    }
}

impl Record for ShareFetchResponsePartitionData {
    fn schema() -> &'static StructSchema {
        &SHARE_FETCH_RESPONSE_PARTITION_DATA
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.partition_index.to_value(),
            self.error_code.to_value(),
            self.error_message.to_value(),
            self.acknowledge_error_code.to_value(),
            self.acknowledge_error_message.to_value(),
            self.current_leader.to_value(),
            self.records.to_value(),
            self.acquired_records.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            partition_index: fields.next("PartitionIndex")?,
            error_code: fields.next("ErrorCode")?,
            error_message: fields.next("ErrorMessage")?,
            acknowledge_error_code: fields.next("AcknowledgeErrorCode")?,
            acknowledge_error_message: fields.next("AcknowledgeErrorMessage")?,
            current_leader: fields.next("CurrentLeader")?,
            records: fields.next("Records")?,
            acquired_records: fields.next("AcquiredRecords")?,
        })
    }
}

impl Record for ShareFetchResponseLeaderIdAndEpoch {
    fn schema() -> &'static StructSchema {
        &SHARE_FETCH_RESPONSE_LEADER_ID_AND_EPOCH
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![self.leader_id.to_value(), self.leader_epoch.to_value()])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            leader_id: fields.next("LeaderId")?,
            leader_epoch: fields.next("LeaderEpoch")?,
        })
    }
}

impl Record for ShareFetchResponseAcquiredRecords {
    fn schema() -> &'static StructSchema {
        &SHARE_FETCH_RESPONSE_ACQUIRED_RECORDS
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.first_offset.to_value(),
            self.last_offset.to_value(),
            self.delivery_count.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            first_offset: fields.next("FirstOffset")?,
            last_offset: fields.next("LastOffset")?,
            delivery_count: fields.next("DeliveryCount")?,
        })
    }
}

impl Record for ShareFetchResponseNodeEndpoint {
    fn schema() -> &'static StructSchema {
        &SHARE_FETCH_RESPONSE_NODE_ENDPOINT
    }

    fn to_struct(&self) -> StructValue {
        StructValue::new(vec![
            self.node_id.to_value(),
            self.host.to_value(),
            self.port.to_value(),
            self.rack.to_value(),
        ])
    }

    fn from_struct(value: StructValue) -> Result<Self, ProtocolError> {
        let mut fields = value.into_fields();
        Ok(Self {
            node_id: fields.next("NodeId")?,
            host: fields.next("Host")?,
            port: fields.next("Port")?,
            rack: fields.next("Rack")?,
        })
    }
}

impl VersionedCodec for ShareFetchRequest {
    const API_NAME: &'static str = "ShareFetchRequest";
    const API_KEY: i16 = SHARE_FETCH_API_KEY;
    const MIN_VERSION: i16 = SHARE_FETCH_MIN_VERSION;
    const MAX_VERSION: i16 = SHARE_FETCH_MAX_VERSION;

    fn message() -> &'static MessageSchema {
        &SHARE_FETCH_REQUEST
    }
}

impl VersionedCodec for ShareFetchResponse {
    const API_NAME: &'static str = "ShareFetchResponse";
    const API_KEY: i16 = SHARE_FETCH_API_KEY;
    const MIN_VERSION: i16 = SHARE_FETCH_MIN_VERSION;
    const MAX_VERSION: i16 = SHARE_FETCH_MAX_VERSION;

    fn message() -> &'static MessageSchema {
        &SHARE_FETCH_RESPONSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic_id() -> Uuid {
        Uuid::from_u128(0x0011_2233_4455_6677_8899_aabb_ccdd_eeff)
    }

    fn sample_request() -> ShareFetchRequest {
        ShareFetchRequest {
            group_id: Some("share-group".to_string()),
            member_id: Some("member-1".to_string()),
            share_session_epoch: 3,
            max_wait_ms: 500,
            min_bytes: 1,
            max_bytes: 1 << 20,
            max_records: 500,
            batch_size: 100,
            topics: vec![ShareFetchRequestFetchTopic {
                topic_id: topic_id(),
                partitions: vec![ShareFetchRequestFetchPartition {
                    partition_index: 2,
                    partition_max_bytes: 0,
                    acknowledgement_batches: vec![ShareFetchRequestAcknowledgementBatch {
                        first_offset: 100,
                        last_offset: 102,
                        acknowledge_types: vec![1, 1, 2],
                    }],
                }],
            }],
            forgotten_topics_data: vec![ShareFetchRequestForgottenTopic {
                topic_id: Uuid::from_u128(7),
                partitions: vec![0, 1],
            }],
        }
    }

    #[test]
    fn request_v1_minimal_known_bytes() {
        let request = ShareFetchRequest {
            group_id: Some("g".to_string()),
            member_id: None,
            max_wait_ms: 500,
            min_bytes: 1,
            max_records: 100,
            batch_size: 10,
            ..ShareFetchRequest::default()
        };
        let encoded = request.encode(1).expect("encode");
        assert_eq!(
            encoded,
            vec![
                0x02, b'g', // group id
                0x00, // null member id
                0x00, 0x00, 0x00, 0x00, // share session epoch
                0x00, 0x00, 0x01, 0xf4, // max wait ms
                0x00, 0x00, 0x00, 0x01, // min bytes
                0x7f, 0xff, 0xff, 0xff, // max bytes
                0x00, 0x00, 0x00, 0x64, // max records
                0x00, 0x00, 0x00, 0x0a, // batch size
                0x01, // topics
                0x01, // forgotten topics
                0x00, // tagged fields
            ]
        );
    }

    #[test]
    fn request_roundtrip_at_max_version() {
        let request = sample_request();
        let encoded = request.encode(SHARE_FETCH_MAX_VERSION).expect("encode");
        let (decoded, read) =
            ShareFetchRequest::decode(SHARE_FETCH_MAX_VERSION, &encoded).expect("decode");
        assert_eq!(decoded, request);
        assert_eq!(read, encoded.len());
    }

    #[test]
    fn request_fields_follow_version_ranges() {
        let mut request = sample_request();
        request.topics[0].partitions[0].partition_max_bytes = 65_536;

        let v0 = request.encode(0).expect("encode v0");
        let (decoded_v0, _) = ShareFetchRequest::decode(0, &v0).expect("decode v0");
        assert_eq!(decoded_v0.topics[0].partitions[0].partition_max_bytes, 65_536);
        assert_eq!(decoded_v0.max_records, 0);
        assert_eq!(decoded_v0.batch_size, 0);

        let v1 = request.encode(1).expect("encode v1");
        let (decoded_v1, _) = ShareFetchRequest::decode(1, &v1).expect("decode v1");
        assert_eq!(decoded_v1.topics[0].partitions[0].partition_max_bytes, 0);
        assert_eq!(decoded_v1.max_records, 500);
        assert_eq!(decoded_v1.batch_size, 100);

        // v0 carries the per-partition limit, v1 the two request-level limits.
        assert_eq!(v1.len(), v0.len() + 4);
    }

    #[test]
    fn response_roundtrip_at_max_version() {
        let response = ShareFetchResponse {
            throttle_time_ms: 0,
            error_code: 0,
            error_message: None,
            acquisition_lock_timeout_ms: 30_000,
            responses: vec![ShareFetchResponseTopic {
                topic_id: topic_id(),
                partitions: vec![
                    ShareFetchResponsePartitionData {
                        partition_index: 0,
                        error_code: 0,
                        error_message: None,
                        acknowledge_error_code: 0,
                        acknowledge_error_message: None,
                        current_leader: ShareFetchResponseLeaderIdAndEpoch {
                            leader_id: 1,
                            leader_epoch: 5,
                        },
                        records: Some(Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef])),
                        acquired_records: vec![ShareFetchResponseAcquiredRecords {
                            first_offset: 100,
                            last_offset: 199,
                            delivery_count: 1,
                        }],
                    },
                    ShareFetchResponsePartitionData {
                        partition_index: 1,
                        error_code: 6,
                        error_message: Some("not leader".to_string()),
                        acknowledge_error_code: 6,
                        acknowledge_error_message: Some("not leader".to_string()),
                        current_leader: ShareFetchResponseLeaderIdAndEpoch::default(),
                        records: None,
                        acquired_records: vec![],
                    },
                ],
            }],
            node_endpoints: vec![ShareFetchResponseNodeEndpoint {
                node_id: 1,
                host: "broker-1".to_string(),
                port: 9092,
                rack: Some("rack-a".to_string()),
            }],
        };

        let encoded = response.encode(SHARE_FETCH_MAX_VERSION).expect("encode");
        let (decoded, read) =
            ShareFetchResponse::decode(SHARE_FETCH_MAX_VERSION, &encoded).expect("decode");
        assert_eq!(decoded, response);
        assert_eq!(read, encoded.len());

        let (decoded_v0, _) = ShareFetchResponse::decode(
            0,
            &response.encode(0).expect("encode v0"),
        )
        .expect("decode v0");
        assert_eq!(decoded_v0.acquisition_lock_timeout_ms, 0);
        assert_eq!(decoded_v0.responses, response.responses);
    }

    #[test]
    fn null_and_empty_records_are_distinct() {
        let mut partition = ShareFetchResponsePartitionData::default();
        let null_records = partition.to_struct();
        partition.records = Some(Bytes::new());
        let empty_records = partition.to_struct();

        let schema = &SHARE_FETCH_RESPONSE_PARTITION_DATA;
        let mut null_out = Vec::new();
        crate::engine::write_struct(&mut null_out, schema, &null_records, 1, true)
            .expect("encode null");
        let mut empty_out = Vec::new();
        crate::engine::write_struct(&mut empty_out, schema, &empty_records, 1, true)
            .expect("encode empty");
        assert_ne!(null_out, empty_out);
        assert_eq!(null_out.len(), empty_out.len());
    }

    #[test]
    fn default_leader_is_unknown() {
        let leader = ShareFetchResponseLeaderIdAndEpoch::default();
        assert_eq!((leader.leader_id, leader.leader_epoch), (-1, -1));
        assert_eq!(
            leader.to_struct(),
            StructValue::defaults(&SHARE_FETCH_RESPONSE_LEADER_ID_AND_EPOCH)
        );
        assert_eq!(ShareFetchRequest::default().max_bytes, 0x7fff_ffff);
    }

    #[test]
    fn version_two_is_rejected() {
        let err = ShareFetchResponse::default().encode(2).expect_err("version");
        assert_eq!(
            err,
            ProtocolError::InvalidVersion {
                api: "ShareFetchResponse",
                version: 2
            }
        );
        assert!(ShareFetchRequest::decode(2, &[]).is_err());
    }
}
