#![forbid(unsafe_code)]

use kwire_protocol::messages::{
    DescribeShareGroupOffsetsRequest, DescribeShareGroupOffsetsResponse,
    DescribeShareGroupOffsetsResponseGroup, DescribeShareGroupOffsetsResponsePartition,
    DescribeShareGroupOffsetsResponseTopic, DescribeUserScramCredentialsResponse,
    DescribeUserScramCredentialsResponseCredentialInfo, DescribeUserScramCredentialsResponseResult,
    ShareFetchResponse, StreamsGroupDescribeRequest, StreamsGroupDescribeResponse,
    VersionedCodec,
};
use kwire_protocol::ProtocolError;
use uuid::Uuid;

fn assert_decodes_exactly<T>(bytes: &[u8], version: i16, expected: &T)
where
    T: VersionedCodec + core::fmt::Debug + PartialEq,
{
    let (decoded, read) = T::decode(version, bytes).expect("decode");
    assert_eq!(decoded, *expected);
    assert_eq!(read, bytes.len());
}

#[test]
fn describe_user_scram_credentials_response_known_bytes() {
    let response = DescribeUserScramCredentialsResponse {
        throttle_time_ms: 0,
        error_code: 0,
        error_message: None,
        results: vec![DescribeUserScramCredentialsResponseResult {
            user: "u".to_string(),
            error_code: 0,
            error_message: None,
            credential_infos: vec![DescribeUserScramCredentialsResponseCredentialInfo {
                mechanism: 1,
                iterations: 4096,
            }],
        }],
    };
    let expected = vec![
        0x00, 0x00, 0x00, 0x00, // throttle time
        0x00, 0x00, // error code
        0x00, // null error message
        0x02, // one result
        0x02, b'u', // user
        0x00, 0x00, // error code
        0x00, // null error message
        0x02, // one credential
        0x01, // mechanism
        0x00, 0x00, 0x10, 0x00, // iterations
        0x00, // credential tagged fields
        0x00, // result tagged fields
        0x00, // top-level tagged fields
    ];
    assert_eq!(response.encode(0).expect("encode"), expected);
    assert_decodes_exactly(&expected, 0, &response);
}

#[test]
fn share_fetch_response_v1_minimal_known_bytes() {
    let response = ShareFetchResponse {
        acquisition_lock_timeout_ms: 15_000,
        ..ShareFetchResponse::default()
    };
    let expected = vec![
        0x00, 0x00, 0x00, 0x00, // throttle time
        0x00, 0x00, // error code
        0x00, // null error message
        0x00, 0x00, 0x3a, 0x98, // acquisition lock timeout
        0x01, // responses
        0x01, // node endpoints
        0x00, // tagged fields
    ];
    assert_eq!(response.encode(1).expect("encode"), expected);
    assert_decodes_exactly(&expected, 1, &response);

    let mut v0 = expected.clone();
    v0.drain(7..11);
    assert_eq!(
        ShareFetchResponse::default().encode(0).expect("encode v0"),
        v0
    );
}

#[test]
fn describe_share_group_offsets_lag_bytes_depend_on_version() {
    let response = DescribeShareGroupOffsetsResponse {
        throttle_time_ms: 0,
        groups: vec![DescribeShareGroupOffsetsResponseGroup {
            group_id: "g".to_string(),
            topics: vec![DescribeShareGroupOffsetsResponseTopic {
                topic_name: "t".to_string(),
                topic_id: Uuid::from_u128(1),
                partitions: vec![DescribeShareGroupOffsetsResponsePartition {
                    partition_index: 0,
                    start_offset: 5,
                    leader_epoch: 1,
                    lag: 2,
                    error_code: 0,
                    error_message: None,
                }],
            }],
            error_code: 0,
            error_message: None,
        }],
    };

    let mut partition_v1 = vec![
        0x00, 0x00, 0x00, 0x00, // partition index
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x05, // start offset
        0x00, 0x00, 0x00, 0x01, // leader epoch
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, // lag
        0x00, 0x00, // error code
        0x00, // null error message
        0x00, // tagged fields
    ];
    let encoded_v1 = response.encode(1).expect("encode v1");
    assert!(encoded_v1
        .windows(partition_v1.len())
        .any(|window| window == partition_v1.as_slice()));

    partition_v1.drain(16..24);
    let encoded_v0 = response.encode(0).expect("encode v0");
    assert!(encoded_v0
        .windows(partition_v1.len())
        .any(|window| window == partition_v1.as_slice()));
    assert_eq!(encoded_v1.len(), encoded_v0.len() + 8);
}

#[test]
fn nested_unknown_tags_are_skipped_by_typed_decode() {
    let bytes = vec![
        0x02, // one group
        0x03, b's', b'g', // group id
        0x00, // null topics
        0x01, 0x05, 0x01, 0xee, // unknown tag 5 on the group
        0x02, 0x07, 0x00, 0x09, 0x02, 0xaa, 0xbb, // two unknown top-level tags
    ];
    let (decoded, read) = DescribeShareGroupOffsetsRequest::decode(0, &bytes).expect("decode");
    assert_eq!(read, bytes.len());
    assert_eq!(decoded.groups.len(), 1);
    assert_eq!(decoded.groups[0].group_id, "sg");
    assert_eq!(decoded.groups[0].topics, None);

    // Re-encoding through the typed struct drops what it could not name.
    assert_eq!(
        decoded.encode(0).expect("encode"),
        vec![0x02, 0x03, b's', b'g', 0x00, 0x00, 0x00]
    );
}

#[test]
fn compact_array_zero_prefix_is_rejected_where_not_nullable() {
    let err = StreamsGroupDescribeRequest::decode(0, &[0x00, 0x00, 0x00]).expect_err("null array");
    assert_eq!(err, ProtocolError::InvalidLength(-1));
}

#[test]
fn invalid_bool_is_rejected() {
    let err = StreamsGroupDescribeRequest::decode(0, &[0x01, 0x02, 0x00]).expect_err("bool");
    assert_eq!(err, ProtocolError::InvalidBoolean(2));
}

#[test]
fn invalid_utf8_is_rejected() {
    let err = StreamsGroupDescribeRequest::decode(0, &[0x02, 0x02, 0xff, 0x00, 0x00])
        .expect_err("utf8");
    assert_eq!(err, ProtocolError::InvalidString);
}

#[test]
fn invalid_topology_marker_is_rejected() {
    let bytes = vec![
        0x00, 0x00, 0x00, 0x00, // throttle time
        0x02, // one group
        0x00, 0x00, // error code
        0x00, // null error message
        0x02, b'g', // group id
        0x02, b'S', // group state
        0x00, 0x00, 0x00, 0x01, // group epoch
        0x00, 0x00, 0x00, 0x01, // assignment epoch
        0x02, // topology marker
    ];
    let err = StreamsGroupDescribeResponse::decode(0, &bytes).expect_err("marker");
    assert_eq!(err, ProtocolError::InvalidStructMarker(2));
}

#[test]
fn oversized_varint_is_rejected() {
    let err = StreamsGroupDescribeRequest::decode(0, &[0xff, 0xff, 0xff, 0xff, 0xff, 0x01])
        .expect_err("varint");
    assert_eq!(err, ProtocolError::MalformedVarint);
}

#[test]
fn hostile_array_length_fails_without_allocating() {
    // Claims u32::MAX - 1 group ids but carries none.
    let err = StreamsGroupDescribeRequest::decode(0, &[0xff, 0xff, 0xff, 0xff, 0x0f])
        .expect_err("eof");
    assert_eq!(err, ProtocolError::UnexpectedEof);
}
