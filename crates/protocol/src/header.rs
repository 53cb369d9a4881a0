#![forbid(unsafe_code)]

use crate::api_registry;
use crate::codec::{self, Reader};
use crate::messages::VersionedCodec;
use crate::schema::MessageType;
use crate::ProtocolError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestHeader {
    pub api_key: i16,
    pub api_version: i16,
    pub correlation_id: i32,
    pub client_id: Option<String>,
}

impl RequestHeader {
    pub fn write(&self, out: &mut Vec<u8>, header_version: i16) -> Result<(), ProtocolError> {
        ensure_header_version("RequestHeader", header_version, 1, 2)?;
        codec::write_i16(out, self.api_key);
        codec::write_i16(out, self.api_version);
        codec::write_i32(out, self.correlation_id);
        // The client id keeps its legacy int16 prefix in header v2 as well.
        codec::write_nullable_string(out, self.client_id.as_deref(), false)?;
        if header_version >= 2 {
            codec::write_empty_tagged_fields(out);
        }
        Ok(())
    }

    pub fn read(reader: &mut Reader<'_>, header_version: i16) -> Result<Self, ProtocolError> {
        ensure_header_version("RequestHeader", header_version, 1, 2)?;
        let header = Self {
            api_key: reader.read_i16()?,
            api_version: reader.read_i16()?,
            correlation_id: reader.read_i32()?,
            client_id: codec::read_nullable_string(reader, false)?,
        };
        if header_version >= 2 {
            codec::skip_tagged_fields(reader)?;
        }
        Ok(header)
    }

    /// Reads a header whose version is picked from the registered request
    /// descriptor for its api key and version.
    pub fn read_registered(reader: &mut Reader<'_>) -> Result<Self, ProtocolError> {
        let mut peek = reader.clone();
        let api_key = peek.read_i16()?;
        let api_version = peek.read_i16()?;
        let message = api_registry::find_by_api_key(api_key, MessageType::Request)
            .ok_or(ProtocolError::UnknownApi { api_key })?;
        message.ensure_version(api_version)?;
        Self::read(reader, message.request_header_version(api_version))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponseHeader {
    pub correlation_id: i32,
}

impl ResponseHeader {
    pub fn write(&self, out: &mut Vec<u8>, header_version: i16) -> Result<(), ProtocolError> {
        ensure_header_version("ResponseHeader", header_version, 0, 1)?;
        codec::write_i32(out, self.correlation_id);
        if header_version >= 1 {
            codec::write_empty_tagged_fields(out);
        }
        Ok(())
    }

    pub fn read(reader: &mut Reader<'_>, header_version: i16) -> Result<Self, ProtocolError> {
        ensure_header_version("ResponseHeader", header_version, 0, 1)?;
        let header = Self {
            correlation_id: reader.read_i32()?,
        };
        if header_version >= 1 {
            codec::skip_tagged_fields(reader)?;
        }
        Ok(header)
    }
}

fn ensure_header_version(
    api: &'static str,
    version: i16,
    low: i16,
    high: i16,
) -> Result<(), ProtocolError> {
    if version < low || version > high {
        return Err(ProtocolError::InvalidVersion { api, version });
    }
    Ok(())
}

/// Header plus body, unframed.
pub fn encode_request<M: VersionedCodec>(
    correlation_id: i32,
    client_id: Option<&str>,
    version: i16,
    body: &M,
) -> Result<Vec<u8>, ProtocolError> {
    M::message().ensure_version(version)?;
    let header = RequestHeader {
        api_key: M::API_KEY,
        api_version: version,
        correlation_id,
        client_id: client_id.map(str::to_owned),
    };
    let mut out = Vec::new();
    header.write(&mut out, M::request_header_version(version))?;
    body.write(&mut out, version)?;
    Ok(out)
}

/// Decodes a request for `M`, taking the version from the header.
pub fn decode_request<M: VersionedCodec>(
    input: &[u8],
) -> Result<(RequestHeader, M, usize), ProtocolError> {
    let mut reader = Reader::new(input);
    let header = RequestHeader::read_registered(&mut reader)?;
    if header.api_key != M::API_KEY {
        tracing::debug!(
            api_key = header.api_key,
            expected = M::API_KEY,
            "request header names a different api"
        );
        return Err(ProtocolError::ApiKeyMismatch {
            expected: M::API_KEY,
            actual: header.api_key,
        });
    }
    let body = M::read(&mut reader, header.api_version)?;
    Ok((header, body, reader.position()))
}

pub fn encode_response<M: VersionedCodec>(
    correlation_id: i32,
    version: i16,
    body: &M,
) -> Result<Vec<u8>, ProtocolError> {
    M::message().ensure_version(version)?;
    let mut out = Vec::new();
    ResponseHeader { correlation_id }.write(&mut out, M::response_header_version(version))?;
    body.write(&mut out, version)?;
    Ok(out)
}

/// Responses do not carry their version, so the caller supplies the one it
/// sent in the request.
pub fn decode_response<M: VersionedCodec>(
    version: i16,
    input: &[u8],
) -> Result<(ResponseHeader, M, usize), ProtocolError> {
    M::message().ensure_version(version)?;
    let mut reader = Reader::new(input);
    let header = ResponseHeader::read(&mut reader, M::response_header_version(version))?;
    let body = M::read(&mut reader, version)?;
    Ok((header, body, reader.position()))
}

pub fn write_size_prefixed(out: &mut Vec<u8>, payload: &[u8]) -> Result<(), ProtocolError> {
    let len = i32::try_from(payload.len())
        .map_err(|_| ProtocolError::LengthOverflow(payload.len()))?;
    out.reserve(4 + payload.len());
    codec::write_i32(out, len);
    out.extend_from_slice(payload);
    Ok(())
}

/// Returns the framed payload and the bytes consumed including the prefix.
pub fn read_size_prefixed(input: &[u8]) -> Result<(&[u8], usize), ProtocolError> {
    let mut reader = Reader::new(input);
    let len = reader.read_i32()?;
    if len < 0 {
        return Err(ProtocolError::InvalidLength(i64::from(len)));
    }
    let payload = reader.read_exact(len as usize)?;
    Ok((payload, reader.position()))
}
