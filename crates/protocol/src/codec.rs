#![forbid(unsafe_code)]

use bytes::Bytes;
use uuid::Uuid;

use crate::ProtocolError;

/// A tagged field carried through a struct without knowing its schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawTaggedField {
    pub tag: u32,
    pub data: Bytes,
}

impl RawTaggedField {
    pub fn new(tag: u32, data: impl Into<Bytes>) -> Self {
        Self {
            tag,
            data: data.into(),
        }
    }
}

pub fn write_i8(out: &mut Vec<u8>, value: i8) {
    out.push(value as u8);
}

pub fn write_i16(out: &mut Vec<u8>, value: i16) {
    out.extend_from_slice(&value.to_be_bytes());
}

pub fn write_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

pub fn write_i32(out: &mut Vec<u8>, value: i32) {
    out.extend_from_slice(&value.to_be_bytes());
}

pub fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

pub fn write_i64(out: &mut Vec<u8>, value: i64) {
    out.extend_from_slice(&value.to_be_bytes());
}

pub fn write_f64(out: &mut Vec<u8>, value: f64) {
    out.extend_from_slice(&value.to_be_bytes());
}

pub fn write_bool(out: &mut Vec<u8>, value: bool) {
    out.push(u8::from(value));
}

pub fn write_uuid(out: &mut Vec<u8>, value: &Uuid) {
    out.extend_from_slice(value.as_bytes());
}

pub fn write_uvarint(out: &mut Vec<u8>, mut value: u32) {
    while value >= 0x80 {
        out.push(((value & 0x7f) as u8) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

pub fn write_uvarlong(out: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        out.push(((value & 0x7f) as u8) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

fn checked_len_to_u32(len: usize) -> Result<u32, ProtocolError> {
    u32::try_from(len)
        .ok()
        .and_then(|len| len.checked_add(1).map(|_| len))
        .ok_or(ProtocolError::LengthOverflow(len))
}

fn checked_len_to_i32(len: usize) -> Result<i32, ProtocolError> {
    i32::try_from(len).map_err(|_| ProtocolError::LengthOverflow(len))
}

fn checked_len_to_i16(len: usize) -> Result<i16, ProtocolError> {
    i16::try_from(len).map_err(|_| ProtocolError::LengthOverflow(len))
}

/// Writes a compact length prefix: `len + 1`, leaving 0 for null.
fn write_compact_len(out: &mut Vec<u8>, len: usize) -> Result<(), ProtocolError> {
    let len = checked_len_to_u32(len)?;
    write_uvarint(out, len + 1);
    Ok(())
}

pub fn write_string(out: &mut Vec<u8>, value: &str, flexible: bool) -> Result<(), ProtocolError> {
    let bytes = value.as_bytes();
    if flexible {
        write_compact_len(out, bytes.len())?;
    } else {
        write_i16(out, checked_len_to_i16(bytes.len())?);
    }
    out.extend_from_slice(bytes);
    Ok(())
}

pub fn write_nullable_string(
    out: &mut Vec<u8>,
    value: Option<&str>,
    flexible: bool,
) -> Result<(), ProtocolError> {
    match value {
        Some(value) => write_string(out, value, flexible),
        None => {
            if flexible {
                write_uvarint(out, 0);
            } else {
                write_i16(out, -1);
            }
            Ok(())
        }
    }
}

pub fn write_bytes(out: &mut Vec<u8>, value: &[u8], flexible: bool) -> Result<(), ProtocolError> {
    if flexible {
        write_compact_len(out, value.len())?;
    } else {
        write_i32(out, checked_len_to_i32(value.len())?);
    }
    out.extend_from_slice(value);
    Ok(())
}

pub fn write_nullable_bytes(
    out: &mut Vec<u8>,
    value: Option<&[u8]>,
    flexible: bool,
) -> Result<(), ProtocolError> {
    match value {
        Some(bytes) => write_bytes(out, bytes, flexible),
        None => {
            if flexible {
                write_uvarint(out, 0);
            } else {
                write_i32(out, -1);
            }
            Ok(())
        }
    }
}

pub fn write_array_len(out: &mut Vec<u8>, len: usize, flexible: bool) -> Result<(), ProtocolError> {
    if flexible {
        return write_compact_len(out, len);
    }
    write_i32(out, checked_len_to_i32(len)?);
    Ok(())
}

pub fn write_nullable_array_len(
    out: &mut Vec<u8>,
    len: Option<usize>,
    flexible: bool,
) -> Result<(), ProtocolError> {
    match len {
        Some(len) => write_array_len(out, len, flexible),
        None => {
            if flexible {
                write_uvarint(out, 0);
            } else {
                write_i32(out, -1);
            }
            Ok(())
        }
    }
}

pub fn write_array<T, F>(
    out: &mut Vec<u8>,
    items: &[T],
    flexible: bool,
    mut write_item: F,
) -> Result<(), ProtocolError>
where
    F: FnMut(&mut Vec<u8>, &T) -> Result<(), ProtocolError>,
{
    write_array_len(out, items.len(), flexible)?;
    for item in items {
        write_item(out, item)?;
    }
    Ok(())
}

pub fn write_nullable_array<T, F>(
    out: &mut Vec<u8>,
    items: Option<&[T]>,
    flexible: bool,
    write_item: F,
) -> Result<(), ProtocolError>
where
    F: FnMut(&mut Vec<u8>, &T) -> Result<(), ProtocolError>,
{
    match items {
        Some(items) => write_array(out, items, flexible, write_item),
        None => write_nullable_array_len(out, None, flexible),
    }
}

/// Writes a tagged-field section. Entries must not repeat a tag; they are
/// emitted in ascending tag order regardless of input order.
pub fn write_tagged_fields(
    out: &mut Vec<u8>,
    tagged_fields: &[RawTaggedField],
) -> Result<(), ProtocolError> {
    let mut ordered = tagged_fields.iter().collect::<Vec<_>>();
    ordered.sort_by_key(|field| field.tag);
    write_uvarint(out, checked_len_to_u32(ordered.len())?);
    for field in ordered {
        write_uvarint(out, field.tag);
        write_uvarint(out, checked_len_to_u32(field.data.len())?);
        out.extend_from_slice(&field.data);
    }
    Ok(())
}

pub fn write_empty_tagged_fields(out: &mut Vec<u8>) {
    write_uvarint(out, 0);
}

#[derive(Debug, Clone)]
pub struct Reader<'a> {
    input: &'a [u8],
    cursor: usize,
}

impl<'a> Reader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, cursor: 0 }
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.input.len().saturating_sub(self.cursor)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_exact(&mut self, len: usize) -> Result<&'a [u8], ProtocolError> {
        if self.remaining() < len {
            return Err(ProtocolError::UnexpectedEof);
        }
        let start = self.cursor;
        self.cursor += len;
        Ok(&self.input[start..self.cursor])
    }

    fn read_array_of<const N: usize>(&mut self) -> Result<[u8; N], ProtocolError> {
        let bytes = self.read_exact(N)?;
        let mut buf = [0_u8; N];
        buf.copy_from_slice(bytes);
        Ok(buf)
    }

    pub fn read_i8(&mut self) -> Result<i8, ProtocolError> {
        Ok(self.read_exact(1)?[0] as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16, ProtocolError> {
        Ok(i16::from_be_bytes(self.read_array_of()?))
    }

    pub fn read_u16(&mut self) -> Result<u16, ProtocolError> {
        Ok(u16::from_be_bytes(self.read_array_of()?))
    }

    pub fn read_i32(&mut self) -> Result<i32, ProtocolError> {
        Ok(i32::from_be_bytes(self.read_array_of()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, ProtocolError> {
        Ok(u32::from_be_bytes(self.read_array_of()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, ProtocolError> {
        Ok(i64::from_be_bytes(self.read_array_of()?))
    }

    pub fn read_f64(&mut self) -> Result<f64, ProtocolError> {
        Ok(f64::from_be_bytes(self.read_array_of()?))
    }

    pub fn read_bool(&mut self) -> Result<bool, ProtocolError> {
        match self.read_exact(1)?[0] {
            0 => Ok(false),
            1 => Ok(true),
            invalid => Err(ProtocolError::InvalidBoolean(invalid)),
        }
    }

    pub fn read_uuid(&mut self) -> Result<Uuid, ProtocolError> {
        Ok(Uuid::from_bytes(self.read_array_of()?))
    }

    pub fn read_uvarint(&mut self) -> Result<u32, ProtocolError> {
        let mut value = 0_u32;
        for i in 0..5 {
            let byte = self.read_exact(1)?[0];
            if i == 4 && (byte & 0xf0) != 0 {
                return Err(ProtocolError::MalformedVarint);
            }
            value |= ((byte & 0x7f) as u32) << (7 * i);
            if (byte & 0x80) == 0 {
                return Ok(value);
            }
        }
        Err(ProtocolError::MalformedVarint)
    }

    pub fn read_uvarlong(&mut self) -> Result<u64, ProtocolError> {
        let mut value = 0_u64;
        for i in 0..10 {
            let byte = self.read_exact(1)?[0];
            if i == 9 && (byte & 0xfe) != 0 {
                return Err(ProtocolError::MalformedVarlong);
            }
            value |= ((byte & 0x7f) as u64) << (7 * i);
            if (byte & 0x80) == 0 {
                return Ok(value);
            }
        }
        Err(ProtocolError::MalformedVarlong)
    }

    /// Reads a length prefix and returns the logical length, `None` for null.
    fn read_len(&mut self, flexible: bool, legacy_width: LegacyWidth) -> Result<Option<usize>, ProtocolError> {
        let len = if flexible {
            i64::from(self.read_uvarint()?) - 1
        } else {
            match legacy_width {
                LegacyWidth::Int16 => i64::from(self.read_i16()?),
                LegacyWidth::Int32 => i64::from(self.read_i32()?),
            }
        };
        match len {
            -1 => Ok(None),
            len if len < -1 => Err(ProtocolError::InvalidLength(len)),
            len => usize::try_from(len)
                .map(Some)
                .map_err(|_| ProtocolError::InvalidLength(len)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum LegacyWidth {
    Int16,
    Int32,
}

fn read_utf8_string(reader: &mut Reader<'_>, len: usize) -> Result<String, ProtocolError> {
    let bytes = reader.read_exact(len)?;
    String::from_utf8(bytes.to_vec()).map_err(|_| ProtocolError::InvalidString)
}

pub fn read_string(reader: &mut Reader<'_>, flexible: bool) -> Result<String, ProtocolError> {
    read_nullable_string(reader, flexible)?.ok_or(ProtocolError::InvalidLength(-1))
}

pub fn read_nullable_string(
    reader: &mut Reader<'_>,
    flexible: bool,
) -> Result<Option<String>, ProtocolError> {
    match reader.read_len(flexible, LegacyWidth::Int16)? {
        Some(len) => Ok(Some(read_utf8_string(reader, len)?)),
        None => Ok(None),
    }
}

pub fn read_bytes(reader: &mut Reader<'_>, flexible: bool) -> Result<Bytes, ProtocolError> {
    read_nullable_bytes(reader, flexible)?.ok_or(ProtocolError::InvalidLength(-1))
}

pub fn read_nullable_bytes(
    reader: &mut Reader<'_>,
    flexible: bool,
) -> Result<Option<Bytes>, ProtocolError> {
    match reader.read_len(flexible, LegacyWidth::Int32)? {
        Some(len) => Ok(Some(Bytes::copy_from_slice(reader.read_exact(len)?))),
        None => Ok(None),
    }
}

pub fn read_array_len(reader: &mut Reader<'_>, flexible: bool) -> Result<usize, ProtocolError> {
    read_nullable_array_len(reader, flexible)?.ok_or(ProtocolError::InvalidLength(-1))
}

pub fn read_nullable_array_len(
    reader: &mut Reader<'_>,
    flexible: bool,
) -> Result<Option<usize>, ProtocolError> {
    reader.read_len(flexible, LegacyWidth::Int32)
}

pub fn read_array<'a, T, F>(
    reader: &mut Reader<'a>,
    flexible: bool,
    read_item: F,
) -> Result<Vec<T>, ProtocolError>
where
    F: FnMut(&mut Reader<'a>) -> Result<T, ProtocolError>,
{
    read_nullable_array(reader, flexible, read_item)?.ok_or(ProtocolError::InvalidLength(-1))
}

pub fn read_nullable_array<'a, T, F>(
    reader: &mut Reader<'a>,
    flexible: bool,
    mut read_item: F,
) -> Result<Option<Vec<T>>, ProtocolError>
where
    F: FnMut(&mut Reader<'a>) -> Result<T, ProtocolError>,
{
    let Some(len) = read_nullable_array_len(reader, flexible)? else {
        return Ok(None);
    };
    let mut items = Vec::with_capacity(preallocation_cap::<T>(len, reader.remaining()));
    for _ in 0..len {
        items.push(read_item(reader)?);
    }
    Ok(Some(items))
}

/// Element count to reserve for an array of `len` items so the reservation
/// never exceeds the `remaining` input bytes, whatever the element size.
fn preallocation_cap<T>(len: usize, remaining: usize) -> usize {
    len.min(remaining / std::mem::size_of::<T>().max(1))
}

/// Reads a tagged-field section, handing every `(tag, payload)` pair to
/// `on_field`. The payload is consumed whether or not the handler uses it.
pub fn read_tagged_fields<'a, F>(reader: &mut Reader<'a>, mut on_field: F) -> Result<(), ProtocolError>
where
    F: FnMut(u32, &'a [u8]) -> Result<(), ProtocolError>,
{
    let field_count = reader.read_uvarint()?;
    for _ in 0..field_count {
        let tag = reader.read_uvarint()?;
        let size = reader.read_uvarint()?;
        let size = usize::try_from(size).map_err(|_| ProtocolError::InvalidLength(i64::from(size)))?;
        let payload = reader.read_exact(size)?;
        on_field(tag, payload)?;
    }
    Ok(())
}

pub fn skip_tagged_fields(reader: &mut Reader<'_>) -> Result<(), ProtocolError> {
    read_tagged_fields(reader, |tag, payload| {
        tracing::trace!(tag, size = payload.len(), "skipping tagged field");
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uvarint(value: u32) -> Vec<u8> {
        let mut out = Vec::new();
        write_uvarint(&mut out, value);
        out
    }

    #[test]
    fn uvarint_known_vectors() {
        assert_eq!(uvarint(0), vec![0x00]);
        assert_eq!(uvarint(1), vec![0x01]);
        assert_eq!(uvarint(127), vec![0x7f]);
        assert_eq!(uvarint(128), vec![0x80, 0x01]);
        assert_eq!(uvarint(300), vec![0xac, 0x02]);
        assert_eq!(uvarint(u32::MAX), vec![0xff, 0xff, 0xff, 0xff, 0x0f]);
    }

    #[test]
    fn uvarint_boundaries_roundtrip() {
        for value in [0, 1, 127, 128, 16_383, 16_384, 2_097_151, 2_097_152, u32::MAX] {
            let encoded = uvarint(value);
            let mut reader = Reader::new(&encoded);
            assert_eq!(reader.read_uvarint().expect("decode"), value);
            assert!(reader.is_empty());
        }
    }

    #[test]
    fn uvarint_rejects_sixth_byte() {
        let bytes = [0x80_u8, 0x80, 0x80, 0x80, 0x80, 0x01];
        let err = Reader::new(&bytes).read_uvarint().expect_err("too long");
        assert_eq!(err, ProtocolError::MalformedVarint);
    }

    #[test]
    fn uvarint_rejects_truncated_input() {
        let err = Reader::new(&[0xff, 0xff]).read_uvarint().expect_err("eof");
        assert_eq!(err, ProtocolError::UnexpectedEof);
    }

    #[test]
    fn compact_string_null_and_empty_are_distinct() {
        let mut null = Vec::new();
        write_nullable_string(&mut null, None, true).expect("null");
        assert_eq!(null, vec![0x00]);

        let mut empty = Vec::new();
        write_nullable_string(&mut empty, Some(""), true).expect("empty");
        assert_eq!(empty, vec![0x01]);

        assert_eq!(
            read_nullable_string(&mut Reader::new(&null), true).expect("decode"),
            None
        );
        assert_eq!(
            read_nullable_string(&mut Reader::new(&empty), true).expect("decode"),
            Some(String::new())
        );
    }

    #[test]
    fn compact_string_known_bytes() {
        let mut out = Vec::new();
        write_string(&mut out, "kafka", true).expect("encode");
        assert_eq!(out, vec![0x06, b'k', b'a', b'f', b'k', b'a']);
        let mut reader = Reader::new(&out);
        assert_eq!(read_string(&mut reader, true).expect("decode"), "kafka");
        assert!(reader.is_empty());
    }

    #[test]
    fn legacy_string_uses_int16_prefix() {
        let mut out = Vec::new();
        write_string(&mut out, "ab", false).expect("encode");
        write_nullable_string(&mut out, None, false).expect("encode null");
        assert_eq!(out, vec![0x00, 0x02, b'a', b'b', 0xff, 0xff]);

        let mut reader = Reader::new(&out);
        assert_eq!(read_string(&mut reader, false).expect("decode"), "ab");
        assert_eq!(read_nullable_string(&mut reader, false).expect("null"), None);
    }

    #[test]
    fn non_nullable_string_rejects_null_prefix() {
        let err = read_string(&mut Reader::new(&[0x00]), true).expect_err("null");
        assert_eq!(err, ProtocolError::InvalidLength(-1));
        let err = read_string(&mut Reader::new(&[0xff, 0xfe]), false).expect_err("negative");
        assert_eq!(err, ProtocolError::InvalidLength(-2));
    }

    #[test]
    fn string_rejects_invalid_utf8() {
        let err = read_string(&mut Reader::new(&[0x02, 0xff]), true).expect_err("utf8");
        assert_eq!(err, ProtocolError::InvalidString);
    }

    #[test]
    fn string_shorter_than_prefix_is_eof() {
        let err = read_string(&mut Reader::new(&[0x05, b'a', b'b']), true).expect_err("short");
        assert_eq!(err, ProtocolError::UnexpectedEof);
    }

    #[test]
    fn bytes_roundtrip_both_encodings() {
        for flexible in [true, false] {
            let mut out = Vec::new();
            write_nullable_bytes(&mut out, Some(b"abc"), flexible).expect("some");
            write_nullable_bytes(&mut out, None, flexible).expect("none");
            write_bytes(&mut out, b"", flexible).expect("empty");
            let mut reader = Reader::new(&out);
            assert_eq!(
                read_nullable_bytes(&mut reader, flexible).expect("some"),
                Some(Bytes::from_static(b"abc"))
            );
            assert_eq!(read_nullable_bytes(&mut reader, flexible).expect("none"), None);
            assert_eq!(read_bytes(&mut reader, flexible).expect("empty"), Bytes::new());
            assert!(reader.is_empty());
        }
    }

    #[test]
    fn arrays_distinguish_null_and_empty() {
        for flexible in [true, false] {
            let mut out = Vec::new();
            write_nullable_array::<i32, _>(&mut out, None, flexible, |out, v| {
                write_i32(out, *v);
                Ok(())
            })
            .expect("null");
            write_array::<i32, _>(&mut out, &[], flexible, |out, v| {
                write_i32(out, *v);
                Ok(())
            })
            .expect("empty");
            write_array(&mut out, &[7_i32, -3], flexible, |out, v| {
                write_i32(out, *v);
                Ok(())
            })
            .expect("items");

            let mut reader = Reader::new(&out);
            let null = read_nullable_array(&mut reader, flexible, |r| r.read_i32()).expect("null");
            let empty = read_nullable_array(&mut reader, flexible, |r| r.read_i32()).expect("empty");
            let items = read_array(&mut reader, flexible, |r| r.read_i32()).expect("items");
            assert_eq!(null, None);
            assert_eq!(empty, Some(vec![]));
            assert_eq!(items, vec![7, -3]);
            assert!(reader.is_empty());
        }
    }

    #[test]
    fn compact_array_known_bytes() {
        let mut out = Vec::new();
        write_array(&mut out, &[1_i8, 2], true, |out, v| {
            write_i8(out, *v);
            Ok(())
        })
        .expect("encode");
        assert_eq!(out, vec![0x03, 0x01, 0x02]);
    }

    #[test]
    fn non_nullable_array_rejects_null() {
        let err = read_array(&mut Reader::new(&[0x00]), true, |r| r.read_i8()).expect_err("null");
        assert_eq!(err, ProtocolError::InvalidLength(-1));
        let err = read_array(&mut Reader::new(&[0xff, 0xff, 0xff, 0xfe]), false, |r| r.read_i8())
            .expect_err("negative");
        assert_eq!(err, ProtocolError::InvalidLength(-2));
    }

    #[test]
    fn array_with_huge_prefix_fails_without_allocating() {
        let mut out = Vec::new();
        write_uvarint(&mut out, u32::MAX);
        let err = read_array(&mut Reader::new(&out), true, |r| r.read_i64()).expect_err("eof");
        assert_eq!(err, ProtocolError::UnexpectedEof);
    }

    #[test]
    fn array_reservation_is_bounded_by_input_bytes() {
        assert_eq!(preallocation_cap::<u8>(1_000_000, 64), 64);
        assert_eq!(preallocation_cap::<[u8; 40]>(1_000_000, 64), 1);
        assert_eq!(preallocation_cap::<[u8; 40]>(1_000_000, 39), 0);
        assert_eq!(preallocation_cap::<u64>(2, 1024), 2);
        assert_eq!(preallocation_cap::<()>(7, 3), 3);

        let mut out = Vec::new();
        write_array_len(&mut out, 2, true).expect("len");
        write_i64(&mut out, -1);
        write_i64(&mut out, 9);
        let items = read_array(&mut Reader::new(&out), true, |r| r.read_i64()).expect("array");
        assert_eq!(items, vec![-1, 9]);
        assert!(items.capacity() * std::mem::size_of::<i64>() <= out.len());
    }

    #[test]
    fn uuid_is_sixteen_raw_bytes() {
        let id = Uuid::from_bytes([0x11; 16]);
        let mut out = Vec::new();
        write_uuid(&mut out, &id);
        assert_eq!(out, vec![0x11; 16]);
        assert_eq!(Reader::new(&out).read_uuid().expect("uuid"), id);
        let err = Reader::new(&out[..15]).read_uuid().expect_err("short");
        assert_eq!(err, ProtocolError::UnexpectedEof);
    }

    #[test]
    fn bool_rejects_values_other_than_zero_and_one() {
        let err = Reader::new(&[2]).read_bool().expect_err("bool");
        assert_eq!(err, ProtocolError::InvalidBoolean(2));
    }

    #[test]
    fn empty_tagged_section_is_one_zero_byte() {
        let mut out = Vec::new();
        write_tagged_fields(&mut out, &[]).expect("encode");
        assert_eq!(out, vec![0x00]);
        let mut other = Vec::new();
        write_empty_tagged_fields(&mut other);
        assert_eq!(out, other);
    }

    #[test]
    fn tagged_fields_are_written_in_tag_order() {
        let mut out = Vec::new();
        write_tagged_fields(
            &mut out,
            &[
                RawTaggedField::new(5, vec![0xaa]),
                RawTaggedField::new(1, vec![0xbb, 0xcc]),
            ],
        )
        .expect("encode");
        assert_eq!(out, vec![0x02, 0x01, 0x02, 0xbb, 0xcc, 0x05, 0x01, 0xaa]);
    }

    #[test]
    fn unknown_tagged_fields_do_not_desynchronize_the_stream() {
        let mut out = Vec::new();
        write_tagged_fields(
            &mut out,
            &[
                RawTaggedField::new(0, vec![1, 2, 3, 4]),
                RawTaggedField::new(9, vec![0xff; 200]),
            ],
        )
        .expect("encode");
        write_i32(&mut out, 0x0102_0304);

        let mut reader = Reader::new(&out);
        skip_tagged_fields(&mut reader).expect("skip");
        assert_eq!(reader.read_i32().expect("trailing field"), 0x0102_0304);
        assert!(reader.is_empty());
    }

    #[test]
    fn tagged_field_payload_is_handed_to_handler() {
        let mut out = Vec::new();
        write_tagged_fields(&mut out, &[RawTaggedField::new(3, vec![0x00, 0x2a])]).expect("encode");
        let mut seen = Vec::new();
        read_tagged_fields(&mut Reader::new(&out), |tag, payload| {
            seen.push((tag, payload.to_vec()));
            Ok(())
        })
        .expect("decode");
        assert_eq!(seen, vec![(3, vec![0x00, 0x2a])]);
    }

    #[test]
    fn truncated_tagged_payload_is_eof() {
        let bytes = [0x01, 0x00, 0x05, 0x01, 0x02];
        let err = skip_tagged_fields(&mut Reader::new(&bytes)).expect_err("short payload");
        assert_eq!(err, ProtocolError::UnexpectedEof);
    }
}
