//! # Record Frame Codec
//!
//! Encodes one [`Record`] as one self-delimiting binary frame. The on-disk
//! stream is a bare concatenation of frames with no file header, footer, or
//! checksum; a reader consumes frames until the stream is exhausted.
//!
//! ## Frame Layout
//!
//! ```text
//! +-----------------+-------------------+------------------+
//! | key (i64, BE)   | value_len (u32,BE)| value bytes      |
//! | 8 bytes         | 4 bytes           | value_len bytes  |
//! +-----------------+-------------------+------------------+
//! ```
//!
//! | Component | Type | Description |
//! |-----------|------|-------------|
//! | **key** | `i64` big-endian | the record key |
//! | **value_len** | `u32` big-endian | byte length of the value |
//! | **value** | `[u8]` | UTF-8 value bytes, no terminator |
//!
//! ## Endianness
//!
//! All header fields are big-endian via `zerocopy::big_endian` wrapper
//! types, so the format is byte-order-explicit and portable across hosts.
//! No host-native-order field exists anywhere in the stream.
//!
//! ## Determinism
//!
//! Encoding is a pure function of the record: the same record always yields
//! identical bytes, and decoding is the exact left inverse of encoding.
//!
//! ## End of Stream vs Malformed Data
//!
//! [`FrameReader::read_record`] returns `Ok(None)` only when the stream ends
//! exactly at a frame boundary. Bytes present but not forming a complete
//! frame (partial header, truncated value, non-UTF-8 value) are a distinct
//! malformed-stream error, never silent truncation.

use std::io::{ErrorKind, Read, Write};

use eyre::{ensure, Result, WrapErr};
use zerocopy::big_endian::{I64, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::record::Record;
use crate::tree::visit::RecordVisitor;

pub const FRAME_HEADER_SIZE: usize = 12;

#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
struct FrameHeader {
    key: I64,
    value_len: U32,
}

const _: () = assert!(std::mem::size_of::<FrameHeader>() == FRAME_HEADER_SIZE);

impl FrameHeader {
    fn new(key: i64, value_len: u32) -> Self {
        Self {
            key: I64::new(key),
            value_len: U32::new(value_len),
        }
    }

    fn from_bytes(bytes: &[u8]) -> Result<&Self> {
        ensure!(
            bytes.len() >= FRAME_HEADER_SIZE,
            "buffer too small for frame header: {} < {}",
            bytes.len(),
            FRAME_HEADER_SIZE
        );

        Self::ref_from_bytes(&bytes[..FRAME_HEADER_SIZE])
            .map_err(|e| eyre::eyre!("failed to parse frame header: {:?}", e))
    }

    fn key(&self) -> i64 {
        self.key.get()
    }

    fn value_len(&self) -> u32 {
        self.value_len.get()
    }
}

/// Encoded size of `record` in bytes, without encoding it.
pub fn encoded_len(record: &Record) -> usize {
    FRAME_HEADER_SIZE + record.value.len()
}

/// Appends the frame for `record` to `out`.
///
/// Fails only if the value exceeds the `u32` length field.
pub fn encode_record(record: &Record, out: &mut Vec<u8>) -> Result<()> {
    ensure!(
        record.value.len() <= u32::MAX as usize,
        "record value too large for frame: {} bytes",
        record.value.len()
    );

    let header = FrameHeader::new(record.key, record.value.len() as u32);
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(record.value.as_bytes());
    Ok(())
}

/// Decodes one frame from the front of `buf`.
///
/// Returns `Ok(None)` on an empty buffer (clean end of stream),
/// `Ok(Some((record, consumed)))` on success, and an error if the bytes
/// present do not form a complete valid frame.
pub fn decode_record(buf: &[u8]) -> Result<Option<(Record, usize)>> {
    if buf.is_empty() {
        return Ok(None);
    }

    ensure!(
        buf.len() >= FRAME_HEADER_SIZE,
        "malformed stream: {} trailing bytes at frame boundary",
        buf.len()
    );

    let header = FrameHeader::from_bytes(buf)?;
    let value_len = header.value_len() as usize;
    let frame_len = FRAME_HEADER_SIZE + value_len;

    ensure!(
        buf.len() >= frame_len,
        "malformed stream: frame value truncated ({} of {} bytes)",
        buf.len() - FRAME_HEADER_SIZE,
        value_len
    );

    let value = std::str::from_utf8(&buf[FRAME_HEADER_SIZE..frame_len])
        .wrap_err("malformed stream: frame value is not valid UTF-8")?;

    Ok(Some((Record::new(header.key(), value), frame_len)))
}

/// Streams frames to an `io::Write` sink. Doubles as the encode variant of
/// [`RecordVisitor`], so a pre-order traversal writes the tree's pre-order
/// frame sequence directly.
#[derive(Debug)]
pub struct FrameWriter<W: Write> {
    sink: W,
    scratch: Vec<u8>,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            scratch: Vec::new(),
        }
    }

    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        self.scratch.clear();
        encode_record(record, &mut self.scratch)?;
        self.sink
            .write_all(&self.scratch)
            .wrap_err("failed to write record frame")
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush().wrap_err("failed to flush frame sink")
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> RecordVisitor for FrameWriter<W> {
    fn visit(&mut self, record: &Record) -> Result<()> {
        self.write_record(record)
    }
}

/// Streams frames from an `io::Read` source.
#[derive(Debug)]
pub struct FrameReader<R: Read> {
    src: R,
}

impl<R: Read> FrameReader<R> {
    pub fn new(src: R) -> Self {
        Self { src }
    }

    /// Reads exactly one frame, advancing past it.
    ///
    /// `Ok(None)` means the source ended cleanly at a frame boundary. A
    /// partial header or truncated value is a malformed-stream error.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        let mut header_buf = [0u8; FRAME_HEADER_SIZE];
        let filled = read_until_eof(&mut self.src, &mut header_buf)?;

        if filled == 0 {
            return Ok(None);
        }
        ensure!(
            filled == FRAME_HEADER_SIZE,
            "malformed stream: {} trailing bytes at frame boundary",
            filled
        );

        let header = FrameHeader::from_bytes(&header_buf)?;
        let value_len = header.value_len() as usize;

        let mut value_buf = vec![0u8; value_len];
        self.src
            .read_exact(&mut value_buf)
            .wrap_err_with(|| format!("malformed stream: frame value truncated (expected {} bytes)", value_len))?;

        let value = String::from_utf8(value_buf)
            .wrap_err("malformed stream: frame value is not valid UTF-8")?;

        Ok(Some(Record {
            key: header.key(),
            value,
        }))
    }

    /// Decodes frames until clean end of stream, in stream order. Since
    /// encoding follows a pre-order traversal, this is the source tree's
    /// pre-order record sequence.
    pub fn read_all(&mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        while let Some(record) = self.read_record()? {
            records.push(record);
        }
        Ok(records)
    }

    pub fn into_inner(self) -> R {
        self.src
    }
}

/// Fills `buf` from `src`, stopping early only at end of stream. Returns
/// the number of bytes read, which is less than `buf.len()` only at EOF.
fn read_until_eof(src: &mut impl Read, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match src.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).wrap_err("failed to read record frame"),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_frame_uses_big_endian_header_fields() {
        let mut buf = Vec::new();
        encode_record(&Record::new(1, "A"), &mut buf).unwrap();

        assert_eq!(
            buf,
            vec![0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, b'A'],
        );
    }

    #[test]
    fn negative_key_round_trips() {
        let mut buf = Vec::new();
        encode_record(&Record::new(-42, "neg"), &mut buf).unwrap();

        let (record, consumed) = decode_record(&buf).unwrap().unwrap();
        assert_eq!(record, Record::new(-42, "neg"));
        assert_eq!(consumed, buf.len());
    }

    #[test]
    fn empty_value_round_trips() {
        let mut buf = Vec::new();
        encode_record(&Record::new(5, ""), &mut buf).unwrap();
        assert_eq!(buf.len(), FRAME_HEADER_SIZE);

        let (record, consumed) = decode_record(&buf).unwrap().unwrap();
        assert_eq!(record, Record::new(5, ""));
        assert_eq!(consumed, FRAME_HEADER_SIZE);
    }

    #[test]
    fn encoding_is_deterministic() {
        let record = Record::new(9, "same bytes");
        let mut a = Vec::new();
        let mut b = Vec::new();
        encode_record(&record, &mut a).unwrap();
        encode_record(&record, &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn encoded_len_matches_actual_encoding() {
        let record = Record::new(3, "three");
        let mut buf = Vec::new();
        encode_record(&record, &mut buf).unwrap();
        assert_eq!(buf.len(), encoded_len(&record));
    }

    #[test]
    fn concatenated_frames_split_unambiguously() {
        let records = vec![
            Record::new(10, "10"),
            Record::new(7, ""),
            Record::new(-3, "minus three"),
        ];

        let mut buf = Vec::new();
        for record in &records {
            encode_record(record, &mut buf).unwrap();
        }

        let mut decoded = Vec::new();
        let mut rest = &buf[..];
        while let Some((record, consumed)) = decode_record(rest).unwrap() {
            decoded.push(record);
            rest = &rest[consumed..];
        }

        assert_eq!(decoded, records);
    }

    #[test]
    fn reader_returns_none_on_empty_source() {
        let mut reader = FrameReader::new(&[][..]);
        assert!(reader.read_record().unwrap().is_none());
    }

    #[test]
    fn reader_yields_frames_in_stream_order() {
        let records = vec![Record::new(1, "one"), Record::new(2, "two")];
        let mut buf = Vec::new();
        for record in &records {
            encode_record(record, &mut buf).unwrap();
        }

        let mut reader = FrameReader::new(&buf[..]);
        assert_eq!(reader.read_all().unwrap(), records);
        assert!(reader.read_record().unwrap().is_none());
    }

    #[test]
    fn partial_header_is_a_malformed_stream_error() {
        let mut buf = Vec::new();
        encode_record(&Record::new(1, "one"), &mut buf).unwrap();
        buf.truncate(FRAME_HEADER_SIZE - 5);

        let mut reader = FrameReader::new(&buf[..]);
        let err = reader.read_record().unwrap_err();
        assert!(err.to_string().contains("frame boundary"));
    }

    #[test]
    fn truncated_value_is_a_malformed_stream_error() {
        let mut buf = Vec::new();
        encode_record(&Record::new(1, "a longer value"), &mut buf).unwrap();
        buf.truncate(buf.len() - 4);

        let mut reader = FrameReader::new(&buf[..]);
        let err = reader.read_record().unwrap_err();
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn non_utf8_value_is_a_malformed_stream_error() {
        let mut buf = Vec::new();
        encode_record(&Record::new(1, "ab"), &mut buf).unwrap();
        buf[FRAME_HEADER_SIZE] = 0xFF;
        buf[FRAME_HEADER_SIZE + 1] = 0xFE;

        let err = decode_record(&buf).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn frame_writer_visitor_matches_encode_record() {
        let record = Record::new(11, "eleven");

        let mut writer = FrameWriter::new(Vec::new());
        writer.visit(&record).unwrap();
        let streamed = writer.into_inner();

        let mut direct = Vec::new();
        encode_record(&record, &mut direct).unwrap();

        assert_eq!(streamed, direct);
    }
}
