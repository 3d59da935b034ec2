//! gRPC-web DATA/TRAILER frame encoding and incremental decoding.
//!
//! Frame layout: `[compressed:1][len:4 big-endian][payload]`. A frame is a
//! trailer frame when the high bit of the first byte is set, matching the
//! gRPC-web wire protocol (distinct from HTTP/2 gRPC's dedicated trailer
//! mechanism — gRPC-web multiplexes trailers onto the same byte stream as
//! DATA frames).

use bytes::{Buf, Bytes, BytesMut};

use crate::error::Error;

const TRAILER_FLAG: u8 = 0x80;
const HEADER_LEN: usize = 5;

pub struct Frame {
    pub is_trailer: bool,
    pub payload: Bytes,
}

/// Encodes a single non-trailer DATA frame carrying `payload` uncompressed.
pub fn encode_data_frame(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    out.push(0);
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(payload);
    out
}

/// Accumulates bytes off the wire and yields complete frames.
///
/// `push` feeds newly received bytes; `next_frame` returns `Ok(Some(_))` once
/// a full frame is buffered, `Ok(None)` when more bytes are needed, and
/// surfaces `Error::Framing` for a length prefix that cannot possibly be
/// satisfied (checked at EOF by the caller, not here).
#[derive(Default)]
pub struct FrameReader {
    buf: BytesMut,
}

impl FrameReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    pub fn next_frame(&mut self) -> Option<Frame> {
        if self.buf.len() < HEADER_LEN {
            return None;
        }

        let flags = self.buf[0];
        let len = u32::from_be_bytes([self.buf[1], self.buf[2], self.buf[3], self.buf[4]]) as usize;

        if self.buf.len() < HEADER_LEN + len {
            return None;
        }

        self.buf.advance(HEADER_LEN);
        let payload = self.buf.split_to(len).freeze();

        Some(Frame {
            is_trailer: flags & TRAILER_FLAG != 0,
            payload,
        })
    }

    /// Called once the underlying body is exhausted. Any bytes still
    /// buffered mean a frame was announced but never completed — a
    /// truncated stream, not an end-of-stream.
    pub fn finish(self) -> Result<(), Error> {
        if self.buf.is_empty() {
            Ok(())
        } else {
            Err(Error::Framing(format!(
                "{} trailing byte(s) after last complete frame",
                self.buf.len()
            )))
        }
    }
}

/// Parses a trailer frame's payload, a newline-separated `key: value` header
/// block, extracting `grpc-status` (default 0 if absent) and `grpc-message`.
pub fn parse_trailers(payload: &[u8]) -> Result<(i32, Option<String>), Error> {
    let text = std::str::from_utf8(payload)
        .map_err(|_| Error::Framing("trailer payload is not valid UTF-8".to_string()))?;

    let mut code = 0;
    let mut message = None;

    for line in text.split("\r\n").flat_map(|l| l.split('\n')) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        match key.trim().to_ascii_lowercase().as_str() {
            "grpc-status" => {
                code = value
                    .trim()
                    .parse()
                    .map_err(|_| Error::Framing(format!("invalid grpc-status `{value}`")))?;
            }
            "grpc-message" => message = Some(value.trim().to_string()),
            _ => {}
        }
    }

    Ok((code, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_data_frame_with_big_endian_length() {
        let frame = encode_data_frame(&[1, 2, 3]);
        assert_eq!(frame, vec![0, 0, 0, 0, 3, 1, 2, 3]);
    }

    #[test]
    fn reads_frames_fed_incrementally() {
        let mut reader = FrameReader::new();
        let data = encode_data_frame(b"hello");

        reader.push(&data[..3]);
        assert!(reader.next_frame().is_none());

        reader.push(&data[3..]);
        let frame = reader.next_frame().unwrap();
        assert!(!frame.is_trailer);
        assert_eq!(&frame.payload[..], b"hello");
        assert!(reader.next_frame().is_none());
    }

    #[test]
    fn trailer_flag_is_high_bit_of_first_byte() {
        let mut reader = FrameReader::new();
        reader.push(&[0x80, 0, 0, 0, 0]);
        let frame = reader.next_frame().unwrap();
        assert!(frame.is_trailer);
        assert!(frame.payload.is_empty());
    }

    #[test]
    fn truncated_stream_is_a_framing_error_at_finish() {
        let mut reader = FrameReader::new();
        reader.push(&[0, 0, 0, 0, 10, 1, 2]);
        assert!(reader.next_frame().is_none());
        assert!(matches!(reader.finish(), Err(Error::Framing(_))));
    }

    #[test]
    fn parses_grpc_status_and_message() {
        let (code, message) = parse_trailers(b"grpc-status: 7\r\ngrpc-message: busy\r\n").unwrap();
        assert_eq!(code, 7);
        assert_eq!(message, Some("busy".to_string()));
    }

    #[test]
    fn defaults_to_status_zero_without_a_grpc_status_line() {
        let (code, message) = parse_trailers(b"").unwrap();
        assert_eq!(code, 0);
        assert_eq!(message, None);
    }
}
