//! Append-only writer for the proto3-subset wire format.

use crate::varint::{write_varint, zigzag_encode};

fn tag(field_number: u32, wire_type: u8) -> u64 {
    (u64::from(field_number) << 3) | u64::from(wire_type)
}

/// Append-only byte buffer that emits tagged fields.
///
/// Callers are responsible for field-presence: proto3 omits scalar fields
/// equal to their default, so a domain-record encoder should simply not
/// call a `write_*_field` method for an absent/default value. Fields must
/// be written in ascending field-number order so that two encoders
/// presented with the same record always produce byte-identical output.
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: Vec::with_capacity(cap),
        }
    }

    /// Hands the accumulated bytes to the caller.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes an unsigned varint field (proto3 `uint32`/`uint64`).
    pub fn write_uint_field(&mut self, field_number: u32, value: u64) {
        write_varint(&mut self.buf, tag(field_number, 0));
        write_varint(&mut self.buf, value);
    }

    /// Writes a signed varint field using plain two's-complement varint
    /// encoding (proto3 `int32`/`int64` semantics: negative values always
    /// take the full 10 bytes).
    pub fn write_int_field(&mut self, field_number: u32, value: i64) {
        write_varint(&mut self.buf, tag(field_number, 0));
        write_varint(&mut self.buf, value as u64);
    }

    /// Writes a zig-zag encoded signed varint field (proto3
    /// `sint32`/`sint64` semantics).
    pub fn write_sint_field(&mut self, field_number: u32, value: i64) {
        write_varint(&mut self.buf, tag(field_number, 0));
        write_varint(&mut self.buf, zigzag_encode(value));
    }

    pub fn write_bool_field(&mut self, field_number: u32, value: bool) {
        self.write_uint_field(field_number, value as u64);
    }

    /// Writes a length-delimited field: raw bytes, a UTF-8 string, or an
    /// already-encoded nested message.
    pub fn write_bytes_field(&mut self, field_number: u32, value: &[u8]) {
        write_varint(&mut self.buf, tag(field_number, 2));
        write_varint(&mut self.buf, value.len() as u64);
        self.buf.extend_from_slice(value);
    }

    pub fn write_string_field(&mut self, field_number: u32, value: &str) {
        self.write_bytes_field(field_number, value.as_bytes());
    }

    /// Writes a nested message field: the inner [`Writer`]'s bytes become
    /// the length-delimited payload.
    pub fn write_message_field(&mut self, field_number: u32, inner: Writer) {
        self.write_bytes_field(field_number, &inner.buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::Reader;

    #[test]
    fn ascending_field_order_is_deterministic() {
        let mut a = Writer::new();
        a.write_uint_field(1, 5);
        a.write_string_field(2, "hi");

        let mut b = Writer::new();
        b.write_uint_field(1, 5);
        b.write_string_field(2, "hi");

        assert_eq!(a.into_bytes(), b.into_bytes());
    }

    #[test]
    fn nested_message_round_trips() {
        let mut inner = Writer::new();
        inner.write_uint_field(1, 42);

        let mut outer = Writer::new();
        outer.write_message_field(5, inner);

        let bytes = outer.into_bytes();
        let fields = Reader::new(&bytes).read_all().unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].number, 5);

        let nested = Reader::new(fields[0].value.as_bytes().unwrap())
            .read_all()
            .unwrap();
        assert_eq!(nested[0].number, 1);
        assert_eq!(nested[0].value.as_varint(), Some(42));
    }
}
