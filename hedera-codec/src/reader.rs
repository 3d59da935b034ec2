//! Single-pass, zero-copy reader over the proto3-subset wire format.

use crate::error::Error;
use crate::varint::read_varint;

/// The wire type tag that precedes every field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Varint,
    LengthDelimited,
}

impl WireType {
    fn from_tag(tag: u8) -> Result<Self, Error> {
        match tag {
            0 => Ok(WireType::Varint),
            2 => Ok(WireType::LengthDelimited),
            other => Err(Error::UnsupportedWireType(other)),
        }
    }
}

/// A field's decoded value: either the varint itself, or a borrowed
/// sub-slice for length-delimited content (bytes, strings, nested
/// messages). The sub-slice remains valid for the lifetime of the input
/// buffer the [`Reader`] was constructed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Varint(u64),
    Bytes(&'a [u8]),
}

impl<'a> Value<'a> {
    pub fn as_varint(&self) -> Option<u64> {
        match self {
            Value::Varint(v) => Some(*v),
            Value::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            Value::Varint(_) => None,
        }
    }
}

/// One decoded field: its number and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub number: u32,
    pub value: Value<'a>,
}

/// Consumes a byte slice one tagged field at a time.
///
/// Never allocates; every length-delimited value is a borrow into the
/// original buffer. Unsupported wire types (fixed32, fixed64, groups) are
/// rejected rather than skipped, and a short/truncated key or value yields
/// [`Error::UnexpectedEndOfStream`] rather than silently resyncing.
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes remaining to be read.
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// True once every byte of the input has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Reads the next tagged field, or `None` if the buffer is exhausted
    /// exactly on a field boundary.
    pub fn next_field(&mut self) -> Result<Option<Field<'a>>, Error> {
        if self.is_at_end() {
            return Ok(None);
        }

        let (tag, tag_len) = read_varint(self.remaining())?;
        let field_number = (tag >> 3) as u32;
        let wire_type = WireType::from_tag((tag & 0x7) as u8)?;
        self.pos += tag_len;

        let value = match wire_type {
            WireType::Varint => {
                let (v, len) = read_varint(self.remaining())?;
                self.pos += len;
                Value::Varint(v)
            }
            WireType::LengthDelimited => {
                let (len, len_bytes) = read_varint(self.remaining())?;
                self.pos += len_bytes;
                let len = len as usize;

                if self.remaining().len() < len {
                    return Err(Error::UnexpectedEndOfStream);
                }

                let bytes = &self.remaining()[..len];
                self.pos += len;
                Value::Bytes(bytes)
            }
        };

        Ok(Some(Field {
            number: field_number,
            value,
        }))
    }

    /// Collects every field into a `Vec`, for callers that want random
    /// access rather than streaming (most [`crate`]-consuming decoders do,
    /// since proto3 fields may arrive in any order).
    pub fn read_all(mut self) -> Result<Vec<Field<'a>>, Error> {
        let mut fields = Vec::new();

        while let Some(field) = self.next_field()? {
            fields.push(field);
        }

        Ok(fields)
    }
}

impl<'a> Iterator for Reader<'a> {
    type Item = Result<Field<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_field().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::Writer;

    #[test]
    fn reads_varint_and_length_delimited_fields() {
        let mut w = Writer::new();
        w.write_uint_field(1, 300);
        w.write_bytes_field(2, b"hi");
        let bytes = w.into_bytes();

        let fields = Reader::new(&bytes).read_all().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].number, 1);
        assert_eq!(fields[0].value.as_varint(), Some(300));
        assert_eq!(fields[1].number, 2);
        assert_eq!(fields[1].value.as_bytes(), Some(&b"hi"[..]));
    }

    #[test]
    fn unsupported_wire_type_rejected() {
        // field 1, wire type 5 (fixed32)
        let buf = [0x0d];
        let mut r = Reader::new(&buf);
        assert_eq!(r.next_field(), Err(Error::UnsupportedWireType(5)));
    }

    #[test]
    fn truncated_length_delimited_value_is_unexpected_eof() {
        let mut w = Writer::new();
        w.write_bytes_field(1, b"hello world");
        let mut bytes = w.into_bytes();
        bytes.truncate(bytes.len() - 3);

        let mut r = Reader::new(&bytes);
        assert_eq!(r.next_field(), Err(Error::UnexpectedEndOfStream));
    }

    #[test]
    fn empty_buffer_yields_no_fields() {
        let mut r = Reader::new(&[]);
        assert_eq!(r.next_field(), Ok(None));
    }

    #[test]
    fn forward_compatible_with_unknown_trailing_field() {
        let mut w = Writer::new();
        w.write_uint_field(1, 7);
        let mut bytes = w.into_bytes();

        let mut unknown = Writer::new();
        unknown.write_bytes_field(99, b"future field");
        bytes.extend_from_slice(&unknown.into_bytes());

        let fields = Reader::new(&bytes).read_all().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].number, 1);
        assert_eq!(fields[1].number, 99);
    }
}
