use thiserror::Error;

/// Errors raised while reading or writing the wire format.
///
/// These are codec-level corruption signals: they say nothing about
/// whether the bytes make sense as a particular domain record, only that
/// the tagged-field/varint framing itself is malformed.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("wire type {0} is not supported by this codec")]
    UnsupportedWireType(u8),

    #[error("varint is longer than 10 bytes")]
    VarintOverflow,

    #[error("buffer ended before a field's key or value could be read")]
    UnexpectedEndOfStream,
}
