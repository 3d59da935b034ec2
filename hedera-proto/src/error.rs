use thiserror::Error;

/// Errors raised while parsing user input or decoding a domain record.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("malformed response: missing or inconsistent field `{0}`")]
    MalformedResponse(&'static str),

    #[error("hbar arithmetic overflowed")]
    HbarOverflow,

    #[error(transparent)]
    Codec(#[from] hedera_codec::Error),
}
