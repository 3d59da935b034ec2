use thiserror::Error;

/// Errors raised while fetching or parsing blocks.
#[derive(Debug, Error)]
pub enum Error {
    #[error("block node refused block: status {status}")]
    BlockUnavailable { status: i32 },

    #[error("typed parser invoked on the wrong BlockItem variant")]
    WrongItemType,

    #[error("gzip decompression failed: {0}")]
    Decompression(String),

    #[error("malformed response: missing or inconsistent field `{0}`")]
    MalformedResponse(&'static str),

    #[error(transparent)]
    Proto(#[from] hedera_proto::Error),

    #[error(transparent)]
    Codec(#[from] hedera_codec::Error),

    #[error(transparent)]
    Transport(#[from] hedera_transport::Error),
}
