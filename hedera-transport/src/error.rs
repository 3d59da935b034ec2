use thiserror::Error;

/// Errors raised by the gRPC-web transport and connection pool.
#[derive(Debug, Error)]
pub enum Error {
    #[error("framing error: {0}")]
    Framing(String),

    #[error("rpc failed: status {code} ({message})")]
    RpcStatus { code: i32, message: String },

    #[error("gzip decompression failed: {0}")]
    Decompression(String),

    #[error("connection pool exhausted for endpoint `{0}`")]
    ConnectionPoolExhausted(String),

    #[error("call cancelled")]
    Cancelled,

    #[error("deadline exceeded")]
    DeadlineExceeded,

    #[error("network error")]
    Network(#[from] reqwest::Error),
}
