use std::ops::ControlFlow;

use futures::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use crate::error::Error;
use crate::frame::{encode_data_frame, parse_trailers, FrameReader};

const CONTENT_TYPE: &str = "application/grpc-web+proto";

/// A gRPC-web endpoint: one `reqwest::Client` plus the base URL every call
/// path is joined against.
///
/// Cheap to clone — `reqwest::Client` is itself a handle around a shared,
/// internally pooled connector, so cloning a `Transport` does not open a new
/// socket.
#[derive(Clone)]
pub struct Transport {
    client: reqwest::Client,
    base_url: String,
}

impl Transport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Sends one request and waits for exactly one response message.
    pub async fn unary(&self, path: &str, request_bytes: &[u8]) -> Result<Vec<u8>, Error> {
        let body = encode_data_frame(request_bytes);

        let response = self
            .client
            .post(self.url(path))
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let bytes = response.bytes().await?;

        let mut reader = FrameReader::new();
        reader.push(&bytes);

        let mut data = None;
        let mut status = 0;
        let mut message = None;

        while let Some(frame) = reader.next_frame() {
            if frame.is_trailer {
                let (code, msg) = parse_trailers(&frame.payload)?;
                status = code;
                message = msg;
            } else if data.is_none() {
                data = Some(frame.payload.to_vec());
            } else {
                return Err(Error::Framing("more than one DATA frame in a unary response".to_string()));
            }
        }
        reader.finish()?;

        if status != 0 {
            return Err(Error::RpcStatus {
                code: status,
                message: message.unwrap_or_default(),
            });
        }

        data.ok_or_else(|| Error::Framing("unary response had no DATA frame".to_string()))
    }

    /// Sends one request and delivers each inbound DATA frame to `consumer`
    /// until a TRAILER frame arrives, the connection closes, or `cancel` is
    /// triggered.
    ///
    /// `consumer` returning [`ControlFlow::Break`] ends the call cleanly
    /// (as if the server had sent a success trailer); triggering `cancel`
    /// ends it with [`Error::Cancelled`] and drops the HTTP body without
    /// reading further frames, mirroring how aborting a background task
    /// stops its owning connection without waiting for it to drain.
    pub async fn server_streaming<F>(
        &self,
        path: &str,
        request_bytes: &[u8],
        cancel: CancellationToken,
        mut consumer: F,
    ) -> Result<(), Error>
    where
        F: FnMut(&[u8]) -> ControlFlow<()>,
    {
        let body = encode_data_frame(request_bytes);

        let response = self
            .client
            .post(self.url(path))
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let mut stream = response.bytes_stream();
        let mut reader = FrameReader::new();

        loop {
            let chunk = tokio::select! {
                _ = cancel.cancelled() => {
                    debug!(path, "server streaming call cancelled");
                    return Err(Error::Cancelled);
                }
                chunk = stream.next() => chunk,
            };

            let Some(chunk) = chunk else {
                reader.finish()?;
                warn!(path, "stream closed before a trailer frame arrived");
                return Ok(());
            };

            reader.push(&chunk?);

            while let Some(frame) = reader.next_frame() {
                if frame.is_trailer {
                    let (code, message) = parse_trailers(&frame.payload)?;
                    if code != 0 {
                        return Err(Error::RpcStatus {
                            code,
                            message: message.unwrap_or_default(),
                        });
                    }
                    return Ok(());
                }

                trace!(path, len = frame.payload.len(), "delivering data frame");
                if consumer(&frame.payload).is_break() {
                    return Ok(());
                }
            }
        }
    }
}
