use std::ops::ControlFlow;

use hedera_codec::{Reader, Writer};
use hedera_proto::{Block, BlockItem};
use hedera_transport::Transport;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::compression::decompress;
use crate::error::Error;

const SINGLE_BLOCK_PATH: &str = "/com.hedera.hapi.block.BlockAccessService/singleBlock";
const SUBSCRIBE_PATH: &str = "/com.hedera.hapi.block.BlockStreamService/subscribeBlockStream";

enum SubscribeItem {
    Status(i32),
    Items(Vec<BlockItem>),
}

/// Decodes one `SubscribeStreamResponse` frame: a `oneof` over a terminal
/// status (field 1) or a non-terminal batch of items (field 2), using the
/// same "first recognized field wins" rule as the `BlockItem` oneof.
fn parse_subscribe_response(bytes: &[u8]) -> Result<SubscribeItem, Error> {
    for field in Reader::new(bytes).read_all()? {
        match field.number {
            1 => {
                let status = field
                    .value
                    .as_varint()
                    .ok_or(Error::MalformedResponse("status"))? as i32;
                return Ok(SubscribeItem::Status(status));
            }
            2 => {
                let bytes = field
                    .value
                    .as_bytes()
                    .ok_or(Error::MalformedResponse("blockItems"))?;
                // a BlockItemSet is shaped identically to Block's repeated
                // BlockItem field, so the same decoder applies.
                return Ok(SubscribeItem::Items(Block::decode(bytes)?.items));
            }
            _ => {}
        }
    }

    Err(Error::MalformedResponse("SubscribeStreamResponse"))
}

/// Drives block retrieval against a Block Node over gRPC-web.
pub struct BlockStreamClient {
    transport: Transport,
}

impl BlockStreamClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetches one block by number via a unary call.
    pub async fn get_block(&self, block_number: u64) -> Result<Block, Error> {
        let mut request = Writer::new();
        request.write_uint_field(1, block_number);

        let response_bytes = self
            .transport
            .unary(SINGLE_BLOCK_PATH, &request.into_bytes())
            .await?;
        let response_bytes = decompress(&response_bytes)?;

        let mut status = 0i32;
        let mut block_bytes = None;

        for field in Reader::new(&response_bytes).read_all()? {
            match field.number {
                1 => status = field.value.as_varint().unwrap_or(0) as i32,
                2 => block_bytes = field.value.as_bytes().map(|b| b.to_vec()),
                _ => {}
            }
        }

        if status != 0 {
            return Err(Error::BlockUnavailable { status });
        }

        let block_bytes = block_bytes.ok_or(Error::MalformedResponse("block"))?;
        Ok(Block::decode(&block_bytes)?)
    }

    /// Fetches `[start, end]` inclusive, in ascending order. On any failure,
    /// already-fetched blocks are dropped along with the error.
    pub async fn get_block_range(&self, start: u64, end: u64) -> Result<Vec<Block>, Error> {
        let mut blocks = Vec::with_capacity((end.saturating_sub(start) + 1) as usize);

        for block_number in start..=end {
            blocks.push(self.get_block(block_number).await?);
        }

        Ok(blocks)
    }

    /// Opens a server-streaming subscription over `[start, end]` and
    /// delivers each inbound batch of items to `consumer` in wire order.
    ///
    /// `consumer` returning [`ControlFlow::Break`] ends the subscription
    /// early without error. A terminal status of 0 ends it cleanly; any
    /// other terminal status or transport failure surfaces as an error.
    pub async fn subscribe_blocks<F>(
        &self,
        start: u64,
        end: u64,
        cancel: CancellationToken,
        mut consumer: F,
    ) -> Result<(), Error>
    where
        F: FnMut(&[BlockItem]) -> ControlFlow<()>,
    {
        let mut request = Writer::new();
        request.write_uint_field(1, start);
        request.write_uint_field(2, end);

        let mut terminal_error = None;

        let result = self
            .transport
            .server_streaming(SUBSCRIBE_PATH, &request.into_bytes(), cancel, |frame| {
                let frame = match decompress(frame) {
                    Ok(frame) => frame,
                    Err(e) => {
                        terminal_error = Some(e);
                        return ControlFlow::Break(());
                    }
                };

                match parse_subscribe_response(&frame) {
                    Ok(SubscribeItem::Items(items)) => consumer(&items),
                    Ok(SubscribeItem::Status(0)) => {
                        debug!("block subscription closed cleanly");
                        ControlFlow::Break(())
                    }
                    Ok(SubscribeItem::Status(status)) => {
                        warn!(status, "block subscription closed with a non-zero status");
                        terminal_error = Some(Error::BlockUnavailable { status });
                        ControlFlow::Break(())
                    }
                    Err(e) => {
                        terminal_error = Some(e);
                        ControlFlow::Break(())
                    }
                }
            })
            .await;

        match (result, terminal_error) {
            (Err(e), _) => Err(e.into()),
            (Ok(()), Some(e)) => Err(e),
            (Ok(()), None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_status_and_items_variants() {
        let mut status_only = Writer::new();
        status_only.write_int_field(1, 7);
        assert!(matches!(
            parse_subscribe_response(&status_only.into_bytes()).unwrap(),
            SubscribeItem::Status(7)
        ));

        let mut header = Writer::new();
        header.write_uint_field(1, 1);
        let mut header_item = Writer::new();
        header_item.write_message_field(1, header);
        let mut item_set = Writer::new();
        item_set.write_message_field(1, header_item);
        let mut with_items = Writer::new();
        with_items.write_message_field(2, item_set);

        match parse_subscribe_response(&with_items.into_bytes()).unwrap() {
            SubscribeItem::Items(items) => assert_eq!(items.len(), 1),
            _ => panic!("expected Items variant"),
        }
    }
}
