//! Block ingestion: item typing, typed parsers, gzip auto-detection, block
//! number/timestamp approximation, and the `getBlock`/`getBlockRange`/
//! `subscribeBlocks` engine operations built on `hedera-transport`.

pub mod compression;
pub mod conversions;
pub mod engine;
pub mod error;
pub mod item;
pub mod parsers;

pub use compression::{decompress, is_gzip};
pub use conversions::{block_number_to_timestamp, timestamp_to_block_number, BLOCK_CADENCE_SECONDS};
pub use engine::BlockStreamClient;
pub use error::Error;
pub use item::{classify, item_type, ItemType};
pub use parsers::{
    parse_event_transaction, parse_state_changes, parse_transaction_output,
    parse_transaction_result, EventTransaction, StateChange, StateChanges, TransactionOutput,
    TransactionResult,
};
