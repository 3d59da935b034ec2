//! Client façade: composes the wire codec, gRPC-web transport, connection
//! pool, and block-stream engine behind one set of domain operations.
//!
//! Each lower crate owns its own concerns — encoding, framing, pooling,
//! block parsing — independently testable on its own. This crate only
//! wires them together and adds the query/response envelope shapes the
//! node-query RPCs need on top of what [`hedera_proto::query`] already
//! provides for receipts, records, and schedules.

pub mod client;
pub mod config;
pub mod error;
pub mod transaction_id_extract;

pub use client::{AccountBalance, ContractAddress, HederaClient};
pub use config::{Network, NetworkConfig};
pub use error::Error;
pub use transaction_id_extract::extract_transaction_id;
