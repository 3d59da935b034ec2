//! Hedera domain record schemas: encoding, decoding, and parsing of the
//! message shapes that ride over the wire codec in `hedera-codec`.
//!
//! Every type here owns its data outright — nothing borrows from the input
//! buffer — so decoded records can cross thread and await boundaries freely
//! in the transport and block-stream layers built on top of this crate.

pub mod account;
pub mod block;
pub mod contract;
pub mod entity_id;
pub mod error;
pub mod hbar;
pub mod precheck;
pub mod query;
pub mod receipt;
pub mod record;
pub mod response_code;
pub mod schedule;
pub mod timestamp;
pub mod token;
pub mod transaction_id;
pub mod transfer;

pub use account::AccountInfo;
pub use block::{Block, BlockItem};
pub use contract::{ContractCallResult, ContractInfo};
pub use entity_id::EntityId;
pub use error::Error;
pub use hbar::{Hbar, TINYBAR_PER_HBAR};
pub use precheck::PrecheckResult;
pub use query::{
    encode_schedule_get_info_query, extract_envelope_field, response_header, wrap_query,
    QUERY_TAG_RECEIPT, QUERY_TAG_RECORD, QUERY_TAG_SCHEDULE, RESPONSE_TAG_RECEIPT,
    RESPONSE_TAG_RECORD, RESPONSE_TAG_SCHEDULE, RESPONSE_TYPE_ANSWER_ONLY,
};
pub use receipt::{CreatedEntity, TransactionReceipt};
pub use record::TransactionRecord;
pub use response_code::{classify, is_precheck_success, response_code_label, ResponseClass};
pub use schedule::ScheduleInfo;
pub use timestamp::Timestamp;
pub use transaction_id::TransactionId;
pub use token::{TokenBalance, TokenInfo};
pub use transfer::Transfer;
