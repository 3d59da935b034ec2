//! Rust-native building blocks for the Hedera network ecosystem.
//!
//! This crate doesn't implement a full application; it's a base layer for
//! higher-level use cases (wallets, explorers, mirror consumers) built on
//! top of the wire codec, message schemas, transport, and block-stream
//! engine re-exported below.

#[doc(inline)]
pub use hedera_codec as codec;

#[doc(inline)]
pub use hedera_proto as proto;

#[doc(inline)]
pub use hedera_transport as transport;

pub mod interop {
    //! Interoperability with the Hedera Block Node streaming protocol.

    #[doc(inline)]
    pub use hedera_blockstream as blockstream;
}

#[doc(inline)]
pub use hedera_client as client;

pub use hedera_client::{AccountBalance, ContractAddress, HederaClient, Network, NetworkConfig};
pub use hedera_proto::{EntityId, Hbar, TransactionId};
