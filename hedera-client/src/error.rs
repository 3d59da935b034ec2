use thiserror::Error;

/// Errors raised by the client façade, wrapping every layer beneath it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("contract address is a native ContractID, not an EVM address")]
    NotEvmContract,

    #[error("contract address is an EVM address, not a native ContractID")]
    NotNativeContract,

    #[error("transaction precheck failed with code {code}")]
    PrecheckFailed { code: i32 },

    #[error(transparent)]
    Proto(#[from] hedera_proto::Error),

    #[error(transparent)]
    Codec(#[from] hedera_codec::Error),

    #[error(transparent)]
    Transport(#[from] hedera_transport::Error),

    #[error(transparent)]
    BlockStream(#[from] hedera_blockstream::Error),
}
