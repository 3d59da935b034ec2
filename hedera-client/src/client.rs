use hedera_codec::{Reader, Writer};
use hedera_proto::{
    extract_envelope_field, is_precheck_success, response_header, wrap_query, AccountInfo,
    ContractCallResult, ContractInfo, EntityId, Hbar, PrecheckResult, ScheduleInfo, TokenBalance,
    TokenInfo, TransactionId, TransactionReceipt, TransactionRecord, RESPONSE_TAG_RECEIPT,
    RESPONSE_TAG_RECORD, RESPONSE_TAG_SCHEDULE, RESPONSE_TYPE_ANSWER_ONLY, QUERY_TAG_RECEIPT,
    QUERY_TAG_RECORD, QUERY_TAG_SCHEDULE,
};
use hedera_transport::Pool;
use tracing::debug;

use hedera_blockstream::BlockStreamClient;

use crate::error::Error;

const SERVICE_PATH: &str = "/com.hedera.hapi.node.HederaProtoService";

const QUERY_TAG_ACCOUNT_BALANCE: u32 = 7;
const RESPONSE_TAG_ACCOUNT_BALANCE: u32 = 7;
const QUERY_TAG_ACCOUNT_RECORDS: u32 = 8;
const RESPONSE_TAG_ACCOUNT_RECORDS: u32 = 8;
const QUERY_TAG_ACCOUNT_INFO: u32 = 9;
const RESPONSE_TAG_ACCOUNT_INFO: u32 = 9;
const QUERY_TAG_CONTRACT_CALL_LOCAL: u32 = 3;
const RESPONSE_TAG_CONTRACT_CALL_LOCAL: u32 = 3;
const QUERY_TAG_CONTRACT_INFO: u32 = 4;
const RESPONSE_TAG_CONTRACT_INFO: u32 = 4;
const QUERY_TAG_TOKEN_INFO: u32 = 19;
const RESPONSE_TAG_TOKEN_INFO: u32 = 19;

fn method_path(method: &str) -> String {
    format!("{SERVICE_PATH}/{method}")
}

fn encode_entity_query(tag: u32, id: EntityId) -> Vec<u8> {
    let mut body = Writer::new();
    body.write_message_field(1, response_header(RESPONSE_TYPE_ANSWER_ONLY));

    let mut id_writer = Writer::new();
    id.encode(&mut id_writer);
    body.write_message_field(2, id_writer);

    wrap_query(tag, body).into_bytes()
}

fn encode_transaction_id_query(tag: u32, id: &TransactionId) -> Vec<u8> {
    let mut body = Writer::new();
    body.write_message_field(1, response_header(RESPONSE_TYPE_ANSWER_ONLY));

    let mut id_writer = Writer::new();
    id.encode(&mut id_writer);
    body.write_message_field(2, id_writer);

    wrap_query(tag, body).into_bytes()
}

/// `CryptoGetAccountBalanceResponse`: accountID, balance, and the
/// deprecated-but-still-served `tokenBalances` list (each entry is a
/// [`TokenBalance`]; this wraps them with the owning account).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccountBalance {
    pub account_id: EntityId,
    pub balance: Hbar,
    pub token_balances: Vec<TokenBalance>,
}

impl AccountBalance {
    fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut balance = Self::default();

        for field in Reader::new(buf).read_all()? {
            match field.number {
                1 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(hedera_proto::Error::MalformedResponse("accountID"))?;
                    balance.account_id = EntityId::decode(bytes)?;
                }
                2 => {
                    balance.balance =
                        Hbar::from_tinybars(field.value.as_varint().unwrap_or(0) as i64);
                }
                3 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(hedera_proto::Error::MalformedResponse("tokenBalances"))?;
                    balance.token_balances.push(TokenBalance::decode(bytes)?);
                }
                _ => {}
            }
        }

        Ok(balance)
    }
}

/// Either form a contract may be addressed by on Hedera. `get_contract_info`
/// requires the native form; EVM-only helpers require the EVM form — mixing
/// them up is a façade contract violation (`NotNativeContract`/
/// `NotEvmContract`), not a network error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractAddress {
    Native(EntityId),
    Evm([u8; 20]),
}

impl ContractAddress {
    pub fn native_id(&self) -> Result<EntityId, Error> {
        match self {
            ContractAddress::Native(id) => Ok(*id),
            ContractAddress::Evm(_) => Err(Error::NotNativeContract),
        }
    }

    pub fn evm_address(&self) -> Result<[u8; 20], Error> {
        match self {
            ContractAddress::Evm(addr) => Ok(*addr),
            ContractAddress::Native(_) => Err(Error::NotEvmContract),
        }
    }
}

/// Composes the transport/pool layer, the wire codec, and the block-stream
/// engine behind one façade with one accessor per sub-capability — the same
/// shape as a peer client composing a multiplexer with its individual
/// protocol clients.
pub struct HederaClient {
    pool: Pool,
    consensus_endpoint: String,
    operator_account_id: Option<EntityId>,
    block_stream: BlockStreamClient,
}

impl HederaClient {
    pub fn new(
        pool: Pool,
        consensus_endpoint: impl Into<String>,
        block_node_transport: hedera_transport::Transport,
    ) -> Self {
        Self {
            pool,
            consensus_endpoint: consensus_endpoint.into(),
            operator_account_id: None,
            block_stream: BlockStreamClient::new(block_node_transport),
        }
    }

    pub fn with_operator(mut self, account_id: EntityId) -> Self {
        self.operator_account_id = Some(account_id);
        self
    }

    pub fn operator_account_id(&self) -> Option<EntityId> {
        self.operator_account_id
    }

    /// Accessor for the block-ingestion sub-capability.
    pub fn block_stream(&self) -> &BlockStreamClient {
        &self.block_stream
    }

    async fn unary(&self, path: &str, request_bytes: &[u8]) -> Result<Vec<u8>, Error> {
        let connection = self.pool.acquire(&self.consensus_endpoint)?;
        let result = connection.transport().unary(path, request_bytes).await;
        self.pool.release(connection);
        Ok(result?)
    }

    pub async fn get_account_balance(&self, account_id: EntityId) -> Result<AccountBalance, Error> {
        let request = encode_entity_query(QUERY_TAG_ACCOUNT_BALANCE, account_id);
        let response = self
            .unary(&method_path("cryptoGetBalance"), &request)
            .await?;
        let envelope = extract_envelope_field(&response, RESPONSE_TAG_ACCOUNT_BALANCE)?;
        Ok(AccountBalance::decode(envelope)?)
    }

    pub async fn get_account_info(&self, account_id: EntityId) -> Result<AccountInfo, Error> {
        let request = encode_entity_query(QUERY_TAG_ACCOUNT_INFO, account_id);
        let response = self.unary(&method_path("cryptoGetInfo"), &request).await?;
        let envelope = extract_envelope_field(&response, RESPONSE_TAG_ACCOUNT_INFO)?;
        Ok(AccountInfo::decode(envelope)?)
    }

    pub async fn get_account_records(
        &self,
        account_id: EntityId,
    ) -> Result<Vec<TransactionRecord>, Error> {
        let request = encode_entity_query(QUERY_TAG_ACCOUNT_RECORDS, account_id);
        let response = self
            .unary(&method_path("cryptoGetAccountRecords"), &request)
            .await?;
        let envelope = extract_envelope_field(&response, RESPONSE_TAG_ACCOUNT_RECORDS)?;

        let mut records = Vec::new();
        for field in Reader::new(envelope).read_all()? {
            if let Some(bytes) = field.value.as_bytes() {
                records.push(TransactionRecord::decode(bytes)?);
            }
        }
        Ok(records)
    }

    pub async fn get_token_info(&self, token_id: EntityId) -> Result<TokenInfo, Error> {
        let request = encode_entity_query(QUERY_TAG_TOKEN_INFO, token_id);
        let response = self.unary(&method_path("tokenGetInfo"), &request).await?;
        let envelope = extract_envelope_field(&response, RESPONSE_TAG_TOKEN_INFO)?;
        Ok(TokenInfo::decode(envelope)?)
    }

    /// Hedera serves token balances as part of the account-balance response
    /// rather than a standalone RPC.
    pub async fn get_token_balances(&self, account_id: EntityId) -> Result<Vec<TokenBalance>, Error> {
        Ok(self.get_account_balance(account_id).await?.token_balances)
    }

    pub async fn get_contract_info(
        &self,
        contract: ContractAddress,
    ) -> Result<ContractInfo, Error> {
        let contract_id = contract.native_id()?;
        let request = encode_entity_query(QUERY_TAG_CONTRACT_INFO, contract_id);
        let response = self
            .unary(&method_path("contractGetInfo"), &request)
            .await?;
        let envelope = extract_envelope_field(&response, RESPONSE_TAG_CONTRACT_INFO)?;
        Ok(ContractInfo::decode(envelope)?)
    }

    pub async fn contract_call(
        &self,
        contract: ContractAddress,
        function_parameters: &[u8],
        gas: u64,
    ) -> Result<ContractCallResult, Error> {
        let mut body = Writer::new();
        body.write_message_field(1, response_header(RESPONSE_TYPE_ANSWER_ONLY));

        match contract {
            ContractAddress::Native(id) => {
                let mut id_writer = Writer::new();
                id.encode(&mut id_writer);
                body.write_message_field(2, id_writer);
            }
            ContractAddress::Evm(address) => {
                body.write_bytes_field(3, &address);
            }
        }
        if gas != 0 {
            body.write_uint_field(4, gas);
        }
        if !function_parameters.is_empty() {
            body.write_bytes_field(5, function_parameters);
        }

        let request = wrap_query(QUERY_TAG_CONTRACT_CALL_LOCAL, body).into_bytes();
        let response = self
            .unary(&method_path("contractCallLocalMethod"), &request)
            .await?;
        let envelope = extract_envelope_field(&response, RESPONSE_TAG_CONTRACT_CALL_LOCAL)?;
        Ok(ContractCallResult::decode(envelope)?)
    }

    pub async fn get_transaction_receipt(
        &self,
        transaction_id: &TransactionId,
    ) -> Result<TransactionReceipt, Error> {
        let request = encode_transaction_id_query(QUERY_TAG_RECEIPT, transaction_id);
        let response = self
            .unary(&method_path("getTransactionReceipts"), &request)
            .await?;
        let envelope = extract_envelope_field(&response, RESPONSE_TAG_RECEIPT)?;
        Ok(TransactionReceipt::decode(envelope)?)
    }

    pub async fn get_transaction_record(
        &self,
        transaction_id: &TransactionId,
    ) -> Result<TransactionRecord, Error> {
        let request = encode_transaction_id_query(QUERY_TAG_RECORD, transaction_id);
        let response = self
            .unary(&method_path("getTxRecordByTxID"), &request)
            .await?;
        let envelope = extract_envelope_field(&response, RESPONSE_TAG_RECORD)?;
        Ok(TransactionRecord::decode(envelope)?)
    }

    pub async fn get_schedule_info(&self, schedule_id: EntityId) -> Result<ScheduleInfo, Error> {
        let request = encode_entity_query(QUERY_TAG_SCHEDULE, schedule_id);
        let response = self
            .unary(&method_path("getScheduleInfo"), &request)
            .await?;
        let envelope = extract_envelope_field(&response, RESPONSE_TAG_SCHEDULE)?;
        Ok(ScheduleInfo::decode(envelope)?)
    }

    /// Submits a raw, already-serialized transaction. Unlike the query
    /// operations above, the response carries no envelope — just the flat
    /// `(precheck_code, cost)` pair.
    pub async fn submit_transaction(
        &self,
        raw_transaction: &[u8],
    ) -> Result<PrecheckResult, Error> {
        let response = self
            .unary(&method_path("submitTransaction"), raw_transaction)
            .await?;
        let result = PrecheckResult::decode(&response)?;
        debug!(code = result.precheck_code, cost = result.cost, "submitted transaction");

        if !is_precheck_success(result.precheck_code) {
            return Err(Error::PrecheckFailed {
                code: result.precheck_code,
            });
        }

        Ok(result)
    }
}
