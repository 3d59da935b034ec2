use hedera_codec::{Reader, Writer};

use crate::entity_id::EntityId;
use crate::error::Error;
use crate::hbar::Hbar;

/// Smart-contract metadata, as returned by a `contractGetInfo` query.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContractInfo {
    pub contract_id: EntityId,
    pub account_id: EntityId,
    pub contract_account_id: String,
    pub balance: Hbar,
    pub deleted: bool,
    pub memo: String,
    pub storage_bytes: u64,
}

impl ContractInfo {
    pub fn encode(&self, w: &mut Writer) {
        let mut id = Writer::new();
        self.contract_id.encode(&mut id);
        w.write_message_field(1, id);

        let mut account = Writer::new();
        self.account_id.encode(&mut account);
        w.write_message_field(2, account);

        if !self.contract_account_id.is_empty() {
            w.write_string_field(3, &self.contract_account_id);
        }
        if self.balance.tinybars() != 0 {
            w.write_int_field(4, self.balance.tinybars());
        }
        if self.deleted {
            w.write_bool_field(5, true);
        }
        if !self.memo.is_empty() {
            w.write_string_field(6, &self.memo);
        }
        if self.storage_bytes != 0 {
            w.write_uint_field(7, self.storage_bytes);
        }
    }

    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut info = Self::default();

        for field in Reader::new(buf).read_all()? {
            match field.number {
                1 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("contractID"))?;
                    info.contract_id = EntityId::decode(bytes)?;
                }
                2 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("accountID"))?;
                    info.account_id = EntityId::decode(bytes)?;
                }
                3 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("contractAccountID"))?;
                    info.contract_account_id = String::from_utf8_lossy(bytes).into_owned();
                }
                4 => {
                    info.balance =
                        Hbar::from_tinybars(field.value.as_varint().unwrap_or(0) as i64);
                }
                5 => info.deleted = field.value.as_varint().unwrap_or(0) != 0,
                6 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("memo"))?;
                    info.memo = String::from_utf8_lossy(bytes).into_owned();
                }
                7 => info.storage_bytes = field.value.as_varint().unwrap_or(0),
                _ => {}
            }
        }

        Ok(info)
    }
}

/// The result of an EVM call, as returned by `contractCallLocal` or
/// embedded in a `ContractFunctionResult` record.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContractCallResult {
    pub contract_id: EntityId,
    pub result: Vec<u8>,
    pub error_message: String,
    pub gas_used: u64,
}

impl ContractCallResult {
    pub fn encode(&self, w: &mut Writer) {
        let mut id = Writer::new();
        self.contract_id.encode(&mut id);
        w.write_message_field(1, id);

        if !self.result.is_empty() {
            w.write_bytes_field(2, &self.result);
        }
        if !self.error_message.is_empty() {
            w.write_string_field(3, &self.error_message);
        }
        if self.gas_used != 0 {
            w.write_uint_field(4, self.gas_used);
        }
    }

    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut result = Self::default();

        for field in Reader::new(buf).read_all()? {
            match field.number {
                1 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("contractID"))?;
                    result.contract_id = EntityId::decode(bytes)?;
                }
                2 => {
                    result.result = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("contractCallResult"))?
                        .to_vec();
                }
                3 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("errorMessage"))?;
                    result.error_message = String::from_utf8_lossy(bytes).into_owned();
                }
                4 => result.gas_used = field.value.as_varint().unwrap_or(0),
                _ => {}
            }
        }

        Ok(result)
    }

    /// True when the call reverted or otherwise failed on the EVM side.
    pub fn is_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_info_round_trips() {
        let info = ContractInfo {
            contract_id: EntityId::new(0, 0, 10),
            account_id: EntityId::new(0, 0, 10),
            balance: Hbar::from_tinybars(0),
            memo: "hi".to_string(),
            storage_bytes: 128,
            ..Default::default()
        };

        let mut w = Writer::new();
        info.encode(&mut w);
        assert_eq!(ContractInfo::decode(&w.into_bytes()).unwrap(), info);
    }

    #[test]
    fn call_result_reports_error_state() {
        let ok = ContractCallResult {
            contract_id: EntityId::new(0, 0, 10),
            result: vec![1, 2, 3],
            gas_used: 21_000,
            ..Default::default()
        };
        assert!(!ok.is_error());

        let reverted = ContractCallResult {
            contract_id: EntityId::new(0, 0, 10),
            error_message: "CONTRACT_REVERT_EXECUTED".to_string(),
            ..Default::default()
        };
        assert!(reverted.is_error());

        let mut w = Writer::new();
        reverted.encode(&mut w);
        assert_eq!(ContractCallResult::decode(&w.into_bytes()).unwrap(), reverted);
    }
}
