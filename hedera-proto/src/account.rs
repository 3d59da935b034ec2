use hedera_codec::{Reader, Writer};

use crate::entity_id::EntityId;
use crate::error::Error;
use crate::hbar::Hbar;
use crate::timestamp::Timestamp;

/// Account metadata as returned by a `cryptoGetInfo` query.
///
/// Key decoding is out of scope here — cryptographic key handling belongs
/// to an external collaborator — so `key` is kept as opaque bytes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    pub account_id: EntityId,
    pub contract_account_id: String,
    pub balance: Hbar,
    pub key: Vec<u8>,
    pub memo: String,
    pub auto_renew_period_seconds: i64,
    pub expiration_time: Option<Timestamp>,
    pub deleted: bool,
    pub owned_nfts: u64,
}

impl AccountInfo {
    pub fn encode(&self, w: &mut Writer) {
        let mut id = Writer::new();
        self.account_id.encode(&mut id);
        w.write_message_field(1, id);

        if !self.contract_account_id.is_empty() {
            w.write_string_field(2, &self.contract_account_id);
        }
        if self.balance.tinybars() != 0 {
            w.write_int_field(3, self.balance.tinybars());
        }
        if !self.key.is_empty() {
            w.write_bytes_field(4, &self.key);
        }
        if !self.memo.is_empty() {
            w.write_string_field(5, &self.memo);
        }
        if self.auto_renew_period_seconds != 0 {
            w.write_int_field(6, self.auto_renew_period_seconds);
        }
        if let Some(expiration) = &self.expiration_time {
            let mut inner = Writer::new();
            expiration.encode(&mut inner);
            w.write_message_field(7, inner);
        }
        if self.deleted {
            w.write_bool_field(8, true);
        }
        if self.owned_nfts != 0 {
            w.write_uint_field(9, self.owned_nfts);
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
                        .ok_or(Error::MalformedResponse("accountID"))?;
                    info.account_id = EntityId::decode(bytes)?;
                }
                2 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("contractAccountID"))?;
                    info.contract_account_id = String::from_utf8_lossy(bytes).into_owned();
                }
                3 => {
                    info.balance =
                        Hbar::from_tinybars(field.value.as_varint().unwrap_or(0) as i64);
                }
                4 => {
                    info.key = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("key"))?
                        .to_vec();
                }
                5 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("memo"))?;
                    info.memo = String::from_utf8_lossy(bytes).into_owned();
                }
                6 => info.auto_renew_period_seconds = field.value.as_varint().unwrap_or(0) as i64,
                7 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("expirationTime"))?;
                    info.expiration_time = Some(Timestamp::decode(bytes)?);
                }
                8 => info.deleted = field.value.as_varint().unwrap_or(0) != 0,
                9 => info.owned_nfts = field.value.as_varint().unwrap_or(0),
                _ => {}
            }
        }

        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let info = AccountInfo {
            account_id: EntityId::new(0, 0, 7),
            balance: Hbar::from_tinybars(500),
            memo: "hi".to_string(),
            deleted: false,
            owned_nfts: 3,
            ..Default::default()
        };

        let mut w = Writer::new();
        info.encode(&mut w);
        assert_eq!(AccountInfo::decode(&w.into_bytes()).unwrap(), info);
    }
}
