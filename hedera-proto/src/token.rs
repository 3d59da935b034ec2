use hedera_codec::{Reader, Writer};

use crate::entity_id::EntityId;
use crate::error::Error;

/// Fungible or non-fungible token metadata, as returned by a
/// `tokenGetInfo` query.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub token_id: EntityId,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub total_supply: u64,
    pub treasury_account_id: Option<EntityId>,
    pub deleted: bool,
    pub memo: String,
}

impl TokenInfo {
    pub fn encode(&self, w: &mut Writer) {
        let mut id = Writer::new();
        self.token_id.encode(&mut id);
        w.write_message_field(1, id);

        if !self.name.is_empty() {
            w.write_string_field(2, &self.name);
        }
        if !self.symbol.is_empty() {
            w.write_string_field(3, &self.symbol);
        }
        if self.decimals != 0 {
            w.write_uint_field(4, self.decimals as u64);
        }
        if self.total_supply != 0 {
            w.write_uint_field(5, self.total_supply);
        }
        if let Some(treasury) = &self.treasury_account_id {
            let mut inner = Writer::new();
            treasury.encode(&mut inner);
            w.write_message_field(6, inner);
        }
        if self.deleted {
            w.write_bool_field(7, true);
        }
        if !self.memo.is_empty() {
            w.write_string_field(8, &self.memo);
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
                        .ok_or(Error::MalformedResponse("tokenId"))?;
                    info.token_id = EntityId::decode(bytes)?;
                }
                2 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("name"))?;
                    info.name = String::from_utf8_lossy(bytes).into_owned();
                }
                3 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("symbol"))?;
                    info.symbol = String::from_utf8_lossy(bytes).into_owned();
                }
                4 => info.decimals = field.value.as_varint().unwrap_or(0) as u32,
                5 => info.total_supply = field.value.as_varint().unwrap_or(0),
                6 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("treasuryAccountId"))?;
                    info.treasury_account_id = Some(EntityId::decode(bytes)?);
                }
                7 => info.deleted = field.value.as_varint().unwrap_or(0) != 0,
                8 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("memo"))?;
                    info.memo = String::from_utf8_lossy(bytes).into_owned();
                }
                _ => {}
            }
        }

        Ok(info)
    }
}

/// One account's balance of one token, as returned inside a
/// `tokenGetBalance`/`cryptoGetAccountBalance` response list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TokenBalance {
    pub token_id: EntityId,
    pub balance: u64,
    pub decimals: u32,
}

impl TokenBalance {
    pub fn encode(&self, w: &mut Writer) {
        let mut id = Writer::new();
        self.token_id.encode(&mut id);
        w.write_message_field(1, id);

        if self.balance != 0 {
            w.write_uint_field(2, self.balance);
        }
        if self.decimals != 0 {
            w.write_uint_field(3, self.decimals as u64);
        }
    }

    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut balance = Self::default();

        for field in Reader::new(buf).read_all()? {
            match field.number {
                1 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("tokenId"))?;
                    balance.token_id = EntityId::decode(bytes)?;
                }
                2 => balance.balance = field.value.as_varint().unwrap_or(0),
                3 => balance.decimals = field.value.as_varint().unwrap_or(0) as u32,
                _ => {}
            }
        }

        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_info_round_trips() {
        let info = TokenInfo {
            token_id: EntityId::new(0, 0, 9),
            name: "Widget".to_string(),
            symbol: "WDG".to_string(),
            decimals: 2,
            total_supply: 1_000_000,
            treasury_account_id: Some(EntityId::new(0, 0, 2)),
            deleted: false,
            memo: String::new(),
        };

        let mut w = Writer::new();
        info.encode(&mut w);
        assert_eq!(TokenInfo::decode(&w.into_bytes()).unwrap(), info);
    }

    #[test]
    fn token_balance_round_trips() {
        let balance = TokenBalance {
            token_id: EntityId::new(0, 0, 9),
            balance: 500,
            decimals: 2,
        };

        let mut w = Writer::new();
        balance.encode(&mut w);
        assert_eq!(TokenBalance::decode(&w.into_bytes()).unwrap(), balance);
    }
}
