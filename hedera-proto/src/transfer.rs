use hedera_codec::{Reader, Writer};

use crate::entity_id::EntityId;
use crate::error::Error;
use crate::hbar::Hbar;

/// A single hbar transfer leg within a transfer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transfer {
    pub account_id: EntityId,
    pub amount: Hbar,
    pub is_approval: bool,
}

impl Transfer {
    pub fn new(account_id: EntityId, amount: Hbar, is_approval: bool) -> Self {
        Self {
            account_id,
            amount,
            is_approval,
        }
    }

    pub fn encode(&self, w: &mut Writer) {
        let mut account = Writer::new();
        self.account_id.encode(&mut account);
        w.write_message_field(1, account);

        if self.amount.tinybars() != 0 {
            w.write_sint_field(2, self.amount.tinybars());
        }
        if self.is_approval {
            w.write_bool_field(3, true);
        }
    }

    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut account_id = None;
        let mut amount = 0i64;
        let mut is_approval = false;

        for field in Reader::new(buf).read_all()? {
            match field.number {
                1 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("accountID"))?;
                    account_id = Some(EntityId::decode(bytes)?);
                }
                2 => {
                    let raw = field.value.as_varint().unwrap_or(0);
                    amount = hedera_codec::zigzag_decode(raw);
                }
                3 => is_approval = field.value.as_varint().unwrap_or(0) != 0,
                _ => {}
            }
        }

        let account_id = account_id.ok_or(Error::MalformedResponse("accountID"))?;

        Ok(Self {
            account_id,
            amount: Hbar::from_tinybars(amount),
            is_approval,
        })
    }
}
