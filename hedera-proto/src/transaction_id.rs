use std::fmt;
use std::str::FromStr;

use hedera_codec::{Reader, Writer};

use crate::entity_id::EntityId;
use crate::error::Error;
use crate::timestamp::Timestamp;

/// Identifies a transaction so a submit call can be correlated with its
/// later receipt/record.
///
/// String forms: canonical `account@seconds.nanos` (emitted by
/// [`fmt::Display`]) and legacy `account-seconds-nanos` (accepted by
/// [`FromStr`] but never produced).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId {
    pub account_id: EntityId,
    pub valid_start: Timestamp,
    pub scheduled: bool,
    pub nonce: Option<i32>,
}

impl TransactionId {
    pub fn new(account_id: EntityId, valid_start: Timestamp) -> Self {
        Self {
            account_id,
            valid_start,
            scheduled: false,
            nonce: None,
        }
    }

    pub fn encode(&self, w: &mut Writer) {
        let mut valid_start = Writer::new();
        self.valid_start.encode(&mut valid_start);
        w.write_message_field(1, valid_start);

        let mut account = Writer::new();
        self.account_id.encode(&mut account);
        w.write_message_field(2, account);

        if self.scheduled {
            w.write_bool_field(3, true);
        }
        if let Some(nonce) = self.nonce {
            w.write_int_field(4, nonce as i64);
        }
    }

    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut valid_start = None;
        let mut account_id = None;
        let mut scheduled = false;
        let mut nonce = None;

        for field in Reader::new(buf).read_all()? {
            match field.number {
                1 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("transactionValidStart"))?;
                    valid_start = Some(Timestamp::decode(bytes)?);
                }
                2 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("accountID"))?;
                    account_id = Some(EntityId::decode(bytes)?);
                }
                3 => scheduled = field.value.as_varint().unwrap_or(0) != 0,
                4 => nonce = field.value.as_varint().map(|v| v as i32),
                _ => {}
            }
        }

        let account_id = account_id.ok_or(Error::MalformedResponse("accountID"))?;
        let valid_start = valid_start.ok_or(Error::MalformedResponse("transactionValidStart"))?;

        Ok(Self {
            account_id,
            valid_start,
            scheduled,
            nonce,
        })
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.account_id, self.valid_start)
    }
}

impl FromStr for TransactionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        if let Some((account_str, ts_str)) = s.split_once('@') {
            let account_id = account_str.parse()?;
            let valid_start = ts_str.parse()?;
            return Ok(Self::new(account_id, valid_start));
        }

        // legacy `account-seconds-nanos`; the account component itself
        // never contains `-`, so splitting the whole string works.
        let parts: Vec<&str> = s.splitn(3, '-').collect();

        if parts.len() != 3 {
            return Err(Error::InvalidFormat(format!(
                "expected `account@seconds.nanos` or `account-seconds-nanos`, got `{s}`"
            )));
        }

        let account_id: EntityId = parts[0].parse()?;
        let seconds: i64 = parts[1]
            .parse()
            .map_err(|_| Error::InvalidFormat(format!("`{}` is not an integer", parts[1])))?;
        let nanos: i64 = parts[2]
            .parse()
            .map_err(|_| Error::InvalidFormat(format!("`{}` is not an integer", parts[2])))?;

        let valid_start = Timestamp::new(seconds, nanos)?;

        Ok(Self::new(account_id, valid_start))
    }
}
