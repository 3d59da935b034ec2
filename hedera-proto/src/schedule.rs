use hedera_codec::{Reader, Writer};

use crate::entity_id::EntityId;
use crate::error::Error;
use crate::timestamp::Timestamp;
use crate::transaction_id::TransactionId;

/// A scheduled transaction's metadata, as returned by a schedule-info
/// query.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScheduleInfo {
    pub schedule_id: EntityId,
    pub creator_account_id: Option<EntityId>,
    pub execution_time: Option<Timestamp>,
    pub payer_account_id: Option<EntityId>,
    pub expiration_time: Option<Timestamp>,
    pub memo: String,
    pub deletion_time: Option<Timestamp>,
    pub scheduled_transaction_id: Option<TransactionId>,
    pub ledger_id: Option<Vec<u8>>,
    pub wait_for_expiry: bool,
}

impl ScheduleInfo {
    pub fn encode(&self, w: &mut Writer) {
        let mut id = Writer::new();
        self.schedule_id.encode(&mut id);
        w.write_message_field(1, id);

        if let Some(creator) = &self.creator_account_id {
            let mut inner = Writer::new();
            creator.encode(&mut inner);
            w.write_message_field(2, inner);
        }
        if let Some(execution_time) = &self.execution_time {
            let mut inner = Writer::new();
            execution_time.encode(&mut inner);
            w.write_message_field(3, inner);
        }
        if let Some(payer) = &self.payer_account_id {
            let mut inner = Writer::new();
            payer.encode(&mut inner);
            w.write_message_field(4, inner);
        }
        if let Some(expiration) = &self.expiration_time {
            let mut inner = Writer::new();
            expiration.encode(&mut inner);
            w.write_message_field(5, inner);
        }
        if !self.memo.is_empty() {
            w.write_string_field(6, &self.memo);
        }
        if let Some(deletion) = &self.deletion_time {
            let mut inner = Writer::new();
            deletion.encode(&mut inner);
            w.write_message_field(7, inner);
        }
        if let Some(scheduled_tx) = &self.scheduled_transaction_id {
            let mut inner = Writer::new();
            scheduled_tx.encode(&mut inner);
            w.write_message_field(8, inner);
        }
        if let Some(ledger_id) = &self.ledger_id {
            w.write_bytes_field(9, ledger_id);
        }
        if self.wait_for_expiry {
            w.write_bool_field(10, true);
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
                        .ok_or(Error::MalformedResponse("scheduleID"))?;
                    info.schedule_id = EntityId::decode(bytes)?;
                }
                2 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("creatorAccountID"))?;
                    info.creator_account_id = Some(EntityId::decode(bytes)?);
                }
                3 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("executionTime"))?;
                    info.execution_time = Some(Timestamp::decode(bytes)?);
                }
                4 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("payerAccountID"))?;
                    info.payer_account_id = Some(EntityId::decode(bytes)?);
                }
                5 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("expirationTime"))?;
                    info.expiration_time = Some(Timestamp::decode(bytes)?);
                }
                6 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("memo"))?;
                    info.memo = String::from_utf8_lossy(bytes).into_owned();
                }
                7 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("deletionTime"))?;
                    info.deletion_time = Some(Timestamp::decode(bytes)?);
                }
                8 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("scheduledTransactionID"))?;
                    info.scheduled_transaction_id = Some(TransactionId::decode(bytes)?);
                }
                9 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("ledgerId"))?;
                    info.ledger_id = Some(bytes.to_vec());
                }
                10 => info.wait_for_expiry = field.value.as_varint().unwrap_or(0) != 0,
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
    fn round_trips_schedule_info_with_execution_time() {
        let mut info = ScheduleInfo {
            schedule_id: EntityId::new(0, 0, 1337),
            execution_time: Some(Timestamp::new(1700, 42).unwrap()),
            memo: "test schedule".to_string(),
            ..Default::default()
        };

        let mut w = Writer::new();
        info.encode(&mut w);
        let decoded = ScheduleInfo::decode(&w.into_bytes()).unwrap();

        assert_eq!(decoded.schedule_id.num, 1337);
        assert_eq!(decoded.execution_time.unwrap().seconds, 1700);
        assert_eq!(decoded.memo, "test schedule");

        info.wait_for_expiry = true;
        let mut w = Writer::new();
        info.encode(&mut w);
        assert_eq!(ScheduleInfo::decode(&w.into_bytes()).unwrap(), info);
    }
}
