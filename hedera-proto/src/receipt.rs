use hedera_codec::{Reader, Writer};

use crate::entity_id::EntityId;
use crate::error::Error;
use crate::transaction_id::TransactionId;

/// The entity a transaction created, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreatedEntity {
    Account(EntityId),
    File(EntityId),
    Contract(EntityId),
    Topic(EntityId),
    Token(EntityId),
    Schedule(EntityId),
}

/// The consensus outcome of a single transaction.
///
/// `duplicates` and `children` nest recursively (a receipt may report
/// receipts of duplicate submissions or of child transactions it spawned);
/// both default to empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub status: i32,
    pub transaction_id: TransactionId,
    pub created_entity: Option<CreatedEntity>,
    pub serial_numbers: Vec<i64>,
    pub duplicates: Vec<TransactionReceipt>,
    pub children: Vec<TransactionReceipt>,
}

impl TransactionReceipt {
    pub fn new(status: i32, transaction_id: TransactionId) -> Self {
        Self {
            status,
            transaction_id,
            created_entity: None,
            serial_numbers: Vec::new(),
            duplicates: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn encode(&self, w: &mut Writer) {
        if self.status != 0 {
            w.write_int_field(1, self.status as i64);
        }

        let mut tx_id = Writer::new();
        self.transaction_id.encode(&mut tx_id);
        w.write_message_field(2, tx_id);

        if let Some(created) = &self.created_entity {
            let (field_number, id) = match created {
                CreatedEntity::Account(id) => (3, id),
                CreatedEntity::File(id) => (4, id),
                CreatedEntity::Contract(id) => (5, id),
                CreatedEntity::Topic(id) => (6, id),
                CreatedEntity::Token(id) => (7, id),
                CreatedEntity::Schedule(id) => (8, id),
            };
            let mut inner = Writer::new();
            id.encode(&mut inner);
            w.write_message_field(field_number, inner);
        }

        for serial in &self.serial_numbers {
            w.write_int_field(9, *serial);
        }

        for dup in &self.duplicates {
            let mut inner = Writer::new();
            dup.encode(&mut inner);
            w.write_message_field(10, inner);
        }

        for child in &self.children {
            let mut inner = Writer::new();
            child.encode(&mut inner);
            w.write_message_field(11, inner);
        }
    }

    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut status = 0i32;
        let mut transaction_id = None;
        let mut created_entity = None;
        let mut serial_numbers = Vec::new();
        let mut duplicates = Vec::new();
        let mut children = Vec::new();

        for field in Reader::new(buf).read_all()? {
            match field.number {
                1 => status = field.value.as_varint().unwrap_or(0) as i32,
                2 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("transactionID"))?;
                    transaction_id = Some(TransactionId::decode(bytes)?);
                }
                3..=8 if created_entity.is_none() => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("createdEntity"))?;
                    let id = EntityId::decode(bytes)?;
                    created_entity = Some(match field.number {
                        3 => CreatedEntity::Account(id),
                        4 => CreatedEntity::File(id),
                        5 => CreatedEntity::Contract(id),
                        6 => CreatedEntity::Topic(id),
                        7 => CreatedEntity::Token(id),
                        _ => CreatedEntity::Schedule(id),
                    });
                }
                9 => serial_numbers.push(field.value.as_varint().unwrap_or(0) as i64),
                10 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("duplicateTransactionReceipts"))?;
                    duplicates.push(TransactionReceipt::decode(bytes)?);
                }
                11 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("childTransactionReceipts"))?;
                    children.push(TransactionReceipt::decode(bytes)?);
                }
                _ => {}
            }
        }

        let transaction_id = transaction_id.ok_or(Error::MalformedResponse("transactionID"))?;

        Ok(Self {
            status,
            transaction_id,
            created_entity,
            serial_numbers,
            duplicates,
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::Timestamp;

    fn sample_tx_id() -> TransactionId {
        TransactionId::new(EntityId::new(0, 0, 1), Timestamp::new(10, 20).unwrap())
    }

    #[test]
    fn round_trips_with_created_entity_and_children() {
        let mut receipt = TransactionReceipt::new(22, sample_tx_id());
        receipt.created_entity = Some(CreatedEntity::Token(EntityId::new(0, 0, 99)));
        receipt.serial_numbers = vec![1, 2, 3];
        receipt.children.push(TransactionReceipt::new(22, sample_tx_id()));

        let mut w = Writer::new();
        receipt.encode(&mut w);
        assert_eq!(TransactionReceipt::decode(&w.into_bytes()).unwrap(), receipt);
    }

    #[test]
    fn missing_transaction_id_is_malformed() {
        let w = Writer::new();
        assert_eq!(
            TransactionReceipt::decode(&w.into_bytes()),
            Err(Error::MalformedResponse("transactionID"))
        );
    }
}
