use hedera_codec::Reader;
use hedera_proto::BlockItem;

use crate::error::Error;
use crate::item::{classify, ItemType};

fn require_type(item: &BlockItem, expected: ItemType) -> Result<(), Error> {
    match classify(item.field_number) {
        Some(actual) if actual == expected => Ok(()),
        _ => Err(Error::WrongItemType),
    }
}

/// An `event_transaction` item. The upstream schema for this payload is not
/// part of this protocol's closed surface, so the raw bytes are kept intact
/// rather than speculatively decoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventTransaction {
    pub raw: Vec<u8>,
}

pub fn parse_event_transaction(item: &BlockItem) -> Result<EventTransaction, Error> {
    require_type(item, ItemType::EventTransaction)?;
    Ok(EventTransaction {
        raw: item.payload.clone(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionResult {
    pub raw: Vec<u8>,
}

pub fn parse_transaction_result(item: &BlockItem) -> Result<TransactionResult, Error> {
    require_type(item, ItemType::TransactionResult)?;
    Ok(TransactionResult {
        raw: item.payload.clone(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionOutput {
    pub raw: Vec<u8>,
}

pub fn parse_transaction_output(item: &BlockItem) -> Result<TransactionOutput, Error> {
    require_type(item, ItemType::TransactionOutput)?;
    Ok(TransactionOutput {
        raw: item.payload.clone(),
    })
}

/// One entry of a `StateChanges` item under the ad hoc schema adopted
/// here (field 1 = timestamp, field 2 = change_type); treat as
/// provisional until an authoritative schema is available.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StateChange {
    pub timestamp: Option<i64>,
    pub change_type: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StateChanges {
    pub changes: Vec<StateChange>,
    pub raw: Vec<u8>,
}

pub fn parse_state_changes(item: &BlockItem) -> Result<StateChanges, Error> {
    require_type(item, ItemType::StateChanges)?;

    let mut changes = Vec::new();

    for field in Reader::new(&item.payload).read_all()? {
        let Some(bytes) = field.value.as_bytes() else {
            continue;
        };

        let mut change = StateChange::default();
        for inner in Reader::new(bytes).read_all()? {
            match inner.number {
                1 => change.timestamp = inner.value.as_varint().map(|v| v as i64),
                2 => change.change_type = inner.value.as_varint().map(|v| v as i64),
                _ => {}
            }
        }
        changes.push(change);
    }

    Ok(StateChanges {
        changes,
        raw: item.payload.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hedera_codec::Writer;

    fn item(field_number: u32, payload: Vec<u8>) -> BlockItem {
        BlockItem { field_number, payload }
    }

    #[test]
    fn rejects_wrong_item_type() {
        let wrong = item(5, vec![]);
        assert!(matches!(
            parse_event_transaction(&wrong),
            Err(Error::WrongItemType)
        ));
    }

    #[test]
    fn parses_state_changes_ad_hoc_schema() {
        let mut change = Writer::new();
        change.write_int_field(1, 1700);
        change.write_int_field(2, 3);

        let mut body = Writer::new();
        body.write_message_field(1, change);

        let parsed = parse_state_changes(&item(7, body.into_bytes())).unwrap();
        assert_eq!(parsed.changes.len(), 1);
        assert_eq!(parsed.changes[0].timestamp, Some(1700));
        assert_eq!(parsed.changes[0].change_type, Some(3));
    }
}
