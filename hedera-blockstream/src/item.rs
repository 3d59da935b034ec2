use hedera_proto::BlockItem;

/// The classification of a `BlockItem`'s `oneof`, keyed by whichever field
/// number the item's payload carried first ("first recognized field wins";
/// see [`classify`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    Header,
    StartEvent,
    Unknown,
    EventTransaction,
    TransactionResult,
    TransactionOutput,
    StateChanges,
    StateProof,
}

/// Maps a top-level field number to its `BlockItem` variant. Fields 8, 9,
/// and 10 all classify as `StateProof`; numbers outside 1..=10 have no
/// recognized variant.
pub fn classify(field_number: u32) -> Option<ItemType> {
    match field_number {
        1 => Some(ItemType::Header),
        2 => Some(ItemType::StartEvent),
        3 => Some(ItemType::Unknown),
        4 => Some(ItemType::EventTransaction),
        5 => Some(ItemType::TransactionResult),
        6 => Some(ItemType::TransactionOutput),
        7 => Some(ItemType::StateChanges),
        8 | 9 | 10 => Some(ItemType::StateProof),
        _ => None,
    }
}

pub fn item_type(item: &BlockItem) -> Option<ItemType> {
    classify(item.field_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_table_entry() {
        assert_eq!(classify(1), Some(ItemType::Header));
        assert_eq!(classify(7), Some(ItemType::StateChanges));
        assert_eq!(classify(8), Some(ItemType::StateProof));
        assert_eq!(classify(9), Some(ItemType::StateProof));
        assert_eq!(classify(10), Some(ItemType::StateProof));
        assert_eq!(classify(11), None);
    }
}
