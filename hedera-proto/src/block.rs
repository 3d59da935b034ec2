use hedera_codec::Reader;

use crate::error::Error;

/// One element of a block's item sequence.
///
/// `BlockItem` is a proto3 `oneof`; this crate keeps the payload opaque
/// (the raw bytes of whichever field was present) rather than eagerly
/// parsing every variant — typed parsing happens on demand in
/// `hedera-blockstream`, which also owns the item-typing dispatch table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockItem {
    /// The field number the payload arrived on (1..=10).
    pub field_number: u32,
    /// The encoded bytes of that field, unparsed.
    pub payload: Vec<u8>,
}

/// A decoded block: its number and ordered item sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub block_number: u64,
    pub items: Vec<BlockItem>,
}

impl Block {
    /// Decodes a `Block` message: a repeated sequence of `BlockItem`
    /// sub-messages at field 1. `block_number` is pulled from the header
    /// item's first sub-field when a header item is present, else it
    /// defaults to 0.
    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut items = Vec::new();

        for field in Reader::new(buf).read_all()? {
            if field.number != 1 {
                continue;
            }

            let item_bytes = field
                .value
                .as_bytes()
                .ok_or(Error::MalformedResponse("BlockItem"))?;

            // first recognized field wins among the BlockItem oneof; unrecognized
            // fields (e.g. from a newer wire format) are skipped rather than
            // shadowing a real variant that follows them
            let recognized = Reader::new(item_bytes)
                .read_all()?
                .into_iter()
                .find(|inner| (1..=10).contains(&inner.number))
                .ok_or(Error::MalformedResponse("BlockItem"))?;

            items.push(BlockItem {
                field_number: recognized.number,
                payload: item_bytes.to_vec(),
            });
        }

        let block_number = items
            .iter()
            .find(|item| item.field_number == 1)
            .and_then(|item| {
                Reader::new(&item.payload)
                    .read_all()
                    .ok()?
                    .into_iter()
                    .find(|f| f.number == 1)
                    .and_then(|f| f.value.as_varint())
            })
            .unwrap_or(0);

        Ok(Self {
            block_number,
            items,
        })
    }
}
