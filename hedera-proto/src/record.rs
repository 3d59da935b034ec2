use hedera_codec::{Reader, Writer};

use crate::error::Error;
use crate::receipt::TransactionReceipt;
use crate::timestamp::Timestamp;
use crate::transaction_id::TransactionId;
use crate::transfer::Transfer;

/// A transaction's full consensus record: receipt plus the extra detail
/// (hash, memo, fee, transfers) a receipt omits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub receipt: TransactionReceipt,
    pub transaction_hash: Vec<u8>,
    pub consensus_timestamp: Timestamp,
    pub transaction_id: TransactionId,
    pub memo: String,
    pub transaction_fee: u64,
    pub transfer_list: Vec<Transfer>,
}

impl TransactionRecord {
    pub fn encode(&self, w: &mut Writer) {
        let mut receipt = Writer::new();
        self.receipt.encode(&mut receipt);
        w.write_message_field(1, receipt);

        if !self.transaction_hash.is_empty() {
            w.write_bytes_field(2, &self.transaction_hash);
        }

        let mut ts = Writer::new();
        self.consensus_timestamp.encode(&mut ts);
        w.write_message_field(3, ts);

        let mut tx_id = Writer::new();
        self.transaction_id.encode(&mut tx_id);
        w.write_message_field(4, tx_id);

        if !self.memo.is_empty() {
            w.write_string_field(5, &self.memo);
        }
        if self.transaction_fee != 0 {
            w.write_uint_field(6, self.transaction_fee);
        }
        for transfer in &self.transfer_list {
            let mut inner = Writer::new();
            transfer.encode(&mut inner);
            w.write_message_field(7, inner);
        }
    }

    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut receipt = None;
        let mut transaction_hash = Vec::new();
        let mut consensus_timestamp = None;
        let mut transaction_id = None;
        let mut memo = String::new();
        let mut transaction_fee = 0u64;
        let mut transfer_list = Vec::new();

        for field in Reader::new(buf).read_all()? {
            match field.number {
                1 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("receipt"))?;
                    receipt = Some(TransactionReceipt::decode(bytes)?);
                }
                2 => {
                    transaction_hash = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("transactionHash"))?
                        .to_vec();
                }
                3 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("consensusTimestamp"))?;
                    consensus_timestamp = Some(Timestamp::decode(bytes)?);
                }
                4 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("transactionID"))?;
                    transaction_id = Some(TransactionId::decode(bytes)?);
                }
                5 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("memo"))?;
                    memo = String::from_utf8_lossy(bytes).into_owned();
                }
                6 => transaction_fee = field.value.as_varint().unwrap_or(0),
                7 => {
                    let bytes = field
                        .value
                        .as_bytes()
                        .ok_or(Error::MalformedResponse("transferList"))?;
                    transfer_list.push(Transfer::decode(bytes)?);
                }
                _ => {}
            }
        }

        Ok(Self {
            receipt: receipt.ok_or(Error::MalformedResponse("receipt"))?,
            transaction_hash,
            consensus_timestamp: consensus_timestamp
                .ok_or(Error::MalformedResponse("consensusTimestamp"))?,
            transaction_id: transaction_id.ok_or(Error::MalformedResponse("transactionID"))?,
            memo,
            transaction_fee,
            transfer_list,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity_id::EntityId;

    #[test]
    fn round_trips_with_transfers() {
        let tx_id = TransactionId::new(EntityId::new(0, 0, 1), Timestamp::new(5, 6).unwrap());
        let record = TransactionRecord {
            receipt: TransactionReceipt::new(22, tx_id),
            transaction_hash: vec![0xde, 0xad, 0xbe, 0xef],
            consensus_timestamp: Timestamp::new(5, 7).unwrap(),
            transaction_id: tx_id,
            memo: "hi".to_string(),
            transaction_fee: 100_000,
            transfer_list: vec![Transfer::new(
                EntityId::new(0, 0, 2),
                crate::hbar::Hbar::from_tinybars(-500),
                false,
            )],
        };

        let mut w = Writer::new();
        record.encode(&mut w);
        assert_eq!(TransactionRecord::decode(&w.into_bytes()).unwrap(), record);
    }
}
