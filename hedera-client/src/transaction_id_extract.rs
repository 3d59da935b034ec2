use hedera_codec::Reader;
use hedera_proto::TransactionId;

fn first_field<'a>(buf: &'a [u8], number: u32) -> Option<&'a [u8]> {
    Reader::new(buf)
        .read_all()
        .ok()?
        .into_iter()
        .find(|f| f.number == number)
        .and_then(|f| f.value.as_bytes())
}

/// Candidate transaction-body byte slices, in the order a raw `Transaction`
/// message might carry them: fields 1 and 4 hold body bytes directly; field
/// 5 is a `SignedTransaction` wrapper whose own field 1 holds body bytes.
fn candidate_bodies(raw_transaction: &[u8]) -> Vec<Vec<u8>> {
    let mut candidates = Vec::new();

    for field_number in [1, 4, 2] {
        if let Some(bytes) = first_field(raw_transaction, field_number) {
            candidates.push(bytes.to_vec());
        }
    }

    if let Some(wrapper) = first_field(raw_transaction, 5) {
        if let Some(body) = first_field(wrapper, 1) {
            candidates.push(body.to_vec());
        }
    }

    candidates
}

/// Recovers the `TransactionId` embedded in a raw, already-serialized
/// transaction, needed to correlate a `submitTransaction` call with a later
/// receipt/record lookup. Returns `None` rather than an error when no
/// candidate field decodes to a valid id — extraction is best-effort.
pub fn extract_transaction_id(raw_transaction: &[u8]) -> Option<TransactionId> {
    for body in candidate_bodies(raw_transaction) {
        if let Some(id_bytes) = first_field(&body, 1) {
            if let Ok(id) = TransactionId::decode(id_bytes) {
                return Some(id);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use hedera_codec::Writer;
    use hedera_proto::EntityId;
    use hedera_proto::Timestamp;

    fn sample_id() -> TransactionId {
        TransactionId {
            account_id: EntityId::new(0, 0, 500),
            valid_start: Timestamp::new(1_700_000_000, 0).unwrap(),
            scheduled: false,
            nonce: None,
        }
    }

    fn body_with_transaction_id(id: &TransactionId) -> Vec<u8> {
        let mut id_writer = Writer::new();
        id.encode(&mut id_writer);
        let mut body = Writer::new();
        body.write_message_field(1, id_writer);
        body.into_bytes()
    }

    #[test]
    fn extracts_from_field_one_body_bytes() {
        let id = sample_id();
        let mut tx = Writer::new();
        tx.write_bytes_field(1, &body_with_transaction_id(&id));
        assert_eq!(extract_transaction_id(&tx.into_bytes()), Some(id));
    }

    #[test]
    fn extracts_from_field_four_body_bytes() {
        let id = sample_id();
        let mut tx = Writer::new();
        tx.write_bytes_field(4, &body_with_transaction_id(&id));
        assert_eq!(extract_transaction_id(&tx.into_bytes()), Some(id));
    }

    #[test]
    fn extracts_through_the_signed_transaction_wrapper() {
        let id = sample_id();
        let mut wrapper = Writer::new();
        wrapper.write_bytes_field(1, &body_with_transaction_id(&id));

        let mut tx = Writer::new();
        tx.write_bytes_field(5, &wrapper.into_bytes());

        assert_eq!(extract_transaction_id(&tx.into_bytes()), Some(id));
    }

    #[test]
    fn returns_none_when_no_candidate_decodes() {
        let mut tx = Writer::new();
        tx.write_bool_field(3, true);
        assert_eq!(extract_transaction_id(&tx.into_bytes()), None);
    }
}
