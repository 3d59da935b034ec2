use hedera_proto::Timestamp;

/// Fixed block cadence assumed when converting between block numbers and
/// timestamps. Approximate and explicitly non-authoritative.
pub const BLOCK_CADENCE_SECONDS: i64 = 2;

/// Approximates the consensus timestamp of `block_number`, given the
/// network's start timestamp.
pub fn block_number_to_timestamp(start: Timestamp, block_number: u64) -> Timestamp {
    Timestamp {
        seconds: start.seconds + BLOCK_CADENCE_SECONDS * block_number as i64,
        nanos: start.nanos,
    }
}

/// Approximates the block number in effect at `at`, given the network's
/// start timestamp. Returns 0 for any `at` at or before `start`.
pub fn timestamp_to_block_number(start: Timestamp, at: Timestamp) -> u64 {
    let elapsed = at.seconds - start.seconds;
    if elapsed < 0 {
        0
    } else {
        (elapsed / BLOCK_CADENCE_SECONDS) as u64
    }
}
