use std::fmt;
use std::str::FromStr;

use hedera_codec::{Reader, Writer};

use crate::error::Error;

/// Consensus-style timestamp: whole seconds plus a nanosecond offset.
///
/// Invariant: `0 <= nanos < 1_000_000_000`, checked by every constructor
/// (`new`, `decode`, `from_str`) so an out-of-range `Timestamp` can never
/// exist.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i64,
}

impl Timestamp {
    pub fn new(seconds: i64, nanos: i64) -> Result<Self, Error> {
        if !(0..1_000_000_000).contains(&nanos) {
            return Err(Error::InvalidFormat(format!(
                "nanos {nanos} out of range [0, 1e9)"
            )));
        }

        Ok(Self { seconds, nanos })
    }

    pub fn encode(&self, w: &mut Writer) {
        if self.seconds != 0 {
            w.write_int_field(1, self.seconds);
        }
        if self.nanos != 0 {
            w.write_int_field(2, self.nanos);
        }
    }

    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut seconds = 0i64;
        let mut nanos = 0i64;

        for field in Reader::new(buf).read_all()? {
            match field.number {
                1 => seconds = field.value.as_varint().unwrap_or(0) as i64,
                2 => nanos = field.value.as_varint().unwrap_or(0) as i64,
                _ => {}
            }
        }

        Self::new(seconds, nanos)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.seconds, self.nanos)
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let (sec_str, nanos_str) = s
            .split_once('.')
            .ok_or_else(|| Error::InvalidFormat(format!("expected `seconds.nanos`, got `{s}`")))?;

        if nanos_str.is_empty() {
            return Err(Error::InvalidFormat(format!("trailing dot in `{s}`")));
        }

        if !nanos_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidFormat(format!(
                "`{nanos_str}` is not a decimal integer"
            )));
        }

        let seconds: i64 = sec_str
            .parse()
            .map_err(|_| Error::InvalidFormat(format!("`{sec_str}` is not an integer")))?;
        let nanos: i64 = nanos_str
            .parse()
            .map_err(|_| Error::InvalidFormat(format!("`{nanos_str}` is not an integer")))?;

        Self::new(seconds, nanos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_out_of_range_nanos() {
        assert!(Timestamp::new(0, 1_000_000_000).is_err());
        assert!(Timestamp::new(0, -1).is_err());
    }

    #[test]
    fn rejects_trailing_dot() {
        assert!("1700000000.".parse::<Timestamp>().is_err());
    }

    #[test]
    fn rejects_missing_dot() {
        assert!("1700000000".parse::<Timestamp>().is_err());
    }

    proptest! {
        #[test]
        fn round_trip_any_valid_timestamp(seconds: i64, nanos in 0i64..1_000_000_000) {
            let ts = Timestamp::new(seconds, nanos).unwrap();

            let mut w = Writer::new();
            ts.encode(&mut w);
            prop_assert_eq!(Timestamp::decode(&w.into_bytes()).unwrap(), ts);

            prop_assert_eq!(ts.to_string().parse::<Timestamp>().unwrap(), ts);
        }
    }
}
