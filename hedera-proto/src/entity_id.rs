use std::fmt;
use std::str::FromStr;

use hedera_codec::{Reader, Writer};

use crate::error::Error;

/// A shard.realm.num triple, totally ordered lexicographically.
///
/// Specializations (account, token, contract, topic, file, schedule) share
/// this exact structure; the codec treats them uniformly and callers
/// attach domain meaning through the type they wrap it in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId {
    pub shard: u64,
    pub realm: u64,
    pub num: u64,
}

impl EntityId {
    pub fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }

    /// Writes this id's non-default fields into `w` at field numbers 1, 2, 3.
    pub fn encode(&self, w: &mut Writer) {
        if self.shard != 0 {
            w.write_uint_field(1, self.shard);
        }
        if self.realm != 0 {
            w.write_uint_field(2, self.realm);
        }
        if self.num != 0 {
            w.write_uint_field(3, self.num);
        }
    }

    /// Decodes an id from a nested-message sub-slice. Unknown fields are
    /// ignored; all three fields default to 0 when absent.
    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut id = Self::default();

        for field in Reader::new(buf).read_all()? {
            match field.number {
                1 => id.shard = field.value.as_varint().unwrap_or(0),
                2 => id.realm = field.value.as_varint().unwrap_or(0),
                3 => id.num = field.value.as_varint().unwrap_or(0),
                _ => {}
            }
        }

        Ok(id)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

fn parse_decimal_component(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for EntityId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let parts: Vec<&str> = s.split('.').collect();

        if parts.len() != 3 {
            return Err(Error::InvalidFormat(format!(
                "expected `shard.realm.num`, got `{s}`"
            )));
        }

        let mut values = [0u64; 3];

        for (slot, part) in values.iter_mut().zip(parts.iter()) {
            *slot = parse_decimal_component(part).ok_or_else(|| {
                Error::InvalidFormat(format!("`{part}` is not a decimal integer"))
            })?;
        }

        Ok(Self::new(values[0], values[1], values[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_canonical_form() {
        assert_eq!("0.0.123".parse::<EntityId>().unwrap(), EntityId::new(0, 0, 123));
    }

    #[test]
    fn rejects_extra_component() {
        assert!(matches!(
            "0.0.123.4".parse::<EntityId>(),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_whitespace_and_non_decimal() {
        assert!(" 0.0.123".parse::<EntityId>().is_err());
        assert!("0.0.12a".parse::<EntityId>().is_err());
        assert!("0.0.-1".parse::<EntityId>().is_err());
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(EntityId::new(0, 0, 1) < EntityId::new(0, 0, 2));
        assert!(EntityId::new(0, 0, 99) < EntityId::new(0, 1, 0));
        assert!(EntityId::new(0, 1, 0) < EntityId::new(1, 0, 0));
    }

    #[test]
    fn encode_decode_round_trip_basic() {
        let id = EntityId::new(1, 2, 3);
        let mut w = Writer::new();
        id.encode(&mut w);
        assert_eq!(EntityId::decode(&w.into_bytes()).unwrap(), id);
    }

    proptest! {
        #[test]
        fn round_trip_any_triple(shard: u64, realm: u64, num: u64) {
            let id = EntityId::new(shard, realm, num);
            let mut w = Writer::new();
            id.encode(&mut w);
            prop_assert_eq!(EntityId::decode(&w.into_bytes()).unwrap(), id);

            let s = id.to_string();
            prop_assert_eq!(s.parse::<EntityId>().unwrap(), id);
        }
    }
}
