use hedera_codec::{Reader, Writer};

use crate::error::Error;

/// The flat `(precheck_code, cost)` result of `submitTransaction` — not
/// wrapped in a query/response envelope.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PrecheckResult {
    pub precheck_code: i32,
    pub cost: u64,
}

impl PrecheckResult {
    pub fn encode(&self, w: &mut Writer) {
        if self.precheck_code != 0 {
            w.write_int_field(1, self.precheck_code as i64);
        }
        if self.cost != 0 {
            w.write_uint_field(2, self.cost);
        }
    }

    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut result = Self::default();

        for field in Reader::new(buf).read_all()? {
            match field.number {
                1 => result.precheck_code = field.value.as_varint().unwrap_or(0) as i32,
                2 => result.cost = field.value.as_varint().unwrap_or(0),
                _ => {}
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_successful_precheck_result() {
        let mut w = Writer::new();
        w.write_int_field(1, 22);
        w.write_uint_field(2, 1234);

        let decoded = PrecheckResult::decode(&w.into_bytes()).unwrap();
        assert_eq!(decoded.precheck_code, 22);
        assert_eq!(decoded.cost, 1234);
        assert!(crate::response_code::is_precheck_success(decoded.precheck_code));
    }
}
