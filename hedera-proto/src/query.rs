//! Query/response envelope wrapping.
//!
//! Every top-level query carries a header and a body inside a single
//! length-delimited field whose number is the service-specific query tag.
//! Responses reverse this: the outer envelope carries the service-specific
//! response field, and the core reads the domain record directly out of
//! that field's bytes — this crate does not model the (header, record)
//! nesting a full response message would otherwise carry, since the
//! header is request-side bookkeeping the core never needs to round-trip
//! (see DESIGN.md, "response envelope shape").

use hedera_codec::{Reader, Writer};

use crate::entity_id::EntityId;
use crate::error::Error;

/// `ResponseHeader.responseType` value meaning "answer only, no state proof".
pub const RESPONSE_TYPE_ANSWER_ONLY: i32 = 0;

pub const QUERY_TAG_RECEIPT: u32 = 14;
pub const QUERY_TAG_RECORD: u32 = 15;
pub const QUERY_TAG_SCHEDULE: u32 = 53;

pub const RESPONSE_TAG_RECEIPT: u32 = 21;
pub const RESPONSE_TAG_RECORD: u32 = 22;
pub const RESPONSE_TAG_SCHEDULE: u32 = 153;

/// Builds a `ResponseHeader` with `responseType` set at field 2.
pub fn response_header(response_type: i32) -> Writer {
    let mut header = Writer::new();
    if response_type != 0 {
        header.write_int_field(2, response_type as i64);
    }
    header
}

/// Wraps `body` as the envelope's single length-delimited field `tag`.
pub fn wrap_query(tag: u32, body: Writer) -> Writer {
    let mut envelope = Writer::new();
    envelope.write_message_field(tag, body);
    envelope
}

/// Scans the top-level envelope fields for the first occurrence of `tag`
/// and returns its length-delimited payload.
pub fn extract_envelope_field<'a>(buf: &'a [u8], tag: u32) -> Result<&'a [u8], Error> {
    for field in Reader::new(buf) {
        let field = field?;
        if field.number == tag {
            return field
                .value
                .as_bytes()
                .ok_or(Error::MalformedResponse("envelope field wire type"));
        }
    }

    Err(Error::MalformedResponse("envelope field"))
}

pub fn encode_schedule_get_info_query(schedule_id: EntityId) -> Vec<u8> {
    let mut body = Writer::new();
    body.write_message_field(1, response_header(RESPONSE_TYPE_ANSWER_ONLY));

    let mut id = Writer::new();
    schedule_id.encode(&mut id);
    body.write_message_field(2, id);

    wrap_query(QUERY_TAG_SCHEDULE, body).into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hedera_codec::Reader;

    #[test]
    fn schedule_query_round_trip() {
        let bytes = encode_schedule_get_info_query(EntityId::new(0, 0, 42));

        let envelope_body = extract_envelope_field(&bytes, QUERY_TAG_SCHEDULE).unwrap();
        let fields = Reader::new(envelope_body).read_all().unwrap();

        let id_field = fields.iter().find(|f| f.number == 2).unwrap();
        let id = EntityId::decode(id_field.value.as_bytes().unwrap()).unwrap();
        assert_eq!(id.num, 42);
    }
}
