//! DNS query construction in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use ferrous_resolver_domain::{DnsQuery, DomainError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Serialize `query` as a recursive query with a single question.
    pub fn build_query(query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        Self::build_query_with_id(query).map(|(_, bytes)| bytes)
    }

    /// Like [`MessageBuilder::build_query`], also returning the random
    /// message ID so the response can be matched against it.
    pub fn build_query_with_id(query: &DnsQuery) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(query.name()).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", query.name(), e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(&query.record_type()));
        question.set_query_class(RecordTypeMapper::class_to_hickory(&query.class()));

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(question);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    pub(crate) fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrous_resolver_domain::RecordType;

    #[test]
    fn test_build_sets_recursion_desired() {
        let bytes = MessageBuilder::build_query(&DnsQuery::resolve("example.com")).unwrap();

        assert!(bytes.len() >= 12, "DNS message too short: {} bytes", bytes.len());
        assert_eq!(bytes[2] & 0x01, 0x01, "RD flag should be set");
    }

    #[test]
    fn test_wire_id_matches_returned_id() {
        let (id, bytes) =
            MessageBuilder::build_query_with_id(&DnsQuery::lookup("example.com", RecordType::MX))
                .unwrap();

        assert_eq!(u16::from_be_bytes([bytes[0], bytes[1]]), id);
    }

    #[test]
    fn test_question_round_trips_through_hickory() {
        let query = DnsQuery::reverse("192.0.2.7").unwrap();
        let bytes = MessageBuilder::build_query(&query).unwrap();

        let message = Message::from_vec(&bytes).unwrap();
        let question = &message.queries()[0];
        assert_eq!(question.name().to_utf8(), "7.2.0.192.in-addr.arpa.");
        assert_eq!(question.query_type(), hickory_proto::rr::RecordType::PTR);
    }

    #[test]
    fn test_label_too_long_is_rejected() {
        let label = "a".repeat(64);
        let result = MessageBuilder::build_query(&DnsQuery::resolve(format!("{}.test", label)));
        assert!(matches!(result, Err(DomainError::InvalidDomainName(_))));
    }
}
