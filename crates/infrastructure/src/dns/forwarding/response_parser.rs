use super::record_type_map::RecordTypeMapper;
use ferrous_resolver_domain::{DnsMessage, DnsRecord, DomainError, ResponseCode};
use hickory_proto::op::{Message, ResponseCode as HickoryResponseCode};
use hickory_proto::rr::{Name, RData, Record};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsMessage, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let parsed = DnsMessage {
            id: message.id(),
            response_code: Self::map_rcode(message.response_code()),
            truncated: message.truncated(),
            answers: Self::convert_records(message.answers()),
            authority: Self::convert_records(message.name_servers()),
            additional: Self::convert_records(message.additionals()),
        };

        debug!(
            id = parsed.id,
            rcode = %parsed.response_code,
            answers = parsed.answers.len(),
            authority = parsed.authority.len(),
            truncated = parsed.truncated,
            "DNS response parsed"
        );

        Ok(parsed)
    }

    /// Parse and reject a response whose ID does not answer our query.
    pub fn parse_for(response_bytes: &[u8], expected_id: u16) -> Result<DnsMessage, DomainError> {
        let parsed = Self::parse(response_bytes)?;
        if parsed.id != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                parsed.id, expected_id
            )));
        }
        Ok(parsed)
    }

    fn convert_records(records: &[Record]) -> Vec<DnsRecord> {
        records.iter().map(Self::convert_record).collect()
    }

    fn convert_record(record: &Record) -> DnsRecord {
        let data = match record.data() {
            RData::A(a) => a.0.to_string(),
            RData::AAAA(aaaa) => aaaa.0.to_string(),
            RData::CNAME(canonical) => name_text(canonical),
            RData::PTR(ptr) => name_text(ptr),
            RData::NS(ns) => name_text(ns),
            other => other.to_string(),
        };

        DnsRecord::new(
            name_text(record.name()),
            RecordTypeMapper::from_hickory(record.record_type()),
            RecordTypeMapper::class_from_hickory(record.dns_class()),
            record.ttl(),
            data,
        )
    }

    fn map_rcode(rcode: HickoryResponseCode) -> ResponseCode {
        ResponseCode::from_u16(u16::from(rcode))
    }
}

// Answers carry fully qualified names; callers compare against what the
// user typed, which usually has no trailing dot.
fn name_text(name: &Name) -> String {
    let text = name.to_utf8();
    match text.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => text,
    }
}
