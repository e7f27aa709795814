//! Mapping between the domain record types/classes and `hickory_proto`'s.

use ferrous_resolver_domain::{RecordClass, RecordType};
use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::ANY => HickoryRecordType::ANY,
            RecordType::Unknown(code) => HickoryRecordType::from(*code),
        }
    }

    /// Types the domain has no name for come back as `RecordType::Unknown`
    /// carrying the wire code.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::NS => RecordType::NS,
            HickoryRecordType::CNAME => RecordType::CNAME,
            HickoryRecordType::SOA => RecordType::SOA,
            HickoryRecordType::PTR => RecordType::PTR,
            HickoryRecordType::MX => RecordType::MX,
            HickoryRecordType::TXT => RecordType::TXT,
            HickoryRecordType::AAAA => RecordType::AAAA,
            HickoryRecordType::SRV => RecordType::SRV,
            HickoryRecordType::ANY => RecordType::ANY,
            other => RecordType::Unknown(u16::from(other)),
        }
    }

    pub fn class_to_hickory(class: &RecordClass) -> DNSClass {
        match class {
            RecordClass::IN => DNSClass::IN,
            RecordClass::CH => DNSClass::CH,
            RecordClass::HS => DNSClass::HS,
            RecordClass::ANY => DNSClass::ANY,
            RecordClass::Unknown(code) => DNSClass::Unknown(*code),
        }
    }

    pub fn class_from_hickory(class: DNSClass) -> RecordClass {
        match class {
            DNSClass::IN => RecordClass::IN,
            DNSClass::CH => RecordClass::CH,
            DNSClass::HS => RecordClass::HS,
            DNSClass::ANY => RecordClass::ANY,
            other => RecordClass::from_u16(u16::from(other)),
        }
    }
}
