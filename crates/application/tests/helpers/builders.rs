use ferrous_resolver_domain::{DnsMessage, DnsRecord, RecordClass, RecordType};

pub fn a(name: &str, ip: &str) -> DnsRecord {
    DnsRecord::new(name, RecordType::A, RecordClass::IN, 300, ip)
}

pub fn aaaa(name: &str, ip: &str) -> DnsRecord {
    DnsRecord::new(name, RecordType::AAAA, RecordClass::IN, 300, ip)
}

pub fn cname(name: &str, target: &str) -> DnsRecord {
    DnsRecord::new(name, RecordType::CNAME, RecordClass::IN, 300, target)
}

pub fn ptr(name: &str, target: &str) -> DnsRecord {
    DnsRecord::new(name, RecordType::PTR, RecordClass::IN, 300, target)
}

pub fn message(answers: Vec<DnsRecord>) -> DnsMessage {
    DnsMessage::with_answers(answers)
}
