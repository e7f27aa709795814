use super::{DomainError, RecordClass, RecordType};
use chrono::{DateTime, Utc};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

const IPV4_REVERSE_SUFFIX: &str = "in-addr.arpa";

/// A single question to send to a nameserver.
///
/// Built fresh for every request and never mutated afterwards. `issued_at`
/// is bookkeeping for callers; nothing in the resolver reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    name: Arc<str>,
    record_type: RecordType,
    class: RecordClass,
    issued_at: DateTime<Utc>,
}

impl DnsQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, class: RecordClass) -> Self {
        Self::issued(name, record_type, class, Utc::now())
    }

    pub fn issued(
        name: impl Into<Arc<str>>,
        record_type: RecordType,
        class: RecordClass,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
            issued_at,
        }
    }

    /// Address query (A, IN) for `domain`.
    pub fn resolve(domain: impl Into<Arc<str>>) -> Self {
        Self::new(domain, RecordType::A, RecordClass::IN)
    }

    pub fn lookup(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self::new(domain, record_type, RecordClass::IN)
    }

    /// PTR query for an IPv4 address in dotted-quad form.
    ///
    /// The octets are reversed (`192.0.2.10` becomes
    /// `10.2.0.192.in-addr.arpa`). IPv6 has no reverse name here and is
    /// rejected.
    pub fn reverse(ip: &str) -> Result<Self, DomainError> {
        let addr: IpAddr = ip
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))?;

        match addr {
            IpAddr::V4(v4) => Ok(Self::new(
                reverse_name(v4),
                RecordType::PTR,
                RecordClass::IN,
            )),
            IpAddr::V6(v6) => Err(DomainError::UnsupportedReverseAddress(v6.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn class(&self) -> RecordClass {
        self.class
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

pub fn reverse_name(ip: Ipv4Addr) -> String {
    let [a, b, c, d] = ip.octets();
    format!("{}.{}.{}.{}.{}", d, c, b, a, IPV4_REVERSE_SUFFIX)
}
