use super::{RecordClass, RecordType};
use std::fmt;
use std::sync::Arc;

/// One resource record from a parsed response.
///
/// `data` holds the decoded payload in presentation form: the address text
/// for A/AAAA, the target name for CNAME/PTR/NS, and the record's
/// zone-file rendering for everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: Arc<str>,

    pub record_type: RecordType,

    pub class: RecordClass,

    pub ttl: u32,

    pub data: Arc<str>,
}

impl DnsRecord {
    pub fn new(
        name: impl Into<Arc<str>>,
        record_type: RecordType,
        class: RecordClass,
        ttl: u32,
        data: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
            ttl,
            data: data.into(),
        }
    }

    pub fn has_name(&self, name: &str) -> bool {
        names_equal(&self.name, name)
    }

    pub fn is_type(&self, record_type: RecordType) -> bool {
        self.record_type == record_type
    }
}

impl fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.name, self.ttl, self.class, self.record_type, self.data
        )
    }
}

/// Compares two domain names the way DNS does: ASCII case-insensitive,
/// with an optional trailing root dot on either side.
pub fn names_equal(a: &str, b: &str) -> bool {
    let a = a.strip_suffix('.').unwrap_or(a);
    let b = b.strip_suffix('.').unwrap_or(b);
    a.eq_ignore_ascii_case(b)
}
