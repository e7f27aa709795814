use super::DnsRecord;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseCode {
    #[default]
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u16),
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Other(other),
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Other(code) => write!(f, "RCODE{}", code),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// A decoded DNS response as handed back by an executor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsMessage {
    pub id: u16,

    pub response_code: ResponseCode,

    pub truncated: bool,

    pub answers: Vec<DnsRecord>,

    /// AUTHORITY section (e.g. SOA for NODATA / NXDOMAIN).
    pub authority: Vec<DnsRecord>,

    pub additional: Vec<DnsRecord>,
}

impl DnsMessage {
    pub fn with_answers(answers: Vec<DnsRecord>) -> Self {
        Self {
            answers,
            ..Self::default()
        }
    }

    pub fn is_nxdomain(&self) -> bool {
        self.response_code == ResponseCode::NXDomain
    }

    pub fn is_nodata(&self) -> bool {
        self.response_code == ResponseCode::NoError && self.answers.is_empty()
    }

    /// Every record in answer, authority and additional order.
    pub fn records(&self) -> impl Iterator<Item = &DnsRecord> {
        self.answers
            .iter()
            .chain(self.authority.iter())
            .chain(self.additional.iter())
    }
}
