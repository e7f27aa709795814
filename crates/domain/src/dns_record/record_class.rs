use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordClass {
    #[default]
    IN,
    CH,
    HS,
    ANY,
    Unknown(u16),
}

impl RecordClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordClass::IN => "IN",
            RecordClass::CH => "CH",
            RecordClass::HS => "HS",
            RecordClass::ANY => "ANY",
            RecordClass::Unknown(_) => "UNKNOWN",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordClass::IN => 1,
            RecordClass::CH => 3,
            RecordClass::HS => 4,
            RecordClass::ANY => 255,
            RecordClass::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordClass::IN,
            3 => RecordClass::CH,
            4 => RecordClass::HS,
            255 => RecordClass::ANY,
            other => RecordClass::Unknown(other),
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordClass::Unknown(code) => write!(f, "CLASS{}", code),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

impl FromStr for RecordClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" => Ok(RecordClass::IN),
            "CH" => Ok(RecordClass::CH),
            "HS" => Ok(RecordClass::HS),
            "ANY" => Ok(RecordClass::ANY),
            _ => Err(format!("Unknown record class: {}", s)),
        }
    }
}
