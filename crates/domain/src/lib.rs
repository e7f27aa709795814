//! Ferrous Resolver Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_protocol;
pub mod dns_query;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{DnsMessage, ResponseCode};
pub use dns_protocol::{DnsProtocol, DEFAULT_DNS_PORT};
pub use dns_query::{reverse_name, DnsQuery};
pub use dns_record::{names_equal, DnsRecord, RecordClass, RecordType};
pub use errors::DomainError;
