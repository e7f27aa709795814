mod address_selector;
mod query_executor;

pub use address_selector::AddressSelector;
pub use query_executor::QueryExecutor;

pub use ferrous_resolver_domain::{DnsMessage, DnsQuery};
