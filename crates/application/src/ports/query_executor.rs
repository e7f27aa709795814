use async_trait::async_trait;
use ferrous_resolver_domain::{DnsMessage, DnsProtocol, DnsQuery, DomainError};

/// Sends one query to one nameserver and hands back the decoded response.
///
/// Retry and timeout policy belong to the implementation. Callers treat any
/// error as opaque and pass it on.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn query(
        &self,
        nameserver: &DnsProtocol,
        query: &DnsQuery,
    ) -> Result<DnsMessage, DomainError>;
}
