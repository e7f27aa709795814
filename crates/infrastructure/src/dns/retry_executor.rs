use async_trait::async_trait;
use ferrous_resolver_application::ports::QueryExecutor;
use ferrous_resolver_domain::{DnsMessage, DnsProtocol, DnsQuery, DomainError};
use std::sync::Arc;
use tracing::warn;

/// Re-sends a query when the network path fails.
///
/// Only transport errors are retried. A response that arrived and decoded,
/// even an NXDOMAIN, is final, as are malformed responses.
pub struct RetryExecutor {
    inner: Arc<dyn QueryExecutor>,
    retries: u32,
}

impl RetryExecutor {
    pub fn new(inner: Arc<dyn QueryExecutor>, retries: u32) -> Self {
        Self { inner, retries }
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }
}

#[async_trait]
impl QueryExecutor for RetryExecutor {
    async fn query(
        &self,
        nameserver: &DnsProtocol,
        query: &DnsQuery,
    ) -> Result<DnsMessage, DomainError> {
        let mut attempt = 0;

        loop {
            match self.inner.query(nameserver, query).await {
                Err(e) if e.is_transport_error() && attempt < self.retries => {
                    attempt += 1;
                    warn!(
                        server = %nameserver,
                        domain = %query.name(),
                        error = %e,
                        attempt = attempt,
                        max_retries = self.retries,
                        "Retrying query"
                    );
                }
                result => return result,
            }
        }
    }
}
