use async_trait::async_trait;
use ferrous_resolver_application::ports::QueryExecutor;
use ferrous_resolver_domain::{DnsMessage, DnsProtocol, DnsQuery, DomainError};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Executor that answers from a table keyed by query name and records
/// every query it sees.
#[derive(Clone, Default)]
pub struct MockQueryExecutor {
    responses: Arc<RwLock<HashMap<String, DnsMessage>>>,
    error_responses: Arc<RwLock<HashMap<String, DomainError>>>,
    seen: Arc<RwLock<Vec<(DnsProtocol, DnsQuery)>>>,
}

impl MockQueryExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, name: &str, message: DnsMessage) {
        self.responses
            .write()
            .unwrap()
            .insert(name.to_string(), message);
    }

    pub fn set_response_error(&self, name: &str, error: DomainError) {
        self.error_responses
            .write()
            .unwrap()
            .insert(name.to_string(), error);
    }

    pub fn queries(&self) -> Vec<(DnsProtocol, DnsQuery)> {
        self.seen.read().unwrap().clone()
    }

    pub fn last_query(&self) -> Option<DnsQuery> {
        self.seen.read().unwrap().last().map(|(_, q)| q.clone())
    }
}

#[async_trait]
impl QueryExecutor for MockQueryExecutor {
    async fn query(
        &self,
        nameserver: &DnsProtocol,
        query: &DnsQuery,
    ) -> Result<DnsMessage, DomainError> {
        self.seen
            .write()
            .unwrap()
            .push((*nameserver, query.clone()));

        if let Some(err) = self.error_responses.read().unwrap().get(query.name()).cloned() {
            return Err(err);
        }

        self.responses
            .read()
            .unwrap()
            .get(query.name())
            .cloned()
            .ok_or_else(|| DomainError::Transport {
                server: nameserver.to_string(),
                reason: format!("No mock response for {}", query.name()),
            })
    }
}
