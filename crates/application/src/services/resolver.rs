use super::address_selection::RandomAddressSelector;
use super::alias_resolution::{resolve_aliases_bounded, DEFAULT_MAX_ALIAS_DEPTH};
use crate::ports::{AddressSelector, QueryExecutor};
use ferrous_resolver_domain::{DnsMessage, DnsProtocol, DnsQuery, DomainError, RecordType};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Stub resolver bound to one nameserver.
///
/// Every call builds its own [`DnsQuery`] and hands it to the executor;
/// nothing is shared between calls except the read-only configuration, so
/// one `Resolver` can serve any number of concurrent lookups.
pub struct Resolver {
    nameserver: DnsProtocol,
    executor: Arc<dyn QueryExecutor>,
    selector: Arc<dyn AddressSelector>,
    max_alias_depth: usize,
}

impl Resolver {
    pub fn new(nameserver: DnsProtocol, executor: Arc<dyn QueryExecutor>) -> Self {
        Self {
            nameserver,
            executor,
            selector: Arc::new(RandomAddressSelector::new()),
            max_alias_depth: DEFAULT_MAX_ALIAS_DEPTH,
        }
    }

    pub fn with_selector(mut self, selector: Arc<dyn AddressSelector>) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_max_alias_depth(mut self, max_alias_depth: usize) -> Self {
        self.max_alias_depth = max_alias_depth;
        self
    }

    pub fn nameserver(&self) -> &DnsProtocol {
        &self.nameserver
    }

    /// One IPv4 address for `domain`, picked among everything the answer
    /// leads to.
    #[instrument(skip(self), fields(nameserver = %self.nameserver))]
    pub async fn resolve(&self, domain: &str) -> Result<IpAddr, DomainError> {
        let query = DnsQuery::resolve(domain);
        let response = self.executor.query(&self.nameserver, &query).await?;
        self.extract_address(&query, &response)
    }

    /// Every address the answer leads to, in discovery order.
    #[instrument(skip(self), fields(nameserver = %self.nameserver))]
    pub async fn resolve_all(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError> {
        let query = DnsQuery::resolve(domain);
        let response = self.executor.query(&self.nameserver, &query).await?;
        self.extract_addresses(&query, &response)
    }

    /// Raw response for any record type. No alias handling.
    #[instrument(skip(self), fields(nameserver = %self.nameserver))]
    pub async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<DnsMessage, DomainError> {
        let query = DnsQuery::lookup(domain, record_type);
        self.executor.query(&self.nameserver, &query).await
    }

    /// Raw PTR response for an IPv4 address.
    #[instrument(skip(self), fields(nameserver = %self.nameserver))]
    pub async fn reverse(&self, ip: &str) -> Result<DnsMessage, DomainError> {
        let query = DnsQuery::reverse(ip)?;
        self.executor.query(&self.nameserver, &query).await
    }

    pub fn extract_address(
        &self,
        query: &DnsQuery,
        response: &DnsMessage,
    ) -> Result<IpAddr, DomainError> {
        let addresses = self.extract_addresses(query, response)?;
        let address = self.selector.select(&addresses);

        debug!(
            domain = %query.name(),
            candidates = addresses.len(),
            selected = %address,
            "Address selected"
        );

        Ok(address)
    }

    pub fn extract_addresses(
        &self,
        query: &DnsQuery,
        response: &DnsMessage,
    ) -> Result<Vec<IpAddr>, DomainError> {
        let payloads =
            resolve_aliases_bounded(&response.answers, query.name(), self.max_alias_depth)?;

        let addresses: Vec<IpAddr> = payloads
            .iter()
            .filter_map(|data| match data.parse::<Ipv4Addr>() {
                Ok(ip) => Some(IpAddr::V4(ip)),
                Err(_) => {
                    warn!(domain = %query.name(), data = %data, "Skipping unparseable A record");
                    None
                }
            })
            .collect();

        if addresses.is_empty() {
            debug!(
                domain = %query.name(),
                rcode = %response.response_code,
                answers = response.answers.len(),
                "No address in response"
            );
            return Err(DomainError::RecordNotFound(format!(
                "DNS request for {} did not return a valid answer",
                query.name()
            )));
        }

        Ok(addresses)
    }
}
