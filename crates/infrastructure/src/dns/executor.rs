use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport;
use async_trait::async_trait;
use ferrous_resolver_application::ports::QueryExecutor;
use ferrous_resolver_domain::{DnsMessage, DnsProtocol, DnsQuery, DomainError};
use std::time::{Duration, Instant};
use tracing::debug;

const DEFAULT_QUERY_TIMEOUT_MS: u64 = 5000;

/// Remaining budget handed to the TCP retry when the UDP leg already used
/// up the whole timeout.
const MIN_TCP_FALLBACK_TIMEOUT: Duration = Duration::from_millis(500);

/// Sends one query over the wire and decodes the answer.
///
/// Build message, send through the transport for the nameserver's
/// protocol, parse. A truncated UDP answer is retried once over TCP
/// against the same address. The decoded message is returned whatever its
/// RCODE; interpreting NXDOMAIN and friends is left to the caller.
pub struct TransportExecutor {
    timeout: Duration,
}

impl TransportExecutor {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for TransportExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_TIMEOUT_MS)
    }
}

#[async_trait]
impl QueryExecutor for TransportExecutor {
    async fn query(
        &self,
        nameserver: &DnsProtocol,
        query: &DnsQuery,
    ) -> Result<DnsMessage, DomainError> {
        let start = Instant::now();
        let (id, query_bytes) = MessageBuilder::build_query_with_id(query)?;

        let dns_transport = transport::create_transport(nameserver);
        let response = dns_transport.send(&query_bytes, self.timeout).await?;
        let message = ResponseParser::parse_for(&response.bytes, id)?;

        if !(message.truncated && matches!(nameserver, DnsProtocol::Udp { .. })) {
            debug!(
                domain = %query.name(),
                record_type = %query.record_type(),
                protocol = response.protocol_used,
                latency_ms = start.elapsed().as_millis() as u64,
                "Query answered"
            );
            return Ok(message);
        }

        debug!(
            server = %nameserver.socket_addr(),
            "Response truncated (TC bit), retrying via TCP"
        );

        let remaining = self
            .timeout
            .checked_sub(start.elapsed())
            .unwrap_or(MIN_TCP_FALLBACK_TIMEOUT);

        let tcp_transport = transport::create_transport(&nameserver.as_tcp());
        let tcp_response = tcp_transport.send(&query_bytes, remaining).await?;
        let tcp_message = ResponseParser::parse_for(&tcp_response.bytes, id)?;

        debug!(
            domain = %query.name(),
            record_type = %query.record_type(),
            protocol = tcp_response.protocol_used,
            latency_ms = start.elapsed().as_millis() as u64,
            "Query answered"
        );

        Ok(tcp_message)
    }
}
