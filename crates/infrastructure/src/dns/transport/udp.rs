//! UDP transport (RFC 1035 §4.2.1).
//!
//! Messages go out unframed. Datagrams that do not come from the server
//! or do not carry the query's ID are dropped and the read continues
//! until the deadline. A truncated answer is returned as-is; retrying over
//! TCP is the caller's job.

use super::{io_error, timeout_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use ferrous_resolver_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let deadline = Instant::now() + timeout;
        let server = self.server_addr;

        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| io_error(server, "Failed to bind UDP socket", e))?;

        let bytes_sent = tokio::time::timeout_at(deadline, socket.send_to(message_bytes, server))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| io_error(server, "Failed to send UDP query", e))?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let (bytes_received, from_addr) =
                tokio::time::timeout_at(deadline, socket.recv_from(&mut recv_buf))
                    .await
                    .map_err(|_| timeout_error(server))?
                    .map_err(|e| io_error(server, "Failed to receive UDP response", e))?;

            if from_addr != server {
                warn!(
                    expected = %server,
                    received_from = %from_addr,
                    "UDP response from unexpected source"
                );
                continue;
            }

            let response = &recv_buf[..bytes_received];
            if !ids_match(message_bytes, response) {
                warn!(server = %server, "UDP response with mismatched ID, waiting for another");
                continue;
            }

            debug!(
                server = %server,
                bytes_received = bytes_received,
                "UDP response received"
            );

            return Ok(TransportResponse {
                bytes: Bytes::copy_from_slice(response),
                protocol_used: "UDP",
            });
        }
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

fn ids_match(query: &[u8], response: &[u8]) -> bool {
    query.len() >= 2 && response.len() >= 2 && query[..2] == response[..2]
}
