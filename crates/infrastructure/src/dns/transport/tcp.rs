//! TCP transport (RFC 1035 §4.2.2): one connection per query, two-byte
//! length prefix on both directions.

use super::{io_error, timeout_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use ferrous_resolver_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::Instant;
use tracing::debug;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn connect(&self, deadline: Instant) -> Result<TcpStream, DomainError> {
        let server = self.server_addr;

        let stream = tokio::time::timeout_at(deadline, TcpStream::connect(server))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| io_error(server, "Failed to connect", e))?;

        stream
            .set_nodelay(true)
            .map_err(|e| io_error(server, "Failed to set TCP_NODELAY", e))?;

        Ok(stream)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let deadline = Instant::now() + timeout;
        let server = self.server_addr;

        let mut stream = self.connect(deadline).await?;

        tokio::time::timeout_at(
            deadline,
            send_with_length_prefix(&mut stream, message_bytes, server),
        )
        .await
        .map_err(|_| timeout_error(server))??;

        debug!(
            server = %server,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        let response_bytes =
            tokio::time::timeout_at(deadline, read_with_length_prefix(&mut stream, server))
                .await
                .map_err(|_| timeout_error(server))??;

        debug!(
            server = %server,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: Bytes::from(response_bytes),
            protocol_used: "TCP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| DomainError::Transport {
        server: server.to_string(),
        reason: format!("Query too large for TCP: {} bytes", message_bytes.len()),
    })?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| io_error(server, "Failed to write length prefix", e))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| io_error(server, "Failed to write DNS message", e))?;
    stream
        .flush()
        .await
        .map_err(|e| io_error(server, "Failed to flush stream", e))?;

    Ok(())
}

pub(crate) async fn read_with_length_prefix<S>(
    stream: &mut S,
    server: SocketAddr,
) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream
        .read_exact(&mut len_buf)
        .await
        .map_err(|e| io_error(server, "Failed to read response length", e))?;

    let response_len = u16::from_be_bytes(len_buf) as usize;
    let mut response = vec![0u8; response_len];
    stream
        .read_exact(&mut response)
        .await
        .map_err(|e| io_error(server, "Failed to read response body", e))?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr() -> SocketAddr {
        "192.0.2.53:53".parse().unwrap()
    }

    #[tokio::test]
    async fn test_length_prefix_framing() {
        let (mut client, mut server) = tokio::io::duplex(1024);
        let message = vec![0xAB, 0xCD, 0x01, 0x00, 0x00, 0x01];

        send_with_length_prefix(&mut client, &message, addr())
            .await
            .unwrap();

        let mut prefix = [0u8; 2];
        server.read_exact(&mut prefix).await.unwrap();
        assert_eq!(u16::from_be_bytes(prefix), 6);

        let mut body = vec![0u8; 6];
        server.read_exact(&mut body).await.unwrap();
        assert_eq!(body, message);
    }

    #[tokio::test]
    async fn test_read_length_prefixed_response() {
        let (mut client, mut server) = tokio::io::duplex(1024);
        server.write_all(&[0x00, 0x03, 0x01, 0x02, 0x03]).await.unwrap();

        let body = read_with_length_prefix(&mut client, addr()).await.unwrap();
        assert_eq!(body, vec![0x01, 0x02, 0x03]);
    }

    #[tokio::test]
    async fn test_read_largest_framed_response() {
        let (mut client, mut server) = tokio::io::duplex(1024);
        let writer = tokio::spawn(async move {
            server.write_all(&[0xFF, 0xFF]).await.unwrap();
            server.write_all(&vec![0x5A; 0xFFFF]).await.unwrap();
        });

        let body = read_with_length_prefix(&mut client, addr()).await.unwrap();
        writer.await.unwrap();

        assert_eq!(body.len(), 0xFFFF);
        assert!(body.iter().all(|&b| b == 0x5A));
    }

    #[tokio::test]
    async fn test_short_body_is_transport_error() {
        let (mut client, mut server) = tokio::io::duplex(1024);
        server.write_all(&[0x00, 0x08, 0x01]).await.unwrap();
        drop(server);

        let result = read_with_length_prefix(&mut client, addr()).await;
        assert!(result.unwrap_err().is_transport_error());
    }

    #[tokio::test]
    async fn test_refused_connection() {
        // Grab a free port, then close it so nothing listens there.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let closed = listener.local_addr().unwrap();
        drop(listener);

        let transport = TcpTransport::new(closed);
        let result = transport.send(&[0x00, 0x01], Duration::from_secs(1)).await;
        assert!(matches!(
            result,
            Err(DomainError::TransportConnectionRefused { .. })
        ));
    }
}
