use super::builders::encode;
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// What the server sends back for one request.
pub enum Reply {
    /// Each message goes out in order; UDP gets one datagram per message,
    /// TCP only the first.
    Send(Vec<Message>),
    Silent,
}

type Handler = Arc<dyn Fn(&Message) -> Reply + Send + Sync>;

/// Loopback nameserver listening on UDP and TCP at the same port.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_requests: Arc<AtomicUsize>,
    tcp_requests: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Same handler for both protocols.
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&Message) -> Reply + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(handler);
        Self::serve(handler.clone(), handler).await
    }

    /// Separate handlers per protocol, e.g. a truncated UDP answer with
    /// the full one over TCP.
    pub async fn start_split<U, T>(udp_handler: U, tcp_handler: T) -> Self
    where
        U: Fn(&Message) -> Reply + Send + Sync + 'static,
        T: Fn(&Message) -> Reply + Send + Sync + 'static,
    {
        Self::serve(Arc::new(udp_handler), Arc::new(tcp_handler)).await
    }

    async fn serve(udp_handler: Handler, tcp_handler: Handler) -> Self {
        let udp = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = udp.local_addr().unwrap();
        let tcp = TcpListener::bind(addr).await.unwrap();

        let udp_requests = Arc::new(AtomicUsize::new(0));
        let tcp_requests = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_count = udp_requests.clone();
        let tcp_count = tcp_requests.clone();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = udp.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            let Ok(request) = Message::from_vec(&buf[..len]) else {
                                continue;
                            };
                            if let Reply::Send(messages) = udp_handler(&request) {
                                for message in messages {
                                    let _ = udp.send_to(&encode(&message), peer).await;
                                }
                            }
                        }
                    }
                    result = tcp.accept() => {
                        if let Ok((stream, _)) = result {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            let handler = tcp_handler.clone();
                            tokio::spawn(serve_tcp(stream, handler));
                        }
                    }
                }
            }
        });

        Self {
            addr,
            udp_requests,
            tcp_requests,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_requests(&self) -> usize {
        self.udp_requests.load(Ordering::SeqCst)
    }

    pub fn tcp_requests(&self) -> usize {
        self.tcp_requests.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve_tcp(mut stream: tokio::net::TcpStream, handler: Handler) {
    let mut len_buf = [0u8; 2];
    if stream.read_exact(&mut len_buf).await.is_err() {
        return;
    }
    let mut body = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    if stream.read_exact(&mut body).await.is_err() {
        return;
    }
    let Ok(request) = Message::from_vec(&body) else {
        return;
    };

    if let Reply::Send(messages) = handler(&request) {
        if let Some(message) = messages.first() {
            let bytes = encode(message);
            let _ = stream.write_all(&(bytes.len() as u16).to_be_bytes()).await;
            let _ = stream.write_all(&bytes).await;
            let _ = stream.flush().await;
        }
    }
}
