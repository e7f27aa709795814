use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// Where and how to reach a nameserver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DnsProtocol {
    Udp { addr: SocketAddr },
    Tcp { addr: SocketAddr },
}

impl DnsProtocol {
    pub fn socket_addr(&self) -> SocketAddr {
        match self {
            DnsProtocol::Udp { addr } | DnsProtocol::Tcp { addr } => *addr,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            DnsProtocol::Udp { .. } => "UDP",
            DnsProtocol::Tcp { .. } => "TCP",
        }
    }

    /// Same address over TCP. Used when a UDP answer comes back truncated.
    pub fn as_tcp(&self) -> Self {
        DnsProtocol::Tcp {
            addr: self.socket_addr(),
        }
    }
}

fn parse_socket_addr(s: &str) -> Option<SocketAddr> {
    if let Ok(addr) = s.parse::<SocketAddr>() {
        return Some(addr);
    }
    let bare = s.trim_start_matches('[').trim_end_matches(']');
    bare.parse::<IpAddr>()
        .ok()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
}

impl FromStr for DnsProtocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(addr_str) = s.strip_prefix("udp://") {
            let addr = parse_socket_addr(addr_str)
                .ok_or_else(|| format!("Invalid UDP address '{}'", addr_str))?;
            return Ok(DnsProtocol::Udp { addr });
        }
        if let Some(addr_str) = s.strip_prefix("tcp://") {
            let addr = parse_socket_addr(addr_str)
                .ok_or_else(|| format!("Invalid TCP address '{}'", addr_str))?;
            return Ok(DnsProtocol::Tcp { addr });
        }
        if s.contains("://") {
            return Err(format!("Unsupported nameserver scheme in '{}'", s));
        }
        parse_socket_addr(s)
            .map(|addr| DnsProtocol::Udp { addr })
            .ok_or_else(|| format!("Invalid nameserver address '{}'", s))
    }
}

impl fmt::Display for DnsProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsProtocol::Udp { addr } => write!(f, "udp://{}", addr),
            DnsProtocol::Tcp { addr } => write!(f, "tcp://{}", addr),
        }
    }
}
