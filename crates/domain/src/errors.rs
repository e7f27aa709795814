use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("CNAME loop detected at {name}")]
    AliasLoopDetected { name: String },

    #[error("CNAME chain for {name} exceeds {max_depth} aliases")]
    AliasChainTooLong { name: String, max_depth: usize },

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Reverse lookup not supported for {0}")]
    UnsupportedReverseAddress(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport connection reset by {server}")]
    TransportConnectionReset { server: String },

    #[error("Transport error with {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Failures of the network path rather than of the data that came back.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::TransportConnectionReset { .. }
                | DomainError::Transport { .. }
        )
    }
}
