use crate::DnsProtocol;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// `udp://ip:port`, `tcp://ip:port`, `ip:port` or a bare IP (port 53).
    #[serde(default = "default_nameserver")]
    pub nameserver: String,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Extra attempts after a transport failure.
    #[serde(default = "default_retries")]
    pub retries: u32,

    #[serde(default = "default_max_alias_depth")]
    pub max_alias_depth: usize,
}

impl ResolverConfig {
    pub fn nameserver(&self) -> Result<DnsProtocol, String> {
        self.nameserver.parse()
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            nameserver: default_nameserver(),
            query_timeout_ms: default_query_timeout_ms(),
            retries: default_retries(),
            max_alias_depth: default_max_alias_depth(),
        }
    }
}

fn default_nameserver() -> String {
    "udp://8.8.8.8:53".to_string()
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_retries() -> u32 {
    2
}

fn default_max_alias_depth() -> usize {
    16
}
