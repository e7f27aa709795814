use std::net::IpAddr;

/// Picks one address out of an equally valid set.
pub trait AddressSelector: Send + Sync {
    /// `candidates` is never empty.
    fn select(&self, candidates: &[IpAddr]) -> IpAddr;
}
