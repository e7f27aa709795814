use crate::ports::AddressSelector;
use std::net::IpAddr;
use std::sync::Mutex;

/// Uniform random choice, the resolver's default load spreading.
///
/// Seed it to get a reproducible sequence in tests.
pub struct RandomAddressSelector {
    rng: Mutex<fastrand::Rng>,
}

impl RandomAddressSelector {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl Default for RandomAddressSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressSelector for RandomAddressSelector {
    fn select(&self, candidates: &[IpAddr]) -> IpAddr {
        let index = match self.rng.lock() {
            Ok(mut rng) => rng.usize(..candidates.len()),
            Err(poisoned) => poisoned.into_inner().usize(..candidates.len()),
        };
        candidates[index]
    }
}

/// Always the first candidate. Keeps answers stable when randomness is
/// unwanted.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAddressSelector;

impl AddressSelector for FirstAddressSelector {
    fn select(&self, candidates: &[IpAddr]) -> IpAddr {
        candidates[0]
    }
}
