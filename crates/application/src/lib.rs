//! Ferrous Resolver Application Layer
//!
//! Ports the resolver depends on, and the services that drive them.
pub mod ports;
pub mod services;

pub use services::{resolve_aliases, RandomAddressSelector, Resolver};
