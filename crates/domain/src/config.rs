//! Configuration for the resolver client
//!
//! - `root`: top-level `Config`, file loading and CLI overrides
//! - `resolver`: nameserver, timeout, retry and alias-depth settings
//! - `logging`: log level and output format
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
