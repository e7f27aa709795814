pub mod address_selection;
pub mod alias_resolution;
pub mod resolver;

pub use address_selection::{FirstAddressSelector, RandomAddressSelector};
pub use alias_resolution::{resolve_aliases, resolve_aliases_bounded, DEFAULT_MAX_ALIAS_DEPTH};
pub use resolver::Resolver;
