#![allow(dead_code)]
#![allow(unused_imports)]

pub mod builders;
pub mod dns_server_mock;

pub use builders::ResponseBuilder;
pub use dns_server_mock::{MockDnsServer, Reply};
