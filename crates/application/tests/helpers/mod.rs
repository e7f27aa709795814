#![allow(dead_code)]
#![allow(unused_imports)]

pub mod builders;
pub mod mock_executor;

pub use builders::{a, aaaa, cname, message, ptr};
pub use mock_executor::MockQueryExecutor;
