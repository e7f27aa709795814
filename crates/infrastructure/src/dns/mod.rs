pub mod executor;
pub mod forwarding;
pub mod retry_executor;
pub mod transport;

pub use executor::TransportExecutor;
pub use forwarding::{MessageBuilder, RecordTypeMapper, ResponseParser};
pub use retry_executor::RetryExecutor;
