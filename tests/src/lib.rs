mod mock_driver;
pub use mock_driver::{MockDriver, RequestLog};

pub mod fixtures;
