pub mod config_bridge;
pub mod fetch_runner;

pub use config_bridge::ConfigBridge;
pub use fetch_runner::FetchRunner;
