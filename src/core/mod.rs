//! Retry controller runtime.
//!
//! - [`Retry`] the execution loop and its mutators
//! - [`RetryBuilder`] fluent construction
//! - [`RetryConfig`] retry budget and active backoff policy

mod builder;
mod config;
mod retry;

pub use builder::RetryBuilder;
pub use config::RetryConfig;
pub use retry::Retry;
