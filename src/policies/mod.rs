//! Backoff policies.
//!
//! This module groups the knobs that control **how long** the controller waits
//! between a failed attempt and the next one.
//!
//! ## Contents
//! - [`BackoffPolicy`]      the contract: attempt number → delay
//! - [`FixedBackoff`]       constant delay
//! - [`ExponentialBackoff`] `first × factor^(attempt-1)`, capped at `max`
//!
//! ## Quick wiring
//! ```text
//! Retry { backoff: Arc<dyn BackoffPolicy> }
//!      └─► core::retry::Retry::execute uses:
//!           - backoff.next(attempt) after each retryable failure
//! ```
//!
//! ## Defaults
//! - `FixedBackoff::default()` → 1000ms, the controller's initial policy.

mod backoff;
mod exponential;
mod fixed;

pub use backoff::BackoffPolicy;
pub use exponential::ExponentialBackoff;
pub use fixed::FixedBackoff;
