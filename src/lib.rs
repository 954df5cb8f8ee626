//! # retrier
//!
//! **retrier** runs an async operation until it succeeds, a retry budget is
//! exhausted, or a [`CancellationToken`](tokio_util::sync::CancellationToken)
//! fires, waiting between attempts according to a pluggable backoff policy.
//!
//! ## Architecture
//! ```text
//!  ┌────────────────────┐      ┌─────────────────────────────┐
//!  │ operation(attempt) │◄─────│  Retry (controller)         │
//!  └────────────────────┘      │  - RetryConfig (budget)     │
//!                              │  - BackoffPolicy (delays)   │
//!                              │  - Observe (failure hook)   │
//!                              └──────┬───────────────┬──────┘
//!                                     ▼               ▼
//!                        ┌──────────────────┐  ┌──────────────────┐
//!                        │  BackoffPolicy   │  │  Observe         │
//!                        │  - FixedBackoff  │  │  - LogObserver   │
//!                        │  - Exponential   │  │  - closures      │
//!                        │  - custom        │  │  - custom        │
//!                        └──────────────────┘  └──────────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! CheckCancel ─► Invoke ─┬─ Ok  ─► Done(Ok)
//!      ▲                 └─ Err ─► CheckBudget ─┬─ retry ─► Observe + Wait ─┐
//!      │                                        └─ spent ─► Observe ─► Done(Err)
//!      └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Features
//! | Area              | Description                                            | Key types / traits                         |
//! |-------------------|--------------------------------------------------------|--------------------------------------------|
//! | **Controller**    | Retry loop, budget, cancellation-aware waits.          | [`Retry`], [`RetryBuilder`]                |
//! | **Policies**      | Delay between attempts.                                | [`BackoffPolicy`], [`FixedBackoff`], [`ExponentialBackoff`] |
//! | **Observers**     | Synchronous hook on every failed attempt.              | [`Observe`], [`Failure`]                   |
//! | **Operations**    | Named reusable operations.                             | [`Operation`], [`OperationFn`]             |
//! | **Errors**        | Cancellation vs. exhausted budget.                     | [`RetryError`]                             |
//! | **Configuration** | Budget and policy in one place.                        | [`RetryConfig`]                            |
//!
//! ## Optional features
//! - `logging` _(default)_: exports [`LogObserver`], a `tracing`-backed observer.
//!
//! ## Example
//! ```rust
//! use retrier::{Failure, Retry, RetryError};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut retry: Retry<String> = Retry::new(3, |f: &Failure<'_, String>| {
//!         println!("attempt={} will_retry={} next={:?} err={}", f.attempt, f.will_retry, f.next_delay, f.error);
//!     });
//!     retry.set_exponential_backoff(10, 100, 2.0);
//!
//!     let token = CancellationToken::new();
//!     let res = retry
//!         .execute(&token, |attempt| async move {
//!             if attempt <= 2 {
//!                 return Err(format!("flaky #{attempt}"));
//!             }
//!             Ok(())
//!         })
//!         .await;
//!
//!     assert!(res.is_ok());
//!
//!     token.cancel();
//!     let res = retry.execute(&token, |_| async { Ok(()) }).await;
//!     assert!(matches!(res, Err(RetryError::Canceled)));
//! }
//! ```
mod core;
mod error;
mod observers;
mod operations;
mod policies;

// ---- Public re-exports ----

pub use crate::core::{Retry, RetryBuilder, RetryConfig};
pub use error::RetryError;
pub use observers::{Failure, Observe};
pub use operations::{Operation, OperationFn};
pub use policies::{BackoffPolicy, ExponentialBackoff, FixedBackoff};

// Optional: a built-in tracing observer.
// Enabled by default; disable with `default-features = false`.
#[cfg(feature = "logging")]
pub use observers::LogObserver;
