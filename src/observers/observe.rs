//! # Failure observer trait.
//!
//! Provides [`Observe`] the extension point for reacting to failed attempts.
//!
//! The controller calls [`Observe::on_failure`] **synchronously**, inline with
//! the retry loop, exactly once per failed attempt:
//! - retryable failure → `will_retry = true`, `next_delay` = scheduled backoff;
//! - terminal failure  → `will_retry = false`, `next_delay = 0`.
//!
//! Observers are never called for a successful attempt, nor when cancellation
//! stops the loop before an attempt runs.
//!
//! ## Rules
//! - Keep `on_failure` cheap: the next backoff wait starts only after it returns.
//! - Observers may cancel the execution's token; the pending wait is then aborted.
//!
//! ## Example
//! ```rust
//! use retrier::{Failure, Observe};
//!
//! struct Metrics;
//!
//! impl Observe<std::io::Error> for Metrics {
//!     fn on_failure(&self, failure: &Failure<'_, std::io::Error>) {
//!         if !failure.will_retry {
//!             // export a metric, etc.
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "metrics" }
//! }
//! ```
//!
//! Any `Fn(&Failure<'_, E>)` closure is an observer too:
//! ```rust
//! use retrier::{Failure, Retry};
//!
//! let retry: Retry<std::io::Error> = Retry::new(3, |f: &Failure<'_, std::io::Error>| {
//!     eprintln!("attempt {} failed: {}", f.attempt, f.error);
//! });
//! # let _ = retry;
//! ```

use std::time::Duration;

/// A failed attempt, as reported to an [`Observe`] implementation.
#[derive(Debug)]
pub struct Failure<'a, E> {
    /// The failure returned by the operation, unchanged.
    pub error: &'a E,
    /// 1-indexed number of the attempt that failed.
    pub attempt: u64,
    /// Whether the controller will run another attempt.
    pub will_retry: bool,
    /// Delay before the next attempt (`Duration::ZERO` when `will_retry` is false).
    pub next_delay: Duration,
}

// Manual impls: derive would require `E: Clone`/`E: Copy`.
impl<E> Clone for Failure<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Failure<'_, E> {}

/// Observer of failed attempts.
///
/// ### Implementation requirements
/// - Do not block for long; the call runs inside the retry loop.
/// - Handle errors internally; do not panic.
pub trait Observe<E>: Send + Sync + 'static {
    /// Handles a single failed attempt.
    fn on_failure(&self, failure: &Failure<'_, E>);

    /// Returns the observer name used in diagnostics.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<E, F> Observe<E> for F
where
    F: Fn(&Failure<'_, E>) + Send + Sync + 'static,
{
    fn on_failure(&self, failure: &Failure<'_, E>) {
        self(failure)
    }

    fn name(&self) -> &'static str {
        "closure"
    }
}
