//! # LogObserver — tracing-backed failure reporter
//!
//! A minimal observer that records every failed attempt as a `tracing` event.
//!
//! - retryable failure → `WARN`
//! - terminal failure  → `ERROR`
//!
//! ## Example output (fmt subscriber)
//! ```text
//! WARN retrier: attempt failed, retrying operation="fetch" attempt=1 delay_ms=500 error=connection refused
//! ERROR retrier: attempt failed, giving up operation="fetch" attempt=3 error=connection refused
//! ```

use std::fmt::Display;

use crate::observers::{Failure, Observe};

/// Failure observer that writes to `tracing`.
#[derive(Debug, Clone, Default)]
pub struct LogObserver {
    operation: Option<&'static str>,
}

impl LogObserver {
    /// Construct a new [`LogObserver`].
    #[must_use]
    pub fn new() -> Self {
        Self { operation: None }
    }

    /// Tags every event with `operation = name`.
    #[must_use]
    pub fn named(name: &'static str) -> Self {
        Self {
            operation: Some(name),
        }
    }
}

impl<E: Display> Observe<E> for LogObserver {
    fn on_failure(&self, f: &Failure<'_, E>) {
        let operation = self.operation.unwrap_or("unnamed");
        if f.will_retry {
            tracing::warn!(
                target: "retrier",
                operation,
                attempt = f.attempt,
                delay_ms = f.next_delay.as_millis() as u64,
                error = %f.error,
                "attempt failed, retrying"
            );
        } else {
            tracing::error!(
                target: "retrier",
                operation,
                attempt = f.attempt,
                error = %f.error,
                "attempt failed, giving up"
            );
        }
    }

    fn name(&self) -> &'static str {
        "LogObserver"
    }
}
