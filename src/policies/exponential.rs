//! # Exponential backoff.
//!
//! [`ExponentialBackoff`] grows the delay geometrically with each attempt and
//! caps it at [`ExponentialBackoff::max`].
//!
//! The delay after attempt `n` (1-indexed) is `first × factor^(n-1)`, clamped to
//! `max`, truncated to whole milliseconds. The product is computed in `f64`, so
//! very large attempt numbers saturate at `max` instead of overflowing.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use retrier::{BackoffPolicy, ExponentialBackoff};
//!
//! let backoff = ExponentialBackoff::from_millis(500, 5_000, 2.0);
//!
//! // First retry uses exponent 0.
//! assert_eq!(backoff.next(1), Duration::from_millis(500));
//! assert_eq!(backoff.next(2), Duration::from_millis(1_000));
//! assert_eq!(backoff.next(3), Duration::from_millis(2_000));
//!
//! // 500ms × 2^9 = 256s → capped at 5s.
//! assert_eq!(backoff.next(10), Duration::from_secs(5));
//! ```

use std::time::Duration;

use crate::policies::backoff::BackoffPolicy;

/// Exponentially growing delay with an upper bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialBackoff {
    /// Delay before the first retry.
    pub first: Duration,
    /// Upper bound for any computed delay.
    pub max: Duration,
    /// Base of the power the delay grows by (`>= 1.0` expected).
    pub factor: f64,
}

impl ExponentialBackoff {
    /// Creates an exponential backoff.
    pub fn new(first: Duration, max: Duration, factor: f64) -> Self {
        Self { first, max, factor }
    }

    /// Creates an exponential backoff from millisecond bounds.
    pub fn from_millis(first_ms: u64, max_ms: u64, factor: f64) -> Self {
        Self::new(
            Duration::from_millis(first_ms),
            Duration::from_millis(max_ms),
            factor,
        )
    }
}

impl BackoffPolicy for ExponentialBackoff {
    /// Computes `min(factor^(attempt-1) × first, max)` in whole milliseconds.
    ///
    /// ### Notes
    /// - Sub-millisecond remainders are discarded, not rounded.
    /// - A non-finite intermediate (huge exponent, `NaN` factor) clamps to `max`.
    /// - A zero `first` always yields zero.
    fn next(&self, attempt: u64) -> Duration {
        if self.first.is_zero() {
            return Duration::ZERO;
        }

        let max_ms = self.max.as_nanos() as f64 / 1_000_000.0;
        let exponent = attempt.saturating_sub(1) as f64;
        let first_ms = self.first.as_nanos() as f64 / 1_000_000.0;
        let unclamped_ms = self.factor.powf(exponent) * first_ms;

        let ms = if !unclamped_ms.is_finite() || unclamped_ms > max_ms {
            max_ms
        } else if unclamped_ms < 0.0 {
            0.0
        } else {
            unclamped_ms
        };
        Duration::from_millis(ms as u64)
    }
}
