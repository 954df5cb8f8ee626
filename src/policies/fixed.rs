//! # Fixed backoff.
//!
//! [`FixedBackoff`] pauses for the same period before every retry.

use std::time::Duration;

use crate::policies::backoff::BackoffPolicy;

/// Waits a constant [`FixedBackoff::period`] between attempts.
///
/// # Example
/// ```rust
/// use std::time::Duration;
/// use retrier::{BackoffPolicy, FixedBackoff};
///
/// let backoff = FixedBackoff::from_millis(500);
/// assert_eq!(backoff.next(1), Duration::from_millis(500));
/// assert_eq!(backoff.next(42), Duration::from_millis(500));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedBackoff {
    /// Delay applied after every failed attempt.
    pub period: Duration,
}

impl FixedBackoff {
    /// Creates a fixed backoff with the given period.
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Creates a fixed backoff from a period in milliseconds.
    pub fn from_millis(period_ms: u64) -> Self {
        Self::new(Duration::from_millis(period_ms))
    }
}

impl Default for FixedBackoff {
    /// Returns a 1000ms fixed backoff (the controller default).
    fn default() -> Self {
        Self::from_millis(1000)
    }
}

impl BackoffPolicy for FixedBackoff {
    fn next(&self, _attempt: u64) -> Duration {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_is_constant() {
        let policy = FixedBackoff::from_millis(250);
        for attempt in 1..20 {
            assert_eq!(
                policy.next(attempt),
                Duration::from_millis(250),
                "attempt {} should wait the fixed period",
                attempt
            );
        }
    }

    #[test]
    fn test_default_is_one_second() {
        assert_eq!(FixedBackoff::default().period, Duration::from_secs(1));
    }

    #[test]
    fn test_zero_period() {
        assert_eq!(FixedBackoff::from_millis(0).next(1), Duration::ZERO);
    }
}
