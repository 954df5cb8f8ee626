//! # Backoff policy contract.
//!
//! [`BackoffPolicy`] maps a 1-indexed attempt number to the delay the
//! controller waits before the next attempt.
//!
//! Implementations must be pure: the same attempt always yields the same delay,
//! with no hidden state and no side effects. The controller treats every
//! implementation opaquely, so built-in and custom policies are interchangeable.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use retrier::BackoffPolicy;
//!
//! /// Linear backoff: 100ms, 200ms, 300ms, ...
//! #[derive(Debug)]
//! struct Linear;
//!
//! impl BackoffPolicy for Linear {
//!     fn next(&self, attempt: u64) -> Duration {
//!         Duration::from_millis(100u64.saturating_mul(attempt))
//!     }
//! }
//!
//! assert_eq!(Linear.next(3), Duration::from_millis(300));
//! ```

use std::fmt::Debug;
use std::time::Duration;

/// Computes the delay before the next attempt.
///
/// `attempt` is the number of attempts made so far (`>= 1`). The first retry is
/// therefore scheduled with `attempt = 1`.
pub trait BackoffPolicy: Debug + Send + Sync + 'static {
    /// Returns the delay to wait after failed attempt number `attempt`.
    fn next(&self, attempt: u64) -> Duration;
}

impl<B: BackoffPolicy + ?Sized> BackoffPolicy for Box<B> {
    fn next(&self, attempt: u64) -> Duration {
        (**self).next(attempt)
    }
}

impl<B: BackoffPolicy + ?Sized> BackoffPolicy for std::sync::Arc<B> {
    fn next(&self, attempt: u64) -> Duration {
        (**self).next(attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug)]
    struct Doubling;

    impl BackoffPolicy for Doubling {
        fn next(&self, attempt: u64) -> Duration {
            Duration::from_millis(attempt * 2)
        }
    }

    #[test]
    fn test_boxed_policy_delegates() {
        let boxed: Box<dyn BackoffPolicy> = Box::new(Doubling);
        assert_eq!(boxed.next(5), Duration::from_millis(10));
    }

    #[test]
    fn test_shared_policy_delegates() {
        let shared: Arc<dyn BackoffPolicy> = Arc::new(Doubling);
        assert_eq!(shared.next(1), Duration::from_millis(2));
    }
}
