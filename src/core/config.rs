//! # Retry controller configuration.
//!
//! Provides [`RetryConfig`] the settings a [`Retry`](crate::Retry) controller
//! reads on every execution: the retry budget and the active backoff policy.
//!
//! ## Sentinel values
//! - `retries < 0` → unlimited (retry until success or cancellation)
//!
//! ## Budget semantics
//! A failed attempt `n` (1-indexed) is retried when `n <= retries`. With
//! `retries = N` the operation therefore runs at most `N + 1` times: the
//! initial attempt plus `N` retries.

use std::sync::Arc;

use crate::policies::{BackoffPolicy, FixedBackoff};

/// Configuration for a retry controller.
///
/// ## Field semantics
/// - `retries`: number of retries after the first attempt (`< 0` = unlimited)
/// - `backoff`: policy computing the wait after each retryable failure
///
/// ## Notes
/// All fields are public for flexibility. Prefer the helper accessors to avoid
/// sprinkling sentinel checks (`< 0`) across the codebase.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Retry budget; negative means unlimited.
    pub retries: i64,

    /// Active backoff policy.
    ///
    /// Shared, so cloning a config (or a controller) never copies the policy.
    pub backoff: Arc<dyn BackoffPolicy>,
}

impl RetryConfig {
    /// Creates a config with the given budget and the default 1000ms fixed backoff.
    pub fn new(retries: i64) -> Self {
        Self {
            retries,
            backoff: Arc::new(FixedBackoff::default()),
        }
    }

    /// Returns `true` when the budget is unlimited.
    #[inline]
    pub fn is_unlimited(&self) -> bool {
        self.retries < 0
    }

    /// Returns the retry budget as an `Option`.
    ///
    /// - `None` → unlimited
    /// - `Some(n)` → at most `n` retries
    #[inline]
    pub fn retry_limit(&self) -> Option<u64> {
        u64::try_from(self.retries).ok()
    }

    /// Returns whether failed attempt number `attempt` may be retried.
    #[inline]
    pub fn permits_retry(&self, attempt: u64) -> bool {
        match self.retry_limit() {
            None => true,
            Some(limit) => attempt <= limit,
        }
    }
}

impl Default for RetryConfig {
    /// Default configuration:
    ///
    /// - `retries = 3`
    /// - `backoff = FixedBackoff::default()` (1000ms)
    fn default() -> Self {
        Self::new(3)
    }
}
