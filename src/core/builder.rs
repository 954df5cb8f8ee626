use std::sync::Arc;

use super::{config::RetryConfig, retry::Retry};
use crate::{
    observers::Observe,
    policies::{BackoffPolicy, ExponentialBackoff, FixedBackoff},
};

/// Builder for constructing a [`Retry`] controller.
///
/// ### Example
/// ```rust
/// use std::time::Duration;
/// use retrier::Retry;
///
/// let retry: Retry<std::io::Error> = Retry::builder()
///     .retries(5)
///     .exponential_backoff(100, 2_000, 2.0)
///     .build();
///
/// assert_eq!(retry.retries(), 5);
/// assert_eq!(retry.delay_for(3), Duration::from_millis(400));
/// ```
pub struct RetryBuilder<E> {
    cfg: RetryConfig,
    observer: Option<Arc<dyn Observe<E>>>,
}

impl<E: 'static> RetryBuilder<E> {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: RetryConfig) -> Self {
        Self {
            cfg,
            observer: None,
        }
    }

    /// Sets the retry budget (`< 0` = unlimited).
    pub fn retries(mut self, retries: i64) -> Self {
        self.cfg.retries = retries;
        self
    }

    /// Retries until success or cancellation.
    pub fn unlimited(self) -> Self {
        self.retries(-1)
    }

    /// Uses a fixed `period_ms` backoff.
    pub fn fixed_backoff(self, period_ms: u64) -> Self {
        self.backoff(FixedBackoff::from_millis(period_ms))
    }

    /// Uses an exponential backoff.
    pub fn exponential_backoff(self, init_ms: u64, max_ms: u64, factor: f64) -> Self {
        self.backoff(ExponentialBackoff::from_millis(init_ms, max_ms, factor))
    }

    /// Uses any [`BackoffPolicy`].
    pub fn backoff<B: BackoffPolicy>(mut self, backoff: B) -> Self {
        self.cfg.backoff = Arc::new(backoff);
        self
    }

    /// Sets the failure observer.
    ///
    /// The observer is called inline on every failed attempt.
    pub fn observer<O: Observe<E>>(mut self, observer: O) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Builds and returns the controller.
    pub fn build(self) -> Retry<E> {
        Retry::from_parts(self.cfg, self.observer)
    }
}
