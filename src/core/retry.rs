//! # Retry: cancellation-aware retry controller.
//!
//! Repeatedly invokes one operation with:
//! - a retry budget per [`RetryConfig`],
//! - delays per the active [`BackoffPolicy`],
//! - an optional [`Observe`] callback on every failure,
//! - cooperative cancellation via [`CancellationToken`].
//!
//! ## Architecture
//! ```text
//! Retry::execute(token, op)
//!
//! loop {
//!   ├─► token cancelled?          ─► Err(Canceled)   (op and observer not called)
//!   ├─► attempt += 1
//!   ├─► op(attempt)
//!   │       ├─ Ok  ─► Ok(())
//!   │       └─ Err ─► budget allows retry?
//!   │                  ├─ yes ─► delay = backoff.next(attempt)
//!   │                  │         observer(err, attempt, true, delay)
//!   │                  │         select { sleep(delay) ─► continue
//!   │                  │                  token.cancelled() ─► Err(Canceled) }
//!   │                  └─ no  ─► observer(err, attempt, false, 0)
//!   │                            Err(Exhausted { attempts, error })
//! }
//! ```
//!
//! ## Rules
//! - Attempts run **sequentially** within one execution (never parallel).
//! - The attempt counter is **local** to each `execute` call.
//! - The observer runs **inline**, exactly once per failed attempt.
//! - Cancellation is checked at **safe points** only: before each attempt and
//!   during the backoff wait. A failure that completes before the next check is
//!   still observed.
//! - Reconfiguration takes `&mut self`, so it cannot overlap an execution
//!   borrowing the same controller.

use std::{fmt, future::Future, sync::Arc, time::Duration};

use tokio::{select, time};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::{
    core::{builder::RetryBuilder, config::RetryConfig},
    error::RetryError,
    observers::{Failure, Observe},
    operations::Operation,
    policies::{BackoffPolicy, ExponentialBackoff, FixedBackoff},
};

/// Retry controller for operations failing with `E`.
///
/// ### Example
/// ```rust
/// use retrier::{Failure, Retry, RetryError};
/// use tokio_util::sync::CancellationToken;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let mut retry: Retry<&str> = Retry::new(2, |f: &Failure<'_, &str>| {
///         println!("attempt {} failed: {}", f.attempt, f.error);
///     });
///     retry.set_fixed_backoff(10);
///
///     let token = CancellationToken::new();
///     let res = retry
///         .execute(&token, |attempt| async move {
///             if attempt < 3 { Err("busy") } else { Ok(()) }
///         })
///         .await;
///     assert!(res.is_ok());
///
///     let res = retry.execute(&token, |_| async { Err("down") }).await;
///     assert!(matches!(res, Err(RetryError::Exhausted { attempts: 3, error: "down" })));
/// }
/// ```
pub struct Retry<E> {
    config: RetryConfig,
    observer: Option<Arc<dyn Observe<E>>>,
}

impl<E: 'static> Retry<E> {
    /// Creates a controller with `retries` retries, the given observer, and a
    /// 1000ms fixed backoff.
    ///
    /// A negative `retries` retries forever.
    pub fn new<O>(retries: i64, observer: O) -> Self
    where
        O: Observe<E>,
    {
        Self {
            config: RetryConfig::new(retries),
            observer: Some(Arc::new(observer)),
        }
    }

    /// Creates a controller that reports failures to nobody.
    pub fn without_observer(retries: i64) -> Self {
        Self::from_config(RetryConfig::new(retries))
    }

    /// Creates a controller from a prepared [`RetryConfig`], without an observer.
    pub fn from_config(config: RetryConfig) -> Self {
        Self {
            config,
            observer: None,
        }
    }

    /// Returns a builder starting from [`RetryConfig::default`].
    pub fn builder() -> RetryBuilder<E> {
        RetryBuilder::new(RetryConfig::default())
    }

    pub(crate) fn from_parts(config: RetryConfig, observer: Option<Arc<dyn Observe<E>>>) -> Self {
        Self { config, observer }
    }

    /// Sets the number of retries attempted before giving up.
    ///
    /// To retry forever, pass a negative value (e.g. `-1`).
    pub fn set_retries(&mut self, retries: i64) {
        self.config.retries = retries;
    }

    /// Replaces the backoff with a fixed `period_ms` delay.
    pub fn set_fixed_backoff(&mut self, period_ms: u64) {
        self.set_backoff(FixedBackoff::from_millis(period_ms));
    }

    /// Replaces the backoff with an exponential one.
    ///
    /// - `init_ms`: delay after the first failed attempt
    /// - `max_ms`: upper bound for any delay
    /// - `factor`: base of the power the delay grows by
    pub fn set_exponential_backoff(&mut self, init_ms: u64, max_ms: u64, factor: f64) {
        self.set_backoff(ExponentialBackoff::from_millis(init_ms, max_ms, factor));
    }

    /// Installs any [`BackoffPolicy`], including caller-defined ones.
    pub fn set_backoff<B: BackoffPolicy>(&mut self, backoff: B) {
        self.config.backoff = Arc::new(backoff);
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Returns the configured retry budget (negative = unlimited).
    pub fn retries(&self) -> i64 {
        self.config.retries
    }

    /// Returns `true` if the controller retries forever.
    pub fn is_unlimited(&self) -> bool {
        self.config.is_unlimited()
    }

    /// Returns the active backoff policy.
    pub fn backoff(&self) -> &dyn BackoffPolicy {
        self.config.backoff.as_ref()
    }

    /// Computes the delay after failed attempt `attempt` with the active policy.
    ///
    /// `attempt` must be `>= 1`; policies are never called with `0`.
    pub fn delay_for(&self, attempt: u64) -> Duration {
        debug_assert!(attempt >= 1, "backoff attempt must be 1-indexed, got {attempt}");
        self.config.backoff.next(attempt.max(1))
    }

    /// Runs `op` until it succeeds, the retry budget is exhausted, or `token` is cancelled.
    ///
    /// `op` receives the 1-indexed attempt number and produces a fresh future per attempt.
    ///
    /// ### Returns
    /// - `Ok(())` as soon as an attempt succeeds
    /// - `Err(RetryError::Exhausted)` with the last failure once the budget is spent
    /// - `Err(RetryError::Canceled)` if `token` fires before an attempt or during a wait
    ///
    /// ### Cancellation semantics
    /// - Checked **before** every attempt: a cancelled token skips both `op` and the observer.
    /// - Raced **against** every backoff wait: cancellation aborts the sleep immediately.
    /// - Never checked while `op` runs; `op` may watch the token itself.
    pub async fn execute<F, Fut>(
        &self,
        token: &CancellationToken,
        mut op: F,
    ) -> Result<(), RetryError<E>>
    where
        F: FnMut(u64) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let mut attempt: u64 = 0;

        loop {
            if token.is_cancelled() {
                tracing::debug!(attempt, "cancelled before attempt");
                return Err(RetryError::Canceled);
            }

            attempt = attempt.saturating_add(1);
            tracing::trace!(attempt, "attempt starting");

            let delay = match op(attempt).await {
                Ok(()) => {
                    tracing::trace!(attempt, "attempt succeeded");
                    return Ok(());
                }
                Err(error) => self.settle(error, attempt)?,
            };

            let sleep = time::sleep(delay);
            tokio::pin!(sleep);
            select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!(attempt, "cancelled during backoff");
                    return Err(RetryError::Canceled);
                }
                _ = &mut sleep => {}
            }
        }
    }

    /// Runs a named [`Operation`] through [`Retry::execute`].
    ///
    /// Each attempt receives a clone of `token`, so the operation can stop
    /// further retries by cancelling it. Loop diagnostics are recorded inside a
    /// `retry` span tagged with the operation name.
    pub async fn execute_operation<O>(
        &self,
        token: &CancellationToken,
        op: &O,
    ) -> Result<(), RetryError<E>>
    where
        O: Operation<Error = E> + ?Sized,
    {
        let span = tracing::debug_span!("retry", operation = op.name());
        self.execute(token, move |attempt| op.attempt(token.clone(), attempt))
            .instrument(span)
            .await
    }

    /// Decides what follows a failed attempt and notifies the observer.
    ///
    /// Returns the backoff delay when a retry is permitted, or the terminal error.
    fn settle(&self, error: E, attempt: u64) -> Result<Duration, RetryError<E>> {
        if !self.config.permits_retry(attempt) {
            self.notify(&error, attempt, false, Duration::ZERO);
            tracing::debug!(attempt, "retry budget exhausted");
            return Err(RetryError::Exhausted {
                attempts: attempt,
                error,
            });
        }

        let delay = self.delay_for(attempt);
        self.notify(&error, attempt, true, delay);
        tracing::trace!(attempt, delay_ms = delay.as_millis() as u64, "backoff scheduled");
        Ok(delay)
    }

    fn notify(&self, error: &E, attempt: u64, will_retry: bool, next_delay: Duration) {
        if let Some(observer) = &self.observer {
            observer.on_failure(&Failure {
                error,
                attempt,
                will_retry,
                next_delay,
            });
        }
    }
}

impl<E> Clone for Retry<E> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            observer: self.observer.clone(),
        }
    }
}

impl<E: 'static> fmt::Debug for Retry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Retry")
            .field("config", &self.config)
            .field("observer", &self.observer.as_ref().map(|o| o.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug)]
    struct Constant(Duration);

    impl BackoffPolicy for Constant {
        fn next(&self, _attempt: u64) -> Duration {
            self.0
        }
    }

    #[test]
    fn test_new_uses_one_second_fixed_backoff() {
        let retry: Retry<&str> = Retry::without_observer(3);
        assert_eq!(retry.retries(), 3);
        assert!(!retry.is_unlimited());
        assert_eq!(retry.delay_for(1), Duration::from_millis(1000));
        assert_eq!(retry.delay_for(7), Duration::from_millis(1000));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "1-indexed")]
    fn test_delay_for_zero_attempt_panics_in_debug() {
        let retry: Retry<&str> = Retry::without_observer(3);
        let _ = retry.delay_for(0);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_delay_for_zero_attempt_clamps_in_release() {
        let mut retry: Retry<&str> = Retry::without_observer(3);
        retry.set_exponential_backoff(100, 1_000, 2.0);
        assert_eq!(retry.delay_for(0), retry.delay_for(1));
    }

    #[test]
    fn test_set_retries_toggles_unlimited() {
        let mut retry: Retry<&str> = Retry::without_observer(3);
        retry.set_retries(-1);
        assert!(retry.is_unlimited());
        retry.set_retries(0);
        assert!(!retry.is_unlimited());
    }

    #[test]
    fn test_backoff_setters_replace_policy() {
        let mut retry: Retry<&str> = Retry::without_observer(3);

        retry.set_fixed_backoff(250);
        assert_eq!(retry.delay_for(3), Duration::from_millis(250));

        retry.set_exponential_backoff(100, 1_000, 3.0);
        assert_eq!(retry.delay_for(1), Duration::from_millis(100));
        assert_eq!(retry.delay_for(2), Duration::from_millis(300));
        assert_eq!(retry.delay_for(4), Duration::from_millis(1_000));

        retry.set_backoff(Constant(Duration::from_millis(7)));
        assert_eq!(retry.backoff().next(99), Duration::from_millis(7));
    }

    #[test]
    fn test_clone_shares_observer() {
        let retry: Retry<&str> = Retry::new(1, |_f: &Failure<'_, &str>| {});
        let copy = retry.clone();
        assert_eq!(copy.retries(), 1);
        assert!(format!("{copy:?}").contains("closure"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_observer_sees_every_failure() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut retry: Retry<String> = Retry::new(2, move |f: &Failure<'_, String>| {
            sink.lock()
                .unwrap()
                .push((f.error.clone(), f.attempt, f.will_retry, f.next_delay));
        });
        retry.set_fixed_backoff(100);

        let token = CancellationToken::new();
        let res = retry
            .execute(&token, |attempt| async move { Err(format!("boom #{attempt}")) })
            .await;

        match res {
            Err(RetryError::Exhausted { attempts, error }) => {
                assert_eq!(attempts, 3);
                assert_eq!(error, "boom #3");
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                ("boom #1".to_string(), 1, true, Duration::from_millis(100)),
                ("boom #2".to_string(), 2, true, Duration::from_millis(100)),
                ("boom #3".to_string(), 3, false, Duration::ZERO),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_observer_does_not_break_loop() {
        let mut retry: Retry<&str> = Retry::without_observer(1);
        retry.set_fixed_backoff(5);

        let token = CancellationToken::new();
        let res = retry.execute(&token, |_| async { Err("nope") }).await;
        assert!(matches!(res, Err(RetryError::Exhausted { attempts: 2, .. })));
    }

    #[tokio::test]
    async fn test_zero_retries_runs_once() {
        let retry: Retry<&str> = Retry::without_observer(0);
        let token = CancellationToken::new();
        let mut calls = 0;

        let res = retry
            .execute(&token, |_| {
                calls += 1;
                async { Err("once") }
            })
            .await;

        assert!(matches!(res, Err(RetryError::Exhausted { attempts: 1, .. })));
        assert_eq!(calls, 1);
    }
}
