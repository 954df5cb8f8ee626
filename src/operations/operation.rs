//! # Operation abstraction.
//!
//! This module defines the [`Operation`] trait (async, cancelable): a named unit
//! of work that [`Retry::execute_operation`](crate::Retry::execute_operation)
//! invokes once per attempt.
//!
//! An operation receives the execution's [`CancellationToken`] and the
//! 1-indexed attempt number. It may cancel the token itself to stop further
//! retries.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// # Asynchronous, retryable unit of work.
///
/// # Example
/// ```
/// use tokio_util::sync::CancellationToken;
/// use async_trait::async_trait;
/// use retrier::Operation;
///
/// struct Ping;
///
/// #[async_trait]
/// impl Operation for Ping {
///     type Error = std::io::Error;
///
///     fn name(&self) -> &str { "ping" }
///
///     async fn attempt(&self, ctx: CancellationToken, attempt: u64) -> Result<(), Self::Error> {
///         if ctx.is_cancelled() {
///             return Ok(());
///         }
///         // do work...
///         let _ = attempt;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Operation: Send + Sync {
    /// Failure type returned by an attempt.
    type Error: Send;

    /// Returns a stable, human-readable operation name.
    fn name(&self) -> &str;

    /// Runs one attempt.
    ///
    /// `ctx` is a clone of the execution token; cancelling it ends the
    /// execution at the next safe point.
    async fn attempt(&self, ctx: CancellationToken, attempt: u64) -> Result<(), Self::Error>;
}
