//! Error type returned by the retry controller.
//!
//! [`RetryError`] distinguishes the two ways an execution can end without
//! success:
//!
//! - [`RetryError::Canceled`] the caller's cancellation token fired.
//! - [`RetryError::Exhausted`] the retry budget ran out; the last operation
//!   failure is carried unchanged.
//!
//! Helper methods (`as_label`, `as_message`) are provided for logs/metrics.

use thiserror::Error;

/// # Errors produced by [`Retry::execute`](crate::Retry::execute).
///
/// Operation failures are opaque to the controller: whatever the operation
/// returned on its final attempt is handed back inside [`RetryError::Exhausted`].
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RetryError<E> {
    /// The cancellation token fired before an attempt or during a backoff wait.
    #[error("retry canceled")]
    Canceled,

    /// The retry budget is spent; `error` is the failure of the last attempt.
    #[error("retries exhausted after {attempts} attempt(s): {error}")]
    Exhausted {
        /// Total number of attempts made (1-indexed count).
        attempts: u64,
        /// The failure returned by the last attempt.
        error: E,
    },
}

impl<E> RetryError<E> {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use retrier::RetryError;
    ///
    /// let err: RetryError<std::io::Error> = RetryError::Canceled;
    /// assert_eq!(err.as_label(), "retry_canceled");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RetryError::Canceled => "retry_canceled",
            RetryError::Exhausted { .. } => "retry_exhausted",
        }
    }

    /// Returns `true` if the execution stopped because of cancellation.
    pub fn is_canceled(&self) -> bool {
        matches!(self, RetryError::Canceled)
    }

    /// Returns the last operation failure, if the budget was exhausted.
    pub fn last_error(&self) -> Option<&E> {
        match self {
            RetryError::Exhausted { error, .. } => Some(error),
            RetryError::Canceled => None,
        }
    }

    /// Consumes the error and returns the last operation failure, if any.
    ///
    /// # Example
    /// ```
    /// use retrier::RetryError;
    ///
    /// let err = RetryError::Exhausted { attempts: 3, error: "boom" };
    /// assert_eq!(err.into_inner(), Some("boom"));
    /// ```
    pub fn into_inner(self) -> Option<E> {
        match self {
            RetryError::Exhausted { error, .. } => Some(error),
            RetryError::Canceled => None,
        }
    }
}

impl<E: std::fmt::Display> RetryError<E> {
    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RetryError::Canceled => "retry canceled".to_string(),
            RetryError::Exhausted { attempts, error } => {
                format!("attempts={attempts}; last error: {error}")
            }
        }
    }
}
