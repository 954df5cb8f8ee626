//! # Function-backed operation (`OperationFn`)
//!
//! [`OperationFn`] wraps a closure `F: Fn(CancellationToken, u64) -> Fut`,
//! producing a fresh future per attempt.
//!
//! ## Concurrency semantics
//! - Each attempt creates a **new** future that owns its own state.
//! - No hidden mutation between attempts; share state through `Arc<...>`
//!   captured by the closure when needed.
//!
//! ## Example
//! ```rust
//! use tokio_util::sync::CancellationToken;
//! use retrier::{Operation, OperationFn};
//!
//! let op = OperationFn::new("fetch", |_ctx: CancellationToken, attempt: u64| async move {
//!     if attempt < 2 {
//!         return Err("not yet");
//!     }
//!     Ok(())
//! });
//!
//! assert_eq!(op.name(), "fetch");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::operations::operation::Operation;

/// Function-backed operation implementation.
#[derive(Debug)]
pub struct OperationFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> OperationFn<F> {
    /// Creates a new function-backed operation.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the operation and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut, E> Operation for OperationFn<F>
where
    F: Fn(CancellationToken, u64) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<(), E>> + Send + 'static,
    E: Send + 'static,
{
    type Error = E;

    fn name(&self) -> &str {
        &self.name
    }

    async fn attempt(&self, ctx: CancellationToken, attempt: u64) -> Result<(), E> {
        (self.f)(ctx, attempt).await
    }
}
