//! # Operation abstractions.
//!
//! This module provides:
//! - [`Operation`] - trait for named async retryable work
//! - [`OperationFn`] - closure-backed implementation

mod operation;
mod operation_fn;

pub use operation::Operation;
pub use operation_fn::OperationFn;
