//! # Failure observers.
//!
//! This module provides the [`Observe`] trait and the built-in [`LogObserver`].
//!
//! ## Architecture
//! ```text
//! Retry::execute ── attempt fails ──► Failure { error, attempt, will_retry, next_delay }
//!                                              │
//!                                              └──► observer.on_failure(&failure)   (inline, sync)
//!                                                        │
//!                                                   ┌────┴────┬─────────┐
//!                                                   ▼         ▼         ▼
//!                                              LogObserver  closure   custom
//! ```
//!
//! The observer is the only side effect of the retry loop besides its return value.

mod observe;

#[cfg(feature = "logging")]
mod log;

pub use observe::{Failure, Observe};

#[cfg(feature = "logging")]
pub use log::LogObserver;
