//! # Example: retry_with_backoff
//!
//! Demonstrates how [`Retry`] re-runs a flaky operation with exponential
//! backoff, reporting each failure through [`LogObserver`].
//!
//! The operation fails twice before succeeding; a second run shows a
//! cancellation arriving during a backoff wait.
//!
//! ## Flow
//! ```text
//! Retry::execute()
//!   ├─► attempt=1 → Err("boom #1")
//!   ├─► observer(attempt=1, will_retry=true, delay=100ms)
//!   ├─► sleep(100ms)
//!   ├─► attempt=2 → Err("boom #2")
//!   ├─► observer(attempt=2, will_retry=true, delay=200ms)
//!   ├─► sleep(200ms)
//!   └─► attempt=3 → Ok(())
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=retrier=trace cargo run --example retry_with_backoff
//! ```

use std::time::Duration;

use retrier::{LogObserver, OperationFn, Retry, RetryError};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("retrier=debug")),
        )
        .init();

    // 1. Controller: 3 retries, 100ms → 200ms → 400ms (capped at 1s)
    let retry = Retry::builder()
        .retries(3)
        .exponential_backoff(100, 1_000, 2.0)
        .observer(LogObserver::named("flaky"))
        .build();

    // 2. An operation that fails twice before succeeding
    let flaky = OperationFn::new("flaky", |_ctx: CancellationToken, attempt: u64| async move {
        println!("[flaky] attempt {attempt}");
        if attempt <= 2 {
            return Err(anyhow::anyhow!("boom #{attempt}"));
        }
        Ok(())
    });

    let token = CancellationToken::new();
    retry.execute_operation(&token, &flaky).await?;
    println!("[flaky] succeeded");

    // 3. Cancel while the controller waits between attempts
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(150)).await;
        println!("[main] cancelling");
        canceller.cancel();
    });

    let res = retry
        .execute(&token, |attempt| async move {
            Err(anyhow::anyhow!("still down (attempt {attempt})"))
        })
        .await;

    match res {
        Err(RetryError::Canceled) => println!("[main] stopped by cancellation"),
        other => anyhow::bail!("unexpected outcome: {other:?}"),
    }
    Ok(())
}
