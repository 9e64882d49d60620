//! Exponential backoff for transient Sheets/mapping fetch failures.
//!
//! Only 429 responses and network-level failures are retried; everything
//! else is returned on the first attempt.

use std::future::Future;
use std::time::Duration;

use crate::error::SheetsError;

fn is_retriable(err: &SheetsError) -> bool {
    matches!(
        err,
        SheetsError::RateLimited { .. } | SheetsError::Http(_)
    )
}

/// Runs `operation`, retrying retriable errors up to `max_retries` extra
/// times. The wait before retry `n` (1-based) is `backoff_base_secs * 2^(n-1)`
/// seconds.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, SheetsError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SheetsError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if !is_retriable(&err) || attempt >= max_retries {
            return Err(err);
        }

        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient fetch error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
