//! Async runtime glue.
//!
//! The rest of the crate only sleeps, races futures against a deadline and
//! spawns child processes through this module, so the tokio specifics stay
//! in [`tokio_impl`].

use std::future::Future;
use std::time::Duration;

mod tokio_impl;

pub(crate) use tokio_impl::run_shell;

/// Sleep for the specified duration.
pub async fn sleep(duration: Duration) {
    tokio_impl::sleep_impl(duration).await
}

/// Run a future with a timeout.
///
/// Returns `Err(TimedOut)` if the timeout expires before the future completes.
pub async fn timeout<F, T>(duration: Duration, future: F) -> Result<T, TimedOut>
where
    F: Future<Output = T>,
{
    tokio_impl::timeout_impl(duration, future).await
}

/// Error returned when a timeout expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedOut;

impl std::fmt::Display for TimedOut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "operation timed out")
    }
}

impl std::error::Error for TimedOut {}

/// Pauses between hub requests.
///
/// The adapter sleeps through this trait so callers (and tests) can swap
/// the clock out.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        sleep(duration).await
    }
}
