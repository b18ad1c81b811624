//! Async capture adapter.
//!
//! Runs a fallible asynchronous producer and turns whatever it raises into
//! an [`Outcome`] instead of letting it propagate. Interception covers only
//! the producer's execution; the outcome is built after its result is in hand.
//!
//! Dropping the future returned by any of these functions cancels the
//! producer along with it and is not observable as an outcome. Runtime
//! cancellation of the task used by [`attempt_spawned`] is captured as
//! [`Fault::Cancelled`].

use crate::error::ErrorInfo;
use crate::fault::Fault;
use crate::outcome::Outcome;
use std::future::Future;
use std::time::Duration;
use tokio::task::{AbortHandle, JoinHandle};

/// Awaits `producer` in place. `Err(e)` becomes a failure whose message is
/// `e`'s `Display` and whose cause is `e`.
///
/// Adds no suspension points beyond the producer's own.
pub async fn attempt_async<T, E, F, Fut>(producer: F) -> Outcome<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    let result = producer().await;
    match result {
        Ok(value) => Outcome::ok(value),
        Err(fault) => captured(fault),
    }
}

/// Runs `producer` on its own tokio task so that panics and runtime
/// cancellation are captured too, as [`Fault::Panicked`] and
/// [`Fault::Cancelled`].
///
/// Dropping the returned future aborts the producer task.
pub async fn attempt_spawned<T, E, F, Fut>(producer: F) -> Outcome<T>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    join_captured(tokio::spawn(async move { producer().await })).await
}

/// [`attempt_async`] under a deadline. Expiry is captured as
/// [`Fault::TimedOut`] and the producer is dropped.
pub async fn attempt_with_timeout<T, E, F, Fut>(deadline: Duration, producer: F) -> Outcome<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    match tokio::time::timeout(deadline, attempt_async(producer)).await {
        Ok(outcome) => outcome,
        Err(_elapsed) => captured(Fault::TimedOut(deadline)),
    }
}

/// [`attempt_spawned`] under a deadline. Expiry is captured as
/// [`Fault::TimedOut`] and the producer task is aborted.
pub async fn attempt_spawned_with_timeout<T, E, F, Fut>(
    deadline: Duration,
    producer: F,
) -> Outcome<T>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    match tokio::time::timeout(deadline, attempt_spawned(producer)).await {
        Ok(outcome) => outcome,
        Err(_elapsed) => captured(Fault::TimedOut(deadline)),
    }
}

/// Aborts the task when dropped. A no-op once the task has finished.
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

async fn join_captured<T, E>(handle: JoinHandle<Result<T, E>>) -> Outcome<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let _guard = AbortOnDrop(handle.abort_handle());
    match handle.await {
        Ok(Ok(value)) => Outcome::ok(value),
        Ok(Err(fault)) => captured(fault),
        Err(join_err) => {
            let fault = Fault::from(join_err);
            tracing::warn!(fault = %fault, "producer task did not complete");
            captured(fault)
        }
    }
}

fn captured<T, E>(fault: E) -> Outcome<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let error = ErrorInfo::from_fault(fault);
    tracing::debug!(error = %error, "captured fault");
    Outcome::fail(error)
}
