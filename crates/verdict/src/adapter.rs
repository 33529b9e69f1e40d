//! Boundary adapter turning native failures into exception outcomes.
//!
//! Wraps an arbitrary callable (sync or async) and converts everything it
//! can go wrong with — a returned error, a returned exception outcome, or a
//! panic — into one exception outcome. Nothing escapes the adapter
//! boundary.
//!
//! This is the only place in the crate that emits diagnostics. By default a
//! captured failure is logged through `tracing`; callers can redirect it to
//! their own [`ErrorSink`] or disable logging entirely. The sink always
//! receives the failure *before* the optional transform hook runs.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use either::Either;
use futures::FutureExt;
use tap::Pipe;
use thiserror::Error;

use crate::outcome::{exception, success, IntoOutcome, Outcome};

/// A failure captured at the adapter boundary.
#[derive(Debug, Error)]
pub enum Caught {
    /// The operation produced an error (or an exception outcome) instead of
    /// a value.
    #[error(transparent)]
    Failure(#[from] anyhow::Error),
    /// The operation panicked before producing anything.
    #[error("operation panicked: {0}")]
    Panicked(String),
}

/// A caller-supplied diagnostic sink for captured failures.
pub trait ErrorSink {
    /// Record one captured failure. Invoked synchronously, pre-transform.
    fn error(&self, failure: &Caught);
}

/// Where captured failures are logged.
#[derive(Clone, Copy, Default)]
pub enum Logging<'a> {
    /// Emit a `tracing` error event (the default).
    #[default]
    Tracing,
    /// Hand the failure to a caller-supplied sink.
    Sink(&'a dyn ErrorSink),
    /// Log nowhere.
    Disabled,
}

impl fmt::Debug for Logging<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tracing => "Logging::Tracing",
            Self::Sink(_) => "Logging::Sink",
            Self::Disabled => "Logging::Disabled",
        })
    }
}

fn describe_panic(payload: Box<dyn Any + Send>) -> String {
    payload
        .downcast::<String>()
        .map(|message| *message)
        .or_else(|payload| {
            payload
                .downcast::<&'static str>()
                .map(|message| (*message).to_string())
        })
        .unwrap_or_else(|_| "opaque panic payload".to_string())
}

/// Log the captured failure, then apply the transform hook.
fn record<E>(caught: Caught, transform: impl FnOnce(Caught) -> E, logging: Logging<'_>) -> E {
    match logging {
        Logging::Tracing => tracing::error!(failure = %caught, "operation failed"),
        Logging::Sink(sink) => sink.error(&caught),
        Logging::Disabled => {}
    }
    transform(caught)
}

fn settle<T, E>(
    returned: Outcome<T, anyhow::Error>,
    transform: impl FnOnce(Caught) -> E,
    logging: Logging<'_>,
) -> Outcome<T, E> {
    match returned.into_payload() {
        Either::Left(value) => success(value),
        Either::Right(error) => record(Caught::Failure(error), transform, logging).pipe(exception),
    }
}

/// Run a callable and capture any failure as an exception outcome.
///
/// The callable may return a bare `Result`, an [`Outcome`], or a `Result`
/// carrying an outcome; an exception outcome it produces is treated the
/// same as a returned error. Panics are caught and captured as
/// [`Caught::Panicked`]. Failures are logged through `tracing`.
pub fn try_catch<T, O, F>(op: F) -> Outcome<T, Caught>
where
    F: FnOnce() -> O,
    O: IntoOutcome<T, anyhow::Error>,
{
    try_catch_with(op, std::convert::identity, Logging::Tracing)
}

/// [`try_catch`] with an error-mapping hook and an explicit logging policy.
///
/// `transform` runs after logging; its output becomes the exception
/// payload.
pub fn try_catch_with<T, E, O, F, M>(op: F, transform: M, logging: Logging<'_>) -> Outcome<T, E>
where
    F: FnOnce() -> O,
    O: IntoOutcome<T, anyhow::Error>,
    M: FnOnce(Caught) -> E,
{
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(returned) => settle(returned.into_outcome(), transform, logging),
        Err(payload) => Caught::Panicked(describe_panic(payload))
            .pipe(|caught| record(caught, transform, logging))
            .pipe(exception),
    }
}

/// The pending twin of [`try_catch`] for async callables.
pub async fn try_catch_async<T, O, F, Fut>(op: F) -> Outcome<T, Caught>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = O>,
    O: IntoOutcome<T, anyhow::Error>,
{
    try_catch_async_with(op, std::convert::identity, Logging::Tracing).await
}

/// The pending twin of [`try_catch_with`].
///
/// The callable is invoked and polled under an unwind guard, so a panic at
/// any point before the future settles is captured rather than propagated.
pub async fn try_catch_async_with<T, E, O, F, Fut, M>(
    op: F,
    transform: M,
    logging: Logging<'_>,
) -> Outcome<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = O>,
    O: IntoOutcome<T, anyhow::Error>,
    M: FnOnce(Caught) -> E,
{
    match AssertUnwindSafe(async move { op().await })
        .catch_unwind()
        .await
    {
        Ok(returned) => settle(returned.into_outcome(), transform, logging),
        Err(payload) => Caught::Panicked(describe_panic(payload))
            .pipe(|caught| record(caught, transform, logging))
            .pipe(exception),
    }
}
