//! Shared utilities for use cases.
//!
//! Every network call goes through [`bounded_call`], which applies a timeout
//! and an optional cancellation token to that one call only.

use std::fmt;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Why a bounded call produced no value
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CallFailure<E> {
    Failed(E),
    TimedOut(Duration),
    Cancelled,
}

impl<E> CallFailure<E> {
    /// Short reason used in degraded verdict messages
    pub(crate) fn reason(&self) -> &'static str {
        match self {
            CallFailure::Failed(_) => "API unavailable",
            CallFailure::TimedOut(_) => "API timed out",
            CallFailure::Cancelled => "check cancelled",
        }
    }
}

impl<E: fmt::Display> fmt::Display for CallFailure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallFailure::Failed(e) => write!(f, "{}", e),
            CallFailure::TimedOut(limit) => write!(f, "timed out after {:?}", limit),
            CallFailure::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// Await `fut` for at most `limit`, aborting early if `token` is cancelled.
pub(crate) async fn bounded_call<T, E, F>(
    fut: F,
    limit: Duration,
    token: Option<&CancellationToken>,
) -> Result<T, CallFailure<E>>
where
    F: Future<Output = Result<T, E>>,
{
    let timed = tokio::time::timeout(limit, fut);

    let outcome = if let Some(token) = token {
        tokio::select! {
            biased;
            _ = token.cancelled() => return Err(CallFailure::Cancelled),
            outcome = timed => outcome,
        }
    } else {
        timed.await
    };

    match outcome {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(CallFailure::Failed(e)),
        Err(_) => Err(CallFailure::TimedOut(limit)),
    }
}
