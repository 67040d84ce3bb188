use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::AppError;

/// Runs `call` until it finishes or `token` is cancelled, whichever comes first.
///
/// On cancellation the call future is dropped, which aborts its in-flight request.
pub async fn with_cancellation<T, F>(token: &CancellationToken, call: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            debug!("call cancelled before completion");
            Err(AppError::Cancelled)
        }
        result = call => result,
    }
}
