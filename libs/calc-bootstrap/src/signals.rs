//! Process shutdown on Ctrl+C or SIGTERM.

use std::future::pending;

use tokio::signal;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Spawn a task that cancels `cancel` on the first Ctrl+C or SIGTERM.
///
/// The SIGTERM handler is installed before this returns, so a signal sent
/// right after the call is never lost. A signal source that cannot be
/// installed is logged and ignored while the other keeps working. The task
/// also ends, without side effects, once `cancel` is cancelled by someone
/// else.
///
/// Must be called from within a Tokio runtime.
#[must_use]
pub fn cancel_on_shutdown(cancel: CancellationToken) -> JoinHandle<()> {
    #[cfg(unix)]
    let sigterm = match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(stream) => Some(stream),
        Err(e) => {
            tracing::error!(error = %e, "SIGTERM handler unavailable");
            None
        }
    };

    tokio::spawn(async move {
        let ctrl_c = async {
            match signal::ctrl_c().await {
                Ok(()) => "ctrl_c",
                Err(e) => {
                    tracing::error!(error = %e, "Ctrl+C handler unavailable");
                    pending::<&'static str>().await
                }
            }
        };

        #[cfg(unix)]
        let sigterm = async move {
            match sigterm {
                Some(mut stream) => {
                    stream.recv().await;
                    "sigterm"
                }
                None => pending::<&'static str>().await,
            }
        };
        #[cfg(not(unix))]
        let sigterm = pending::<&'static str>();

        let received = tokio::select! {
            name = ctrl_c => name,
            name = sigterm => name,
            () = cancel.cancelled() => return,
        };

        tracing::info!(signal = received, "Shutdown signal received, initiating graceful shutdown");
        cancel.cancel();
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_task_ends_when_cancelled_elsewhere() {
        let cancel = CancellationToken::new();
        let task = cancel_on_shutdown(cancel.clone());
        assert!(!task.is_finished());

        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("task stops once the token is cancelled")
            .expect("task does not panic");
    }
}
