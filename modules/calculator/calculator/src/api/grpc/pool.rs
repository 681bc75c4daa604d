//! Fixed-size worker pool for handler execution.
//!
//! Each call takes one of `size` slots before its handler runs and gives it
//! back when the handler returns or panics. Calls that find no free slot wait
//! in FIFO order instead of failing.

use std::sync::Arc;

use calculator_sdk::Method;
use tokio::sync::Semaphore;
use tonic::Status;

/// Bounded pool of handler slots shared by all connections.
#[derive(Clone, Debug)]
pub struct WorkerPool {
    slots: Arc<Semaphore>,
    size: usize,
}

impl WorkerPool {
    /// Create a pool with `size` slots, clamped to `1..=Semaphore::MAX_PERMITS`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let size = size.clamp(1, Semaphore::MAX_PERMITS);
        Self {
            slots: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    /// Slots not currently held by a handler.
    #[must_use]
    pub fn idle(&self) -> usize {
        self.slots.available_permits()
    }

    /// Run `handler` for `method` once a slot is free.
    ///
    /// The handler runs on Tokio's blocking thread pool. If the caller stops
    /// waiting (for example the client's deadline expired) the handler still
    /// runs to completion and then releases its slot.
    ///
    /// # Errors
    /// Returns `INTERNAL` if the handler panics; the panic does not escape
    /// this call.
    pub async fn run<T, F>(&self, method: Method, handler: F) -> Result<T, Status>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        if self.idle() == 0 {
            tracing::debug!(method = method.name(), size = self.size, "worker pool saturated, queueing call");
        }

        let permit = Arc::clone(&self.slots)
            .acquire_owned()
            .await
            .map_err(|_| Status::unavailable("worker pool is closed"))?;

        let task = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            handler()
        });

        task.await.map_err(|e| {
            if e.is_panic() {
                tracing::error!(method = method.name(), "handler panicked, failing this call only");
                Status::internal(format!("{method} handler failed"))
            } else {
                Status::cancelled(format!("{method} handler was cancelled"))
            }
        })
    }
}
