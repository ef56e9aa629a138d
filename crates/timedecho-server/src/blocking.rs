//! Bounded pool for blocking handlers.
//!
//! Blocking work goes to tokio's blocking threads so the async executor keeps
//! serving suspending requests. A semaphore caps how many blocking handlers
//! run at once; with one permit, blocking requests complete one after another.

use std::sync::Arc;

use tokio::sync::Semaphore;
use timedecho_core::error::{EchoError, Result};

#[derive(Debug, Clone)]
pub struct BlockingPool {
    permits: Arc<Semaphore>,
    workers: usize,
}

impl BlockingPool {
    pub fn new(workers: usize) -> Self {
        let workers = workers.max(1);
        Self {
            permits: Arc::new(Semaphore::new(workers)),
            workers,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `f` on a blocking thread once a worker slot is free.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|_| EchoError::Internal("blocking pool closed".into()))?;

        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            f()
        })
        .await
        .map_err(|e| EchoError::Internal(format!("blocking handler failed: {e}")))
    }
}
