//! Shared application state.
//!
//! Holds the validated config, the injected handler logger, and the blocking
//! worker pool. Startup errors are returned, not panicked.

use std::sync::Arc;

use timedecho_core::error::Result;
use timedecho_core::log::{ExecLog, TracingLog};

use crate::blocking::BlockingPool;
use crate::config::EchoConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    blocking: BlockingPool,
}

struct AppStateInner {
    cfg: EchoConfig,
    log: Arc<dyn ExecLog>,
}

impl AppState {
    /// Build state with a `tracing` logger named by `logging.logger`.
    pub fn new(cfg: EchoConfig) -> Result<Self> {
        let log = Arc::new(TracingLog::new(cfg.logging.logger.clone()));
        Self::with_log(cfg, log)
    }

    /// Build state around an explicit logger.
    pub fn with_log(cfg: EchoConfig, log: Arc<dyn ExecLog>) -> Result<Self> {
        cfg.validate()?;
        let blocking = BlockingPool::new(cfg.server.blocking_workers);

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, log }),
            blocking,
        })
    }

    pub fn cfg(&self) -> &EchoConfig {
        &self.inner.cfg
    }

    pub fn log(&self) -> Arc<dyn ExecLog> {
        Arc::clone(&self.inner.log)
    }

    pub fn blocking(&self) -> &BlockingPool {
        &self.blocking
    }

    pub fn max_sleep_sec(&self) -> Option<f64> {
        self.inner.cfg.server.max_sleep_sec
    }
}
