//! Logger seam injected into instrumented handlers.
//!
//! `TracingLog` is what the server uses. `MemoryLog` keeps lines in process so
//! callers can assert on what was emitted and in which order.

use std::sync::Mutex;

use tracing::Level;

/// Leveled text sink. Shared by every concurrent invocation.
pub trait ExecLog: Send + Sync {
    fn log(&self, level: Level, message: &str);
}

/// Named logger forwarding to `tracing` events.
#[derive(Debug, Clone)]
pub struct TracingLog {
    name: String,
}

impl TracingLog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ExecLog for TracingLog {
    fn log(&self, level: Level, message: &str) {
        let logger = self.name.as_str();
        match level {
            Level::ERROR => tracing::error!(logger, "{message}"),
            Level::WARN => tracing::warn!(logger, "{message}"),
            Level::INFO => tracing::info!(logger, "{message}"),
            Level::DEBUG => tracing::debug!(logger, "{message}"),
            _ => tracing::trace!(logger, "{message}"),
        }
    }
}

/// Append-only in-memory sink.
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<(Level, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line recorded so far.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Messages only, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.lines().into_iter().map(|(_, m)| m).collect()
    }
}

impl ExecLog for MemoryLog {
    fn log(&self, level: Level, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((level, message.to_owned()));
    }
}
