//! Timing and logging wrapper for handlers.
//!
//! A handler is wrapped either as [`Blocking`] or as [`Suspending`]; the
//! constructor picks the mode, so the wrapped `call` has the same shape as the
//! handler: a plain function stays a plain function, an async function stays
//! awaitable and keeps yielding during its waits.
//!
//! Every invocation logs `Entering: <name>` then `Exiting: <name>`. The exit
//! line comes from a drop guard, so it is emitted on `Err`, on panic unwinding,
//! and when a suspending call is dropped before it completes.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use tracing::Level;

use crate::envelope::Envelope;
use crate::log::ExecLog;

/// How a wrapped handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    Blocking,
    Suspending,
}

impl ExecMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ExecMode::Blocking => "blocking",
            ExecMode::Suspending => "suspending",
        }
    }
}

impl fmt::Display for ExecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker for a handler that runs to completion on the calling thread.
pub struct Blocking<F>(F);

/// Marker for an async handler.
pub struct Suspending<F>(F);

/// A handler together with its name and logger.
///
/// Stateless across calls; share it behind an `Arc` between requests.
pub struct Instrumented<H> {
    name: &'static str,
    log: Arc<dyn ExecLog>,
    handler: H,
}

impl<H> Instrumented<H> {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<F> Instrumented<Blocking<F>> {
    pub fn blocking(name: &'static str, log: Arc<dyn ExecLog>, handler: F) -> Self {
        Self {
            name,
            log,
            handler: Blocking(handler),
        }
    }

    pub fn mode(&self) -> ExecMode {
        ExecMode::Blocking
    }

    /// Run the handler on the current thread.
    pub fn call<A, T, E>(&self, args: A) -> Result<Envelope<T>, E>
    where
        F: Fn(A) -> Result<T, E>,
    {
        let scope = CallScope::enter(self.name, self.log.as_ref());
        let result = (self.handler.0)(args)?;
        Ok(scope.finish(result))
    }
}

impl<F> Instrumented<Suspending<F>> {
    pub fn suspending(name: &'static str, log: Arc<dyn ExecLog>, handler: F) -> Self {
        Self {
            name,
            log,
            handler: Suspending(handler),
        }
    }

    pub fn mode(&self) -> ExecMode {
        ExecMode::Suspending
    }

    /// Await the handler. Nothing here blocks; the caller only suspends where
    /// the handler does.
    pub async fn call<A, Fut, T, E>(&self, args: A) -> Result<Envelope<T>, E>
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let scope = CallScope::enter(self.name, self.log.as_ref());
        let result = (self.handler.0)(args).await?;
        Ok(scope.finish(result))
    }
}

/// One invocation: logs entry on creation and exit on drop.
struct CallScope<'a> {
    name: &'static str,
    log: &'a dyn ExecLog,
    start: Instant,
}

impl<'a> CallScope<'a> {
    fn enter(name: &'static str, log: &'a dyn ExecLog) -> Self {
        log.log(Level::INFO, &format!("Entering: {name}"));
        Self {
            name,
            log,
            start: Instant::now(),
        }
    }

    /// Build the envelope; the exit line follows when `self` drops.
    fn finish<T>(self, result: T) -> Envelope<T> {
        Envelope::new(result, self.start.elapsed())
    }
}

impl Drop for CallScope<'_> {
    fn drop(&mut self) {
        self.log.log(Level::INFO, &format!("Exiting: {}", self.name));
    }
}
