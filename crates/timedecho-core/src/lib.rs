//! timedecho core: the instrumentation wrapper, its result envelope, the
//! injected logger seam, and the shared error type.
//!
//! This crate carries no HTTP or runtime dependencies. The wrapper works over
//! plain functions and over futures, so the server crate decides where each
//! mode actually runs.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `EchoError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod envelope;
pub mod error;
pub mod instrument;
pub mod log;

/// Shared result type.
pub use error::{EchoError, Result};

pub use envelope::Envelope;
pub use instrument::{Blocking, ExecMode, Instrumented, Suspending};
pub use log::{ExecLog, MemoryLog, TracingLog};
