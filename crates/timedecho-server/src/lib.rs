//! timedecho server library entry.
//!
//! Wires the config, the blocking worker pool, the echo handlers and the
//! instrumentation wrapper into an axum router. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod blocking;
pub mod config;
pub mod error;
pub mod handlers;
pub mod ops;
pub mod router;
