//! Top-level facade crate for timedecho.
//!
//! Re-exports the core wrapper and the server library so users can depend on a single crate.

pub mod core {
    pub use timedecho_core::*;
}

pub mod server {
    pub use timedecho_server::*;
}
