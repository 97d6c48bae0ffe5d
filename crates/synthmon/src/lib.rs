//! Top-level facade crate for synthmon.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use synthmon_core::*;
}

pub mod server {
    pub use synthmon_server::*;
}
