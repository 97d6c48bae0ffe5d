//! synthmon core: metric catalog, report templates, and the shared error type.
//!
//! This crate defines the plain-text contracts served by the mock telemetry
//! server. It intentionally carries no runtime or transport dependencies so
//! the templates can be reused by test harnesses and tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SynthmonError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metric;
pub mod report;

/// Shared result type.
pub use error::{Result, SynthmonError};
