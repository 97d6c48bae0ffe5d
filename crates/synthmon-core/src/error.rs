//! Shared error type across synthmon crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, SynthmonError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum SynthmonError {
    /// Config file unreadable or invalid.
    #[error("config: {0}")]
    Config(String),
    /// A metric stream's producer task is gone; the feed can never yield
    /// another sample.
    #[error("metric stream closed: {0}")]
    StreamClosed(&'static str),
    /// Internal server error.
    #[error("internal: {0}")]
    Internal(String),
}
