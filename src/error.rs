//! Error types for pomoclock.

use thiserror::Error;

/// Errors produced by the clock, configuration, and terminal layers.
#[derive(Debug, Error)]
pub enum ClockError {
    /// A session configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The configuration file could not be read, parsed, or written.
    #[error("config error: {0}")]
    Config(String),

    /// A user-supplied value could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Terminal setup, drawing, or input failed.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
