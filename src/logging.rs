//! Logging setup.
//!
//! `RUST_LOG` wins when set. Otherwise each `-v` raises the level one step
//! above the configured default.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::ClockError;

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error.
    Stderr,
    /// Append to a file. Used while the TUI owns the terminal.
    File(PathBuf),
}

/// Pick the level for a `-v` count.
#[must_use]
pub fn level_for(verbosity: u8, default_level: &str) -> &str {
    match verbosity {
        0 => default_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. A second call is a no-op.
///
/// # Errors
///
/// Returns an error if the filter is malformed or the log file cannot be opened.
pub fn init(verbosity: u8, default_level: &str, target: &LogTarget) -> Result<(), ClockError> {
    let level = level_for(verbosity, default_level);
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("pomoclock={level}"))
            .map_err(|e| ClockError::Config(format!("Invalid log level '{level}': {e}")))?,
    };

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(io::stderr)
                        .with_ansi(io::stderr().is_terminal())
                        .with_target(false),
                )
                .try_init()
                .ok();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .try_init()
                .ok();
        }
    }

    Ok(())
}
