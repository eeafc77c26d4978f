//! Command implementations for pomoclock.

mod completions;
mod config;
mod run;
mod simulate;

pub use completions::completions;
pub use config::config;
pub use run::run;
pub use simulate::simulate;

use std::path::PathBuf;

use crate::cli::args::{ClockArgs, Cli, OutputFormat};
use crate::clock::{parse_duration, NotificationSink, SessionClock, SessionConfig};
use crate::config::{Config, Paths};
use crate::error::ClockError;

/// Settings resolved from the config file and command-line overrides.
#[derive(Debug, Clone)]
pub struct Context {
    /// Paths under the pomoclock home directory
    pub paths: Paths,
    /// Config file that was read (it may not exist)
    pub config_path: PathBuf,
    /// Parsed config file, before overrides
    pub config: Config,
    /// Clock settings after overrides
    pub session: SessionConfig,
    /// Output format after overrides
    pub format: OutputFormat,
    /// Task label for the run
    pub task: Option<String>,
}

impl Context {
    /// Load the configuration and apply command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is unreadable or an override
    /// cannot be parsed.
    pub fn resolve(cli: &Cli) -> Result<Self, ClockError> {
        let paths = Paths::default();
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| paths.config_file.clone());
        let config = Config::load_from_path(&config_path)?;

        let mut session = config.clock.to_session_config();
        apply_overrides(&mut session, &cli.clock)?;

        Ok(Self {
            format: cli.output.unwrap_or(config.general.default_output),
            task: cli.clock.task.clone(),
            paths,
            config_path,
            config,
            session,
        })
    }

    /// Build a clock from the resolved settings.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::InvalidConfiguration` if the settings are invalid.
    pub fn build_clock(&self, sink: Box<dyn NotificationSink>) -> Result<SessionClock, ClockError> {
        Ok(SessionClock::new(self.session, sink)?.with_task(self.task.clone()))
    }
}

fn parse_override(name: &str, value: &str) -> Result<u32, ClockError> {
    parse_duration(value)
        .ok_or_else(|| ClockError::Parse(format!("Invalid {name} duration: {value}")))
}

/// Apply `--work`, `--short-break`, `--long-break`, `--cycle`, and `--mute`.
///
/// # Errors
///
/// Returns `ClockError::Parse` for unparseable durations.
pub fn apply_overrides(session: &mut SessionConfig, args: &ClockArgs) -> Result<(), ClockError> {
    if let Some(work) = &args.work {
        session.work_duration_seconds = parse_override("work", work)?;
    }
    if let Some(short) = &args.short_break {
        session.short_break_duration_seconds = parse_override("short break", short)?;
    }
    if let Some(long) = &args.long_break {
        session.long_break_duration_seconds = parse_override("long break", long)?;
    }
    if let Some(cycle) = args.cycle {
        session.sessions_until_long_break = cycle;
    }
    if args.mute {
        session.sound_enabled = false;
    }
    Ok(())
}
