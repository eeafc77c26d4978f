//! Configuration settings for pomoclock.
//!
//! Settings are loaded from `~/.pomoclock/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::clock::SessionConfig;
use crate::error::ClockError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Clock durations and sound.
    pub clock: ClockSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Log filter used when neither `RUST_LOG` nor `-v` is given.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to `colored`'s global override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Clock settings, in minutes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClockSettings {
    /// Work session length in minutes.
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    /// Short break length in minutes.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,
    /// Long break length in minutes.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
    /// Number of work sessions before a long break.
    #[serde(default = "default_sessions_until_long_break")]
    pub sessions_until_long_break: u32,
    /// Ring the bell when a session completes.
    #[serde(default = "default_true")]
    pub sound: bool,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

fn default_log_level() -> String {
    "warn".to_string()
}

const fn default_work_minutes() -> u32 {
    25
}

const fn default_short_break() -> u32 {
    5
}

const fn default_long_break() -> u32 {
    15
}

const fn default_sessions_until_long_break() -> u32 {
    4
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
            sessions_until_long_break: default_sessions_until_long_break(),
            sound: default_true(),
        }
    }
}

impl ClockSettings {
    /// Convert to a clock config. Validation happens when the clock is built.
    #[must_use]
    pub const fn to_session_config(&self) -> SessionConfig {
        SessionConfig::from_minutes(
            self.work_minutes,
            self.short_break_minutes,
            self.long_break_minutes,
            self.sessions_until_long_break,
            self.sound,
        )
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ClockError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClockError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            ClockError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), ClockError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| ClockError::Config(format!("Failed to serialize config: {e}")))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClockError::Config(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        std::fs::write(path, contents).map_err(|e| {
            ClockError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
