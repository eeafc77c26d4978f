//! Configuration management for pomoclock.
//!
//! This module handles loading and saving configuration from `~/.pomoclock/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ClockSettings, ColorSetting, Config, GeneralConfig};
