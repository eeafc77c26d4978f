//! Session durations and the preset choices offered by the settings panel.

use serde::{Deserialize, Serialize};

use super::session::SessionType;
use crate::error::ClockError;

/// Work duration choices, in minutes.
pub const WORK_MINUTE_CHOICES: [u32; 5] = [15, 25, 30, 45, 60];
/// Short break choices, in minutes.
pub const SHORT_BREAK_MINUTE_CHOICES: [u32; 3] = [3, 5, 10];
/// Long break choices, in minutes.
pub const LONG_BREAK_MINUTE_CHOICES: [u32; 3] = [15, 20, 30];
/// Cycle length choices, in work sessions.
pub const CYCLE_LENGTH_CHOICES: [u32; 3] = [3, 4, 5];

/// Durations and options for a run of sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Length of a work session in seconds
    pub work_duration_seconds: u32,
    /// Length of a short break in seconds
    pub short_break_duration_seconds: u32,
    /// Length of a long break in seconds
    pub long_break_duration_seconds: u32,
    /// Work sessions per cycle; the last one is followed by a long break
    pub sessions_until_long_break: u32,
    /// Ring the notification sink on natural completion
    pub sound_enabled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_minutes(25, 5, 15, 4, true)
    }
}

impl SessionConfig {
    /// Build a config from minute values.
    #[must_use]
    pub const fn from_minutes(
        work: u32,
        short_break: u32,
        long_break: u32,
        sessions_until_long_break: u32,
        sound_enabled: bool,
    ) -> Self {
        Self {
            work_duration_seconds: work.saturating_mul(60),
            short_break_duration_seconds: short_break.saturating_mul(60),
            long_break_duration_seconds: long_break.saturating_mul(60),
            sessions_until_long_break,
            sound_enabled,
        }
    }

    /// Full length of the given session type in seconds.
    #[must_use]
    pub const fn duration(&self, session_type: SessionType) -> u32 {
        match session_type {
            SessionType::Work => self.work_duration_seconds,
            SessionType::ShortBreak => self.short_break_duration_seconds,
            SessionType::LongBreak => self.long_break_duration_seconds,
        }
    }

    /// Work duration in whole minutes.
    #[must_use]
    pub const fn work_minutes(&self) -> u32 {
        self.work_duration_seconds / 60
    }

    /// Check every duration is positive and the cycle has at least one session.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::InvalidConfiguration` naming the first bad field.
    pub fn validate(&self) -> Result<(), ClockError> {
        let durations = [
            ("work duration", self.work_duration_seconds),
            ("short break duration", self.short_break_duration_seconds),
            ("long break duration", self.long_break_duration_seconds),
        ];

        for (name, seconds) in durations {
            if seconds == 0 {
                return Err(ClockError::InvalidConfiguration(format!(
                    "{name} must be greater than zero"
                )));
            }
        }

        if self.sessions_until_long_break < 1 {
            return Err(ClockError::InvalidConfiguration(
                "sessions until long break must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Return the choice after `current`, wrapping around.
///
/// Values not in `choices` move to the first entry.
#[must_use]
pub fn next_preset(choices: &[u32], current: u32) -> u32 {
    let Some(first) = choices.first().copied() else {
        return current;
    };

    choices
        .iter()
        .position(|&c| c == current)
        .and_then(|i| choices.get(i + 1).copied())
        .unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.work_duration_seconds, 1500);
        assert_eq!(config.short_break_duration_seconds, 300);
        assert_eq!(config.long_break_duration_seconds, 900);
        assert_eq!(config.sessions_until_long_break, 4);
        assert!(config.sound_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duration_by_type() {
        let config = SessionConfig::from_minutes(30, 10, 20, 3, false);
        assert_eq!(config.duration(SessionType::Work), 1800);
        assert_eq!(config.duration(SessionType::ShortBreak), 600);
        assert_eq!(config.duration(SessionType::LongBreak), 1200);
        assert_eq!(config.work_minutes(), 30);
    }

    #[test]
    fn test_validate_rejects_zero_durations() {
        let mut config = SessionConfig::default();
        config.short_break_duration_seconds = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ClockError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("short break"));
    }

    #[test]
    fn test_validate_rejects_zero_cycle() {
        let mut config = SessionConfig::default();
        config.sessions_until_long_break = 0;
        assert!(matches!(
            config.validate(),
            Err(ClockError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_next_preset_cycles() {
        assert_eq!(next_preset(&WORK_MINUTE_CHOICES, 25), 30);
        assert_eq!(next_preset(&WORK_MINUTE_CHOICES, 60), 15);
        assert_eq!(next_preset(&CYCLE_LENGTH_CHOICES, 5), 3);
    }

    #[test]
    fn test_next_preset_off_list_value() {
        assert_eq!(next_preset(&SHORT_BREAK_MINUTE_CHOICES, 7), 3);
        assert_eq!(next_preset(&[], 7), 7);
    }
}
