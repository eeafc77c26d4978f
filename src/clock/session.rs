//! Session types and the mutable clock state.

use serde::{Deserialize, Serialize};

/// Kind of session the clock is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionType {
    /// Focused work
    Work,
    /// Short break between work sessions
    ShortBreak,
    /// Long break after a full cycle
    LongBreak,
}

impl SessionType {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Focus Time",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Short tag used in log lines and compact output.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::ShortBreak => "short-break",
            Self::LongBreak => "long-break",
        }
    }

    /// Check if this is a break type.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Mutable countdown state. Only [`SessionClock`](super::SessionClock) writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Session currently counting down
    pub session_type: SessionType,
    /// Seconds left in the current session
    pub remaining_seconds: u32,
    /// Whether ticks currently have an effect
    pub is_running: bool,
    /// Work sessions finished, by completion or skip
    pub completed_work_sessions: u32,
}

impl SessionState {
    /// Fresh state: a paused work session with `work_seconds` remaining.
    #[must_use]
    pub const fn initial(work_seconds: u32) -> Self {
        Self {
            session_type: SessionType::Work,
            remaining_seconds: work_seconds,
            is_running: false,
            completed_work_sessions: 0,
        }
    }
}

/// Emitted by [`SessionClock::tick`](super::SessionClock::tick) when a session
/// runs out naturally. Skips never produce one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCompleted {
    /// Session that just finished
    pub previous_type: SessionType,
    /// Full configured length of the finished session
    pub previous_duration_seconds: u32,
    /// Session the clock moved on to
    pub next_type: SessionType,
    /// Work sessions completed after the transition
    pub completed_work_sessions: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_type_display_name() {
        assert_eq!(SessionType::Work.display_name(), "Focus Time");
        assert_eq!(SessionType::ShortBreak.display_name(), "Short Break");
        assert_eq!(SessionType::LongBreak.to_string(), "Long Break");
    }

    #[test]
    fn test_session_type_is_break() {
        assert!(!SessionType::Work.is_break());
        assert!(SessionType::ShortBreak.is_break());
        assert!(SessionType::LongBreak.is_break());
    }

    #[test]
    fn test_session_type_serializes_kebab_case() {
        let json = serde_json::to_string(&SessionType::ShortBreak).unwrap();
        assert_eq!(json, "\"short-break\"");
        let parsed: SessionType = serde_json::from_str("\"long-break\"").unwrap();
        assert_eq!(parsed, SessionType::LongBreak);
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::initial(1500);
        assert_eq!(state.session_type, SessionType::Work);
        assert_eq!(state.remaining_seconds, 1500);
        assert!(!state.is_running);
        assert_eq!(state.completed_work_sessions, 0);
    }
}
