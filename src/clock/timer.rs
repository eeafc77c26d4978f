//! The session clock state machine.
//!
//! `SessionClock` owns the countdown state and decides what follows each
//! session. It has no notion of wall-clock time: a driver calls [`tick`]
//! once per elapsed second while the clock is running.
//!
//! [`tick`]: SessionClock::tick

use serde::Serialize;

use super::config::SessionConfig;
use super::format::{format_mmss, progress};
use super::notify::NotificationSink;
use super::session::{SessionCompleted, SessionState, SessionType};
use crate::error::ClockError;

/// Totals derived from the completed work session count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Work sessions finished
    pub completed_sessions: u32,
    /// Full cycles finished
    pub completed_cycles: u32,
    /// Minutes credited to focused work
    pub minutes_focused: u32,
}

/// Read-only view of the clock for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockSnapshot {
    pub session_type: SessionType,
    pub label: &'static str,
    pub remaining_seconds: u32,
    pub duration_seconds: u32,
    pub remaining: String,
    pub progress: f64,
    pub is_running: bool,
    pub completed_work_sessions: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    pub stats: SessionStats,
}

/// Countdown timer with work/break transitions.
pub struct SessionClock {
    config: SessionConfig,
    state: SessionState,
    sink: Box<dyn NotificationSink>,
    task: Option<String>,
}

impl std::fmt::Debug for SessionClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClock")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("task", &self.task)
            .finish_non_exhaustive()
    }
}

impl SessionClock {
    /// Create a clock paused at the start of a work session.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::InvalidConfiguration` if `config` fails validation.
    pub fn new(config: SessionConfig, sink: Box<dyn NotificationSink>) -> Result<Self, ClockError> {
        config.validate()?;
        Ok(Self {
            state: SessionState::initial(config.work_duration_seconds),
            config,
            sink,
            task: None,
        })
    }

    /// Attach a task label shown alongside the countdown.
    #[must_use]
    pub fn with_task(mut self, task: Option<String>) -> Self {
        self.task = task;
        self
    }

    /// Start or resume the countdown.
    ///
    /// Does nothing when already running or when no time remains.
    pub fn start(&mut self) {
        if self.state.is_running || self.state.remaining_seconds == 0 {
            return;
        }
        self.state.is_running = true;
        tracing::debug!(
            session = self.state.session_type.tag(),
            remaining = self.state.remaining_seconds,
            "clock started"
        );
    }

    /// Pause the countdown, keeping the remaining time.
    pub fn pause(&mut self) {
        if self.state.is_running {
            tracing::debug!(remaining = self.state.remaining_seconds, "clock paused");
        }
        self.state.is_running = false;
    }

    /// Stop and rewind the current session to its full duration.
    pub fn reset(&mut self) {
        self.state.is_running = false;
        self.state.remaining_seconds = self.current_duration();
        tracing::debug!(session = self.state.session_type.tag(), "clock reset");
    }

    /// Stop and move to the next session without a completion event or sound.
    pub fn skip(&mut self) {
        self.state.is_running = false;
        let previous = self.state.session_type;
        self.advance();
        tracing::info!(
            from = previous.tag(),
            to = self.state.session_type.tag(),
            "session skipped"
        );
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the completion event when this tick finishes the session.
    /// Ticks while paused are ignored.
    pub fn tick(&mut self) -> Option<SessionCompleted> {
        if !self.state.is_running || self.state.remaining_seconds == 0 {
            return None;
        }

        self.state.remaining_seconds -= 1;
        if self.state.remaining_seconds > 0 {
            return None;
        }

        self.state.is_running = false;
        if self.config.sound_enabled {
            self.sink.play();
        }

        let previous_type = self.state.session_type;
        let previous_duration_seconds = self.current_duration();
        self.advance();

        let event = SessionCompleted {
            previous_type,
            previous_duration_seconds,
            next_type: self.state.session_type,
            completed_work_sessions: self.state.completed_work_sessions,
        };
        tracing::info!(
            completed = previous_type.tag(),
            next = event.next_type.tag(),
            work_sessions = event.completed_work_sessions,
            "session completed"
        );
        Some(event)
    }

    /// Replace the configuration.
    ///
    /// The current session restarts at its new full duration, discarding any
    /// partial progress, even when an unrelated field changed. A running
    /// clock keeps running.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::InvalidConfiguration` and leaves the clock
    /// untouched if `config` fails validation.
    pub fn update_config(&mut self, config: SessionConfig) -> Result<(), ClockError> {
        config.validate()?;
        self.config = config;
        self.state.remaining_seconds = self.current_duration();
        tracing::debug!(?config, "config updated");
        Ok(())
    }

    /// Move to whichever session follows the current one.
    fn advance(&mut self) {
        self.state.session_type = match self.state.session_type {
            SessionType::Work => {
                self.state.completed_work_sessions += 1;
                if self.state.completed_work_sessions % self.config.sessions_until_long_break == 0 {
                    SessionType::LongBreak
                } else {
                    SessionType::ShortBreak
                }
            }
            SessionType::ShortBreak | SessionType::LongBreak => SessionType::Work,
        };
        self.state.remaining_seconds = self.current_duration();
    }

    fn current_duration(&self) -> u32 {
        self.config.duration(self.state.session_type)
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Copy of the raw state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn session_type(&self) -> SessionType {
        self.state.session_type
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.is_running
    }

    #[must_use]
    pub const fn completed_work_sessions(&self) -> u32 {
        self.state.completed_work_sessions
    }

    #[must_use]
    pub fn task(&self) -> Option<&str> {
        self.task.as_deref()
    }

    /// Totals for the stats row.
    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        let completed = self.state.completed_work_sessions;
        SessionStats {
            completed_sessions: completed,
            completed_cycles: completed / self.config.sessions_until_long_break,
            minutes_focused: completed.saturating_mul(self.config.work_minutes()),
        }
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn snapshot(&self) -> ClockSnapshot {
        let duration = self.current_duration();
        ClockSnapshot {
            session_type: self.state.session_type,
            label: self.state.session_type.display_name(),
            remaining_seconds: self.state.remaining_seconds,
            duration_seconds: duration,
            remaining: format_mmss(self.state.remaining_seconds),
            progress: progress(duration, self.state.remaining_seconds),
            is_running: self.state.is_running,
            completed_work_sessions: self.state.completed_work_sessions,
            task: self.task.clone(),
            stats: self.stats(),
        }
    }
}
