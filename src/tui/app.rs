//! Application state for the TUI.

use std::time::Instant;

use chrono::{DateTime, Local};

use crate::clock::config::{
    CYCLE_LENGTH_CHOICES, LONG_BREAK_MINUTE_CHOICES, SHORT_BREAK_MINUTE_CHOICES,
    WORK_MINUTE_CHOICES,
};
use crate::clock::{
    drive, format_duration, next_preset, IntervalDriver, SessionClock, SessionCompleted,
    SessionConfig,
};

/// Most completions kept in the on-screen log.
const LOG_CAPACITY: usize = 50;

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start when paused, pause when running.
    Toggle,
    /// Rewind the current session.
    Reset,
    /// Jump to the next session.
    Skip,
    /// Next work duration preset.
    CycleWork,
    /// Next short break preset.
    CycleShortBreak,
    /// Next long break preset.
    CycleLongBreak,
    /// Next cycle length preset.
    CycleLength,
    /// Toggle the completion bell.
    ToggleSound,
    /// Show key help in the status bar.
    Help,
}

/// A completion shown in the log panel.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// When the session finished
    pub at: DateTime<Local>,
    /// What finished
    pub event: SessionCompleted,
}

/// Application state.
pub struct App {
    /// The clock being displayed.
    pub clock: SessionClock,
    /// Wall-clock tick scheduling.
    driver: IntervalDriver,
    /// Completions this run, newest first.
    pub log: Vec<LogEntry>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(clock: SessionClock) -> Self {
        Self {
            clock,
            driver: IntervalDriver::default(),
            log: Vec::new(),
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Deliver due ticks and record completions.
    pub fn on_frame(&mut self, now: Instant) {
        for event in drive(&mut self.clock, &mut self.driver, now) {
            self.record(event);
        }
    }

    fn record(&mut self, event: SessionCompleted) {
        self.status = Some(format!(
            "{} finished. Press space to start {}.",
            event.previous_type.display_name(),
            event.next_type.display_name()
        ));
        self.log.insert(
            0,
            LogEntry {
                at: Local::now(),
                event,
            },
        );
        self.log.truncate(LOG_CAPACITY);
    }

    /// Apply a user action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Toggle => {
                if self.clock.is_running() {
                    self.clock.pause();
                    self.status = Some("Paused".to_string());
                } else {
                    self.clock.start();
                    self.status = None;
                }
            }
            Action::Reset => {
                self.clock.reset();
                self.status = Some("Reset".to_string());
            }
            Action::Skip => {
                self.clock.skip();
                self.status = Some(format!("Skipped to {}", self.clock.session_type()));
            }
            Action::CycleWork => self.edit(|c| {
                c.work_duration_seconds =
                    next_preset(&WORK_MINUTE_CHOICES, c.work_duration_seconds / 60) * 60;
                format!("Work: {}", format_duration(c.work_duration_seconds))
            }),
            Action::CycleShortBreak => self.edit(|c| {
                c.short_break_duration_seconds =
                    next_preset(&SHORT_BREAK_MINUTE_CHOICES, c.short_break_duration_seconds / 60) * 60;
                format!("Short break: {}", format_duration(c.short_break_duration_seconds))
            }),
            Action::CycleLongBreak => self.edit(|c| {
                c.long_break_duration_seconds =
                    next_preset(&LONG_BREAK_MINUTE_CHOICES, c.long_break_duration_seconds / 60) * 60;
                format!("Long break: {}", format_duration(c.long_break_duration_seconds))
            }),
            Action::CycleLength => self.edit(|c| {
                c.sessions_until_long_break =
                    next_preset(&CYCLE_LENGTH_CHOICES, c.sessions_until_long_break);
                format!("Cycle length: {} sessions", c.sessions_until_long_break)
            }),
            Action::ToggleSound => self.edit(|c| {
                c.sound_enabled = !c.sound_enabled;
                format!("Sound {}", if c.sound_enabled { "on" } else { "off" })
            }),
            Action::Help => {
                self.status = Some(
                    "space:start/pause | r:reset | s:skip | w/b/l/c:presets | m:sound | q:quit"
                        .to_string(),
                );
            }
        }
    }

    /// Replace the clock config with an edited copy.
    fn edit(&mut self, change: impl FnOnce(&mut SessionConfig) -> String) {
        let mut config = *self.clock.config();
        let message = change(&mut config);
        self.status = Some(match self.clock.update_config(config) {
            Ok(()) => {
                // The countdown restarted, so the next tick is a full period away.
                self.driver.halt();
                message
            }
            Err(e) => e.to_string(),
        });
    }
}
