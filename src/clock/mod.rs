//! Pomodoro session clock.
//!
//! - `timer`: the `SessionClock` state machine
//! - `config`: durations, validation, and preset choices
//! - `driver`: wall-clock scheduling of ticks
//! - `notify`: completion sound sinks
//! - `format`: time formatting and parsing for display

pub mod config;
pub mod driver;
pub mod format;
pub mod notify;
pub mod session;
pub mod timer;

pub use config::{next_preset, SessionConfig};
pub use driver::{drive, IntervalDriver};
pub use format::{format_duration, format_mmss, parse_duration, progress, render_progress_bar};
pub use notify::{NotificationSink, SilentSink, TerminalBell};
pub use session::{SessionCompleted, SessionState, SessionType};
pub use timer::{ClockSnapshot, SessionClock, SessionStats};
