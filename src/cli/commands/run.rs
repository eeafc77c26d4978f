//! Headless watch mode.
//!
//! Runs sessions back to back against the wall clock and prints a status
//! line after every tick.

use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::{Duration, Instant};

use crate::cli::args::OutputFormat;
use crate::cli::commands::Context;
use crate::clock::{drive, IntervalDriver, SessionClock, TerminalBell};
use crate::error::ClockError;
use crate::output::{format_completion_pretty, format_event_line, format_status_line};

/// Longest sleep between polls.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or stdout is closed.
pub fn run(ctx: &Context, sessions: Option<u32>) -> Result<String, ClockError> {
    let mut clock = ctx.build_clock(Box::new(TerminalBell::new()))?;
    let mut driver = IntervalDriver::default();

    let stdout = io::stdout();
    let rewrite = ctx.format == OutputFormat::Pretty && stdout.is_terminal();
    let mut out = stdout.lock();

    let completed = watch(&mut clock, &mut driver, sessions, ctx.format, rewrite, &mut out)?;
    Ok(format!("{completed} session(s) completed."))
}

/// Run `clock` until `limit` completions, writing status to `out`.
///
/// With `rewrite`, the status line is redrawn in place with `\r`.
/// Returns the number of completions seen.
pub fn watch<W: Write>(
    clock: &mut SessionClock,
    driver: &mut IntervalDriver,
    limit: Option<u32>,
    format: OutputFormat,
    rewrite: bool,
    out: &mut W,
) -> Result<u32, ClockError> {
    let mut completed = 0;
    if limit.is_some_and(|max| completed >= max) {
        return Ok(completed);
    }
    clock.start();
    write_status(clock, format, rewrite, out)?;

    loop {
        let before = clock.remaining_seconds();
        let events = drive(clock, driver, Instant::now());

        for event in &events {
            completed += 1;
            if rewrite {
                writeln!(out)?;
            }
            match format {
                OutputFormat::Pretty => writeln!(out, "{}", format_completion_pretty(event))?,
                OutputFormat::Json => writeln!(out, "{}", format_event_line(event)?)?,
            }
            if limit.is_some_and(|max| completed >= max) {
                out.flush()?;
                return Ok(completed);
            }
        }

        if !events.is_empty() {
            clock.start();
        }
        if !events.is_empty() || clock.remaining_seconds() != before {
            write_status(clock, format, rewrite, out)?;
        }

        let wait = driver.until_next(Instant::now()).unwrap_or(IDLE_POLL);
        thread::sleep(wait.min(IDLE_POLL));
    }
}

fn write_status<W: Write>(
    clock: &SessionClock,
    format: OutputFormat,
    rewrite: bool,
    out: &mut W,
) -> Result<(), ClockError> {
    let snapshot = clock.snapshot();
    match format {
        OutputFormat::Pretty if rewrite => {
            write!(out, "\r\x1b[2K{}", format_status_line(&snapshot))?;
        }
        OutputFormat::Pretty => writeln!(out, "{}", format_status_line(&snapshot))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&snapshot)?)?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{SessionConfig, SessionType, SilentSink};

    fn fast_clock() -> SessionClock {
        let config = SessionConfig {
            work_duration_seconds: 3,
            short_break_duration_seconds: 2,
            long_break_duration_seconds: 4,
            sessions_until_long_break: 4,
            sound_enabled: false,
        };
        SessionClock::new(config, Box::new(SilentSink)).unwrap()
    }

    #[test]
    fn test_watch_stops_at_limit() {
        colored::control::set_override(false);
        let mut clock = fast_clock();
        let mut driver = IntervalDriver::new(Duration::from_millis(5));
        let mut out = Vec::new();

        let completed = watch(
            &mut clock,
            &mut driver,
            Some(2),
            OutputFormat::Pretty,
            false,
            &mut out,
        )
        .unwrap();

        assert_eq!(completed, 2);
        assert_eq!(clock.session_type(), SessionType::Work);
        assert_eq!(clock.completed_work_sessions(), 1);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Focus Time complete"));
        assert!(text.contains("Break over"));
        assert!(text.lines().next().unwrap().contains("00:03"));
    }

    #[test]
    fn test_watch_zero_limit_returns_immediately() {
        let mut clock = fast_clock();
        let mut driver = IntervalDriver::new(Duration::from_millis(5));
        let mut out = Vec::new();

        let completed = watch(
            &mut clock,
            &mut driver,
            Some(0),
            OutputFormat::Pretty,
            false,
            &mut out,
        )
        .unwrap();

        assert_eq!(completed, 0);
        assert!(!clock.is_running());
        assert_eq!(clock.remaining_seconds(), 3);
        assert_eq!(clock.completed_work_sessions(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_watch_json_lines() {
        let mut clock = fast_clock();
        let mut driver = IntervalDriver::new(Duration::from_millis(5));
        let mut out = Vec::new();

        watch(&mut clock, &mut driver, Some(1), OutputFormat::Json, false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        for line in text.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.is_object());
        }
        assert!(text.lines().last().unwrap().contains("session_completed"));
    }
}
