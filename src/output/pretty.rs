use colored::{ColoredString, Colorize};

use crate::clock::{
    format_duration, render_progress_bar, ClockSnapshot, SessionCompleted, SessionConfig,
    SessionType,
};

/// Color a session label by type.
fn paint(session_type: SessionType, text: &str) -> ColoredString {
    match session_type {
        SessionType::Work => text.cyan(),
        SessionType::ShortBreak => text.green(),
        SessionType::LongBreak => text.yellow(),
    }
}

fn icon(session_type: SessionType) -> &'static str {
    if session_type.is_break() {
        "☕"
    } else {
        "🧠"
    }
}

/// One-line status used by watch mode.
pub fn format_status_line(snapshot: &ClockSnapshot) -> String {
    let state = if snapshot.is_running { "▶" } else { "⏸" };
    let mut line = format!(
        "{state} {} {} {} {:.0}%",
        paint(snapshot.session_type, snapshot.label).bold(),
        snapshot.remaining.bold(),
        render_progress_bar(snapshot.progress, 20),
        snapshot.progress * 100.0
    );
    if let Some(task) = &snapshot.task {
        line.push_str(&format!("  {}", task.dimmed()));
    }
    line
}

/// Multi-line view of the clock.
pub fn format_snapshot_pretty(snapshot: &ClockSnapshot) -> String {
    let mut output = Vec::new();

    output.push(format!(
        "{} {}",
        icon(snapshot.session_type),
        paint(snapshot.session_type, snapshot.label).bold()
    ));
    output.push("─".repeat(40));

    if let Some(task) = &snapshot.task {
        output.push(format!("Task:      {task}"));
    }
    output.push(format!(
        "State:     {}",
        if snapshot.is_running { "Running" } else { "Paused" }
    ));
    output.push(format!("Remaining: {}", snapshot.remaining.bold()));
    output.push(format!(
        "Progress:  {} {:.0}%",
        render_progress_bar(snapshot.progress, 30),
        snapshot.progress * 100.0
    ));
    output.push(String::new());
    output.push(format!(
        "Completed sessions: {}   Cycles: {}   Minutes focused: {}",
        snapshot.stats.completed_sessions,
        snapshot.stats.completed_cycles,
        snapshot.stats.minutes_focused
    ));

    output.join("\n")
}

/// Describe a natural completion.
pub fn format_completion_pretty(event: &SessionCompleted) -> String {
    let done = format_duration(event.previous_duration_seconds);
    let prefix = if event.previous_type.is_break() {
        "☕ Break over".to_string()
    } else {
        format!("✅ {} complete", event.previous_type.display_name())
    };
    format!(
        "{} ({done}). Next: {}",
        prefix.green(),
        paint(event.next_type, event.next_type.display_name()).bold()
    )
}

/// Human-readable dump of the session settings.
pub fn format_config_pretty(config: &SessionConfig) -> String {
    [
        format!("Work:              {}", format_duration(config.work_duration_seconds)),
        format!(
            "Short break:       {}",
            format_duration(config.short_break_duration_seconds)
        ),
        format!(
            "Long break:        {}",
            format_duration(config.long_break_duration_seconds)
        ),
        format!("Sessions per cycle: {}", config.sessions_until_long_break),
        format!(
            "Sound:             {}",
            if config.sound_enabled { "on" } else { "off" }
        ),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{SessionClock, SilentSink};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_status_line() {
        plain();
        let clock = SessionClock::new(SessionConfig::default(), Box::new(SilentSink))
            .unwrap()
            .with_task(Some("Review OOP".to_string()));
        let line = format_status_line(&clock.snapshot());

        assert!(line.starts_with("⏸ Focus Time 25:00"));
        assert!(line.ends_with("Review OOP"));
        assert!(line.contains("0%"));
    }

    #[test]
    fn test_format_snapshot_pretty() {
        plain();
        let mut clock = SessionClock::new(SessionConfig::default(), Box::new(SilentSink)).unwrap();
        clock.skip();
        let output = format_snapshot_pretty(&clock.snapshot());

        assert!(output.contains("Short Break"));
        assert!(output.contains("Remaining: 05:00"));
        assert!(output.contains("Completed sessions: 1"));
        assert!(output.contains("Minutes focused: 25"));
    }

    #[test]
    fn test_format_completion_pretty() {
        plain();
        let work = SessionCompleted {
            previous_type: SessionType::Work,
            previous_duration_seconds: 1500,
            next_type: SessionType::LongBreak,
            completed_work_sessions: 4,
        };
        assert_eq!(
            format_completion_pretty(&work),
            "✅ Focus Time complete (25 minutes). Next: Long Break"
        );

        let rest = SessionCompleted {
            previous_type: SessionType::ShortBreak,
            previous_duration_seconds: 300,
            next_type: SessionType::Work,
            completed_work_sessions: 1,
        };
        assert_eq!(
            format_completion_pretty(&rest),
            "☕ Break over (5 minutes). Next: Focus Time"
        );
    }

    #[test]
    fn test_format_config_pretty() {
        let output = format_config_pretty(&SessionConfig::from_minutes(45, 10, 30, 5, false));
        assert!(output.contains("45 minutes"));
        assert!(output.contains("Sessions per cycle: 5"));
        assert!(output.contains("Sound:             off"));
    }
}
