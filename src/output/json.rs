//! JSON output formatting for pomoclock.

use serde::Serialize;
use serde_json::json;

use crate::clock::{ClockSnapshot, SessionCompleted};
use crate::error::ClockError;

/// Format a simulation run as JSON
///
/// # Errors
///
/// Returns `ClockError::Json` if JSON serialization fails.
pub fn format_simulation_json(
    ticks: u64,
    events: &[SessionCompleted],
    snapshot: &ClockSnapshot,
) -> Result<String, ClockError> {
    let output = json!({
        "ticks": ticks,
        "completions": events.len(),
        "events": events,
        "final": snapshot,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single completion as one compact JSON line
///
/// # Errors
///
/// Returns `ClockError::Json` if JSON serialization fails.
pub fn format_event_line(event: &SessionCompleted) -> Result<String, ClockError> {
    Ok(serde_json::to_string(&json!({ "event": "session_completed", "data": event }))?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `ClockError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, ClockError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{SessionClock, SessionConfig, SessionType, SilentSink};

    fn event() -> SessionCompleted {
        SessionCompleted {
            previous_type: SessionType::Work,
            previous_duration_seconds: 1500,
            next_type: SessionType::ShortBreak,
            completed_work_sessions: 1,
        }
    }

    #[test]
    fn test_format_simulation_json() {
        let clock = SessionClock::new(SessionConfig::default(), Box::new(SilentSink)).unwrap();
        let result = format_simulation_json(1500, &[event()], &clock.snapshot()).unwrap();

        assert!(result.contains("\"ticks\": 1500"));
        assert!(result.contains("\"completions\": 1"));
        assert!(result.contains("\"previous_type\": \"work\""));
        assert!(result.contains("\"next_type\": \"short-break\""));
        assert!(result.contains("\"final\""));
    }

    #[test]
    fn test_format_event_line_is_single_line() {
        let line = format_event_line(&event()).unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("\"event\":\"session_completed\""));
        assert!(line.contains("\"previous_duration_seconds\":1500"));
    }

    #[test]
    fn test_to_json_generic() {
        let result = to_json(&SessionConfig::default()).unwrap();
        assert!(result.contains("\"work_duration_seconds\": 1500"));
    }
}
