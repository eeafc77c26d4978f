//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::ClockError;
use crate::tui::app::Action;

/// Input poll timeout. Bounds how late a tick can be drawn.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Wait briefly for a key press and map it to an action.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn next_action() -> Result<Option<Action>, ClockError> {
    if !event::poll(POLL_TIMEOUT)
        .map_err(|e| ClockError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| ClockError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
        _ => Ok(None),
    }
}

/// Map a key to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ' | 'p') | KeyCode::Enter => Some(Action::Toggle),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('s') => Some(Action::Skip),
        KeyCode::Char('w') => Some(Action::CycleWork),
        KeyCode::Char('b') => Some(Action::CycleShortBreak),
        KeyCode::Char('l') => Some(Action::CycleLongBreak),
        KeyCode::Char('c') => Some(Action::CycleLength),
        KeyCode::Char('m') => Some(Action::ToggleSound),
        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    }
}
