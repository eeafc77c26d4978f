//! Terminal User Interface (TUI) for pomoclock.
//!
//! Renders the session clock full-screen and maps keys to clock controls.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{Action, App};

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::clock::SessionClock;
use crate::error::ClockError;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(clock: SessionClock) -> Result<(), ClockError> {
    enable_raw_mode()
        .map_err(|e| ClockError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| ClockError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| ClockError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(clock);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    let stats = app.clock.stats();
    tracing::info!(
        completed = stats.completed_sessions,
        minutes = stats.minutes_focused,
        "tui closed"
    );
    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), ClockError> {
    while !app.should_quit {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| ClockError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::next_action()? {
            app.apply(action);
        }
        app.on_frame(Instant::now());
    }

    Ok(())
}
