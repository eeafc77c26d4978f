//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::clock::{format_duration, SessionType};
use crate::tui::app::App;

const fn session_color(session_type: SessionType) -> Color {
    match session_type {
        SessionType::Work => Color::Cyan,
        SessionType::ShortBreak => Color::Green,
        SessionType::LongBreak => Color::Yellow,
    }
}

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Countdown
            Constraint::Length(3), // Progress
            Constraint::Length(3), // Stats
            Constraint::Length(3), // Settings
            Constraint::Min(3),    // Completion log
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_countdown(frame, app, chunks[0]);
    render_progress(frame, app, chunks[1]);
    render_stats(frame, app, chunks[2]);
    render_settings(frame, app, chunks[3]);
    render_log(frame, app, chunks[4]);
    render_status_bar(frame, app, chunks[5]);
}

fn render_countdown(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let snapshot = app.clock.snapshot();
    let color = session_color(snapshot.session_type);
    let state = if snapshot.is_running { "running" } else { "paused" };

    let mut title = format!(" {} ", snapshot.label);
    if let Some(task) = &snapshot.task {
        title.push_str(&format!("- {task} "));
    }

    let body = vec![
        Line::from(Span::styled(
            snapshot.remaining,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(state, Style::default().fg(Color::DarkGray))),
    ];

    let countdown = Paragraph::new(body).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(countdown, area);
}

fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let snapshot = app.clock.snapshot();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(session_color(snapshot.session_type)))
        .ratio(snapshot.progress.clamp(0.0, 1.0));
    frame.render_widget(gauge, area);
}

fn render_stats(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let stats = app.clock.stats();
    let line = Line::from(vec![
        Span::styled(
            format!("{}", stats.completed_sessions),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" completed sessions   "),
        Span::styled(
            format!("{}", stats.completed_cycles),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" cycles   "),
        Span::styled(
            format!("{}", stats.minutes_focused),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" minutes focused"),
    ]);
    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Stats ").borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_settings(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let config = app.clock.config();
    let text = format!(
        "[w] work {}  [b] short {}  [l] long {}  [c] cycle {}  [m] sound {}",
        format_duration(config.work_duration_seconds),
        format_duration(config.short_break_duration_seconds),
        format_duration(config.long_break_duration_seconds),
        config.sessions_until_long_break,
        if config.sound_enabled { "on" } else { "off" }
    );
    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().title(" Settings ").borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_log(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .log
        .iter()
        .map(|entry| {
            let finished = entry.event.previous_type;
            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.at.format("%H:%M").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(
                    finished.display_name(),
                    Style::default().fg(session_color(finished)),
                ),
                Span::raw(format!(
                    " ({})",
                    format_duration(entry.event.previous_duration_seconds)
                )),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Completed ")
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status = app.status.as_deref().unwrap_or("space:start/pause | ?:help");
    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{SessionClock, SessionConfig, SilentSink};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_initial_screen() {
        let clock = SessionClock::new(SessionConfig::default(), Box::new(SilentSink))
            .unwrap()
            .with_task(Some("Arrays".to_string()));
        let app = App::new(clock);
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();

        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Focus Time - Arrays"));
        assert!(text.contains("25:00"));
        assert!(text.contains("paused"));
        assert!(text.contains("completed sessions"));
        assert!(text.contains("Press ? for help"));
    }
}
