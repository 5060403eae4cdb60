//! Status line shown in the panel's bottom border.

use std::time::Duration;

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::models::PollMode;
use crate::tui::app::App;

/// Builds the status line: poll mode, next refresh, and last update time.
pub fn line(app: &App) -> Line<'static> {
    let Some(mode) = app.poll_mode else {
        return Line::from(Span::styled(
            " starting ",
            Style::default().fg(Color::DarkGray),
        ));
    };

    let mode_color = match mode {
        PollMode::FastPoll => Color::Green,
        PollMode::SlowPoll => Color::DarkGray,
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(mode.label(), Style::default().fg(mode_color)),
    ];

    if let Some(delay) = app.next_refresh {
        spans.push(Span::raw(format!(" · {}", format_delay(delay))));
    }

    if let Some(at) = app.last_update {
        spans.push(Span::styled(
            format!(" · {} IST", at.format("%H:%M:%S")),
            Style::default().fg(Color::Gray),
        ));
    }

    spans.push(Span::raw(" "));
    Line::from(spans)
}

/// Renders a refresh delay compactly: `500ms`, `60s`.
pub fn format_delay(delay: Duration) -> String {
    if delay < Duration::from_secs(1) {
        format!("{}ms", delay.as_millis())
    } else {
        format!("{}s", delay.as_secs())
    }
}
