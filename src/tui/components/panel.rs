//! Floating quote panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};

use super::status_bar;
use crate::models::DisplayState;
use crate::tui::app::{App, CHANGE_WIDTH, NAME_WIDTH, PRICE_WIDTH, QuoteRow};

const TITLE: &str = " Indian Markets at a glance ";

/// Renders the panel with one row per instrument.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title_top(Line::from(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .title_top(
            Line::from(Span::styled(" × ", Style::default().fg(Color::Red))).right_aligned(),
        )
        .title_bottom(status_bar::line(app));

    let lines: Vec<Line> = app.rows.iter().map(row_line).collect();

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn row_line(row: &QuoteRow) -> Line<'static> {
    let (price, change) = match &row.state {
        Some(state) => (state.price_text().to_string(), state.change_text().to_string()),
        None => ("Loading...".to_string(), "--".to_string()),
    };
    let style = row_style(row.state.as_ref());

    Line::from(vec![
        Span::raw(format!(
            "{:<width$} ",
            row.instrument.display_name,
            width = usize::from(NAME_WIDTH)
        )),
        Span::styled(
            format!("{:>width$} ", price, width = usize::from(PRICE_WIDTH)),
            style,
        ),
        Span::styled(
            format!("{:>width$}", change, width = usize::from(CHANGE_WIDTH)),
            style,
        ),
    ])
}

/// Green for up or unchanged, red for down, neutral for placeholders.
fn row_style(state: Option<&DisplayState>) -> Style {
    let color = match state {
        None => Color::Gray,
        Some(DisplayState::NoData) => Color::DarkGray,
        Some(DisplayState::Error) => Color::Yellow,
        Some(quote) => match quote.direction() {
            Some(direction) if direction.is_non_negative() => Color::Green,
            _ => Color::Red,
        },
    };
    Style::default().fg(color)
}
