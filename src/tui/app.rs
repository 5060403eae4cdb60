//! Application state for the overlay.

use std::time::Duration;

use chrono::NaiveDateTime;
use ratatui::layout::Rect;

use crate::models::{DisplayState, Instrument, PollMode};

/// Instrument name column width.
pub const NAME_WIDTH: u16 = 12;
/// Price column width.
pub const PRICE_WIDTH: u16 = 10;
/// Change column width.
pub const CHANGE_WIDTH: u16 = 18;

/// Outer panel width: three columns, two gaps, two borders.
pub const PANEL_WIDTH: u16 = NAME_WIDTH + PRICE_WIDTH + CHANGE_WIDTH + 2 + 2;

/// Central application state container.
///
/// Quote rows are only ever replaced wholesale by the refresh loop; the rest
/// is window plumbing (position, drag, quit).
pub struct App {
    /// One row per instrument, in display order.
    pub rows: Vec<QuoteRow>,
    /// Cadence picked by the last tick.
    pub poll_mode: Option<PollMode>,
    /// Delay until the next tick.
    pub next_refresh: Option<Duration>,
    /// Exchange-local time of the last completed tick.
    pub last_update: Option<NaiveDateTime>,
    /// Top-left corner of the panel, in terminal cells.
    pub position: (u16, u16),
    /// Terminal size.
    pub viewport: Rect,
    /// Pointer anchor while the panel is being dragged.
    pub drag: Option<DragState>,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

/// An instrument and what is currently shown for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteRow {
    pub instrument: Instrument,
    /// `None` until the first tick reports on this instrument.
    pub state: Option<DisplayState>,
}

/// Pointer position at the last drag event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragState {
    pub x: u16,
    pub y: u16,
    pub moved: bool,
}

impl App {
    /// Creates a new App showing `instruments`, with the panel in the top-left corner.
    pub fn new(instruments: &[Instrument], viewport: Rect) -> Self {
        Self {
            rows: instruments
                .iter()
                .map(|&instrument| QuoteRow {
                    instrument,
                    state: None,
                })
                .collect(),
            poll_mode: None,
            next_refresh: None,
            last_update: None,
            position: (0, 0),
            viewport,
            drag: None,
            should_quit: false,
        }
    }

    /// Replaces the state shown for `instrument`. Unknown instruments are ignored.
    pub fn apply_quote(&mut self, instrument: &Instrument, state: DisplayState) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.instrument == *instrument) {
            row.state = Some(state);
        }
    }

    /// Records the cadence announced after a tick.
    pub fn set_schedule(&mut self, mode: PollMode, delay: Duration, at: NaiveDateTime) {
        self.poll_mode = Some(mode);
        self.next_refresh = Some(delay);
        self.last_update = Some(at);
    }

    /// Area the panel occupies, clamped to the viewport.
    pub fn panel_rect(&self) -> Rect {
        let width = PANEL_WIDTH.min(self.viewport.width);
        let height = (self.rows.len() as u16 + 2).min(self.viewport.height);
        let x = self.position.0.min(self.viewport.width.saturating_sub(width));
        let y = self.position.1.min(self.viewport.height.saturating_sub(height));
        Rect::new(x, y, width, height)
    }

    /// Cell holding the close glyph: top border, one cell in from the right corner.
    pub fn close_button(&self) -> (u16, u16) {
        let panel = self.panel_rect();
        (panel.right().saturating_sub(3), panel.y)
    }

    /// Returns `true` if the cell is on the close glyph or its padding.
    pub fn hits_close_button(&self, x: u16, y: u16) -> bool {
        let (cx, cy) = self.close_button();
        y == cy && x.abs_diff(cx) <= 1
    }

    /// Handles a terminal resize.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        self.clamp_position();
    }

    /// Starts a drag if the pointer is on the panel.
    pub fn start_drag(&mut self, x: u16, y: u16) {
        let panel = self.panel_rect();
        let on_panel = x >= panel.x && x < panel.right() && y >= panel.y && y < panel.bottom();
        self.drag = on_panel.then_some(DragState { x, y, moved: false });
    }

    /// Moves the panel by the pointer delta since the last drag event.
    pub fn drag_to(&mut self, x: u16, y: u16) {
        let Some(drag) = self.drag else {
            return;
        };
        let dx = i32::from(x) - i32::from(drag.x);
        let dy = i32::from(y) - i32::from(drag.y);
        self.move_by(dx, dy);
        self.drag = Some(DragState { x, y, moved: true });
    }

    /// Ends a drag.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Moves the panel, keeping it fully on screen.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        let panel = self.panel_rect();
        let x = (i32::from(panel.x) + dx).max(0);
        let y = (i32::from(panel.y) + dy).max(0);
        self.position = (
            u16::try_from(x).unwrap_or(u16::MAX),
            u16::try_from(y).unwrap_or(u16::MAX),
        );
        self.clamp_position();
    }

    fn clamp_position(&mut self) {
        let panel = self.panel_rect();
        self.position = (panel.x, panel.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Instrument = Instrument::new("A", "sym1");
    const B: Instrument = Instrument::new("B", "sym2");

    fn app() -> App {
        App::new(&[A, B], Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn rows_start_loading() {
        let app = app();
        assert_eq!(app.rows.len(), 2);
        assert!(app.rows.iter().all(|r| r.state.is_none()));
    }

    #[test]
    fn apply_quote_replaces_previous_state() {
        let mut app = app();
        app.apply_quote(&A, DisplayState::Error);
        app.apply_quote(&A, DisplayState::NoData);
        assert_eq!(app.rows[0].state, Some(DisplayState::NoData));
        assert_eq!(app.rows[1].state, None);
    }

    #[test]
    fn apply_quote_ignores_unknown_instrument() {
        let mut app = app();
        app.apply_quote(&Instrument::new("Z", "zzz"), DisplayState::Error);
        assert!(app.rows.iter().all(|r| r.state.is_none()));
    }

    #[test]
    fn drag_moves_panel_by_pointer_delta() {
        let mut app = app();
        app.start_drag(5, 1);
        app.drag_to(15, 6);
        assert_eq!(app.position, (10, 5));
        assert!(app.drag.is_some_and(|d| d.moved));

        app.drag_to(13, 6);
        assert_eq!(app.position, (8, 5));

        app.end_drag();
        app.drag_to(40, 20);
        assert_eq!(app.position, (8, 5));
    }

    #[test]
    fn drag_outside_panel_is_ignored() {
        let mut app = app();
        app.start_drag(70, 20);
        app.drag_to(75, 22);
        assert_eq!(app.position, (0, 0));
    }

    #[test]
    fn panel_stays_on_screen() {
        let mut app = app();
        app.move_by(500, 500);
        let panel = app.panel_rect();
        assert_eq!(panel.right(), 80);
        assert_eq!(panel.bottom(), 24);

        app.move_by(-1000, -1000);
        assert_eq!(app.position, (0, 0));
    }

    #[test]
    fn resize_pulls_panel_back_in() {
        let mut app = app();
        app.move_by(60, 10);
        app.resize(50, 8);
        let panel = app.panel_rect();
        assert!(panel.right() <= 50);
        assert!(panel.bottom() <= 8);
    }

    #[test]
    fn close_button_is_top_right() {
        let app = app();
        assert_eq!(app.close_button(), (PANEL_WIDTH - 3, 0));
        assert!(app.hits_close_button(PANEL_WIDTH - 3, 0));
        assert!(!app.hits_close_button(2, 0));
    }
}
