//! Main UI rendering coordinator.

use ratatui::Frame;

use super::app::App;
use super::components::panel;

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    panel::render(frame, app.panel_rect(), app);
}
