//! Terminal overlay for the quote panel.
//!
//! Provides a Ratatui-based display sink: a small floating panel that can be
//! dragged with the mouse or nudged with the arrow keys, and closed with its
//! `×` glyph or `q`.

pub mod app;
pub mod components;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{ChannelSink, Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
