//! Event handling for the overlay.

use std::time::Duration;

use chrono::Utc;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use tokio::sync::mpsc;

use super::app::App;
use crate::models::{DisplayState, Instrument, PollMode};
use crate::scheduler::DisplaySink;
use crate::session::exchange_time;
use crate::{GlanceError, Result};

/// Events that can occur in the terminal.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Mouse button or motion.
    Mouse(MouseEvent),
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// Fresh state for one instrument.
    Quote {
        instrument: Instrument,
        state: DisplayState,
    },
    /// Cadence chosen after a tick.
    Schedule { mode: PollMode, delay: Duration },
}

/// [`DisplaySink`] that forwards updates to the UI loop over a channel.
#[derive(Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Message>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<Message>) -> Self {
        Self { tx }
    }
}

impl DisplaySink for ChannelSink {
    fn render(&mut self, instrument: &Instrument, state: DisplayState) -> Result<()> {
        self.tx
            .send(Message::Quote {
                instrument: *instrument,
                state,
            })
            .map_err(|_| GlanceError::SinkClosed)
    }

    fn schedule(&mut self, mode: PollMode, delay: Duration) -> Result<()> {
        self.tx
            .send(Message::Schedule { mode, delay })
            .map_err(|_| GlanceError::SinkClosed)
    }
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Mouse(mouse))) => {
                    if tx.send(Message::Input(Event::Mouse(mouse))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::Quote { instrument, state } => app.apply_quote(&instrument, state),
        Message::Schedule { mode, delay } => {
            app.set_schedule(mode, delay, exchange_time(&Utc::now()));
        }
    }
}

fn handle_input(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Resize(w, h) => app.resize(w, h),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Left | KeyCode::Char('h') => app.move_by(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.move_by(1, 0),
        KeyCode::Up | KeyCode::Char('k') => app.move_by(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_by(0, 1),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.hits_close_button(mouse.column, mouse.row) {
                app.should_quit = true;
            } else {
                app.start_drag(mouse.column, mouse.row);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => app.drag_to(mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => app.end_drag(),
        _ => {}
    }
}
