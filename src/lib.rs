//! Near-real-time NSE quote overlay.
//!
//! The core is a refresh loop ([`scheduler`]) that fetches the two latest
//! daily closes per instrument ([`fetcher`]), turns them into display text
//! ([`processor`]), and re-arms itself on a cadence picked by the exchange
//! session clock ([`session`]). The [`tui`] module is the terminal display.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod models;
pub mod processor;
pub mod scheduler;
pub mod session;
pub mod tls;
pub mod tui;

pub use error::{GlanceError, Result};
