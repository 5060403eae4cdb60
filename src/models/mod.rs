//! Shared models for instruments, quotes, and provider responses.
//!
//! Contains the compiled-in instrument table, the derived quote and display
//! types, and the wire format of the market-data provider.

pub mod chart;
pub mod quote;

use std::fmt;

pub use quote::{Direction, DisplayState, PollMode, QuoteDelta};

/// A tracked security or index.
///
/// The display name is what the overlay shows; the symbol id is what the
/// market-data provider understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instrument {
    pub display_name: &'static str,
    pub symbol_id: &'static str,
}

impl Instrument {
    pub const fn new(display_name: &'static str, symbol_id: &'static str) -> Self {
        Self {
            display_name,
            symbol_id,
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.symbol_id)
    }
}

/// Instruments shown on the overlay, in display order.
pub const INSTRUMENTS: [Instrument; 4] = [
    Instrument::new("NIFTY50", "^NSEI"),
    Instrument::new("BANKNIFTY", "^NSEBANK"),
    Instrument::new("HDFC Bank", "HDFCBANK.NS"),
    Instrument::new("IGIL", "IGIL.NS"),
];
