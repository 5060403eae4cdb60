//! Derived quote types: price deltas and the renderable per-instrument state.

use rust_decimal::Decimal;

/// Sign of a price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    /// Classifies a change by its sign.
    pub fn of(change: Decimal) -> Self {
        if change > Decimal::ZERO {
            Direction::Up
        } else if change < Decimal::ZERO {
            Direction::Down
        } else {
            Direction::Flat
        }
    }

    /// `Flat` counts as non-negative and is styled like `Up`.
    pub fn is_non_negative(self) -> bool {
        !matches!(self, Direction::Down)
    }
}

/// Change between the previous and the latest close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteDelta {
    pub absolute_change: Decimal,
    /// Percentage points, e.g. `5` for a 5% move.
    pub percent_change: Decimal,
    pub direction: Direction,
}

/// What the display shows for one instrument.
///
/// Rebuilt from scratch on every tick and replaces the previous value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    /// Both closes were available and the delta was computed.
    Quote {
        price_text: String,
        change_text: String,
        direction: Direction,
    },
    /// The provider returned fewer than two closes.
    NoData,
    /// Fetching or computing failed for this instrument.
    Error,
}

impl DisplayState {
    pub fn price_text(&self) -> &str {
        match self {
            DisplayState::Quote { price_text, .. } => price_text,
            DisplayState::NoData => "No data",
            DisplayState::Error => "Error",
        }
    }

    pub fn change_text(&self) -> &str {
        match self {
            DisplayState::Quote { change_text, .. } => change_text,
            DisplayState::NoData | DisplayState::Error => "--",
        }
    }

    /// Direction of the normal variant; `None` for "no data" and "error".
    pub fn direction(&self) -> Option<Direction> {
        match self {
            DisplayState::Quote { direction, .. } => Some(*direction),
            DisplayState::NoData | DisplayState::Error => None,
        }
    }
}

/// Refresh cadence chosen after each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollMode {
    /// Exchange session open: refresh quickly.
    FastPoll,
    /// Exchange session closed: refresh slowly.
    SlowPoll,
}

impl PollMode {
    /// Returns a short badge for the status line.
    pub fn label(&self) -> &'static str {
        match self {
            PollMode::FastPoll => "LIVE",
            PollMode::SlowPoll => "CLOSED",
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn direction_from_sign() {
        assert_eq!(Direction::of(dec!(0.01)), Direction::Up);
        assert_eq!(Direction::of(dec!(-0.01)), Direction::Down);
        assert_eq!(Direction::of(dec!(0)), Direction::Flat);
    }

    #[test]
    fn flat_is_non_negative() {
        assert!(Direction::Up.is_non_negative());
        assert!(Direction::Flat.is_non_negative());
        assert!(!Direction::Down.is_non_negative());
    }

    #[test]
    fn placeholder_states_have_both_texts() {
        assert_eq!(DisplayState::NoData.price_text(), "No data");
        assert_eq!(DisplayState::NoData.change_text(), "--");
        assert_eq!(DisplayState::Error.price_text(), "Error");
        assert_eq!(DisplayState::Error.change_text(), "--");
        assert_eq!(DisplayState::Error.direction(), None);
    }
}
