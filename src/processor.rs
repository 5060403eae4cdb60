//! Pure quote transforms: price deltas and their display strings.
//!
//! Prices are rounded half away from zero. `format_price` rounds to two
//! decimals first and only then decides between the one- and two-decimal
//! forms, so `99.999` renders as `₹100.0`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::fetcher::RecentCloses;
use crate::models::{Direction, DisplayState, QuoteDelta};
use crate::{GlanceError, Result};

/// Indian Rupee sign.
const RUPEE: char = '₹';

/// Prices at or above this are shown with a single decimal.
const ONE_DECIMAL_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Computes absolute and percentage change from `previous` to `latest`.
///
/// # Errors
///
/// Returns [`GlanceError::Compute`] if `previous` is zero or the percentage
/// overflows.
pub fn compute_delta(latest: Decimal, previous: Decimal) -> Result<QuoteDelta> {
    let absolute_change = latest - previous;
    let percent_change = absolute_change
        .checked_div(previous)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| {
            GlanceError::Compute(format!(
                "cannot compute percent change from previous close {previous}"
            ))
        })?;

    Ok(QuoteDelta {
        absolute_change,
        percent_change,
        direction: Direction::of(absolute_change),
    })
}

/// Formats a price with the rupee sign, e.g. `₹150.4` or `₹99.25`.
pub fn format_price(latest: Decimal) -> String {
    let rounded = round(latest, 2);
    let places = if rounded >= ONE_DECIMAL_THRESHOLD { 1 } else { 2 };
    format!("{RUPEE}{}", fixed(latest, places))
}

/// Formats a delta as `+12.34 (+0.56%)`. An exact zero is printed with a `+`.
pub fn format_change(delta: &QuoteDelta) -> String {
    format!(
        "{} ({}%)",
        signed(delta.absolute_change),
        signed(delta.percent_change)
    )
}

/// Builds the normal display state from a pair of closes.
///
/// # Errors
///
/// Propagates [`compute_delta`] failures.
pub fn display_state(closes: RecentCloses) -> Result<DisplayState> {
    let delta = compute_delta(closes.latest, closes.previous)?;

    Ok(DisplayState::Quote {
        price_text: format_price(closes.latest),
        change_text: format_change(&delta),
        direction: delta.direction,
    })
}

fn round(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders `value` with exactly `places` decimals, no sign handling.
fn fixed(value: Decimal, places: u32) -> String {
    let mut rounded = round(value, places);
    rounded.rescale(places);
    rounded.to_string()
}

/// Renders `value` with two decimals and an explicit sign taken from the
/// exact value, so any strictly negative change keeps its `-`.
fn signed(value: Decimal) -> String {
    let sign = if value < Decimal::ZERO { '-' } else { '+' };
    format!("{sign}{}", fixed(value.abs(), 2))
}
