//! NSE trading-session clock.
//!
//! The exchange trades Monday to Friday, 09:15:00 to 15:30:00 inclusive,
//! India Standard Time. IST has no daylight saving, so a fixed +05:30 offset
//! applied to UTC gives exchange-local time regardless of the host's zone.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, TimeZone, Timelike, Utc, Weekday};

/// India Standard Time, UTC+05:30.
const IST: FixedOffset = match FixedOffset::east_opt(5 * 3600 + 30 * 60) {
    Some(offset) => offset,
    None => panic!("IST offset out of range"),
};

/// Session open, seconds after exchange-local midnight.
const SESSION_OPEN_SECS: u32 = 9 * 3600 + 15 * 60;

/// Session close, seconds after exchange-local midnight.
const SESSION_CLOSE_SECS: u32 = 15 * 3600 + 30 * 60;

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Converts any zoned instant to exchange-local wall time.
pub fn exchange_time<Tz: TimeZone>(now: &DateTime<Tz>) -> NaiveDateTime {
    now.with_timezone(&IST).naive_local()
}

/// Returns `true` if the exchange is inside its trading window at `now`.
pub fn is_session_open<Tz: TimeZone>(now: &DateTime<Tz>) -> bool {
    let local = exchange_time(now);

    if matches!(local.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }

    let secs = local.num_seconds_from_midnight();
    let past_close =
        secs > SESSION_CLOSE_SECS || (secs == SESSION_CLOSE_SECS && local.nanosecond() > 0);

    secs >= SESSION_OPEN_SECS && !past_close
}
