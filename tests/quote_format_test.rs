//! Display formatting and session rules through the public API.

use chrono::{Duration, TimeZone, Utc};
use rust_decimal_macros::dec;

use glance::models::Direction;
use glance::processor::{compute_delta, format_change, format_price};
use glance::session::is_session_open;

#[test]
fn price_uses_one_decimal_from_one_hundred() {
    assert_eq!(format_price(dec!(150.4)), "₹150.4");
    assert_eq!(format_price(dec!(99.999)), "₹100.0");
    assert_eq!(format_price(dec!(99.99)), "₹99.99");
    assert_eq!(format_price(dec!(1652.85)), "₹1652.9");
}

#[test]
fn five_percent_up_and_down() {
    let up = compute_delta(dec!(105), dec!(100)).unwrap();
    assert_eq!(up.absolute_change, dec!(5));
    assert_eq!(up.percent_change, dec!(5.0));
    assert_eq!(up.direction, Direction::Up);
    assert_eq!(format_change(&up), "+5.00 (+5.00%)");

    let down = compute_delta(dec!(95), dec!(100)).unwrap();
    assert_eq!(down.direction, Direction::Down);
    assert_eq!(format_change(&down), "-5.00 (-5.00%)");
}

#[test]
fn weekends_are_closed_all_day() {
    // Saturday 2024-06-08 00:00 IST == Friday 18:30 UTC
    let saturday_start = Utc.with_ymd_and_hms(2024, 6, 7, 18, 30, 0).unwrap();
    for quarter_hour in 0..(2 * 24 * 4) {
        let instant = saturday_start + Duration::minutes(15 * quarter_hour);
        assert!(!is_session_open(&instant), "open at {instant}");
    }
}

#[test]
fn weekday_window_is_inclusive() {
    // Wednesday 2024-06-05, times in UTC (IST - 05:30)
    let at = |h, m, s| Utc.with_ymd_and_hms(2024, 6, 5, h, m, s).unwrap();

    assert!(!is_session_open(&at(3, 44, 59))); // 09:14:59 IST
    assert!(is_session_open(&at(3, 45, 0))); // 09:15:00 IST
    assert!(is_session_open(&at(7, 0, 0))); // 12:30:00 IST
    assert!(is_session_open(&at(10, 0, 0))); // 15:30:00 IST
    assert!(!is_session_open(&at(10, 0, 1))); // 15:30:01 IST
}
