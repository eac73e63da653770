//! Calendar-day and elapsed-hour arithmetic on wall-clock instants.
//!
//! All functions are pure: they compare or derive new values and never
//! modify their inputs.

use chrono::{Duration, NaiveDateTime};

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Returns true if both instants fall on the same calendar day.
///
/// Only year, month, and day-of-month are compared.
///
/// # Example
///
/// ```
/// use shift_compliance::analysis::is_same_day;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(is_same_day(at("2026-01-15 00:00:00"), at("2026-01-15 23:59:59")));
/// assert!(!is_same_day(at("2026-01-15 23:59:59"), at("2026-01-16 00:00:00")));
/// ```
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Returns true if `reference` plus exactly 24 hours lands on the calendar
/// day of `target`.
///
/// # Example
///
/// ```
/// use shift_compliance::analysis::is_consecutive_day;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(is_consecutive_day(at("2026-01-31 22:00:00"), at("2026-02-01 04:00:00")));
/// assert!(!is_consecutive_day(at("2026-01-15 08:00:00"), at("2026-01-17 08:00:00")));
/// ```
pub fn is_consecutive_day(reference: NaiveDateTime, target: NaiveDateTime) -> bool {
    is_same_day(reference + Duration::hours(24), target)
}

/// Elapsed time from `from` to `to` in whole hours.
///
/// Computed on milliseconds and truncated toward zero, so 1h59m is 1 and
/// 59m is 0. A negative interval yields a negative count.
pub fn truncated_hours(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_milliseconds() / MILLIS_PER_HOUR
}
