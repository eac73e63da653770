//! Shift model.
//!
//! This module defines the [`Shift`] struct, one contiguous work interval.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::analysis::{is_consecutive_day, is_same_day, truncated_hours};

/// Represents a single work shift as a start/end instant pair.
///
/// Shifts are built by the timeline builder, which rejects records whose
/// start is after their end, so `start <= end` holds for every shift held by
/// a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The start time of the shift.
    pub start: NaiveDateTime,
    /// The end time of the shift.
    pub end: NaiveDateTime,
}

impl Shift {
    /// Creates a shift from its start and end instants.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Returns the shift duration in whole hours, truncating any remainder.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_compliance::models::Shift;
    /// use chrono::NaiveDateTime;
    ///
    /// let shift = Shift::new(
    ///     NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     NaiveDateTime::parse_from_str("2026-01-15 22:59:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// );
    /// assert_eq!(shift.whole_hours(), 13);
    /// ```
    pub fn whole_hours(&self) -> i64 {
        truncated_hours(self.start, self.end)
    }

    /// Returns true if the shift starts and ends on the same calendar day.
    pub fn is_same_day(&self) -> bool {
        is_same_day(self.start, self.end)
    }

    /// Returns true if the shift ends on the calendar day after it starts.
    ///
    /// Uses the add-24-hours rule, so a shift spanning two midnights is
    /// neither same-day nor crossing.
    pub fn crosses_midnight(&self) -> bool {
        is_consecutive_day(self.start, self.end)
    }
}
