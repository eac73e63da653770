//! Detection of short rest periods between shifts.

use crate::config::ShiftGapRule;
use crate::models::{EmployeeRegistry, EmployeeTimeline, Finding};

use super::day_arithmetic::truncated_hours;

/// Reports each employee with at least one pair of adjacent shifts whose gap,
/// `next.start - previous.end` in truncated whole hours, lies within
/// `rule.min_hours..=rule.max_hours`.
///
/// Employees with fewer than two shifts are never reported, and each employee
/// is reported once no matter how many pairs qualify.
///
/// # Example
///
/// ```
/// use shift_compliance::analysis::detect_shift_gaps;
/// use shift_compliance::config::ShiftGapRule;
/// use shift_compliance::models::{EmployeeRegistry, EmployeeTimeline, Shift};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let registry: EmployeeRegistry = vec![EmployeeTimeline::with_shifts(
///     "E1",
///     "Ada",
///     vec![
///         Shift::new(at("2026-01-15 06:00:00"), at("2026-01-15 10:00:00")),
///         Shift::new(at("2026-01-15 15:00:00"), at("2026-01-15 19:00:00")),
///     ],
/// )]
/// .into_iter()
/// .collect();
///
/// assert_eq!(detect_shift_gaps(&registry, &ShiftGapRule::default()).len(), 1);
/// ```
pub fn detect_shift_gaps(registry: &EmployeeRegistry, rule: &ShiftGapRule) -> Vec<Finding> {
    registry
        .iter()
        .filter(|timeline| has_short_gap(timeline, rule))
        .map(Finding::for_timeline)
        .collect()
}

fn has_short_gap(timeline: &EmployeeTimeline, rule: &ShiftGapRule) -> bool {
    timeline
        .shifts()
        .windows(2)
        .any(|pair| rule.contains(truncated_hours(pair[0].end, pair[1].start)))
}
