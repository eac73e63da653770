//! Detection of overlong single shifts.

use crate::config::LongShiftRule;
use crate::models::{EmployeeRegistry, Finding};

/// Counts, per employee, the shifts lasting at least `rule.min_hours` whole
/// hours (duration truncated), and reports every employee with a non-zero
/// count together with that count.
///
/// # Example
///
/// ```
/// use shift_compliance::analysis::detect_long_shifts;
/// use shift_compliance::config::LongShiftRule;
/// use shift_compliance::models::{EmployeeRegistry, EmployeeTimeline, Shift};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let registry: EmployeeRegistry = vec![EmployeeTimeline::with_shifts(
///     "E1",
///     "Ada",
///     vec![Shift::new(at("2026-01-15 09:00:00"), at("2026-01-15 23:00:00"))],
/// )]
/// .into_iter()
/// .collect();
///
/// let findings = detect_long_shifts(&registry, &LongShiftRule::default());
/// assert_eq!(findings[0].occurrences(), Some(1));
/// ```
pub fn detect_long_shifts(registry: &EmployeeRegistry, rule: &LongShiftRule) -> Vec<Finding> {
    registry
        .iter()
        .filter_map(|timeline| {
            let count = timeline
                .shifts()
                .iter()
                .filter(|shift| shift.whole_hours() >= rule.min_hours)
                .count();

            (count > 0).then(|| Finding::with_occurrences(timeline, count as u32))
        })
        .collect()
}
