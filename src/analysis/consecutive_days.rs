//! Detection of long runs of consecutive working days.

use crate::config::ConsecutiveDaysRule;
use crate::models::{EmployeeRegistry, EmployeeTimeline, Finding};

use super::day_arithmetic::{is_consecutive_day, is_same_day};

/// Reports each employee whose sorted shifts reach a streak of
/// `rule.min_days` consecutive calendar days.
///
/// The streak is tracked shift by shift:
/// - it starts at 1, or 2 if the first shift ends on a later day than it starts
/// - a shift starting on the day the previous one ended leaves it unchanged
/// - a shift starting on the day after the previous one ended adds 1
/// - any other start resets it to 1
/// - a shift that itself ends on the day after it starts adds 1 more
///
/// Scanning stops for an employee at the first shift that reaches the
/// threshold, so each employee is reported at most once. Findings follow
/// registry order.
///
/// # Example
///
/// ```
/// use shift_compliance::analysis::detect_consecutive_days;
/// use shift_compliance::config::ConsecutiveDaysRule;
/// use shift_compliance::models::{EmployeeRegistry, EmployeeTimeline, Shift};
/// use chrono::{Duration, NaiveDateTime};
///
/// let first = NaiveDateTime::parse_from_str("2026-01-05 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let shifts = (0..7)
///     .map(|day| {
///         let start = first + Duration::days(day);
///         Shift::new(start, start + Duration::hours(8))
///     })
///     .collect();
/// let registry: EmployeeRegistry =
///     vec![EmployeeTimeline::with_shifts("E1", "Ada", shifts)].into_iter().collect();
///
/// let findings = detect_consecutive_days(&registry, &ConsecutiveDaysRule::default());
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].employee_id, "E1");
/// ```
pub fn detect_consecutive_days(
    registry: &EmployeeRegistry,
    rule: &ConsecutiveDaysRule,
) -> Vec<Finding> {
    registry
        .iter()
        .filter(|timeline| reaches_streak(timeline, rule.min_days))
        .map(Finding::for_timeline)
        .collect()
}

fn reaches_streak(timeline: &EmployeeTimeline, min_days: u32) -> bool {
    let shifts = timeline.shifts();
    let Some(first) = shifts.first() else {
        return false;
    };

    let mut streak: u32 = if first.is_same_day() { 1 } else { 2 };

    for pair in shifts.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);

        // A start on the previous end's day is already counted.
        if !is_same_day(previous.end, current.start) {
            if is_consecutive_day(previous.end, current.start) {
                streak += 1;
            } else {
                streak = 1;
            }
        }

        if current.crosses_midnight() {
            streak += 1;
        }

        if streak >= min_days {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Shift;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn day_shift(day: NaiveDate) -> Shift {
        Shift::new(
            day.and_hms_opt(9, 0, 0).unwrap(),
            day.and_hms_opt(17, 0, 0).unwrap(),
        )
    }

    fn night_shift(day: NaiveDate) -> Shift {
        Shift::new(
            day.and_hms_opt(22, 0, 0).unwrap(),
            (day + Duration::days(1)).and_hms_opt(4, 0, 0).unwrap(),
        )
    }

    fn days_from(start: &str, count: i64) -> Vec<NaiveDate> {
        let first = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
        (0..count).map(|i| first + Duration::days(i)).collect()
    }

    fn registry_of(id: &str, shifts: Vec<Shift>) -> EmployeeRegistry {
        vec![EmployeeTimeline::with_shifts(id, "Name", shifts)]
            .into_iter()
            .collect()
    }

    fn detect(registry: &EmployeeRegistry) -> Vec<Finding> {
        detect_consecutive_days(registry, &ConsecutiveDaysRule::default())
    }

    // ==========================================================================
    // CD-001: seven same-day shifts on seven days
    // ==========================================================================
    #[test]
    fn test_cd_001_seven_day_shifts_reported() {
        let shifts = days_from("2026-01-01", 7).into_iter().map(day_shift).collect();
        let findings = detect(&registry_of("E1", shifts));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].employee_id, "E1");
        assert_eq!(findings[0].occurrences(), None);
    }

    // ==========================================================================
    // CD-002: six days is not enough
    // ==========================================================================
    #[test]
    fn test_cd_002_six_days_not_reported() {
        let shifts = days_from("2026-01-01", 6).into_iter().map(day_shift).collect();
        assert!(detect(&registry_of("E1", shifts)).is_empty());
    }

    // ==========================================================================
    // CD-003: a two-day gap resets the streak
    // ==========================================================================
    #[test]
    fn test_cd_003_true_gap_resets() {
        let mut shifts = vec![Shift::new(
            make_datetime("2026-01-01", "00:00:00"),
            make_datetime("2026-01-01", "08:00:00"),
        )];
        // Day 2 idle, then days 3..=8 worked: a run of six.
        shifts.extend(days_from("2026-01-03", 6).into_iter().map(day_shift));
        assert!(detect(&registry_of("E2", shifts)).is_empty());
    }

    // ==========================================================================
    // CD-004: a single midnight-crossing shift counts two days
    // ==========================================================================
    #[test]
    fn test_cd_004_single_night_shift_counts_two_days() {
        let rule = ConsecutiveDaysRule { min_days: 2 };
        let registry = registry_of(
            "E3",
            vec![night_shift(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())],
        );
        // The initial streak of 2 is only checked once a second shift exists.
        assert!(detect_consecutive_days(&registry, &rule).is_empty());

        let registry = registry_of(
            "E3",
            vec![
                night_shift(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
                Shift::new(
                    make_datetime("2026-01-02", "18:00:00"),
                    make_datetime("2026-01-02", "20:00:00"),
                ),
            ],
        );
        assert_eq!(detect_consecutive_days(&registry, &rule).len(), 1);
    }

    // ==========================================================================
    // CD-005: night shifts chain through shared days
    // ==========================================================================
    #[test]
    fn test_cd_005_night_shifts_chain() {
        // Nights starting Jan 1..=Jan 6 cover Jan 1..=Jan 7.
        let shifts = days_from("2026-01-01", 6).into_iter().map(night_shift).collect();
        assert_eq!(detect(&registry_of("E4", shifts)).len(), 1);

        let shifts = days_from("2026-01-01", 5).into_iter().map(night_shift).collect();
        assert!(detect(&registry_of("E4", shifts)).is_empty());
    }

    // ==========================================================================
    // CD-006: several shifts on one day do not inflate the streak
    // ==========================================================================
    #[test]
    fn test_cd_006_split_shifts_same_day() {
        let mut shifts = Vec::new();
        for day in days_from("2026-01-01", 6) {
            shifts.push(Shift::new(
                day.and_hms_opt(6, 0, 0).unwrap(),
                day.and_hms_opt(10, 0, 0).unwrap(),
            ));
            shifts.push(Shift::new(
                day.and_hms_opt(16, 0, 0).unwrap(),
                day.and_hms_opt(20, 0, 0).unwrap(),
            ));
        }
        assert!(detect(&registry_of("E5", shifts)).is_empty());
    }

    // ==========================================================================
    // CD-007: reported once even with a streak far beyond the threshold
    // ==========================================================================
    #[test]
    fn test_cd_007_reported_once() {
        let shifts = days_from("2026-01-01", 30).into_iter().map(day_shift).collect();
        assert_eq!(detect(&registry_of("E6", shifts)).len(), 1);
    }

    // ==========================================================================
    // CD-008: empty timelines are skipped, order is registry order
    // ==========================================================================
    #[test]
    fn test_cd_008_registry_order_and_empty_skip() {
        let week: Vec<Shift> = days_from("2026-01-01", 7).into_iter().map(day_shift).collect();
        let registry: EmployeeRegistry = vec![
            EmployeeTimeline::with_shifts("Z", "Zed", week.clone()),
            EmployeeTimeline::new("EMPTY", "Nobody"),
            EmployeeTimeline::with_shifts("A", "Abe", week),
        ]
        .into_iter()
        .collect();

        let ids: Vec<String> = detect(&registry).into_iter().map(|f| f.employee_id).collect();
        assert_eq!(ids, vec!["Z".to_string(), "A".to_string()]);
    }

    // ==========================================================================
    // CD-009: a shift spanning two midnights neither chains nor doubles
    // ==========================================================================
    #[test]
    fn test_cd_009_multi_day_shift_not_double_counted() {
        let mut shifts = vec![Shift::new(
            make_datetime("2026-01-01", "20:00:00"),
            make_datetime("2026-01-03", "02:00:00"),
        )];
        // Jan 1..=3 covered, then Jan 4..=6 day shifts: initial 2 + 3 = 5.
        shifts.extend(days_from("2026-01-04", 3).into_iter().map(day_shift));
        let rule = ConsecutiveDaysRule { min_days: 5 };
        assert_eq!(detect_consecutive_days(&registry_of("E7", shifts.clone()), &rule).len(), 1);
        let rule = ConsecutiveDaysRule { min_days: 6 };
        assert!(detect_consecutive_days(&registry_of("E7", shifts), &rule).is_empty());
    }

    // ==========================================================================
    // CD-010: threshold comes from the rule
    // ==========================================================================
    #[test]
    fn test_cd_010_custom_threshold() {
        let shifts = days_from("2026-01-01", 3).into_iter().map(day_shift).collect();
        let rule = ConsecutiveDaysRule { min_days: 3 };
        assert_eq!(detect_consecutive_days(&registry_of("E8", shifts), &rule).len(), 1);
    }
}
