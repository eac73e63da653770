//! Grouping raw records into per-employee timelines.

use crate::error::AnalysisError;
use crate::models::{EmployeeRegistry, RawShiftRecord, RecordIssue, Shift};

/// The registry built from one input sequence, plus every record problem met.
#[derive(Debug, Clone, Default)]
pub struct BuildOutcome {
    /// Timelines keyed by employee id, in first-seen order, shifts sorted.
    pub registry: EmployeeRegistry,
    /// Non-fatal problems, in input order.
    pub issues: Vec<RecordIssue>,
}

/// Groups raw shift records by employee into sorted timelines.
///
/// For each record:
/// - no usable employee id: [`AnalysisError::MalformedRecord`], record skipped
/// - id present, times incomplete: employee registered,
///   [`AnalysisError::MissingShiftFields`] recorded, no shift added
/// - start after end: employee registered,
///   [`AnalysisError::InvertedInterval`] recorded, no shift added
/// - otherwise the shift is appended to the employee's timeline
///
/// The first record seen for an id fixes the employee's name. Identical
/// shifts are kept as-is.
///
/// # Example
///
/// ```
/// use shift_compliance::analysis::TimelineBuilder;
/// use shift_compliance::models::RawShiftRecord;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let outcome = TimelineBuilder::new()
///     .extend(vec![
///         RawShiftRecord::shift("E1", "Ada", at("2026-01-16 09:00:00"), at("2026-01-16 17:00:00")),
///         RawShiftRecord::without_shift("E2", "Bob"),
///         RawShiftRecord::shift("E1", "Ada", at("2026-01-15 09:00:00"), at("2026-01-15 17:00:00")),
///     ])
///     .build();
///
/// assert_eq!(outcome.registry.len(), 2);
/// let e1 = outcome.registry.get("E1").unwrap();
/// assert_eq!(e1.shifts()[0].start, at("2026-01-15 09:00:00"));
/// ```
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    registry: EmployeeRegistry,
    issues: Vec<RecordIssue>,
    next_row: usize,
}

impl TimelineBuilder {
    /// Creates a builder with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one record.
    pub fn push(&mut self, record: RawShiftRecord) {
        let row = self.next_row;
        self.next_row += 1;

        let Some(employee_id) = record.usable_employee_id() else {
            self.issues.push(RecordIssue {
                row,
                error: AnalysisError::MalformedRecord {
                    row,
                    message: "missing employee id".to_string(),
                },
            });
            return;
        };

        let timeline = self.registry.register(employee_id, &record.employee_name);

        match (record.start, record.end) {
            (Some(start), Some(end)) if start <= end => {
                timeline.push_shift(Shift::new(start, end));
            }
            (Some(start), Some(end)) => {
                self.issues.push(RecordIssue {
                    row,
                    error: AnalysisError::InvertedInterval {
                        row,
                        employee_id: employee_id.to_string(),
                        start,
                        end,
                    },
                });
            }
            _ => {
                self.issues.push(RecordIssue {
                    row,
                    error: AnalysisError::MissingShiftFields {
                        row,
                        employee_id: employee_id.to_string(),
                    },
                });
            }
        }
    }

    /// Consumes every record of `records`, in order.
    pub fn extend<I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = RawShiftRecord>,
    {
        for record in records {
            self.push(record);
        }
        self
    }

    /// Sorts every timeline and hands the registry over read-only.
    pub fn build(mut self) -> BuildOutcome {
        self.registry.sort_all();
        BuildOutcome {
            registry: self.registry,
            issues: self.issues,
        }
    }
}

/// Builds timelines from a complete input sequence.
pub fn build_timelines<I>(records: I) -> BuildOutcome
where
    I: IntoIterator<Item = RawShiftRecord>,
{
    TimelineBuilder::new().extend(records).build()
}
