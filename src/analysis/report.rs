//! The result of one analysis run and its console rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::RuleConfig;
use crate::models::{Finding, RecordIssue};

/// Identifies one of the three detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectorKind {
    /// Consecutive working days.
    ConsecutiveDays,
    /// Short rest between shifts.
    ShiftGap,
    /// Overlong single shifts.
    LongShift,
}

impl DetectorKind {
    /// Every detector, in report order.
    pub const ALL: [DetectorKind; 3] = [
        DetectorKind::ConsecutiveDays,
        DetectorKind::ShiftGap,
        DetectorKind::LongShift,
    ];

    /// The list heading for this detector under `rules`.
    pub fn heading(&self, rules: &RuleConfig) -> String {
        match self {
            DetectorKind::ConsecutiveDays => format!(
                "List of employees who worked for {} consecutive days",
                rules.consecutive_days.min_days
            ),
            DetectorKind::ShiftGap => format!(
                "List of employees who have between {} and {} hours of time between shifts",
                rules.shift_gap.min_hours, rules.shift_gap.max_hours
            ),
            DetectorKind::LongShift => format!(
                "List of employees who worked for {} or more hours in a single shift with count",
                rules.long_shift.min_hours
            ),
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectorKind::ConsecutiveDays => write!(f, "consecutive_days"),
            DetectorKind::ShiftGap => write!(f, "shift_gap"),
            DetectorKind::LongShift => write!(f, "long_shift"),
        }
    }
}

/// Three ordered finding lists plus the records rejected on the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// The thresholds the detectors ran with.
    pub rules: RuleConfig,
    /// Number of distinct employees seen.
    pub employee_count: usize,
    /// Number of shifts accepted into timelines.
    pub shift_count: usize,
    /// Employees reaching the consecutive-days threshold.
    pub consecutive_days: Vec<Finding>,
    /// Employees with a short gap between shifts.
    pub shift_gaps: Vec<Finding>,
    /// Employees with overlong shifts, with counts.
    pub long_shifts: Vec<Finding>,
    /// Records that were skipped or contributed no shift.
    #[serde(skip)]
    pub issues: Vec<RecordIssue>,
}

impl AnalysisReport {
    /// The findings of one detector.
    pub fn findings(&self, kind: DetectorKind) -> &[Finding] {
        match kind {
            DetectorKind::ConsecutiveDays => &self.consecutive_days,
            DetectorKind::ShiftGap => &self.shift_gaps,
            DetectorKind::LongShift => &self.long_shifts,
        }
    }

    /// The findings of one detector with 1-based display numbers.
    pub fn numbered(&self, kind: DetectorKind) -> impl Iterator<Item = (usize, &Finding)> {
        self.findings(kind)
            .iter()
            .enumerate()
            .map(|(i, finding)| (i + 1, finding))
    }

    /// Returns true if no detector reported anything.
    pub fn is_clean(&self) -> bool {
        DetectorKind::ALL
            .iter()
            .all(|&kind| self.findings(kind).is_empty())
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in DetectorKind::ALL.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", kind.heading(&self.rules))?;
            for (number, finding) in self.numbered(*kind) {
                write!(
                    f,
                    "{}. {} : {}",
                    number, finding.employee_id, finding.employee_name
                )?;
                if let Some(count) = finding.occurrences() {
                    write!(f, " : {}", count)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
