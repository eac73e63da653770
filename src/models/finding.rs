//! Findings produced by the detectors.

use serde::{Deserialize, Serialize};

use super::EmployeeTimeline;

/// Detector-specific payload of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum FindingDetail {
    /// The pattern was observed; nothing further to report.
    None,
    /// The pattern was observed this many times.
    Occurrences(u32),
}

/// One reportable result row for one employee.
///
/// # Example
///
/// ```
/// use shift_compliance::models::{Finding, FindingDetail};
///
/// let finding = Finding {
///     employee_id: "E1".to_string(),
///     employee_name: "Ada".to_string(),
///     detail: FindingDetail::Occurrences(3),
/// };
/// assert_eq!(finding.occurrences(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The employee id.
    pub employee_id: String,
    /// The employee name.
    pub employee_name: String,
    /// What the detector attached to the finding.
    pub detail: FindingDetail,
}

impl Finding {
    /// Creates a finding without detail for the timeline's employee.
    pub fn for_timeline(timeline: &EmployeeTimeline) -> Self {
        Self {
            employee_id: timeline.employee_id().to_string(),
            employee_name: timeline.employee_name().to_string(),
            detail: FindingDetail::None,
        }
    }

    /// Creates a finding carrying an occurrence count.
    pub fn with_occurrences(timeline: &EmployeeTimeline, count: u32) -> Self {
        Self {
            detail: FindingDetail::Occurrences(count),
            ..Self::for_timeline(timeline)
        }
    }

    /// The occurrence count, if the detector records one.
    pub fn occurrences(&self) -> Option<u32> {
        match self.detail {
            FindingDetail::Occurrences(count) => Some(count),
            FindingDetail::None => None,
        }
    }
}
