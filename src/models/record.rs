//! Raw input records and the issues raised while consuming them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// One row as handed over by an ingestion adapter.
///
/// The start/end pair may be absent on rows that carry no worked shift
/// (leave days, roster placeholders). Such rows still register the employee.
///
/// # Example
///
/// ```
/// use shift_compliance::models::RawShiftRecord;
///
/// let json = r#"{"employee_id": "E1", "employee_name": "Ada"}"#;
/// let record: RawShiftRecord = serde_json::from_str(json).unwrap();
/// assert!(!record.has_shift_times());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawShiftRecord {
    /// The employee id. Rows without one are rejected.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The employee name. Only the first row seen for an id is used.
    #[serde(default)]
    pub employee_name: String,
    /// The shift start instant.
    #[serde(default)]
    pub start: Option<NaiveDateTime>,
    /// The shift end instant.
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
}

impl RawShiftRecord {
    /// Creates a record carrying a complete shift.
    pub fn shift(
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            employee_id: Some(employee_id.into()),
            employee_name: employee_name.into(),
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates a record that names an employee but carries no shift.
    pub fn without_shift(employee_id: impl Into<String>, employee_name: impl Into<String>) -> Self {
        Self {
            employee_id: Some(employee_id.into()),
            employee_name: employee_name.into(),
            start: None,
            end: None,
        }
    }

    /// Returns the employee id, exactly as given, if present and not blank.
    pub fn usable_employee_id(&self) -> Option<&str> {
        self.employee_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }

    /// Returns true if both shift instants are present.
    pub fn has_shift_times(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// A non-fatal problem found with one input record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIssue {
    /// Position of the record in the input sequence (0-based).
    pub row: usize,
    /// What was wrong with it.
    pub error: AnalysisError,
}
