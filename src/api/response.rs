//! Response types for the shift compliance API.
//!
//! This module defines the success body of `/analyze` and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{AnalysisReport, DetectorKind};
use crate::config::RuleConfig;
use crate::error::AnalysisError;
use crate::models::RecordIssue;

/// A finding with its 1-based position in its list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedFinding {
    /// Display number, restarting at 1 for each list.
    pub number: usize,
    /// The employee id.
    pub employee_id: String,
    /// The employee name.
    pub employee_name: String,
    /// Occurrence count, for detectors that count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<u32>,
}

/// A row that was skipped or contributed no shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRecord {
    /// Position of the row in the request's `records` array.
    pub row: usize,
    /// Why the row was rejected.
    pub message: String,
}

impl From<&RecordIssue> for RejectedRecord {
    fn from(issue: &RecordIssue) -> Self {
        Self {
            row: issue.row,
            message: issue.error.to_string(),
        }
    }
}

/// Response body for a successful `/analyze` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Correlation id also attached to the request's log events.
    pub correlation_id: Uuid,
    /// When the analysis completed.
    pub generated_at: DateTime<Utc>,
    /// The thresholds applied.
    pub rules: RuleConfig,
    /// Number of distinct employees in the request.
    pub employee_count: usize,
    /// Number of shifts accepted into timelines.
    pub shift_count: usize,
    /// Employees reaching the consecutive-days threshold.
    pub consecutive_days: Vec<NumberedFinding>,
    /// Employees with a short gap between shifts.
    pub shift_gaps: Vec<NumberedFinding>,
    /// Employees with overlong shifts, with counts.
    pub long_shifts: Vec<NumberedFinding>,
    /// Rows that were skipped or contributed no shift.
    pub rejected_records: Vec<RejectedRecord>,
}

impl AnalysisResponse {
    /// Builds the response body from a finished report.
    pub fn from_report(report: &AnalysisReport, correlation_id: Uuid) -> Self {
        let numbered = |kind: DetectorKind| -> Vec<NumberedFinding> {
            report
                .numbered(kind)
                .map(|(number, finding)| NumberedFinding {
                    number,
                    employee_id: finding.employee_id.clone(),
                    employee_name: finding.employee_name.clone(),
                    occurrences: finding.occurrences(),
                })
                .collect()
        };

        Self {
            correlation_id,
            generated_at: Utc::now(),
            rules: report.rules,
            employee_count: report.employee_count,
            shift_count: report.shift_count,
            consecutive_days: numbered(DetectorKind::ConsecutiveDays),
            shift_gaps: numbered(DetectorKind::ShiftGap),
            long_shifts: numbered(DetectorKind::LongShift),
            rejected_records: report.issues.iter().map(RejectedRecord::from).collect(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response around `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<AnalysisError> for ApiErrorResponse {
    fn from(error: AnalysisError) -> Self {
        let message = error.to_string();
        match error {
            AnalysisError::ConfigNotFound { .. } | AnalysisError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            AnalysisError::InvalidConfig { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_CONFIG",
                    message,
                    format!("The rule field '{}' was rejected", field),
                ),
            },
            // Row-level errors normally surface as `rejected_records`; this
            // arm serves callers that convert one directly.
            AnalysisError::MalformedRecord { .. }
            | AnalysisError::MissingShiftFields { .. }
            | AnalysisError::InvertedInterval { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_RECORD", message),
            },
        }
    }
}
