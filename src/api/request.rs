//! Request types for the shift compliance API.
//!
//! This module defines the JSON request structures for the `/analyze` endpoint.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::RuleConfig;
use crate::models::RawShiftRecord;

/// Request body for the `/analyze` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The rows to analyze, in source order.
    pub records: Vec<RecordRequest>,
    /// Thresholds for this request only. The server's rules apply when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleConfig>,
}

/// One timecard row in an analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRequest {
    /// The employee id.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The employee name.
    #[serde(default)]
    pub employee_name: String,
    /// The shift start, absent on rows without a worked shift.
    #[serde(default, alias = "start_time")]
    pub start: Option<NaiveDateTime>,
    /// The shift end, absent on rows without a worked shift.
    #[serde(default, alias = "end_time")]
    pub end: Option<NaiveDateTime>,
}

impl From<RecordRequest> for RawShiftRecord {
    fn from(req: RecordRequest) -> Self {
        RawShiftRecord {
            employee_id: req.employee_id,
            employee_name: req.employee_name,
            start: req.start,
            end: req.end,
        }
    }
}
