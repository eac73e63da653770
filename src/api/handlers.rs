//! HTTP request handlers for the shift compliance API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::AnalysisRunner;
use crate::models::RawShiftRecord;

use super::request::AnalysisRequest;
use super::response::{AnalysisResponse, ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .with_state(state)
}

/// Handler for POST /analyze endpoint.
///
/// Accepts timecard rows and returns the three numbered finding lists.
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analysis request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let rules = request.rules.unwrap_or(*state.rules());
    if let Err(err) = rules.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Rejected request rules"
        );
        return ApiErrorResponse::from(err).into_response();
    }

    let record_count = request.records.len();
    let records = request.records.into_iter().map(RawShiftRecord::from);

    let start_time = Instant::now();
    let report = AnalysisRunner::new(rules).run(records);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        records = record_count,
        employees = report.employee_count,
        rejected = report.issues.len(),
        consecutive_days = report.consecutive_days.len(),
        shift_gaps = report.shift_gaps.len(),
        long_shifts = report.long_shifts.len(),
        duration_us = duration.as_micros(),
        "Analysis completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(AnalysisResponse::from_report(&report, correlation_id)),
    )
        .into_response()
}
