//! Integration tests for the shift compliance engine.
//!
//! This test suite covers:
//! - Consecutive working days, including midnight-crossing shifts
//! - Gaps between shifts at the inclusive boundaries
//! - Long shift counting
//! - Rejected rows and per-request rules
//! - The console rendering of a report

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use shift_compliance::analysis::{AnalysisRunner, CollectingReporter, DetectorKind};
use shift_compliance::api::{AnalysisResponse, create_router, AppState};
use shift_compliance::config::{ConfigLoader, RuleConfig};
use shift_compliance::models::RawShiftRecord;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/rules.yaml").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_analyze(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_record(id: &str, name: &str, start: &str, end: &str) -> Value {
    json!({
        "employee_id": id,
        "employee_name": name,
        "start": start,
        "end": end
    })
}

/// One 08:00-16:00 shift per day for `days` days from 2026-03-02.
fn daily_records(id: &str, name: &str, days: u32) -> Vec<Value> {
    (0..days)
        .map(|i| {
            let date = format!("2026-03-{:02}", 2 + i);
            create_record(
                id,
                name,
                &format!("{}T08:00:00", date),
                &format!("{}T16:00:00", date),
            )
        })
        .collect()
}

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|f| f["employee_id"].as_str().unwrap().to_string())
        .collect()
}

fn parse(s: &str) -> chrono::NaiveDateTime {
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

// =============================================================================
// Consecutive days
// =============================================================================

#[tokio::test]
async fn test_seven_consecutive_days_reported_once() {
    let body = json!({ "records": daily_records("E1", "Ada", 7) });
    let (status, result) = post_analyze(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&result["consecutive_days"]), vec!["E1"]);
    assert_eq!(result["consecutive_days"][0]["number"], 1);
    assert_eq!(result["consecutive_days"][0]["employee_name"], "Ada");
}

#[tokio::test]
async fn test_true_gap_resets_streak() {
    let mut records = vec![create_record(
        "E2",
        "Bea",
        "2026-03-01T00:00:00",
        "2026-03-01T08:00:00",
    )];
    // Next shift two days later, then five more consecutive days.
    for day in 3..=8 {
        records.push(create_record(
            "E2",
            "Bea",
            &format!("2026-03-{:02}T08:00:00", day),
            &format!("2026-03-{:02}T16:00:00", day),
        ));
    }

    let (_, result) = post_analyze(create_router_for_test(), json!({ "records": records })).await;
    assert!(ids(&result["consecutive_days"]).is_empty());
}

#[tokio::test]
async fn test_unsorted_rows_are_reordered() {
    let mut records = daily_records("E1", "Ada", 7);
    records.reverse();

    let (_, result) = post_analyze(create_router_for_test(), json!({ "records": records })).await;
    assert_eq!(ids(&result["consecutive_days"]), vec!["E1"]);
    // Daily 8h shifts leave 16h gaps.
    assert!(ids(&result["shift_gaps"]).is_empty());
}

// =============================================================================
// Gaps between shifts
// =============================================================================

#[tokio::test]
async fn test_gap_boundaries() {
    let records = vec![
        // 5h gap
        create_record("G5", "Five", "2026-03-02T02:00:00", "2026-03-02T10:00:00"),
        create_record("G5", "Five", "2026-03-02T15:00:00", "2026-03-02T18:00:00"),
        // exactly 1h
        create_record("G1", "One", "2026-03-02T02:00:00", "2026-03-02T10:00:00"),
        create_record("G1", "One", "2026-03-02T11:00:00", "2026-03-02T18:00:00"),
        // 59 minutes
        create_record("G0", "Zero", "2026-03-02T02:00:00", "2026-03-02T10:00:00"),
        create_record("G0", "Zero", "2026-03-02T10:59:00", "2026-03-02T18:00:00"),
    ];

    let (_, result) = post_analyze(create_router_for_test(), json!({ "records": records })).await;
    assert_eq!(ids(&result["shift_gaps"]), vec!["G5", "G1"]);
    assert_eq!(result["shift_gaps"][1]["number"], 2);
}

// =============================================================================
// Long shifts
// =============================================================================

#[tokio::test]
async fn test_long_shift_counts() {
    let records = vec![
        create_record("L1", "Lou", "2026-03-02T09:00:00", "2026-03-02T23:00:00"),
        create_record("L1", "Lou", "2026-03-04T09:00:00", "2026-03-04T23:30:00"),
        create_record("L2", "Lea", "2026-03-02T09:00:00", "2026-03-02T22:59:00"),
    ];

    let (_, result) = post_analyze(create_router_for_test(), json!({ "records": records })).await;
    assert_eq!(ids(&result["long_shifts"]), vec!["L1"]);
    assert_eq!(result["long_shifts"][0]["occurrences"], 2);
}

// =============================================================================
// Rejected rows and rules
// =============================================================================

#[tokio::test]
async fn test_rejected_rows_do_not_abort() {
    let records = vec![
        json!({ "employee_name": "No Id", "start": "2026-03-02T09:00:00", "end": "2026-03-02T23:00:00" }),
        json!({ "employee_id": "OFF", "employee_name": "Leave Day" }),
        create_record("INV", "Backwards", "2026-03-02T23:00:00", "2026-03-02T09:00:00"),
        create_record("L1", "Lou", "2026-03-02T09:00:00", "2026-03-02T23:00:00"),
    ];

    let (status, result) =
        post_analyze(create_router_for_test(), json!({ "records": records })).await;
    assert_eq!(status, StatusCode::OK);

    let response: AnalysisResponse = serde_json::from_value(result).unwrap();
    assert_eq!(response.employee_count, 3);
    assert_eq!(response.shift_count, 1);
    let rows: Vec<usize> = response.rejected_records.iter().map(|r| r.row).collect();
    assert_eq!(rows, vec![0, 1, 2]);
    assert_eq!(response.long_shifts.len(), 1);
}

#[tokio::test]
async fn test_request_rules_override_server_rules() {
    let body = json!({
        "records": daily_records("E1", "Ada", 3),
        "rules": {
            "consecutive_days": { "min_days": 3 },
            "long_shift": { "min_hours": 8 }
        }
    });

    let (_, result) = post_analyze(create_router_for_test(), body).await;
    assert_eq!(ids(&result["consecutive_days"]), vec!["E1"]);
    assert_eq!(result["long_shifts"][0]["occurrences"], 3);
    assert_eq!(result["rules"]["shift_gap"]["max_hours"], 10);
}

// =============================================================================
// Library-level scenarios
// =============================================================================

#[test]
fn test_single_midnight_shift_starts_streak_at_two() {
    // One night shift then five consecutive day shifts: 2 + 5 = 7.
    let mut records = vec![RawShiftRecord::shift(
        "E3",
        "Cy",
        parse("2026-03-01 22:00:00"),
        parse("2026-03-02 04:00:00"),
    )];
    for day in 3..=7 {
        records.push(RawShiftRecord::shift(
            "E3",
            "Cy",
            parse(&format!("2026-03-{:02} 08:00:00", day)),
            parse(&format!("2026-03-{:02} 16:00:00", day)),
        ));
    }

    let report = AnalysisRunner::with_reporter(RuleConfig::default(), CollectingReporter::default())
        .run(records);
    assert_eq!(report.consecutive_days.len(), 1);
    assert_eq!(report.consecutive_days[0].employee_id, "E3");
}

#[test]
fn test_report_renders_console_lists() {
    let records = vec![
        RawShiftRecord::shift(
            "L1",
            "Lou",
            parse("2026-03-02 06:00:00"),
            parse("2026-03-02 21:00:00"),
        ),
        RawShiftRecord::shift(
            "L1",
            "Lou",
            parse("2026-03-03 02:00:00"),
            parse("2026-03-03 05:00:00"),
        ),
    ];

    let report = AnalysisRunner::new(RuleConfig::default()).run(records);
    assert_eq!(report.numbered(DetectorKind::ShiftGap).count(), 1);

    let rendered = report.to_string();
    assert!(rendered.contains("1. L1 : Lou\n"));
    assert!(rendered.contains("1. L1 : Lou : 1\n"));
}
