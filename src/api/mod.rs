//! HTTP API module for the shift compliance engine.
//!
//! This module exposes the analysis runner over a single JSON endpoint,
//! `POST /analyze`, acting as an ingestion and reporting adapter.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AnalysisRequest, RecordRequest};
pub use response::{AnalysisResponse, ApiError, NumberedFinding, RejectedRecord};
pub use state::AppState;
