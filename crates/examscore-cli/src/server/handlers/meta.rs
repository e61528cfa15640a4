//! Metadata, health and service description handlers.

use axum::{extract::State, response::Response, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::json;

use super::success;
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Response for the health endpoint.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
    pub started_at: String,
    pub records: usize,
}

/// GET /api/metadata
pub async fn get_metadata(State(state): State<AppState>) -> Response {
    success(state.store.metadata())
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "API is running",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        started_at: state.started_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        records: state.store.len(),
    })
}

/// GET /
pub async fn service_index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Exam score lookup API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "metadata": "GET /api/metadata",
            "student_lookup": "GET /api/student/:sbd",
            "bulk_search": "POST /api/students/search",
            "score_range": "GET /api/statistics/score-range?min=0&max=30",
            "council_stats": "GET /api/statistics/by-council/:ma_hd",
            "top_scores": "GET /api/top-scores?limit=10",
            "health": "GET /health"
        }
    }))
}

/// Fallback for unknown routes.
pub async fn endpoint_not_found() -> ApiError {
    ApiError::NotFound("Endpoint does not exist".to_string())
}
