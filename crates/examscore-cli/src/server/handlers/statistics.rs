//! Score statistics handlers.

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    response::Response,
};
use serde::Deserialize;

use examscore::query::parse_limit;
use examscore::ScoreRange;

use super::success;
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Query string for the score range endpoint.
///
/// Bounds are kept as text: unparsable values fall back to the defaults
/// rather than rejecting the request.
#[derive(Deserialize)]
pub struct RangeParams {
    pub min: Option<String>,
    pub max: Option<String>,
}

/// Query string for the top scores endpoint.
#[derive(Deserialize)]
pub struct TopParams {
    pub limit: Option<String>,
}

/// GET /api/statistics/score-range?min=&max=
pub async fn score_range(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Response {
    let range = ScoreRange::from_params(params.min.as_deref(), params.max.as_deref());
    success(state.store.range_query(range))
}

/// GET /api/statistics/by-council/:ma_hd
pub async fn council_statistics(
    State(state): State<AppState>,
    council_code: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(council_code) = council_code.map_err(ApiError::from)?;
    let stats = state.store.council_aggregate(&council_code)?;
    Ok(success(stats))
}

/// GET /api/top-scores?limit=
pub async fn top_scores(
    State(state): State<AppState>,
    Query(params): Query<TopParams>,
) -> Response {
    let limit = parse_limit(params.limit.as_deref());
    success(state.store.top_scores(limit))
}
