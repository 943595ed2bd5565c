//! Comparison endpoint

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::compare::{self, ComparisonReport, Selection};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// POST /api/compare request body
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub selections: Vec<Selection>,
}

/// POST /api/compare
///
/// Expands every selection, aggregates per-project metrics against the
/// backend, and returns the ranked comparison table.
pub async fn run_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> ApiResult<Json<ComparisonReport>> {
    if request.selections.is_empty() {
        return Err(ApiError::BadRequest(
            "Comparison requires at least one selection".to_string(),
        ));
    }

    let report = compare::run_comparison(&state.backend, &request.selections).await?;

    info!(
        "Comparison finished: {} project(s), {} common metric(s)",
        report.projects.len(),
        report.rows.len()
    );

    Ok(Json(report))
}
