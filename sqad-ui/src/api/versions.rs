//! Version endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use sqad_common::api::types::{CreateVersionRequest, EvalResult, ResultKind, Version};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// POST /api/versions
pub async fn create_version(
    State(state): State<AppState>,
    Json(request): Json<CreateVersionRequest>,
) -> ApiResult<(StatusCode, Json<Version>)> {
    if request.version.trim().is_empty() {
        return Err(ApiError::BadRequest("Version label must not be empty".to_string()));
    }

    let version = state.backend.create_version(&request).await?;
    Ok((StatusCode::CREATED, Json(version)))
}

/// Query parameters for result listing
#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    /// Which result collection to read; defaults to subjective
    #[serde(default = "default_kind")]
    pub kind: ResultKind,
}

fn default_kind() -> ResultKind {
    ResultKind::Subjective
}

/// GET /api/versions/:id/results?kind=subjective|objective
pub async fn list_version_results(
    State(state): State<AppState>,
    Path(version_id): Path<Uuid>,
    Query(query): Query<ResultsQuery>,
) -> ApiResult<Json<Vec<EvalResult>>> {
    let results = state.backend.version_results(version_id, query.kind).await?;
    Ok(Json(results))
}
