//! Project endpoints
//!
//! Thin proxies over the evaluation backend so the browser only ever
//! talks to the dashboard origin. Deletion additionally attaches the
//! configured admin bearer token.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use sqad_common::api::types::{CreateProjectRequest, Project, ProjectDetail};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// GET /api/projects
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<Project>>> {
    let projects = state.backend.list_projects().await?;
    Ok(Json(projects))
}

/// GET /api/projects/:id
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<ProjectDetail>> {
    let detail = state.backend.project_detail(project_id).await?;
    Ok(Json(detail))
}

/// POST /api/projects
///
/// Minimal local validation only; the backend stays authoritative.
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    if request.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Project name must not be empty".to_string()));
    }

    let project = state.backend.create_project(&request).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// DELETE /api/projects/:id
///
/// Requires a configured admin token; without one the dashboard cannot
/// authorize the backend delete and answers 501.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let Some(token) = state.config.admin_token.as_deref() else {
        return Err(ApiError::NotConfigured(
            "Project deletion requires an admin token (SQAD_ADMIN_TOKEN)".to_string(),
        ));
    };

    state.backend.delete_project(project_id, token).await?;
    Ok(StatusCode::NO_CONTENT)
}
