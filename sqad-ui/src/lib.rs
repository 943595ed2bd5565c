//! sqad-ui library - Sound Quality Assessment Dashboard service
//!
//! Serves the comparison dashboard and its JSON API, consuming the
//! external evaluation backend for all underlying data.

pub mod api;
pub mod backend;
pub mod compare;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use sqad_common::config::DashboardConfig;

use crate::backend::BackendClient;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Client for the external evaluation backend
    pub backend: Arc<BackendClient>,
    /// Resolved service configuration
    pub config: Arc<DashboardConfig>,
}

impl AppState {
    /// Create new application state
    pub fn new(backend: BackendClient, config: DashboardConfig) -> Self {
        Self {
            backend: Arc::new(backend),
            config: Arc::new(config),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        // Embedded dashboard UI
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/static/sqad.css", get(api::serve_css))
        // JSON API
        .route(
            "/api/projects",
            get(api::list_projects).post(api::create_project),
        )
        .route(
            "/api/projects/:id",
            get(api::get_project).delete(api::delete_project),
        )
        .route("/api/versions", post(api::create_version))
        .route("/api/versions/:id/results", get(api::list_version_results))
        .route("/api/compare", post(api::run_compare))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
