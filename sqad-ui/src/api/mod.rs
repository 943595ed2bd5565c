//! HTTP API handlers for sqad-ui

pub mod compare;
pub mod health;
pub mod projects;
pub mod ui;
pub mod versions;

pub use compare::run_compare;
pub use health::health_routes;
pub use projects::{create_project, delete_project, get_project, list_projects};
pub use ui::{serve_app_js, serve_css, serve_index};
pub use versions::{create_version, list_version_results};
