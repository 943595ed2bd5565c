//! UI serving routes
//!
//! Serves the static HTML/JS/CSS dashboard embedded at compile time.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../ui/index.html");
const APP_JS: &str = include_str!("../ui/app.js");
const SQAD_CSS: &str = include_str!("../ui/sqad.css");

/// GET /
///
/// Serves the main dashboard page
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/app.js
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        APP_JS,
    )
        .into_response()
}

/// GET /static/sqad.css
pub async fn serve_css() -> Response {
    (StatusCode::OK, [("content-type", "text/css")], SQAD_CSS).into_response()
}
