use axum::response::{Html, IntoResponse};

/// Serve the single-page recording UI. The page is compiled into the
/// binary so the server has no runtime asset directory to locate.
pub async fn ui_handler() -> impl IntoResponse {
    Html(include_str!("../../../static/index.html"))
}
