//! Route modules for the txt2pdf server

pub mod download;
pub mod health;
pub mod home;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::{any, get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Create the application router
///
/// `/` and `/upload` match their method exactly; any other method on those
/// paths falls through to 404 like an unknown path.
pub fn router(state: AppState) -> Router {
    let max_upload_bytes = state.config().server.max_upload_bytes;
    let static_dir = ServeDir::new(&state.config().web.static_dir);

    Router::new()
        .route("/", get(home::index).fallback(not_found))
        .route(
            "/upload",
            post(upload::upload_file)
                .fallback(not_found)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/download/*name", any(download::download_file))
        .route("/health", get(health::health_check))
        .nest_service("/static", static_dir)
        .fallback(not_found)
        .with_state(state)
}

/// Plain 404 for unmatched paths and methods
async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "No route matched");
    (StatusCode::NOT_FOUND, "404 page not found")
}
