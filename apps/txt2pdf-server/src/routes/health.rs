//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::cleanup::CleanupStats;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
    pub cleanup: CleanupStats,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "txt2pdf-server",
        cleanup: state.cleanup().stats(),
    })
}
