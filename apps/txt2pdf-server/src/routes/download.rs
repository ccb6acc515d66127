//! Download Route
//!
//! Serves converted PDFs from the outgoing area as attachments. Each
//! successful download schedules the file's deletion, so a link works only
//! for the grace window after its first use.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};

use crate::cleanup::CleanupReason;
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::storage::Area;

/// Any method on /download/*name
pub async fn download_file(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response> {
    let storage = state.storage();

    let data = storage.read(Area::Outgoing, &name).await.map_err(|e| {
        tracing::debug!(file_name = %name, error = %e, "Download failed");
        AppError::from(e)
    })?;

    let path = storage.path_for(Area::Outgoing, &name)?;
    state.cleanup().schedule(path, CleanupReason::Downloaded);

    tracing::info!(file_name = %name, size = data.len(), "Serving download");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(header::CONTENT_LENGTH, data.len())
        .header(header::CONTENT_DISPOSITION, content_disposition(&name))
        .body(Body::from(data))
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// `attachment; filename="<name>"`, plus `filename*` when the name is not plain ASCII
pub fn content_disposition(name: &str) -> String {
    let plain = name
        .chars()
        .all(|c| (c.is_ascii_graphic() || c == ' ') && c != '"' && c != '\\');

    if plain {
        return format!("attachment; filename=\"{}\"", name);
    }

    let fallback: String = name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(name)
    )
}
