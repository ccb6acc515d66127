//! Upload Route
//!
//! POST /upload accepts a multipart form with a `file` field holding a
//! `.txt` file. The file is stored in the incoming area, converted into the
//! outgoing area, and the client is redirected to its one-time download.

use axum::{
    body::Bytes,
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::cleanup::CleanupReason;
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::storage::{has_source_extension, output_file_name, validate_file_name, Area};

/// Name of the multipart field carrying the file
pub const FILE_FIELD: &str = "file";

/// POST /upload
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Response> {
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "Upload is not a multipart request");
        AppError::MissingFile
    })?;

    // Receive
    let (file_name, data) = read_file_field(&mut multipart).await?;

    // Validate before touching disk so rejected uploads leave nothing behind
    validate_file_name(&file_name)?;
    if !has_source_extension(&file_name) {
        tracing::info!(file_name = %file_name, "Rejected upload with unsupported extension");
        return Err(AppError::UnsupportedMediaType(file_name));
    }

    // Persist source
    let storage = state.storage();
    let source_path = storage.write(Area::Incoming, &file_name, &data).await?;

    // Convert
    let pdf_name = output_file_name(&file_name);
    let destination = storage.path_for(Area::Outgoing, &pdf_name)?;

    let converter = state.converter();
    let (src, dst) = (source_path.clone(), destination.clone());
    tokio::task::spawn_blocking(move || converter.convert_file(&src, &dst))
        .await
        .map_err(|e| AppError::Internal(format!("Conversion task failed: {}", e)))??;

    // Schedule source cleanup
    state
        .cleanup()
        .schedule(source_path, CleanupReason::Converted);

    tracing::info!(
        file_name = %file_name,
        pdf_name = %pdf_name,
        size = data.len(),
        "Converted upload"
    );

    // Respond
    Ok(redirect_found(&download_location(&pdf_name)))
}

/// Pull the `file` field out of the form, skipping any other fields
async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Bytes)> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_owned)
            .ok_or(AppError::MissingFile)?;
        let data = field.bytes().await?;

        return Ok((file_name, data));
    }

    Err(AppError::MissingFile)
}

/// Path a converted file is downloaded from
pub fn download_location(pdf_name: &str) -> String {
    format!("/download/{}", urlencoding::encode(pdf_name))
}

/// 302 Found, as opposed to the 303 that `Redirect::to` produces
fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
