//! Error types for the txt2pdf server

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::pdf::ConvertError;
use crate::storage::StorageError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read file")]
    MissingFile,

    #[error("Failed to read file: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Invalid file name: {0:?}")]
    InvalidFileName(String),

    #[error("Unsupported file type. Only .txt files are allowed.")]
    UnsupportedMediaType(String),

    #[error("File not found")]
    NotFound(String),

    #[error("Failed to convert to PDF: {0}")]
    Conversion(#[from] ConvertError),

    #[error("Storage error: {0}")]
    Storage(StorageError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::InvalidFileName(name) => AppError::InvalidFileName(name),
            StorageError::NotFound(name) => AppError::NotFound(name),
            other => AppError::Storage(other),
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFile | AppError::Multipart(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidFileName(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conversion(_) | AppError::Storage(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::MissingFile | AppError::Multipart(_) => "bad_request",
            AppError::InvalidFileName(_) => "invalid_file_name",
            AppError::UnsupportedMediaType(_) => "unsupported_media_type",
            AppError::NotFound(_) => "not_found",
            AppError::Conversion(_) => "conversion_failed",
            AppError::Storage(_) => "io_error",
            AppError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                format!("File storage error: {}", e)
            }
            AppError::Conversion(e) => {
                tracing::error!("Conversion error: {}", e);
                self.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Multipart(e) => {
                tracing::debug!("Multipart error: {}", e);
                "Failed to read file".to_string()
            }
            _ => self.to_string(),
        };

        let body = Json(ErrorResponse {
            error: self.error_type().to_string(),
            message,
            details: if cfg!(debug_assertions) {
                Some(format!("{:?}", self))
            } else {
                None
            },
        });

        (status, body).into_response()
    }
}
