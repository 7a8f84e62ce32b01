// Shared response types for HTML handlers
//
// Handlers return `Result<_, WebError>`; anything unexpected is logged and
// turned into a 500 page instead of leaking details to the browser.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};
use slidebox_core::{CredentialError, FileError, UploadError};

use crate::views;

/// Error rendered as an HTML page
#[derive(Debug)]
pub struct WebError {
    pub status: StatusCode,
    pub message: String,
}

impl WebError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = views::render_error(self.status.as_u16(), &self.message);
        (self.status, Html(body)).into_response()
    }
}

impl From<anyhow::Error> for WebError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("Request failed: {:#}", err);
        Self::internal()
    }
}

impl From<CredentialError> for WebError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::AlreadyExists(_) => Self::new(StatusCode::CONFLICT, err.to_string()),
            CredentialError::Internal(e) => e.into(),
        }
    }
}

impl From<UploadError> for WebError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::Internal(e) => e.into(),
            other => Self::new(StatusCode::BAD_REQUEST, other.to_string()),
        }
    }
}

impl From<FileError> for WebError {
    fn from(err: FileError) -> Self {
        match err {
            FileError::NotFound(_) => Self::not_found("File not found"),
            FileError::Internal(e) => e.into(),
        }
    }
}

/// Liveness response for `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            WebError::from(FileError::NotFound("x.pdf".into())).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebError::from(UploadError::NoFileSelected).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebError::from(CredentialError::already_exists("alice")).status,
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = WebError::from(anyhow::anyhow!("disk on fire at /var/lib/secret"));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal server error");
    }
}
