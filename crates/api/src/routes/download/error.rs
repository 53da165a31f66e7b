use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("file not found")]
    NotFound,

    #[error("invalid path")]
    InvalidPath,

    #[error("not an image file")]
    UnsupportedMediaType,

    #[error(transparent)]
    Internal(#[from] eyre::Report),
}

fn log_download_failure(error: &DownloadError) {
    match error {
        DownloadError::NotFound => debug!("Requested file does not exist"),
        DownloadError::InvalidPath => warn!("Blocked invalid download path"),
        DownloadError::UnsupportedMediaType => warn!("Refused non-image download"),
        DownloadError::Internal(e) => error!("Internal error during download: {:?}", e),
    }
}

impl IntoResponse for DownloadError {
    fn into_response(self) -> Response {
        log_download_failure(&self);

        let (status, error_message) = match &self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                "The requested file could not be found.".to_string(),
            ),
            Self::InvalidPath => (
                StatusCode::BAD_REQUEST,
                "The requested path is invalid.".to_string(),
            ),
            Self::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Only album images can be downloaded here.".to_string(),
            ),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected internal error occurred.".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
