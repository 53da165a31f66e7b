use crate::routes::download::error::DownloadError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use previews::PreviewError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum PreviewRouteError {
    /// Path resolution failures reuse the download taxonomy.
    #[error(transparent)]
    Resolve(#[from] DownloadError),

    #[error("preview generation failed")]
    Generation(#[from] PreviewError),
}

impl IntoResponse for PreviewRouteError {
    fn into_response(self) -> Response {
        match self {
            Self::Resolve(inner) => inner.into_response(),
            Self::Generation(e) => {
                error!("Preview generation failed: {:?}", e);
                let body = Json(json!({ "error": "Could not generate a preview for this image." }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
