use crate::routes::download::service::resolve_album_file;
use crate::routes::preview::error::PreviewRouteError;
use crate::routes::preview::interfaces::PreviewQuery;
use crate::state::ApiState;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use color_eyre::Report;
use previews::PreviewKey;
use tokio::fs::File;
use tokio_util::codec::{BytesCodec, FramedRead};

/// Serve a recompressed JPEG preview of one album image.
///
/// Generation runs on the bounded preview pool; repeated requests for
/// the same image and quality are served from the preview cache.
#[utoipa::path(
    get,
    path = "/preview",
    params(
        ("client" = String, Query, description = "Client id or folder name"),
        ("file" = String, Query, description = "Image file name inside the album"),
        ("quality" = Option<u8>, Query, description = "JPEG quality (1-100)"),
    ),
    responses(
        (status = 200, description = "Recompressed preview.", body = Vec<u8>, content_type = "image/jpeg"),
        (status = 400, description = "Invalid path."),
        (status = 404, description = "The source image could not be found."),
        (status = 415, description = "The requested file is not an album image."),
        (status = 500, description = "Preview generation failed."),
    )
)]
pub async fn get_preview(
    State(state): State<ApiState>,
    Query(query): Query<PreviewQuery>,
) -> Result<impl IntoResponse, PreviewRouteError> {
    let resolved = resolve_album_file(&state, &query.client, &query.file)?;

    let key = PreviewKey {
        relative_path: resolved.relative,
        quality: query.quality.unwrap_or(state.default_preview_quality),
    };
    let preview_path = state.previews.preview(&resolved.absolute, key).await?;

    let file = File::open(&preview_path)
        .await
        .map_err(|e| PreviewRouteError::Generation(e.into()))?;
    let body = Body::from_stream(FramedRead::new(file, BytesCodec::new()));

    let response = Response::builder()
        .header(header::CONTENT_TYPE, "image/jpeg")
        .body(body)
        .map_err(|e| {
            PreviewRouteError::Resolve(Report::new(e).wrap_err("Failed to build response").into())
        })?;
    Ok(response)
}
