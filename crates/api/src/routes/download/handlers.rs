use crate::routes::download::error::DownloadError;
use crate::routes::download::interfaces::DownloadFileQuery;
use crate::routes::download::service::download_album_file;
use crate::state::ApiState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;

/// Download one original album image.
///
/// Streams the file as stored on disk; the path is validated against
/// the clients root before anything is opened.
#[utoipa::path(
    get,
    path = "/download/file",
    params(
        ("client" = String, Query, description = "Client id or folder name"),
        ("file" = String, Query, description = "Image file name inside the album"),
    ),
    responses(
        (status = 200, description = "Image streamed successfully.", body = Vec<u8>, content_type = "application/octet-stream"),
        (status = 400, description = "Invalid path, such as a directory traversal attempt."),
        (status = 404, description = "The requested file could not be found."),
        (status = 415, description = "The requested file is not an album image."),
        (status = 500, description = "An internal server error occurred."),
    )
)]
pub async fn download_file(
    State(state): State<ApiState>,
    Query(query): Query<DownloadFileQuery>,
) -> Result<impl IntoResponse, DownloadError> {
    let response = download_album_file(&state, &query.client, &query.file).await?;
    Ok(response)
}
