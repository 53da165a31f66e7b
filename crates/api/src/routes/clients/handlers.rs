//! HTTP handlers for the public client-album endpoints.

use crate::routes::clients::error::ClientsError;
use crate::routes::clients::interfaces::{
    ClientImagesResponse, ClientSummary, UnlockRequest, UnlockResponse,
};
use crate::routes::clients::service;
use crate::state::ApiState;
use axum::Json;
use axum::extract::{Path, State};

/// List every client album, without access codes.
#[utoipa::path(
    get,
    path = "/clients",
    responses(
        (status = 200, description = "All client albums, in manifest build order.", body = [ClientSummary]),
    )
)]
pub async fn list_clients(State(state): State<ApiState>) -> Json<Vec<ClientSummary>> {
    Json(service::list_clients(&state.manifest))
}

/// Get one client album by id or folder name.
#[utoipa::path(
    get,
    path = "/clients/{id}",
    params(("id" = String, Path, description = "Client id or folder name")),
    responses(
        (status = 200, description = "The client album.", body = ClientSummary),
        (status = 404, description = "No such client."),
    )
)]
pub async fn get_client(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<ClientSummary>, ClientsError> {
    let summary = service::client_summary(&state.manifest, &id)?;
    Ok(Json(summary))
}

/// Get an album's image list; falls back to probing the file server
/// when the album is missing from the manifest.
#[utoipa::path(
    get,
    path = "/clients/{id}/images",
    params(("id" = String, Path, description = "Client id or folder name")),
    responses(
        (status = 200, description = "Image references, with their source.", body = ClientImagesResponse),
    )
)]
pub async fn get_client_images(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Json<ClientImagesResponse> {
    Json(service::client_images(&state, &id).await)
}

/// Check a visitor's access code for a gated album.
#[utoipa::path(
    post,
    path = "/clients/{id}/unlock",
    params(("id" = String, Path, description = "Client id or folder name")),
    request_body = UnlockRequest,
    responses(
        (status = 200, description = "Code accepted.", body = UnlockResponse),
        (status = 401, description = "Wrong access code."),
        (status = 404, description = "No such client."),
    )
)]
pub async fn unlock_client(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(body): Json<UnlockRequest>,
) -> Result<Json<UnlockResponse>, ClientsError> {
    let response = service::unlock(&state.manifest, &id, &body.code)?;
    Ok(Json(response))
}
