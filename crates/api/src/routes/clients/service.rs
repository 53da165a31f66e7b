use crate::discovery::discover_album_images;
use crate::routes::clients::error::ClientsError;
use crate::routes::clients::interfaces::{
    ClientImagesResponse, ClientSummary, ImageSource, UnlockResponse,
};
use crate::state::ApiState;
use common_albums::Manifest;

pub fn list_clients(manifest: &Manifest) -> Vec<ClientSummary> {
    manifest.iter().map(ClientSummary::from).collect()
}

/// Looks one client up by id or folder name.
///
/// # Errors
///
/// * [`ClientsError::NotFound`] when neither index knows the key.
pub fn client_summary(manifest: &Manifest, key: &str) -> Result<ClientSummary, ClientsError> {
    manifest
        .client(key)
        .map(ClientSummary::from)
        .ok_or_else(|| ClientsError::NotFound(key.to_string()))
}

/// Resolves an album's image list: from the manifest when possible,
/// otherwise by probing the static file server (content deployed after
/// the last manifest build). A probe that finds nothing still yields a
/// normal, empty response; an empty gallery is a state, not an error.
pub async fn client_images(state: &ApiState, key: &str) -> ClientImagesResponse {
    if let Some(record) = state.manifest.client(key) {
        return ClientImagesResponse {
            client: record.id.clone(),
            source: ImageSource::Manifest,
            images: record.files.clone(),
        };
    }

    let images = discover_album_images(&state.http, &state.discovery, key).await;
    ClientImagesResponse {
        client: key.to_string(),
        source: ImageSource::Probe,
        images,
    }
}

/// Checks an access code against a client's stored one. Comparison is
/// exact and case-sensitive, everywhere; albums with an empty code are
/// public and always unlock.
///
/// # Errors
///
/// * [`ClientsError::NotFound`] for an unknown client.
/// * [`ClientsError::WrongCode`] when the code does not match.
pub fn unlock(manifest: &Manifest, key: &str, code: &str) -> Result<UnlockResponse, ClientsError> {
    let record = manifest
        .client(key)
        .ok_or_else(|| ClientsError::NotFound(key.to_string()))?;
    if !record.code_matches(code) {
        return Err(ClientsError::WrongCode);
    }
    Ok(UnlockResponse {
        id: record.id.clone(),
        unlocked: true,
    })
}
