use crate::routes::download::error::DownloadError;
use crate::state::ApiState;
use axum::body::Body;
use axum::http::{StatusCode, header};
use color_eyre::Report;
use common_albums::{is_image_file, to_posix_string};
use http::Response;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio_util::codec::{BytesCodec, FramedRead};
use tracing::{debug, warn};

/// An album file resolved to a safe on-disk location.
pub(crate) struct ResolvedFile {
    pub absolute: PathBuf,
    /// POSIX-style path relative to the clients root.
    pub relative: String,
}

/// Resolves `<client>/<file>` against the clients root and validates
/// it: the canonicalized result must stay inside the clients directory
/// and carry an image extension. The client key goes through the
/// manifest first, so the id works as well as the folder name.
pub(crate) fn resolve_album_file(
    state: &ApiState,
    client_key: &str,
    file: &str,
) -> Result<ResolvedFile, DownloadError> {
    let folder = state
        .manifest
        .client(client_key)
        .map_or_else(|| client_key.to_string(), |c| c.folder.clone());

    let clients_dir_canon = state
        .clients_dir
        .canonicalize()
        .map_err(|e| Report::new(e).wrap_err("Failed to canonicalize clients directory"))?;

    let file_path = state.clients_dir.join(&folder).join(file);
    let file_canon = match file_path.canonicalize() {
        Ok(path) => path,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("File not found at path: {}", file_path.display());
            return Err(DownloadError::NotFound);
        }
        Err(e) => return Err(Report::new(e).wrap_err("Failed to canonicalize path").into()),
    };

    if !file_canon.starts_with(&clients_dir_canon) {
        warn!("Blocked directory traversal attempt for: {}/{}", folder, file);
        return Err(DownloadError::InvalidPath);
    }

    if !is_image_file(&file_canon, &state.image_extensions) {
        return Err(DownloadError::UnsupportedMediaType);
    }

    let relative = file_canon
        .strip_prefix(&clients_dir_canon)
        .map_err(|e| Report::new(e).wrap_err("Resolved file escaped the clients root"))?;

    Ok(ResolvedFile {
        relative: to_posix_string(relative),
        absolute: file_canon,
    })
}

/// Streams one original album image to the client.
pub async fn download_album_file(
    state: &ApiState,
    client_key: &str,
    file: &str,
) -> Result<Response<Body>, DownloadError> {
    let resolved = resolve_album_file(state, client_key, file)?;

    let file = match File::open(&resolved.absolute).await {
        Ok(file) => file,
        Err(e) => match e.kind() {
            std::io::ErrorKind::NotFound => Err(DownloadError::NotFound),
            std::io::ErrorKind::PermissionDenied => Err(DownloadError::InvalidPath),
            _ => Err(Report::new(e).wrap_err("Failed to open album file").into()),
        }?,
    };

    let stream = FramedRead::new(file, BytesCodec::new());
    let body = Body::from_stream(stream);
    let mime_type = mime_guess::from_path(&resolved.absolute).first_or_octet_stream();
    let filename = Path::new(&resolved.relative)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image");
    let disposition = format!("inline; filename=\"{filename}\"");
    let disposition_header = header::HeaderValue::from_str(&disposition)
        .unwrap_or(header::HeaderValue::from_static("inline"));

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type.as_ref())
        .header(header::CONTENT_DISPOSITION, disposition_header)
        .body(body)
        .map_err(|e| Report::new(e).wrap_err("Failed to build response"))?)
}
