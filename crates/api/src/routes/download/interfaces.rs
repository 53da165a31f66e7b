use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DownloadFileQuery {
    /// Client id or folder name.
    pub client: String,
    /// Image file name (or a relative path inside the album).
    pub file: String,
}
