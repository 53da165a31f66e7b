use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    /// Client id or folder name.
    pub client: String,
    /// Image file name inside the album.
    pub file: String,
    /// JPEG quality (1-100); defaults to the configured value.
    pub quality: Option<u8>,
}
