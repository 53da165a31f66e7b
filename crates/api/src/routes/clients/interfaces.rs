use common_albums::{ClientRecord, ImageRef};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of one client album. Never carries the access code.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub id: String,
    pub name: String,
    pub image_count: usize,
    pub has_password: bool,
    /// `src` of the first image, for the album card.
    pub thumbnail: Option<String>,
}

impl From<&ClientRecord> for ClientSummary {
    fn from(record: &ClientRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            image_count: record.image_count,
            has_password: record.is_gated(),
            thumbnail: record.files.first().map(|f| f.src.clone()),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UnlockRequest {
    /// Access code entered by the visitor.
    pub code: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnlockResponse {
    pub id: String,
    pub unlocked: bool,
}

/// Where an image list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    /// Resolved from the build-time manifest.
    Manifest,
    /// Approximated at runtime by the fallback discoverer.
    Probe,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientImagesResponse {
    pub client: String,
    pub source: ImageSource,
    pub images: Vec<ImageRef>,
}
