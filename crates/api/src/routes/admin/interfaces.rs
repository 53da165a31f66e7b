use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Aggregated numbers for the admin dashboard.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub client_count: usize,
    /// Sum of every album's image count.
    pub image_count: usize,
    /// How many albums are gated behind an access code.
    pub protected_count: usize,
    pub generated_at: DateTime<Utc>,
}
