use serde::Deserialize;

/// Overall application configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub directories: DirectoriesSettings,
    pub logging: LoggingSettings,
    pub api: ApiSettings,
    pub scan: ScanSettings,
    pub discovery: DiscoverySettings,
    pub previews: PreviewSettings,
    pub admin: AdminSettings,
}

/// Defines paths for the client albums and generated previews.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoriesSettings {
    /// Root folder with one subdirectory per client album.
    pub clients_folder: String,
    /// Folder where recompressed previews are written.
    pub previews_folder: String,
    /// Where the built manifest is written. Must not live inside
    /// `clients_folder`: that tree is served statically and the
    /// manifest carries the plaintext access codes.
    pub manifest_file: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

/// Configuration for the API server.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
    pub allowed_origins: Vec<String>,
}

/// Configuration for the manifest scan.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanSettings {
    /// Which extensions are categorized as album images (lowercase).
    pub image_extensions: Vec<String>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            image_extensions: ["jpg", "jpeg", "png", "webp", "gif"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Configuration for the runtime fallback discoverer.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverySettings {
    /// Static file server probed when an album is missing from the manifest.
    pub base_url: String,
    /// Highest sequence number tried before giving up.
    pub max_number: u32,
    /// Consecutive numbers without a match after which the scan aborts.
    pub fail_limit: u32,
    pub request_timeout_s: u64,
}

/// Configuration for the preview optimizer pool.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewSettings {
    /// Number of simultaneous recompression tasks.
    pub workers: usize,
    /// Previews taller than this are scaled down to it.
    pub max_height: u32,
    /// JPEG quality used when the request does not specify one.
    pub default_quality: u8,
}

/// Configuration for the admin listing endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminSettings {
    /// Access code expected in the `X-Admin-Code` header.
    pub access_code: String,
}
