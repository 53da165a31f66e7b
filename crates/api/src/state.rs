use common_albums::Manifest;
use common_albums::settings::{AppSettings, DiscoverySettings};
use previews::{PreviewOptions, PreviewService};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Everything the request handlers need, injected at router
/// construction. The manifest is built once before the server starts
/// and is immutable afterwards.
#[derive(Clone)]
pub struct ApiState {
    pub manifest: Arc<Manifest>,
    pub previews: PreviewService,
    pub http: reqwest::Client,
    pub clients_dir: Arc<PathBuf>,
    pub image_extensions: Arc<Vec<String>>,
    pub discovery: Arc<DiscoverySettings>,
    pub allowed_origins: Arc<Vec<String>>,
    pub admin_code: Arc<String>,
    pub default_preview_quality: u8,
}

impl ApiState {
    /// Wires the state up from the loaded settings and a built manifest.
    ///
    /// # Errors
    ///
    /// * If a configured directory cannot be resolved.
    /// * If the previews output directory cannot be created.
    /// * If the outbound HTTP client cannot be constructed.
    pub fn new(settings: &AppSettings, manifest: Manifest) -> color_eyre::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(settings.discovery.request_timeout_s))
            .build()?;

        let previews = PreviewService::new(PreviewOptions {
            output_dir: settings.previews_dir()?,
            workers: settings.previews.workers,
            max_height: settings.previews.max_height,
        })?;

        Ok(Self {
            manifest: Arc::new(manifest),
            previews,
            http,
            clients_dir: Arc::new(settings.clients_dir()?),
            image_extensions: Arc::new(settings.scan.image_extensions.clone()),
            discovery: Arc::new(settings.discovery.clone()),
            allowed_origins: Arc::new(settings.api.allowed_origins.clone()),
            admin_code: Arc::new(settings.admin.access_code.clone()),
            default_preview_quality: settings.previews.default_quality,
        })
    }
}
