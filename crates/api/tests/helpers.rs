//! Shared scaffolding for the API integration tests: builds a clients
//! tree on disk, constructs the manifest and state, and serves the
//! router on an ephemeral port.

use api::routes::create_router;
use api::state::ApiState;
use common_albums::Manifest;
use common_albums::settings::{
    AdminSettings, ApiSettings, AppSettings, DirectoriesSettings, DiscoverySettings,
    LoggingSettings, PreviewSettings, ScanSettings,
};
use std::fs;
use std::path::Path;

pub const ADMIN_CODE: &str = "teste-admin";

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Writes one file, creating parent directories as needed.
pub fn write_file(root: &Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Builds the manifest from `clients_root` as it currently is, then
/// serves the full router on 127.0.0.1. Files added to `clients_root`
/// afterwards are invisible to the manifest but reachable through the
/// static mount, which is exactly the situation the fallback prober
/// exists for.
pub async fn spawn_app(clients_root: &Path, previews_dir: &Path) -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");

    let settings = AppSettings {
        directories: DirectoriesSettings {
            clients_folder: clients_root.display().to_string(),
            previews_folder: previews_dir.display().to_string(),
            manifest_file: previews_dir.join("manifest.json").display().to_string(),
        },
        logging: LoggingSettings {
            level: "info".into(),
        },
        api: ApiSettings {
            host: "127.0.0.1".into(),
            port: u32::from(addr.port()),
            allowed_origins: Vec::new(),
        },
        scan: ScanSettings::default(),
        discovery: DiscoverySettings {
            base_url: base_url.clone(),
            max_number: 50,
            fail_limit: 5,
            request_timeout_s: 5,
        },
        previews: PreviewSettings {
            workers: 2,
            max_height: 1080,
            default_quality: 60,
        },
        admin: AdminSettings {
            access_code: ADMIN_CODE.into(),
        },
    };

    let manifest = Manifest::build(clients_root, &settings.scan).unwrap();
    let state = ApiState::new(&settings, manifest).unwrap();
    let app = create_router(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        base_url,
        client: reqwest::Client::new(),
    }
}
