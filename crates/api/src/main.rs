use api::routes::create_router;
use api::state::ApiState;
use color_eyre::Result;
use common_albums::Manifest;
use common_albums::settings::load_app_settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = load_app_settings()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let clients_dir = settings.clients_dir()?;
    let manifest_path = settings.manifest_path()?;
    let manifest = if manifest_path.is_file() {
        let manifest = Manifest::load(&manifest_path)?;
        info!(
            "Loaded manifest ({} clients, generated {})",
            manifest.len(),
            manifest.generated_at()
        );
        manifest
    } else {
        let manifest = Manifest::build(&clients_dir, &settings.scan)?;
        info!(
            "No manifest.json, scanned {} -> {} clients",
            clients_dir.display(),
            manifest.len()
        );
        manifest
    };

    let state = ApiState::new(&settings, manifest)?;
    let app = create_router(state);

    let address = format!("{}:{}", settings.api.host, settings.api.port);
    info!("Listening on {}", address);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
