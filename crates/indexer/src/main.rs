//! Builds the client manifest from the clients asset tree.
//!
//! Run this after adding or renaming album folders; the API reads the
//! manifest once at startup and never rescans on its own. The manifest
//! is written to the configured `manifest_file` path, never into the
//! clients root: that tree is served statically and the manifest holds
//! the plaintext access codes.

use color_eyre::Result;
use common_albums::Manifest;
use common_albums::settings::load_app_settings;
use std::fs;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    color_eyre::install()?;

    let settings = load_app_settings()?;
    let clients_dir = settings.clients_dir()?;
    let manifest_path = settings.manifest_path()?;

    let manifest = Manifest::build(&clients_dir, &settings.scan)?;
    if let Some(parent) = manifest_path.parent() {
        fs::create_dir_all(parent)?;
    }
    manifest.save(&manifest_path)?;

    info!(
        "Wrote {} clients -> {}",
        manifest.len(),
        manifest_path.display()
    );
    Ok(())
}
