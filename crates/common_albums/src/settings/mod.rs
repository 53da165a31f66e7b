mod structs;

pub use structs::*;

use std::path::{Path, PathBuf, absolute};

/// Load the app settings from YAML + environment variables.
///
/// Environment variables prefixed with `APP__` override file values,
/// e.g. `APP__API__PORT=8080`.
///
/// # Errors
///
/// * The settings file cannot be resolved or read.
/// * The merged configuration does not deserialize into [`AppSettings`].
pub fn load_app_settings() -> color_eyre::Result<AppSettings> {
    let config_path = Path::new("config/settings.yaml").canonicalize()?;

    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );
    Ok(builder.build()?.try_deserialize::<AppSettings>()?)
}

impl AppSettings {
    /// Absolute path of the clients root directory.
    ///
    /// # Errors
    ///
    /// * `absolute` can return an error if the path cannot be resolved.
    pub fn clients_dir(&self) -> color_eyre::Result<PathBuf> {
        Ok(absolute(&self.directories.clients_folder)?)
    }

    /// Absolute path of the previews output directory.
    ///
    /// # Errors
    ///
    /// * `absolute` can return an error if the path cannot be resolved.
    pub fn previews_dir(&self) -> color_eyre::Result<PathBuf> {
        Ok(absolute(&self.directories.previews_folder)?)
    }

    /// Absolute path of the manifest file. Kept outside the clients
    /// root so the static mount can never serve it.
    ///
    /// # Errors
    ///
    /// * `absolute` can return an error if the path cannot be resolved.
    pub fn manifest_path(&self) -> color_eyre::Result<PathBuf> {
        Ok(absolute(&self.directories.manifest_file)?)
    }
}
