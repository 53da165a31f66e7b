//! The client manifest: every album under the clients root, resolved
//! into [`ClientRecord`]s, built once and read many times.
//!
//! A [`Manifest`] is an explicit, immutable value. It is produced by
//! the indexer (which serializes it to `manifest.json`) or built
//! directly from a directory, and handed to consumers by value. There
//! is no hidden process-wide singleton.

mod builder;

use crate::model::{ClientRecord, ImageRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    /// Two different folders derived the same id. Rejected at build
    /// time instead of silently overwriting one with the other.
    #[error("folders '{first}' and '{second}' both resolve to client id '{id}'")]
    SlugCollision {
        id: String,
        first: String,
        second: String,
    },

    /// A client folder holds more than one metadata file, so there is
    /// no well-defined winner. Rejected instead of last-write-wins.
    #[error("client folder '{0}' contains more than one metadata file")]
    AmbiguousMetadata(String),

    #[error("clients directory '{0}' is not a directory")]
    NotADirectory(String),

    #[error("i/o error reading clients data")]
    Io(#[from] std::io::Error),

    #[error("manifest (de)serialization failed")]
    Serde(#[from] serde_json::Error),
}

/// On-disk shape of `manifest.json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestFileOut<'a> {
    generated_at: DateTime<Utc>,
    clients: &'a [ClientRecord],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManifestFileIn {
    generated_at: DateTime<Utc>,
    clients: Vec<ClientRecord>,
}

/// The complete, immutable collection of client records, with lookup
/// indices by id and by folder name.
#[derive(Debug, Clone)]
pub struct Manifest {
    generated_at: DateTime<Utc>,
    clients: Vec<ClientRecord>,
    by_id: HashMap<String, usize>,
    by_folder: HashMap<String, usize>,
}

impl Manifest {
    /// Builds a manifest by scanning a clients root directory.
    ///
    /// # Errors
    ///
    /// * [`ManifestError::NotADirectory`] if `root` does not exist or is a file.
    /// * [`ManifestError::SlugCollision`] / [`ManifestError::AmbiguousMetadata`]
    ///   for trees the builder refuses to resolve.
    /// * [`ManifestError::Io`] for filesystem errors during the walk.
    pub fn build(
        root: &Path,
        scan: &crate::settings::ScanSettings,
    ) -> Result<Self, ManifestError> {
        let records = builder::scan_clients_dir(root, scan)?;
        Self::from_records(Utc::now(), records)
    }

    /// Assembles a manifest from already-resolved records, building the
    /// lookup indices.
    ///
    /// # Errors
    ///
    /// * [`ManifestError::SlugCollision`] if two records share an id.
    pub fn from_records(
        generated_at: DateTime<Utc>,
        clients: Vec<ClientRecord>,
    ) -> Result<Self, ManifestError> {
        let mut by_id = HashMap::with_capacity(clients.len());
        let mut by_folder = HashMap::with_capacity(clients.len());
        for (index, client) in clients.iter().enumerate() {
            if let Some(&existing) = by_id.get(&client.id) {
                let first: &ClientRecord = &clients[existing];
                return Err(ManifestError::SlugCollision {
                    id: client.id.clone(),
                    first: first.folder.clone(),
                    second: client.folder.clone(),
                });
            }
            by_id.insert(client.id.clone(), index);
            by_folder.insert(client.folder.clone(), index);
        }
        Ok(Self {
            generated_at,
            clients,
            by_id,
            by_folder,
        })
    }

    /// Reads a serialized manifest from `manifest.json`.
    ///
    /// # Errors
    ///
    /// * [`ManifestError::Io`] if the file cannot be read.
    /// * [`ManifestError::Serde`] if the contents do not parse.
    /// * [`ManifestError::SlugCollision`] if the stored records collide.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let raw = fs::read_to_string(path)?;
        let file: ManifestFileIn = serde_json::from_str(&raw)?;
        Self::from_records(file.generated_at, file.clients)
    }

    /// Writes the manifest as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// * [`ManifestError::Serde`] if serialization fails.
    /// * [`ManifestError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ManifestError> {
        let file = ManifestFileOut {
            generated_at: self.generated_at,
            clients: &self.clients,
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Snapshot copy of all client records, in build order. Build order
    /// is the directory enumeration order of the scan, not alphabetical.
    #[must_use]
    pub fn all_clients(&self) -> Vec<ClientRecord> {
        self.clients.clone()
    }

    /// Looks a client up by id first, then by folder name.
    #[must_use]
    pub fn client(&self, id_or_folder: &str) -> Option<&ClientRecord> {
        self.by_id
            .get(id_or_folder)
            .or_else(|| self.by_folder.get(id_or_folder))
            .map(|&index| &self.clients[index])
    }

    /// Snapshot copy of a client's image list; empty when the client is
    /// unknown.
    #[must_use]
    pub fn client_images(&self, id_or_folder: &str) -> Vec<ImageRef> {
        self.client(id_or_folder)
            .map(|c| c.files.clone())
            .unwrap_or_default()
    }

    /// Iterates the records without copying, for aggregation.
    pub fn iter(&self) -> impl Iterator<Item = &ClientRecord> {
        self.clients.iter()
    }

    #[must_use]
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ImageRef;

    fn image(name: &str, folder: &str) -> ImageRef {
        ImageRef {
            name: name.to_string(),
            file: format!("{name}.jpg"),
            src: format!("/clientes/{folder}/{name}.jpg"),
        }
    }

    fn record(folder: &str, id: &str) -> ClientRecord {
        ClientRecord {
            id: id.to_string(),
            folder: folder.to_string(),
            name: folder.to_string(),
            password: String::new(),
            files: vec![image("IMG_0001", folder)],
            image_count: 1,
        }
    }

    fn manifest() -> Manifest {
        Manifest::from_records(
            Utc::now(),
            vec![record("Festa 2024", "festa-2024"), record("igreja", "igreja")],
        )
        .unwrap()
    }

    #[test]
    fn lookup_by_id_then_folder() {
        let manifest = manifest();
        assert_eq!(manifest.client("festa-2024").unwrap().folder, "Festa 2024");
        assert_eq!(manifest.client("Festa 2024").unwrap().id, "festa-2024");
        assert!(manifest.client("desconhecido").is_none());
    }

    #[test]
    fn images_for_unknown_client_are_empty() {
        assert!(manifest().client_images("desconhecido").is_empty());
    }

    #[test]
    fn accessors_return_defensive_copies() {
        let manifest = manifest();
        let mut images = manifest.client_images("igreja");
        images.clear();
        assert_eq!(manifest.client_images("igreja").len(), 1);

        let mut clients = manifest.all_clients();
        clients[0].name = "mutated".to_string();
        assert_eq!(manifest.all_clients()[0].name, "Festa 2024");
    }

    #[test]
    fn colliding_ids_are_rejected() {
        let result = Manifest::from_records(
            Utc::now(),
            vec![record("Festa 2024", "festa-2024"), record("festa 2024", "festa-2024")],
        );
        assert!(matches!(
            result,
            Err(ManifestError::SlugCollision { id, .. }) if id == "festa-2024"
        ));
    }

    #[test]
    fn save_and_load_preserve_order_and_indices() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        let original = manifest();
        original.save(&path).unwrap();

        let loaded = Manifest::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(
            loaded.all_clients().iter().map(|c| c.id.clone()).collect::<Vec<_>>(),
            vec!["festa-2024", "igreja"]
        );
        assert_eq!(loaded.client("igreja").unwrap().image_count, 1);
    }
}
