//! Scans a clients root directory into resolved [`ClientRecord`]s.
//!
//! Layout convention: one subdirectory per client, holding image files
//! and at most one metadata `.txt`. Loose `.txt` files at the root may
//! target a folder through their `Pasta:` line. A folder-local metadata
//! field wins over a mapped one, which wins over the defaults (folder
//! name, no password).

use super::ManifestError;
use crate::metadata::{AlbumMeta, parse_album_meta};
use crate::model::{ClientRecord, ImageRef};
use crate::settings::ScanSettings;
use crate::slug::slugify;
use crate::utils::{is_image_file, to_posix_string};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Per-folder state accumulated during the walk.
#[derive(Default)]
struct FolderEntry {
    files: Vec<ImageRef>,
    meta: Option<AlbumMeta>,
    meta_count: usize,
}

/// Walks the tree once and resolves every folder with at least one
/// image into a [`ClientRecord`]. Folders with metadata but no images
/// emit nothing; an album without photos is not orderable.
///
/// # Errors
///
/// * [`ManifestError::NotADirectory`] when `root` is missing.
/// * [`ManifestError::AmbiguousMetadata`] when a folder holds several txt files.
pub(super) fn scan_clients_dir(
    root: &Path,
    scan: &ScanSettings,
) -> Result<Vec<ClientRecord>, ManifestError> {
    if !root.is_dir() {
        return Err(ManifestError::NotADirectory(to_posix_string(root)));
    }

    // First-seen enumeration order is the build order of the manifest.
    let mut folder_order: Vec<String> = Vec::new();
    let mut folders: HashMap<String, FolderEntry> = HashMap::new();
    let mut mapped_meta: HashMap<String, AlbumMeta> = HashMap::new();

    for entry in WalkDir::new(root).min_depth(1).into_iter() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // Unreadable entries count as "not present".
                debug!("Skipping inaccessible entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative_str = to_posix_string(relative);
        let is_txt = entry
            .path()
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("txt"));

        match relative_str.split_once('/') {
            // Loose txt at the root: applies to the folder its Pasta line names.
            None => {
                if is_txt {
                    let meta = read_meta(entry.path());
                    if !meta.folder.is_empty() {
                        mapped_meta.insert(meta.folder.clone(), meta);
                    }
                }
            }
            Some((folder, _)) => {
                let folder_entry = folders.entry(folder.to_string()).or_insert_with(|| {
                    folder_order.push(folder.to_string());
                    FolderEntry::default()
                });

                if is_txt {
                    folder_entry.meta_count += 1;
                    if folder_entry.meta_count > 1 {
                        return Err(ManifestError::AmbiguousMetadata(folder.to_string()));
                    }
                    folder_entry.meta = Some(read_meta(entry.path()));
                } else if is_image_file(entry.path(), &scan.image_extensions) {
                    let file = entry.file_name().to_string_lossy().to_string();
                    let name = entry
                        .path()
                        .file_stem()
                        .map(|s| s.to_string_lossy().to_string())
                        .unwrap_or_else(|| file.clone());
                    folder_entry.files.push(ImageRef {
                        name,
                        file,
                        src: format!("/clientes/{relative_str}"),
                    });
                }
            }
        }
    }

    let mut records = Vec::with_capacity(folder_order.len());
    for folder in folder_order {
        let Some(mut entry) = folders.remove(&folder) else {
            continue;
        };
        if entry.files.is_empty() {
            debug!("Dropping album '{}': metadata but no images", folder);
            continue;
        }
        entry.files.sort_by(|a, b| a.name.cmp(&b.name));

        let local = entry.meta.unwrap_or_default();
        let mapped = mapped_meta.get(&folder);
        let name = first_non_empty(&local.name, mapped.map(|m| m.name.as_str()))
            .unwrap_or(&folder)
            .to_string();
        let password = first_non_empty(&local.password, mapped.map(|m| m.password.as_str()))
            .unwrap_or("")
            .to_string();

        let image_count = entry.files.len();
        records.push(ClientRecord {
            id: slugify(&folder),
            folder,
            name,
            password,
            files: entry.files,
            image_count,
        });
    }
    Ok(records)
}

fn read_meta(path: &Path) -> AlbumMeta {
    match fs::read_to_string(path) {
        Ok(raw) => parse_album_meta(&raw),
        Err(e) => {
            // An unreadable metadata file behaves like a missing one.
            debug!("Could not read metadata file {}: {}", path.display(), e);
            AlbumMeta::default()
        }
    }
}

fn first_non_empty<'a>(local: &'a str, mapped: Option<&'a str>) -> Option<&'a str> {
    if !local.is_empty() {
        return Some(local);
    }
    mapped.filter(|m| !m.is_empty())
}
