//! Bounded-concurrency preview generation.
//!
//! Recompressing a full-resolution album photo is CPU-heavy, so the
//! [`PreviewService`] runs at most a fixed number of recompression
//! tasks at once; further requests wait in FIFO order. Finished
//! previews are cached by `(source path, quality)`, and producing a new
//! preview for a source deletes the superseded output file for the
//! qualities it replaces.

mod recompress;

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to decode or encode image")]
    Image(#[from] image::ImageError),

    #[error("i/o error producing preview")]
    Io(#[from] std::io::Error),

    #[error("preview worker task failed")]
    Join(#[from] task::JoinError),

    #[error("preview pool is closed")]
    PoolClosed(#[from] tokio::sync::AcquireError),
}

/// Cache key for one finished preview.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewKey {
    /// Path of the source image, relative to the clients root.
    pub relative_path: String,
    /// JPEG quality (1-100).
    pub quality: u8,
}

#[derive(Debug, Clone)]
pub struct PreviewOptions {
    /// Directory the preview files are written to.
    pub output_dir: PathBuf,
    /// Number of simultaneous recompression tasks.
    pub workers: usize,
    /// Previews taller than this are scaled down to it.
    pub max_height: u32,
}

/// Shared preview generator. Cheap to clone; clones share the permit
/// pool and the cache.
#[derive(Clone)]
pub struct PreviewService {
    options: Arc<PreviewOptions>,
    permits: Arc<Semaphore>,
    cache: Arc<Mutex<HashMap<PreviewKey, PathBuf>>>,
}

impl PreviewService {
    /// Creates the service and its output directory.
    ///
    /// # Errors
    ///
    /// * [`PreviewError::Io`] if the output directory cannot be created.
    pub fn new(options: PreviewOptions) -> Result<Self, PreviewError> {
        fs::create_dir_all(&options.output_dir)?;
        let permits = Arc::new(Semaphore::new(options.workers.max(1)));
        Ok(Self {
            options: Arc::new(options),
            permits,
            cache: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// Returns the path of the preview for `key`, producing it first if
    /// it is not cached. Waits for a worker permit when all permits are
    /// taken; the permit queue is FIFO.
    ///
    /// # Errors
    ///
    /// * [`PreviewError::Image`] when the source does not decode.
    /// * [`PreviewError::Io`] for filesystem errors.
    pub async fn preview(
        &self,
        source: &Path,
        key: PreviewKey,
    ) -> Result<PathBuf, PreviewError> {
        if let Some(path) = self.cached(&key) {
            return Ok(path);
        }

        let permit = self.permits.clone().acquire_owned().await?;

        // Another request may have produced the preview while this one
        // waited for a permit.
        if let Some(path) = self.cached(&key) {
            drop(permit);
            return Ok(path);
        }

        let output = self.options.output_dir.join(cache_file_name(&key));
        let source = source.to_path_buf();
        let max_height = self.options.max_height;
        let quality = key.quality;
        let worker_output = output.clone();
        task::spawn_blocking(move || {
            let _permit = permit;
            recompress::recompress_to_jpeg(&source, &worker_output, quality, max_height)
        })
        .await??;

        self.store(&key, output.clone());
        Ok(output)
    }

    fn cached(&self, key: &PreviewKey) -> Option<PathBuf> {
        let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.get(key).cloned()
    }

    /// Inserts a finished preview and releases the files it supersedes:
    /// other qualities of the same source are removed from the cache
    /// and deleted from disk.
    fn store(&self, key: &PreviewKey, path: PathBuf) {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        let superseded: Vec<PreviewKey> = cache
            .keys()
            .filter(|k| k.relative_path == key.relative_path && k.quality != key.quality)
            .cloned()
            .collect();
        for old_key in superseded {
            if let Some(old_path) = cache.remove(&old_key) {
                debug!("Evicting superseded preview {}", old_path.display());
                if let Err(e) = fs::remove_file(&old_path) {
                    warn!("Could not remove stale preview {}: {}", old_path.display(), e);
                }
            }
        }
        cache.insert(key.clone(), path);
    }
}

fn cache_file_name(key: &PreviewKey) -> String {
    let mut hasher = DefaultHasher::new();
    key.relative_path.hash(&mut hasher);
    let digest = hasher.finish();
    let stem = Path::new(&key.relative_path)
        .file_stem()
        .map(|s| common_albums::slugify(&s.to_string_lossy()))
        .unwrap_or_default();
    format!("{stem}-{digest:016x}-q{}.jpg", key.quality)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageReader, Rgb, RgbImage};
    use tempfile::TempDir;

    fn write_source(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let img = RgbImage::from_pixel(width, height, Rgb([120, 80, 40]));
        img.save(&path).unwrap();
        path
    }

    fn service(output_dir: &Path, max_height: u32) -> PreviewService {
        PreviewService::new(PreviewOptions {
            output_dir: output_dir.to_path_buf(),
            workers: 2,
            max_height,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn produces_a_jpeg_preview() {
        let dir = TempDir::new().unwrap();
        let source = write_source(dir.path(), "IMG_0001.png", 8, 8);
        let service = service(&dir.path().join("out"), 1080);

        let key = PreviewKey {
            relative_path: "festa/IMG_0001.png".into(),
            quality: 60,
        };
        let preview = service.preview(&source, key).await.unwrap();
        assert!(preview.exists());
        assert_eq!(preview.extension().unwrap(), "jpg");
    }

    #[tokio::test]
    async fn cache_hit_skips_the_source() {
        let dir = TempDir::new().unwrap();
        let source = write_source(dir.path(), "IMG_0002.png", 8, 8);
        let service = service(&dir.path().join("out"), 1080);
        let key = PreviewKey {
            relative_path: "festa/IMG_0002.png".into(),
            quality: 60,
        };

        let first = service.preview(&source, key.clone()).await.unwrap();
        // A second request must not touch the source file at all.
        fs::remove_file(&source).unwrap();
        let second = service.preview(&source, key).await.unwrap();
        assert_eq!(first, second);
        assert!(second.exists());
    }

    #[tokio::test]
    async fn new_quality_evicts_the_superseded_file() {
        let dir = TempDir::new().unwrap();
        let source = write_source(dir.path(), "IMG_0003.png", 8, 8);
        let service = service(&dir.path().join("out"), 1080);
        let key = |quality| PreviewKey {
            relative_path: "festa/IMG_0003.png".into(),
            quality,
        };

        let low = service.preview(&source, key(40)).await.unwrap();
        let high = service.preview(&source, key(80)).await.unwrap();
        assert!(!low.exists());
        assert!(high.exists());
    }

    #[tokio::test]
    async fn tall_sources_are_scaled_to_max_height() {
        let dir = TempDir::new().unwrap();
        let source = write_source(dir.path(), "IMG_0004.png", 8, 16);
        let service = service(&dir.path().join("out"), 4);

        let key = PreviewKey {
            relative_path: "festa/IMG_0004.png".into(),
            quality: 60,
        };
        let preview = service.preview(&source, key).await.unwrap();
        let decoded = ImageReader::open(&preview)
            .unwrap()
            .with_guessed_format()
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!(decoded.height(), 4);
    }

    #[tokio::test]
    async fn concurrent_requests_all_complete() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir.path().join("out"), 1080);

        let mut handles = Vec::new();
        for i in 0..5 {
            let name = format!("IMG_{i:04}.png");
            let source = write_source(dir.path(), &name, 8, 8);
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service
                    .preview(
                        &source,
                        PreviewKey {
                            relative_path: format!("lote/{name}"),
                            quality: 60,
                        },
                    )
                    .await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
    }
}
