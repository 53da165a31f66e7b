mod metadata;
mod model;
mod slug;
mod utils;

pub mod manifest;
pub mod settings;

pub use manifest::{Manifest, ManifestError};
pub use metadata::{AlbumMeta, parse_album_meta};
pub use model::{ClientRecord, ImageRef};
pub use slug::slugify;
pub use utils::{is_image_file, to_posix_string};
