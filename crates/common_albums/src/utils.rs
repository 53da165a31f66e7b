use std::path::Path;

/// Converts a path to a POSIX-style string, replacing backslashes with forward slashes.
#[must_use]
pub fn to_posix_string(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Checks whether a file counts as an album image, by extension.
///
/// The comparison is case-insensitive against the configured extension
/// list (which is stored lowercase).
#[must_use]
pub fn is_image_file(file: &Path, image_extensions: &[String]) -> bool {
    let Some(extension) = file.extension().map(|e| e.to_string_lossy().to_lowercase()) else {
        return false;
    };
    image_extensions.contains(&extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts() -> Vec<String> {
        ["jpg", "jpeg", "png", "webp", "gif"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn recognizes_images_case_insensitively() {
        assert!(is_image_file(Path::new("a/IMG_0001.JPG"), &exts()));
        assert!(is_image_file(Path::new("b.webp"), &exts()));
        assert!(!is_image_file(Path::new("notes.txt"), &exts()));
        assert!(!is_image_file(Path::new("no_extension"), &exts()));
    }
}
