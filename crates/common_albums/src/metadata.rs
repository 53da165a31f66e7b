use serde::{Deserialize, Serialize};

/// Metadata extracted from one album `.txt` file.
///
/// Every field defaults to the empty string; absence of a line is not
/// an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumMeta {
    /// Display name (`Nome:` line).
    pub name: String,
    /// Plaintext access code (`Senha:` line).
    pub password: String,
    /// Explicit folder this metadata applies to (`Pasta:` line). Used
    /// by loose txt files at the clients root to target a folder.
    pub folder: String,
}

/// Parses the raw contents of an album metadata file.
///
/// Total over any input: lines are split on LF or CRLF, trimmed, blank
/// lines dropped, and unrecognized lines ignored. The `Nome:`, `Senha:`
/// and `Pasta:` prefixes are matched case-sensitively; the value is the
/// trimmed remainder of the line.
#[must_use]
pub fn parse_album_meta(raw: &str) -> AlbumMeta {
    let mut meta = AlbumMeta::default();
    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(value) = line.strip_prefix("Nome:") {
            meta.name = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix("Senha:") {
            meta.password = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix("Pasta:") {
            meta.folder = value.trim().to_string();
        }
    }
    meta
}
