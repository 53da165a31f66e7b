use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One photo inside a client album.
///
/// Owned by exactly one [`ClientRecord`]; records never share image lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    /// File name without its extension.
    pub name: String,
    /// File name including the extension.
    pub file: String,
    /// Resolved URL the file is served from.
    pub src: String,
}

/// The resolved identity and photo list of one client album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// Canonical URL-safe identifier, unique within a manifest.
    pub id: String,
    /// The real folder name under the clients root. May contain
    /// characters that are not valid in `id`.
    pub folder: String,
    /// Display name; equals `folder` when no metadata provides one.
    pub name: String,
    /// Plaintext access code. Empty string means the album is public.
    pub password: String,
    /// All images, sorted by `name` ascending.
    pub files: Vec<ImageRef>,
    /// Cached `files.len()`, kept for display.
    pub image_count: usize,
}

impl ClientRecord {
    /// Whether a visitor must enter an access code to see this album.
    #[must_use]
    pub fn is_gated(&self) -> bool {
        !self.password.is_empty()
    }

    /// Checks a user-entered access code. Exact, case-sensitive string
    /// equality; public albums accept anything.
    #[must_use]
    pub fn code_matches(&self, code: &str) -> bool {
        self.password.is_empty() || self.password == code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(password: &str) -> ClientRecord {
        ClientRecord {
            id: "estudio".into(),
            folder: "estudio".into(),
            name: "Estúdio".into(),
            password: password.into(),
            files: Vec::new(),
            image_count: 0,
        }
    }

    #[test]
    fn code_match_is_case_sensitive() {
        let gated = record("Caio2024");
        assert!(gated.code_matches("Caio2024"));
        assert!(!gated.code_matches("caio2024"));
        assert!(!gated.code_matches(""));
    }

    #[test]
    fn public_album_accepts_any_code() {
        let public = record("");
        assert!(!public.is_gated());
        assert!(public.code_matches(""));
        assert!(public.code_matches("whatever"));
    }
}
