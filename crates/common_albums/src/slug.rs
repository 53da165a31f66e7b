/// Derives a canonical, URL-safe identifier from a folder or display name.
///
/// Lowercases the input, replaces every run of whitespace with a single
/// hyphen, then strips any character outside `[a-z0-9-]`. Idempotent:
/// `slugify(slugify(x)) == slugify(x)` for any input.
///
/// Uniqueness is not checked here; the manifest builder rejects
/// colliding slugs across a whole clients tree.
#[must_use]
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut in_whitespace = false;
    for c in value.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                slug.push(c);
            }
        }
    }
    slug
}
