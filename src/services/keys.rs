/// Canonical `title|author` identity used to decide whether two books are the same
///
/// Both parts are lowercased; a missing author becomes the empty string.
pub fn identity_key(title: &str, author: Option<&str>) -> String {
    format!(
        "{}|{}",
        title.to_lowercase(),
        author.unwrap_or_default().to_lowercase()
    )
}

/// Converts a subject name into the catalog's subject path segment
///
/// Lowercases, collapses every run of non-alphanumeric characters into a single
/// underscore and strips underscores from both ends.
pub fn slugify(subject: &str) -> String {
    let mut slug = String::with_capacity(subject.len());
    let mut pending_separator = false;

    for c in subject.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}
