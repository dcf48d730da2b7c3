//! Blog post excerpt derivation.

/// Number of leading content characters used for a derived excerpt.
pub const EXCERPT_LENGTH: usize = 150;

/// Suffix appended to every derived excerpt.
pub const EXCERPT_ELLIPSIS: &str = "...";

/// Build the default excerpt: the first [`EXCERPT_LENGTH`] characters of
/// `content` followed by [`EXCERPT_ELLIPSIS`].
///
/// Counts Unicode scalar values, so multi-byte content is never split
/// mid-character. The ellipsis is appended even when the content is shorter
/// than the limit.
pub fn derive_excerpt(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_LENGTH).collect();
    excerpt.push_str(EXCERPT_ELLIPSIS);
    excerpt
}

/// Resolve the excerpt stored on creation.
///
/// Derivation only triggers when no excerpt was supplied at all; an explicit
/// empty string is kept as-is.
pub fn resolve_excerpt(supplied: Option<&str>, content: &str) -> String {
    match supplied {
        Some(excerpt) => excerpt.to_string(),
        None => derive_excerpt(content),
    }
}
