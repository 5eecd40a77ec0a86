//! Category-base prefix stripping.

use super::path::split_segments;

/// Category base used when the site option is unset or blank.
pub const DEFAULT_CATEGORY_BASE: &str = "category";

/// Interprets the category-base option as a segment sequence.
///
/// A blank option (or one made only of slashes) falls back to
/// [`DEFAULT_CATEGORY_BASE`].
pub fn category_base_segments(option: &str) -> Vec<String> {
    let segments = split_segments(option.trim());
    if segments.is_empty() {
        split_segments(DEFAULT_CATEGORY_BASE)
    } else {
        segments
    }
}

/// Removes `prefix` from the front of `segments` on an exact, complete match.
///
/// Partial matches strip nothing: with prefix `["blog", "category"]` the
/// segments `["blog", "news"]` come back unchanged.
pub fn strip_prefix<'a>(segments: &'a [String], prefix: &[String]) -> &'a [String] {
    if prefix.is_empty() || segments.len() < prefix.len() {
        return segments;
    }
    if segments.iter().zip(prefix).all(|(s, p)| s == p) {
        &segments[prefix.len()..]
    } else {
        segments
    }
}
