//! Segment extraction from URL path.

/// Returns the (percent-encoded) path component of `url`.
///
/// Returns `None` if the URL cannot be parsed.
pub fn path_of(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    Some(parsed.path().to_string())
}

/// Splits `raw` on `/`, dropping empty elements so leading, trailing and
/// repeated slashes never produce empty segments.
pub fn split_segments(raw: &str) -> Vec<String> {
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts the ordered path segments of `url`, outermost first.
///
/// When `home_path` is non-root and a literal prefix of the URL path, it is
/// removed first, so a site mounted at `/blog` yields `["category", "news"]`
/// for `/blog/category/news/`.
pub fn segments_for(url: &str, home_path: &str) -> Vec<String> {
    let path = match path_of(url) {
        Some(p) if !p.is_empty() => p,
        _ => return Vec::new(),
    };

    let path = path.as_str();
    let rest = if !home_path.is_empty() && home_path != "/" {
        path.strip_prefix(home_path).unwrap_or(path)
    } else {
        path
    };

    split_segments(rest)
}
