use anyhow::{Context, Result};

/// Origin key used to decide whether a URL belongs to a site.
///
/// URLs are normalised down to `(scheme, host, port)` so that every path on
/// the same origin compares equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteKey {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl SiteKey {
    /// Construct a site key from a URL string.
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed = url::Url::parse(url).with_context(|| format!("invalid site URL: {url}"))?;

        let scheme = parsed.scheme().to_string();
        let host = parsed
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("URL missing host: {url}"))?
            .to_ascii_lowercase();
        let port = parsed
            .port_or_known_default()
            .ok_or_else(|| anyhow::anyhow!("URL missing port and unknown default: {url}"))?;

        Ok(Self { scheme, host, port })
    }
}
