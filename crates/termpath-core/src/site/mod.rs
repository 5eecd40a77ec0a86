//! Site collaborators: which URLs belong to the site, and the site options
//! the path resolver reads on every call.

mod key;

pub use key::SiteKey;

use anyhow::Result;

/// Reports whether a URL belongs to the site being served.
pub trait SiteMatcher {
    fn site_matches(&self, url: &str) -> bool;
}

/// Read-only site options consulted by the path resolver.
///
/// Called on every resolution, so a live option store is re-read each time.
pub trait SiteOptions {
    /// Path prefix the site is mounted under (`"/"` for the domain root).
    fn home_path(&self) -> String;
    /// Configured base path for category URLs, e.g. `"category"`.
    fn category_base_option(&self) -> String;
}

impl<F> SiteMatcher for F
where
    F: Fn(&str) -> bool,
{
    fn site_matches(&self, url: &str) -> bool {
        self(url)
    }
}

/// Matches URLs on the same `(scheme, host, port)` origin as the home URL.
#[derive(Debug, Clone)]
pub struct HomeSiteMatcher {
    home: SiteKey,
}

impl HomeSiteMatcher {
    pub fn new(home_url: &str) -> Result<Self> {
        Ok(Self {
            home: SiteKey::from_url(home_url)?,
        })
    }
}

impl SiteMatcher for HomeSiteMatcher {
    fn site_matches(&self, url: &str) -> bool {
        match SiteKey::from_url(url) {
            Ok(key) => key == self.home,
            Err(err) => {
                tracing::trace!("site match rejected {url}: {err:#}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_key_from_url_parses_scheme_host_port() {
        let key = SiteKey::from_url("https://example.com:8443/path").unwrap();
        assert_eq!(key.scheme, "https");
        assert_eq!(key.host, "example.com");
        assert_eq!(key.port, 8443);
    }

    #[test]
    fn site_key_uses_default_port_when_missing() {
        let key = SiteKey::from_url("http://Example.COM/path").unwrap();
        assert_eq!(key.host, "example.com");
        assert_eq!(key.port, 80);
    }

    #[test]
    fn site_key_rejects_hostless_url() {
        assert!(SiteKey::from_url("mailto:someone@example.com").is_err());
        assert!(SiteKey::from_url("/relative/path").is_err());
    }

    #[test]
    fn home_matcher_compares_origin_only() {
        let m = HomeSiteMatcher::new("https://example.com/blog/").unwrap();
        assert!(m.site_matches("https://example.com/blog/category/news/"));
        assert!(m.site_matches("https://example.com:443/?cat=5"));
        assert!(!m.site_matches("http://example.com/blog/"));
        assert!(!m.site_matches("https://other.example.com/blog/"));
        assert!(!m.site_matches("garbage"));
    }

    #[test]
    fn closures_are_matchers() {
        let always = |_: &str| true;
        assert!(always.site_matches("anything"));
    }
}
