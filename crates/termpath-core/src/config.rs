use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::site::SiteOptions;
use crate::url_model::DEFAULT_CATEGORY_BASE;

/// Global configuration loaded from `~/.config/termpath/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute home URL of the site; its origin decides site membership and
    /// its path is stripped from incoming URL paths.
    pub home_url: String,
    /// Leading path segments expected before category segments.
    pub category_base: String,
    /// Optional JSON term catalogue used by the CLI.
    pub terms_file: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            home_url: "http://localhost/".to_string(),
            category_base: DEFAULT_CATEGORY_BASE.to_string(),
            terms_file: None,
        }
    }
}

impl SiteOptions for SiteConfig {
    fn home_path(&self) -> String {
        url::Url::parse(&self.home_url)
            .map(|u| u.path().to_string())
            .unwrap_or_else(|_| "/".to_string())
    }

    fn category_base_option(&self) -> String {
        self.category_base.clone()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("termpath")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SiteConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SiteConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<SiteConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SiteConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.home_url, "http://localhost/");
        assert_eq!(cfg.category_base, "category");
        assert!(cfg.terms_file.is_none());
        assert_eq!(cfg.home_path(), "/");
        assert_eq!(cfg.category_base_option(), "category");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SiteConfig {
            terms_file: Some(PathBuf::from("/srv/terms.json")),
            ..SiteConfig::default()
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SiteConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_missing_keys_use_defaults() {
        let cfg: SiteConfig = toml::from_str(r#"home_url = "https://example.com/blog""#).unwrap();
        assert_eq!(cfg.home_url, "https://example.com/blog");
        assert_eq!(cfg.category_base, "category");
        assert_eq!(cfg.home_path(), "/blog");
    }

    #[test]
    fn unparseable_home_url_means_root() {
        let cfg = SiteConfig {
            home_url: "not a url".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(cfg.home_path(), "/");
    }

    #[test]
    fn load_from_path_reads_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"home_url = \"https://news.example\"\ncategory_base = \"topics\"\n")
            .unwrap();
        f.flush().unwrap();
        let cfg = load_from_path(f.path()).unwrap();
        assert_eq!(cfg.home_url, "https://news.example");
        assert_eq!(cfg.category_base, "topics");
    }

    #[test]
    fn load_from_path_reports_bad_toml() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"home_url = [").unwrap();
        f.flush().unwrap();
        assert!(load_from_path(f.path()).is_err());
    }
}
