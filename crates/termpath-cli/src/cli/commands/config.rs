//! `termpath config` – show config location and values.

use anyhow::Result;
use termpath_core::config::{self, SiteConfig};

pub fn run_config(cfg: &SiteConfig) -> Result<i32> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(0)
}
