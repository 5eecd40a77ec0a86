//! `termpath segments <url>` – show path segments after base stripping.

use anyhow::Result;
use termpath_core::config::SiteConfig;
use termpath_core::{HomeSiteMatcher, MemoryTermStore, TermResolver};

pub fn run_segments(cfg: &SiteConfig, url: &str) -> Result<i32> {
    let matcher = HomeSiteMatcher::new(&cfg.home_url)?;
    // Segmentation never touches the term store.
    let resolver = TermResolver::new(MemoryTermStore::new(), matcher, cfg.clone());
    for segment in resolver.path_segments(url) {
        println!("{segment}");
    }
    Ok(0)
}
