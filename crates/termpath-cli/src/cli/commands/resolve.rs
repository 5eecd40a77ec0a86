//! `termpath resolve <url>` – resolve a URL to a term.

use anyhow::{Context, Result};
use std::path::Path;
use termpath_core::config::SiteConfig;
use termpath_core::{HomeSiteMatcher, MemoryTermStore, TermResolver};

use crate::cli::{ResolveBy, EXIT_NO_TERM};

pub fn run_resolve(cfg: &SiteConfig, url: &str, by: ResolveBy, terms: Option<&Path>) -> Result<i32> {
    let terms_path = terms
        .or(cfg.terms_file.as_deref())
        .context("no term catalogue: pass --terms or set terms_file in config")?;
    let store = MemoryTermStore::load_json(terms_path)?;
    let matcher = HomeSiteMatcher::new(&cfg.home_url)?;
    let resolver = TermResolver::new(store, matcher, cfg.clone());

    let term = match by {
        ResolveBy::Auto => resolver.resolve(url),
        ResolveBy::Path => resolver.resolve_by_path(url),
        ResolveBy::Query => resolver.resolve_by_query(url),
    };
    tracing::info!("resolve by={:?} url={} -> {:?}", by, url, term);

    match term {
        Some(t) => {
            println!("{}\t{}\t{}", t.id, t.slug, t.parent);
            Ok(0)
        }
        None => {
            println!("no term");
            Ok(EXIT_NO_TERM)
        }
    }
}
