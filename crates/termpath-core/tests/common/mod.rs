//! Shared fixtures for resolver integration tests.

#![allow(dead_code)]

use std::cell::Cell;

use termpath_core::config::SiteConfig;
use termpath_core::{HomeSiteMatcher, MemoryTermStore, Term, TermId, TermResolver, TermSource};

pub const HOME: &str = "https://example.com/";

/// Term source that counts backend calls.
pub struct CountingSource {
    inner: MemoryTermStore,
    pub by_id: Cell<usize>,
    pub by_slug: Cell<usize>,
}

impl CountingSource {
    pub fn new(terms: Vec<Term>) -> Self {
        Self {
            inner: MemoryTermStore::from_terms(terms).unwrap(),
            by_id: Cell::new(0),
            by_slug: Cell::new(0),
        }
    }
}

impl TermSource for CountingSource {
    fn term_by_id(&self, id: TermId) -> anyhow::Result<Option<Term>> {
        self.by_id.set(self.by_id.get() + 1);
        self.inner.term_by_id(id)
    }

    fn term_by_slug(&self, slug: &str) -> anyhow::Result<Option<Term>> {
        self.by_slug.set(self.by_slug.get() + 1);
        self.inner.term_by_slug(slug)
    }
}

/// `news` (1) → `politics` (2), `world` (3), `sport` (5).
pub fn news_terms() -> Vec<Term> {
    vec![
        Term::new(1, "news", 0),
        Term::new(2, "politics", 1),
        Term::new(3, "world", 0),
        Term::new(5, "sport", 0),
    ]
}

pub fn site_config(home_url: &str, category_base: &str) -> SiteConfig {
    SiteConfig {
        home_url: home_url.to_string(),
        category_base: category_base.to_string(),
        terms_file: None,
    }
}

pub fn resolver_with(
    terms: Vec<Term>,
    config: SiteConfig,
) -> TermResolver<CountingSource, HomeSiteMatcher, SiteConfig> {
    let matcher = HomeSiteMatcher::new(&config.home_url).unwrap();
    TermResolver::new(CountingSource::new(terms), matcher, config)
}

pub fn resolver(terms: Vec<Term>) -> TermResolver<CountingSource, HomeSiteMatcher, SiteConfig> {
    resolver_with(terms, site_config(HOME, "category"))
}
