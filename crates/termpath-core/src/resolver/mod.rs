//! URL → taxonomy term resolution.
//!
//! Two independent entry points share the hierarchy algorithm:
//! [`TermResolver::resolve_by_path`] reads the URL path (after home-path and
//! category-base stripping), [`TermResolver::resolve_by_query`] reads the
//! `cat` / `category_name` query parameters. Neither holds state between
//! calls; every call re-reads options and repeats all lookups.

mod hierarchy;
mod query;

pub use hierarchy::resolve_segments;

use crate::lookup::{TermLookup, TermSource};
use crate::site::{SiteMatcher, SiteOptions};
use crate::term::Term;
use crate::url_model::{category_base_segments, path_of, segments_for, strip_prefix};

/// Resolves site URLs to terms of one taxonomy using injected collaborators.
#[derive(Debug, Clone)]
pub struct TermResolver<S, M, O> {
    lookup: TermLookup<S>,
    matcher: M,
    options: O,
}

impl<S, M, O> TermResolver<S, M, O>
where
    S: TermSource,
    M: SiteMatcher,
    O: SiteOptions,
{
    pub fn new(source: S, matcher: M, options: O) -> Self {
        Self {
            lookup: TermLookup::new(source),
            matcher,
            options,
        }
    }

    pub fn lookup(&self) -> &TermLookup<S> {
        &self.lookup
    }

    pub fn options(&self) -> &O {
        &self.options
    }

    /// Tries the query parameters first, then the path.
    pub fn resolve(&self, url: &str) -> Option<Term> {
        self.resolve_by_query(url)
            .or_else(|| self.resolve_by_path(url))
    }

    /// Resolves the term addressed by the URL path, e.g. `/category/news/politics/`.
    pub fn resolve_by_path(&self, url: &str) -> Option<Term> {
        if !self.matcher.site_matches(url) {
            tracing::trace!("not a site URL: {url}");
            return None;
        }
        match path_of(url) {
            Some(path) if !path.is_empty() && path != "/" => {}
            _ => return None,
        }
        let segments = self.taxonomy_segments(url);
        resolve_segments(&self.lookup, &segments)
    }

    /// The segments the path resolver hands to the hierarchy algorithm.
    ///
    /// Empty when the URL does not belong to the site.
    pub fn path_segments(&self, url: &str) -> Vec<String> {
        if !self.matcher.site_matches(url) {
            return Vec::new();
        }
        self.taxonomy_segments(url)
    }

    fn taxonomy_segments(&self, url: &str) -> Vec<String> {
        let segments = segments_for(url, &self.options.home_path());
        let base = category_base_segments(&self.options.category_base_option());
        strip_prefix(&segments, &base).to_vec()
    }
}
