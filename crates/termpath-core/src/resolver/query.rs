//! Query-parameter entry point (`?cat=5`, `?category_name=news/politics`).

use super::{resolve_segments, TermResolver};
use crate::lookup::TermSource;
use crate::site::{SiteMatcher, SiteOptions};
use crate::term::{Term, TermId};
use crate::url_model::{sanitize_text_field, split_segments, QueryParams};

use super::hierarchy::decode_slug;

impl<S, M, O> TermResolver<S, M, O>
where
    S: TermSource,
    M: SiteMatcher,
    O: SiteOptions,
{
    /// Resolves the term addressed by the URL's query parameters.
    ///
    /// A positive `cat` id that exists wins outright; otherwise
    /// `category_name` is resolved through the hierarchy algorithm.
    pub fn resolve_by_query(&self, url: &str) -> Option<Term> {
        if !self.matcher.site_matches(url) {
            tracing::trace!("not a site URL: {url}");
            return None;
        }
        let params = QueryParams::from_url(url)?;

        if let Some(cat) = params.get_non_empty("cat") {
            let id = coerce_term_id(cat);
            if id > 0 {
                if let Some(term) = self.lookup().find_term_by_id(id) {
                    return Some(term);
                }
            }
        }

        let name = params.get_non_empty("category_name")?;
        let sanitized = sanitize_text_field(name);
        let segments = split_segments(&decode_slug(&sanitized));
        resolve_segments(self.lookup(), &segments)
    }
}

/// Coerces a query value to a non-negative id the way loose integer parsing
/// does: leading whitespace and sign are skipped, the leading digit run is
/// used, anything else is 0.
pub(crate) fn coerce_term_id(raw: &str) -> TermId {
    let s = raw.trim_start();
    let s = s.strip_prefix(['-', '+']).unwrap_or(s);
    let digits_end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    let digits = &s[..digits_end];
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(TermId::MAX)
}
