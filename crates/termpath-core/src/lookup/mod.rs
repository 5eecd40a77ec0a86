//! Term lookup: the backend trait and the shim the resolver talks to.
//!
//! Backends may fail; the resolver never distinguishes "error" from
//! "absent". [`TermLookup`] collapses both into `None`.

mod memory;

pub use memory::{MemoryTermStore, TermStoreError};

use anyhow::Result;

use crate::term::{Term, TermId};

/// Raw term backend for a single taxonomy.
pub trait TermSource {
    fn term_by_id(&self, id: TermId) -> Result<Option<Term>>;
    fn term_by_slug(&self, slug: &str) -> Result<Option<Term>>;
}

impl<T: TermSource + ?Sized> TermSource for &T {
    fn term_by_id(&self, id: TermId) -> Result<Option<Term>> {
        (**self).term_by_id(id)
    }

    fn term_by_slug(&self, slug: &str) -> Result<Option<Term>> {
        (**self).term_by_slug(slug)
    }
}

/// Error-collapsing adapter over a [`TermSource`].
#[derive(Debug, Clone)]
pub struct TermLookup<S> {
    source: S,
}

impl<S: TermSource> TermLookup<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Term with the given id; `None` when absent, when `id` is 0, or on backend error.
    pub fn find_term_by_id(&self, id: TermId) -> Option<Term> {
        if id == 0 {
            return None;
        }
        match self.source.term_by_id(id) {
            Ok(term) => term,
            Err(err) => {
                tracing::debug!("term lookup by id {id} failed: {err:#}");
                None
            }
        }
    }

    /// Term with the given slug; `None` when absent, when `slug` is empty, or on backend error.
    pub fn find_term_by_slug(&self, slug: &str) -> Option<Term> {
        if slug.is_empty() {
            return None;
        }
        match self.source.term_by_slug(slug) {
            Ok(term) => term,
            Err(err) => {
                tracing::debug!("term lookup by slug {slug:?} failed: {err:#}");
                None
            }
        }
    }
}
