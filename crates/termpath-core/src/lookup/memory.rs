//! In-memory term store, optionally loaded from a JSON catalogue.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use super::TermSource;
use crate::term::{Term, TermId};

#[derive(Debug, Error)]
pub enum TermStoreError {
    #[error("read term catalogue {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse term catalogue {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("term id must be positive (slug {slug:?})")]
    ZeroId { slug: String },
    #[error("term {id} has an empty slug")]
    EmptySlug { id: TermId },
    #[error("duplicate term id {id}")]
    DuplicateId { id: TermId },
}

/// Terms of one taxonomy held in memory, indexed by id and slug.
///
/// Slugs are not required to be unique; the first term inserted with a given
/// slug is the one slug lookups return.
#[derive(Debug, Clone, Default)]
pub struct MemoryTermStore {
    by_id: HashMap<TermId, Term>,
    by_slug: HashMap<String, TermId>,
}

impl MemoryTermStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Result<Self, TermStoreError> {
        let mut store = Self::new();
        for term in terms {
            store.insert(term)?;
        }
        Ok(store)
    }

    /// Load a JSON array of `{"id", "slug", "parent"}` objects.
    pub fn load_json(path: &Path) -> Result<Self, TermStoreError> {
        let bytes = std::fs::read(path).map_err(|source| TermStoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let terms: Vec<Term> =
            serde_json::from_slice(&bytes).map_err(|source| TermStoreError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        let store = Self::from_terms(terms)?;
        tracing::debug!("loaded {} terms from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn insert(&mut self, term: Term) -> Result<(), TermStoreError> {
        if term.id == 0 {
            return Err(TermStoreError::ZeroId { slug: term.slug });
        }
        if term.slug.is_empty() {
            return Err(TermStoreError::EmptySlug { id: term.id });
        }
        if self.by_id.contains_key(&term.id) {
            return Err(TermStoreError::DuplicateId { id: term.id });
        }
        self.by_slug.entry(term.slug.clone()).or_insert(term.id);
        self.by_id.insert(term.id, term);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl TermSource for MemoryTermStore {
    fn term_by_id(&self, id: TermId) -> anyhow::Result<Option<Term>> {
        Ok(self.by_id.get(&id).cloned())
    }

    fn term_by_slug(&self, slug: &str) -> anyhow::Result<Option<Term>> {
        Ok(self
            .by_slug
            .get(slug)
            .and_then(|id| self.by_id.get(id))
            .cloned())
    }
}
