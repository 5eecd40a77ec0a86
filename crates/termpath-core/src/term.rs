//! Taxonomy term model.

use serde::{Deserialize, Serialize};

/// Numeric term identifier. `0` is reserved for "no parent".
pub type TermId = u64;

/// A node in a single-taxonomy forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    pub slug: String,
    /// Parent term id; `0` when the term is a root.
    #[serde(default)]
    pub parent: TermId,
}

impl Term {
    pub fn new(id: TermId, slug: impl Into<String>, parent: TermId) -> Self {
        Self {
            id,
            slug: slug.into(),
            parent,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent == 0
    }
}
