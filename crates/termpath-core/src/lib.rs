//! Resolve site URLs into nodes of a hierarchical category taxonomy.
//!
//! Given `/category/news/politics/` or `?cat=5`, [`resolver::TermResolver`]
//! returns the term the URL addresses, or `None`. Term storage, site
//! membership and site options are injected collaborators.

pub mod config;
pub mod logging;

pub mod lookup;
pub mod resolver;
pub mod site;
pub mod term;
pub mod url_model;

pub use lookup::{MemoryTermStore, TermLookup, TermSource, TermStoreError};
pub use resolver::TermResolver;
pub use site::{HomeSiteMatcher, SiteMatcher, SiteOptions};
pub use term::{Term, TermId};
