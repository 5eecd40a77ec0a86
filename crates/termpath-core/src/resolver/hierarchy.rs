//! Two-level parent/child disambiguation over a segment sequence.
//!
//! Only the last two segments are consulted. Deeper taxonomies resolve to
//! whatever the tail pair verifies to; earlier segments are ignored.

use std::borrow::Cow;

use crate::lookup::{TermLookup, TermSource};
use crate::term::Term;

/// Resolves a segment sequence (category base already stripped) to a term.
///
/// - no segments: `None`
/// - one segment: lookup by slug
/// - two or more: the child term when its actual parent carries the slug the
///   URL implies, otherwise the term named by the parent segment alone
pub fn resolve_segments<S: TermSource>(lookup: &TermLookup<S>, segments: &[String]) -> Option<Term> {
    match segments {
        [] => None,
        [only] => lookup.find_term_by_slug(&decode_slug(only)),
        [.., parent, child] => {
            let parent_slug = decode_slug(parent);
            let child_slug = decode_slug(child);
            verified_child(lookup, &parent_slug, &child_slug)
                .or_else(|| parent_fallback(lookup, &parent_slug))
        }
    }
}

/// The child term, only if its parent term exists and has `parent_slug`.
fn verified_child<S: TermSource>(
    lookup: &TermLookup<S>,
    parent_slug: &str,
    child_slug: &str,
) -> Option<Term> {
    let child = lookup.find_term_by_slug(child_slug)?;
    if child.is_root() {
        tracing::trace!("term {child_slug:?} has no parent; not a verified child");
        return None;
    }
    let parent = lookup.find_term_by_id(child.parent)?;
    if parent.slug == parent_slug {
        tracing::trace!("verified {parent_slug:?} -> {child_slug:?}");
        Some(child)
    } else {
        tracing::trace!(
            "term {child_slug:?} has parent {:?}, URL implies {parent_slug:?}",
            parent.slug
        );
        None
    }
}

/// Best-effort match on the parent segment, ignoring the child segment.
fn parent_fallback<S: TermSource>(lookup: &TermLookup<S>, parent_slug: &str) -> Option<Term> {
    let term = lookup.find_term_by_slug(parent_slug)?;
    tracing::trace!("fell back to parent segment {parent_slug:?}");
    Some(term)
}

/// Percent-decodes a slug; invalid UTF-8 after decoding keeps the raw text.
pub(crate) fn decode_slug(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}
