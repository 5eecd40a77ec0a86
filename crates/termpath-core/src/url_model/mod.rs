//! URL modeling: path segmentation, category-base stripping and query parsing.
//!
//! Everything here is a pure function of its input. Malformed URLs degrade to
//! empty results instead of errors.

mod path;
mod prefix;
mod query;
mod sanitize;

pub use path::{path_of, segments_for, split_segments};
pub use prefix::{category_base_segments, strip_prefix, DEFAULT_CATEGORY_BASE};
pub use query::QueryParams;
pub use sanitize::sanitize_text_field;
