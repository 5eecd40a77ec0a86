//! CLI command handlers, one per file.

mod config;
mod resolve;
mod segments;

pub use config::run_config;
pub use resolve::run_resolve;
pub use segments::run_segments;
