//! CLI for the termpath URL resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use termpath_core::config;

use commands::{run_config, run_resolve, run_segments};

/// Exit code when a URL resolves to no term.
pub const EXIT_NO_TERM: i32 = 2;

/// Top-level CLI for termpath.
#[derive(Debug, Parser)]
#[command(name = "termpath")]
#[command(about = "termpath: resolve site URLs to category taxonomy terms", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Which part of the URL to resolve from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResolveBy {
    /// Query parameters first, then the path.
    #[default]
    Auto,
    /// URL path only (`/category/news/politics/`).
    Path,
    /// `cat` / `category_name` query parameters only.
    Query,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a URL to a taxonomy term.
    Resolve {
        /// Absolute URL on the configured site.
        url: String,
        /// Which URL component to resolve from.
        #[arg(long, value_enum, default_value_t = ResolveBy::Auto)]
        by: ResolveBy,
        /// JSON term catalogue (overrides `terms_file` in config).
        #[arg(long, value_name = "FILE")]
        terms: Option<PathBuf>,
    },

    /// Show the taxonomy segments the path resolver would consider.
    Segments {
        /// Absolute URL on the configured site.
        url: String,
    },

    /// Show the config file path and effective configuration.
    Config,
}

impl CliCommand {
    /// Parse arguments and dispatch; returns the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { url, by, terms } => run_resolve(&cfg, &url, by, terms.as_deref()),
            CliCommand::Segments { url } => run_segments(&cfg, &url),
            CliCommand::Config => run_config(&cfg),
        }
    }
}

#[cfg(test)]
mod tests;
