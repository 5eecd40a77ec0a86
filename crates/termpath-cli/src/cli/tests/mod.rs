//! CLI parse tests.

use super::{Cli, CliCommand, ResolveBy};
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_resolve_defaults() {
    match parse(&["termpath", "resolve", "https://example.com/category/news/"]) {
        CliCommand::Resolve { url, by, terms } => {
            assert_eq!(url, "https://example.com/category/news/");
            assert_eq!(by, ResolveBy::Auto);
            assert!(terms.is_none());
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_by_query_with_terms() {
    match parse(&[
        "termpath",
        "resolve",
        "https://example.com/?cat=5",
        "--by",
        "query",
        "--terms",
        "/srv/terms.json",
    ]) {
        CliCommand::Resolve { url, by, terms } => {
            assert_eq!(url, "https://example.com/?cat=5");
            assert_eq!(by, ResolveBy::Query);
            assert_eq!(terms.as_deref(), Some(Path::new("/srv/terms.json")));
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_by_path() {
    match parse(&["termpath", "resolve", "https://example.com/x/", "--by", "path"]) {
        CliCommand::Resolve { by, .. } => assert_eq!(by, ResolveBy::Path),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_rejects_unknown_mode() {
    assert!(Cli::try_parse_from(["termpath", "resolve", "https://example.com/", "--by", "host"]).is_err());
}

#[test]
fn cli_parse_segments() {
    match parse(&["termpath", "segments", "https://example.com/category/news/"]) {
        CliCommand::Segments { url } => assert_eq!(url, "https://example.com/category/news/"),
        _ => panic!("expected Segments"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["termpath", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}
