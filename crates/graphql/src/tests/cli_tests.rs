//! Tests for command-line parsing.

use crate::commands::CommandEnum;
use crate::commands::highlight::GrammarMode;
use crate::Cli;
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

/// Verifies that no subcommand parses to `None` so that help is printed.
#[test]
fn test_no_subcommand() {
    let cli = parse(&["graphql"]);
    assert!(cli.cmd.is_none());
    assert!(!cli.verbose);
}

/// Verifies that `--verbose` is accepted after a subcommand.
#[test]
fn test_verbose_is_global() {
    let cli = parse(&["graphql", "highlight", "doc.graphql", "-v"]);
    assert!(cli.verbose);
}

/// Verifies that highlight defaults to the GraphQL grammar and accepts the
/// others by name.
#[test]
fn test_highlight_modes() {
    let cli = parse(&["graphql", "highlight", "doc.graphql"]);
    assert!(matches!(cli.cmd, Some(CommandEnum::Highlight(_))));
    assert!(format!("{:?}", cli.cmd).contains("mode: Graphql"));

    let cli = parse(&["graphql", "highlight", "--mode", "variables", "vars.json"]);
    assert!(format!("{:?}", cli.cmd).contains("mode: Variables"));

    assert!(Cli::try_parse_from(["graphql", "highlight", "--mode", "sdl", "x"]).is_err());
}

/// Verifies that each grammar mode selects the matching parser.
#[test]
fn test_grammar_mode_parsers() {
    assert_eq!(GrammarMode::Graphql.parser().grammar().name(), "graphql");
    assert_eq!(GrammarMode::Variables.parser().grammar().name(), "variables");
    assert_eq!(GrammarMode::Results.parser().grammar().name(), "results");
}

/// Verifies that lint splits extension lists on commas and requires at least
/// one path.
#[test]
fn test_lint_args() {
    let cli = parse(&[
        "graphql", "lint", "--graphql-file-exts", "gql,graphql", "a", "b",
    ]);
    let debug = format!("{:?}", cli.cmd);
    assert!(debug.contains(r#"graphql_file_exts: ["gql", "graphql"]"#));
    assert!(debug.contains(r#"file_or_dir_paths: ["a", "b"]"#));

    let err = Cli::try_parse_from(["graphql", "lint"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

/// Verifies that lint defaults to both GraphQL extensions.
#[test]
fn test_lint_default_exts() {
    let cli = parse(&["graphql", "lint", "dir"]);
    assert!(format!("{:?}", cli.cmd).contains(r#"graphql_file_exts: ["graphql", "graphqls"]"#));
}

/// Verifies that hover needs a schema while complete does not.
#[test]
fn test_schema_requirements() {
    let err = Cli::try_parse_from([
        "graphql", "hover", "--line", "0", "--character", "3", "doc.graphql",
    ]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

    let cli = parse(&[
        "graphql", "complete", "--line", "1", "--character", "4", "doc.graphql",
    ]);
    let debug = format!("{:?}", cli.cmd);
    assert!(debug.contains("line: 1"));
    assert!(debug.contains("character: 4"));
    assert!(debug.contains("schema: None"));
}
