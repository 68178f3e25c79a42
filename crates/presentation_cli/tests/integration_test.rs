//! Integration tests for CLI argument parsing

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::Path;

use clap::Parser;
use presentation_cli::cli::{Cli, Commands};

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_route_command() {
    let cli = parse_args(&["route-planner", "route", "--from", "Pune", "--to", "Mumbai"]).unwrap();
    if let Commands::Route {
        from,
        to,
        current_location,
    } = cli.command
    {
        assert_eq!(from.as_deref(), Some("Pune"));
        assert_eq!(to, "Mumbai");
        assert!(!current_location);
    } else {
        panic!("Expected Route command");
    }
}

#[test]
fn cli_parses_route_from_current_location() {
    let cli = parse_args(&["route-planner", "route", "--current-location", "--to", "Mumbai"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Route {
            from: None,
            current_location: true,
            ..
        }
    ));
}

#[test]
fn cli_route_requires_a_start() {
    assert!(parse_args(&["route-planner", "route", "--to", "Mumbai"]).is_err());
}

#[test]
fn cli_route_rejects_both_starts() {
    let result = parse_args(&[
        "route-planner",
        "route",
        "--from",
        "Pune",
        "--current-location",
        "--to",
        "Mumbai",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_route_requires_destination() {
    assert!(parse_args(&["route-planner", "route", "--from", "Pune"]).is_err());
}

#[test]
fn cli_parses_session_command() {
    let cli = parse_args(&["route-planner", "session"]).unwrap();
    assert!(matches!(cli.command, Commands::Session));
}

#[test]
fn cli_parses_config_command() {
    let cli = parse_args(&["route-planner", "config"]).unwrap();
    assert!(matches!(cli.command, Commands::Config));
}

#[test]
fn cli_verbosity_counts() {
    let cli = parse_args(&["route-planner", "-vvv", "session"]).unwrap();
    assert_eq!(cli.verbose, 3);

    let cli = parse_args(&["route-planner", "session", "-v"]).unwrap();
    assert_eq!(cli.verbose, 1);
}

#[test]
fn cli_accepts_config_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planner.toml");
    let path_str = path.to_str().unwrap();

    let cli = parse_args(&["route-planner", "--config", path_str, "session"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new(path_str)));
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["route-planner"]).is_err());
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(parse_args(&["route-planner", "navigate"]).is_err());
}
