//! Tests for CLI argument parsing

use clap::Parser;
use gpxmerge::cli::{Cli, Commands, MergeConfig};
use std::path::PathBuf;

#[test]
fn test_cli_no_command_is_interactive() {
    let cli = Cli::parse_from(["gpxmerge"]);

    assert!(cli.command.is_none());
    assert_eq!(cli.command(), Commands::Interactive);
    assert_eq!(cli.verbose, 0, "Default verbosity should be 0");
    assert!(!cli.quiet, "Default quiet should be false");
    assert!(!cli.no_confirm, "Default no_confirm should be false");
}

#[test]
fn test_cli_files_default_output() {
    let cli = Cli::parse_from(["gpxmerge", "files", "b.gpx", "a.gpx"]);

    match cli.command() {
        Commands::Files { inputs, output } => {
            assert_eq!(inputs, vec![PathBuf::from("b.gpx"), PathBuf::from("a.gpx")]);
            assert_eq!(output, PathBuf::from("merged_output.gpx"));
        }
        other => panic!("Expected files command, got {:?}", other),
    }
}

#[test]
fn test_cli_files_output_extension_enforced() {
    let cli = Cli::parse_from(["gpxmerge", "files", "a.gpx", "-o", "/tmp/combined"]);

    match cli.command() {
        Commands::Files { inputs, output } => {
            let config = MergeConfig::for_files(inputs, &output, cli.quiet);
            assert_eq!(config.output, PathBuf::from("/tmp/combined.gpx"));
            assert_eq!(config.inputs, vec![PathBuf::from("a.gpx")]);
        }
        other => panic!("Expected files command, got {:?}", other),
    }
}

#[test]
fn test_cli_dir_default_output_name() {
    let cli = Cli::parse_from(["gpxmerge", "dir", "/path/to/tracks"]);

    assert_eq!(
        cli.command(),
        Commands::Dir {
            dir: PathBuf::from("/path/to/tracks"),
            output_name: "merged_output.gpx".to_string(),
        }
    );
}

#[test]
fn test_cli_dir_custom_output_name() {
    let cli = Cli::parse_from(["gpxmerge", "dir", "tracks", "-n", "all.GPX"]);

    match cli.command() {
        Commands::Dir { dir, output_name } => {
            assert_eq!(dir, PathBuf::from("tracks"));
            assert_eq!(output_name, "all.GPX");
        }
        other => panic!("Expected dir command, got {:?}", other),
    }
}

#[test]
fn test_cli_preview() {
    let cli = Cli::parse_from(["gpxmerge", "preview", "route.gpx"]);

    assert_eq!(
        cli.command(),
        Commands::Preview {
            input: PathBuf::from("route.gpx")
        }
    );
}

#[test]
fn test_cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from(["gpxmerge", "files", "a.gpx", "-vv", "--quiet"]);

    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
}

#[test]
fn test_cli_interactive_no_confirm() {
    let cli = Cli::parse_from(["gpxmerge", "--no-confirm", "interactive"]);

    assert!(cli.no_confirm);
    assert_eq!(cli.command(), Commands::Interactive);
}

#[test]
fn test_cli_rejects_unknown_command() {
    assert!(Cli::try_parse_from(["gpxmerge", "explode"]).is_err());
}
