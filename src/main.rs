//! gpxmerge: GPX Track Merging CLI Tool
//!
//! A command-line tool for merging GPX track files into one file,
//! with color-coded track styling chosen from each track's name.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use gpxmerge::cli::{run_interactive, run_merge, run_preview, Cli, Commands, MergeConfig};
use gpxmerge::utils::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match cli.command() {
        Commands::Files { inputs, output } => {
            let config = MergeConfig::for_files(inputs, &output, cli.quiet);
            run_merge(&config)?;
        }
        Commands::Dir { dir, output_name } => {
            let config = MergeConfig::for_directory(&dir, &output_name, cli.quiet)
                .with_context(|| format!("Cannot merge directory {}", dir.display()))?;
            run_merge(&config)?;
        }
        Commands::Preview { input } => {
            let stdout = io::stdout();
            run_preview(&input, &mut stdout.lock())?;
        }
        Commands::Interactive => run_interactive(cli.no_confirm)?,
    }

    Ok(())
}
