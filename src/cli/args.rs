//! Command-line argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::pipeline::DEFAULT_OUTPUT_NAME;

/// gpxmerge - Merge GPX track files into one, with color-coded track styling
#[derive(Parser, Debug)]
#[command(name = "gpxmerge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command to run. Defaults to the interactive prompts.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log detail (-v info, -vv debug, -vvv trace).
    /// RUST_LOG overrides this when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, default_value = "false", global = true)]
    pub quiet: bool,

    /// Overwrite existing output files without asking (interactive mode)
    #[arg(long, default_value = "false", global = true)]
    pub no_confirm: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Merge the given GPX files, in the order given
    Files {
        /// Input GPX files
        inputs: Vec<PathBuf>,

        /// Output file path. A '.gpx' extension is always enforced.
        #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
        output: PathBuf,
    },

    /// Merge every .gpx file in a directory, sorted by path
    Dir {
        /// Directory to scan (not recursive)
        dir: PathBuf,

        /// Name of the merged file, written inside the directory
        #[arg(short = 'n', long, default_value = DEFAULT_OUTPUT_NAME)]
        output_name: String,
    },

    /// Print one file's processed track body without writing anything
    Preview {
        /// Input GPX file
        input: PathBuf,
    },

    /// Choose files and output path with interactive prompts
    Interactive,
}

impl Cli {
    /// The command to run, falling back to interactive mode.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Interactive)
    }
}
