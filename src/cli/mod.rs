//! CLI module - argument parsing, interactive prompts and command runners

mod args;
pub mod config;
pub mod interactive;
pub mod merge;
pub mod preview;
mod prompts;

pub use args::{Cli, Commands};
pub use config::MergeConfig;
pub use interactive::run_interactive;
pub use merge::run_merge;
pub use preview::run_preview;
pub use prompts::*;
