//! Prompt-driven merge loop
//!
//! Each round asks for a folder, the files to merge and an output path, then
//! runs the merge. Any error ends the round with a single message and the user
//! is offered another round; nothing from a failed round is kept.

use std::path::PathBuf;

use anyhow::Result;
use log::debug;

use super::config::MergeConfig;
use super::prompts::{
    confirm_overwrite, confirm_step, describe_selection, prompt_file_selection,
    prompt_output_path, prompt_source_dir,
};
use crate::pipeline::{find_gpx_files, merge_files, MergeReport, DEFAULT_OUTPUT_NAME};
use crate::report::MergeSummary;
use crate::utils::{print_banner, print_error, print_info, print_success, print_warning};

/// How a single interactive round ended without an error.
#[derive(Debug)]
pub enum RoundOutcome {
    Merged(MergeReport),
    NoFilesFound(PathBuf),
    NothingSelected,
    Cancelled,
}

/// Starting folder for the file picker: Downloads, then home, then the current directory.
pub fn default_source_dir() -> PathBuf {
    dirs::download_dir()
        .filter(|p| p.is_dir())
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Run interactive rounds until the user declines another.
pub fn run_interactive(no_confirm: bool) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));

    let mut source_dir = default_source_dir();
    loop {
        match run_round(&mut source_dir, no_confirm) {
            Ok(RoundOutcome::Merged(report)) => {
                MergeSummary::from_report(&report).display();
                println!();
                print_success(&format!(
                    "Merged file written to: {}",
                    report.output.display()
                ));
            }
            Ok(RoundOutcome::NoFilesFound(dir)) => {
                print_warning(&format!("No GPX files found in {}", dir.display()));
            }
            Ok(RoundOutcome::NothingSelected) => {
                print_warning("Please select one or more GPX files.");
            }
            Ok(RoundOutcome::Cancelled) => {
                print_info("Merge cancelled, existing file left untouched.");
            }
            Err(err) => print_error(&format!("Error: {:#}", err)),
        }

        println!();
        if !confirm_step("Merge another set of files?", false)? {
            break;
        }
    }

    Ok(())
}

fn run_round(source_dir: &mut PathBuf, no_confirm: bool) -> Result<RoundOutcome> {
    let dir = prompt_source_dir(source_dir)?;
    source_dir.clone_from(&dir);

    let candidates = find_gpx_files(&dir)?;
    if candidates.is_empty() {
        return Ok(RoundOutcome::NoFilesFound(dir));
    }
    debug!("{} candidate file(s) in {}", candidates.len(), dir.display());

    let selected = prompt_file_selection(&candidates)?;
    if selected.is_empty() {
        return Ok(RoundOutcome::NothingSelected);
    }
    print_info(&describe_selection(&selected));

    let output = prompt_output_path(&dir.join(DEFAULT_OUTPUT_NAME))?;
    if output.exists() && !no_confirm && !confirm_overwrite(&output)? {
        return Ok(RoundOutcome::Cancelled);
    }

    let config = MergeConfig::for_files(selected, &output, true);
    let report = merge_files(&config.inputs, &config.output)?;
    Ok(RoundOutcome::Merged(report))
}
