//! Interactive prompts using dialoguer

use std::path::{Path, PathBuf};

use anyhow::Result;
use dialoguer::{Confirm, Input, MultiSelect};

use crate::pipeline::{ensure_gpx_extension, DEFAULT_OUTPUT_NAME};

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?;
    Ok(confirmed)
}

/// Prompt user to confirm replacing an existing output file
pub fn confirm_overwrite(path: &Path) -> Result<bool> {
    let message = format!("{} already exists. Overwrite it?", path.display());
    confirm_step(&message, false)
}

/// Ask for the folder holding the GPX files
pub fn prompt_source_dir(default: &Path) -> Result<PathBuf> {
    let answer: String = Input::new()
        .with_prompt("Folder containing GPX files")
        .default(default.display().to_string())
        .interact_text()?;
    Ok(PathBuf::from(answer.trim()))
}

/// Let the user tick which candidates to merge. The result keeps path order.
pub fn prompt_file_selection(candidates: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let items: Vec<String> = candidates.iter().map(|p| file_label(p)).collect();
    let defaults = default_selection(candidates);

    let chosen = MultiSelect::new()
        .with_prompt("Select GPX files to merge (space toggles, enter confirms)")
        .items(&items)
        .defaults(&defaults)
        .interact()?;

    Ok(chosen.into_iter().map(|idx| candidates[idx].clone()).collect())
}

/// Ask where to save the merged file. The '.gpx' extension is enforced.
pub fn prompt_output_path(default: &Path) -> Result<PathBuf> {
    let answer: String = Input::new()
        .with_prompt("Save merged GPX as")
        .default(default.display().to_string())
        .interact_text()?;
    Ok(ensure_gpx_extension(Path::new(answer.trim())))
}

/// Pre-tick every candidate except a previous merge result.
pub fn default_selection(candidates: &[PathBuf]) -> Vec<bool> {
    candidates
        .iter()
        .map(|p| p.file_name().and_then(|n| n.to_str()) != Some(DEFAULT_OUTPUT_NAME))
        .collect()
}

/// Short description of a selection, e.g. `3 files selected (first: a.gpx)`.
pub fn describe_selection(paths: &[PathBuf]) -> String {
    match paths {
        [] => "No files selected.".to_string(),
        [only] => file_label(only),
        [first, ..] => format!(
            "{} files selected (first: {})",
            paths.len(),
            file_label(first)
        ),
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
