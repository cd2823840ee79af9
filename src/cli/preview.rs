//! Preview of a single file's processed track body

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::gpx::process_document;
use crate::pipeline::MergeError;

/// Process `input` and write the result to `out` without touching any file.
pub fn run_preview<W: Write>(input: &Path, out: &mut W) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read GPX file: {}", input.display()))?;
    let processed =
        process_document(&content).map_err(|err| MergeError::from_transform(err, input))?;

    match processed.info.style {
        Some(style) => info!("{}: would be styled as {}", input.display(), style),
        None => info!("{}: no <trkseg>, no style block", input.display()),
    }

    writeln!(out, "{}", processed.text)?;
    Ok(())
}
