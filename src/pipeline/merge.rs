//! Merge driver: normalize each input in order and write one combined file

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::discover::{find_gpx_files, GPX_EXTENSION};
use super::error::MergeError;
use crate::gpx::{process_document, DocumentInfo};

/// Output file name used when none is given.
pub const DEFAULT_OUTPUT_NAME: &str = "merged_output.gpx";

/// One input as it went into the merged file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedDocument {
    pub source: PathBuf,
    pub info: DocumentInfo,
}

/// Outcome of a successful merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Final output path, after `.gpx` canonicalization
    pub output: PathBuf,
    /// Inputs in merge order
    pub documents: Vec<MergedDocument>,
    /// Bytes written
    pub bytes_written: usize,
}

/// Inputs and output resolved for a directory-scan merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
}

/// Force a lowercase `.gpx` extension, replacing any other extension.
///
/// `out` becomes `out.gpx`, `out.txt` becomes `out.gpx` and `out.GPX` is
/// re-suffixed to `out.gpx`.
pub fn ensure_gpx_extension(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext == GPX_EXTENSION => path.to_path_buf(),
        _ => path.with_extension(GPX_EXTENSION),
    }
}

/// Merge `inputs` in order into `output`.
pub fn merge_files<P: AsRef<Path>>(inputs: &[P], output: &Path) -> Result<MergeReport, MergeError> {
    merge_files_with(inputs, output, |_| {})
}

/// Merge `inputs` in order into `output`, calling `on_processed` after each
/// input has been read and normalized.
///
/// Every input is processed before anything is written, so a failure on any
/// file leaves the output path untouched.
pub fn merge_files_with<P, F>(
    inputs: &[P],
    output: &Path,
    mut on_processed: F,
) -> Result<MergeReport, MergeError>
where
    P: AsRef<Path>,
    F: FnMut(&Path),
{
    if inputs.is_empty() {
        return Err(MergeError::NoInputFiles);
    }

    let mut merged: Vec<String> = Vec::with_capacity(inputs.len() * 2);
    let mut documents = Vec::with_capacity(inputs.len());

    for (idx, input) in inputs.iter().enumerate() {
        let path = input.as_ref();
        let content = fs::read_to_string(path).map_err(|source| MergeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let processed =
            process_document(&content).map_err(|err| MergeError::from_transform(err, path))?;

        match processed.info.style {
            Some(style) => info!("{}: styled as {}", path.display(), style),
            None => info!("{}: no <trkseg>, left unstyled", path.display()),
        }

        if idx > 0 {
            merged.push(String::new());
        }
        merged.push(processed.text);
        documents.push(MergedDocument {
            source: path.to_path_buf(),
            info: processed.info,
        });
        on_processed(path);
    }

    let final_output = ensure_gpx_extension(output);
    if final_output.as_path() != output {
        info!(
            "Output path {} corrected to {}",
            output.display(),
            final_output.display()
        );
    }

    let contents = merged.join("\n");
    fs::write(&final_output, &contents).map_err(|source| MergeError::Write {
        path: final_output.clone(),
        source,
    })?;
    info!(
        "Merged {} file(s) into {}",
        documents.len(),
        final_output.display()
    );

    Ok(MergeReport {
        output: final_output,
        documents,
        bytes_written: contents.len(),
    })
}

/// Resolve the inputs and output for merging every `.gpx` file in `dir`.
///
/// The output lives inside `dir`. It is left out of the inputs so an earlier
/// merge result is never folded into the next one.
pub fn plan_directory_merge(dir: &Path, output_name: &str) -> Result<MergePlan, MergeError> {
    let output = ensure_gpx_extension(&dir.join(output_name));
    let inputs: Vec<PathBuf> = find_gpx_files(dir)?
        .into_iter()
        .filter(|path| path != &output)
        .collect();

    if inputs.is_empty() {
        return Err(MergeError::NoInputFiles);
    }
    debug!(
        "Directory merge plan: {} input(s) -> {}",
        inputs.len(),
        output.display()
    );

    Ok(MergePlan { inputs, output })
}

/// Merge every `.gpx` file in `dir` into `dir/output_name`.
pub fn merge_directory(dir: &Path, output_name: &str) -> Result<MergeReport, MergeError> {
    let plan = plan_directory_merge(dir, output_name)?;
    merge_files(&plan.inputs, &plan.output)
}
