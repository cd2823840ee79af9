//! Resolved merge configuration shared by every front end

use std::path::{Path, PathBuf};

use crate::pipeline::{ensure_gpx_extension, plan_directory_merge, MergeError};

/// What to merge and where to write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    pub inputs: Vec<PathBuf>,
    /// Output path with the '.gpx' extension already enforced
    pub output: PathBuf,
    /// Suppress banner, progress and summary output
    pub quiet: bool,
}

impl MergeConfig {
    /// Configuration for an explicit, ordered list of files.
    pub fn for_files(inputs: Vec<PathBuf>, output: &Path, quiet: bool) -> Self {
        Self {
            inputs,
            output: ensure_gpx_extension(output),
            quiet,
        }
    }

    /// Configuration for every `.gpx` file in `dir`, written to `dir/output_name`.
    pub fn for_directory(dir: &Path, output_name: &str, quiet: bool) -> Result<Self, MergeError> {
        let plan = plan_directory_merge(dir, output_name)?;
        Ok(Self {
            inputs: plan.inputs,
            output: plan.output,
            quiet,
        })
    }
}
