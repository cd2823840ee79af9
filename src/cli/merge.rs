//! Non-interactive merge runner: banner, progress, summary

use anyhow::Result;

use super::config::MergeConfig;
use crate::pipeline::{merge_files_with, MergeReport};
use crate::report::MergeSummary;
use crate::utils::{
    file_progress, finish_with_success, print_banner, print_completion, print_config,
};

/// Run a merge with terminal output, returning the report.
///
/// Nothing is printed when `config.quiet` is set; errors are left to the caller.
pub fn run_merge(config: &MergeConfig) -> Result<MergeReport> {
    let visible = !config.quiet;
    if visible {
        print_banner(env!("CARGO_PKG_VERSION"));
        print_config(&config.inputs, &config.output);
    }

    let pb = file_progress(config.inputs.len(), visible);
    let result = merge_files_with(&config.inputs, &config.output, |path| {
        pb.set_message(format!(
            "    {}",
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default()
        ));
        pb.inc(1);
    });

    let report = match result {
        Ok(report) => report,
        Err(err) => {
            pb.abandon();
            return Err(err.into());
        }
    };
    finish_with_success(&pb, &format!("Saved to {}", report.output.display()));

    if visible {
        MergeSummary::from_report(&report).display();
        print_completion();
    }

    Ok(report)
}
