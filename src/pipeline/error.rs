//! Error types for the merge driver.
//!
//! Every variant that involves a file carries its path so the front ends can
//! report which input stopped the merge.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::gpx::TransformError;

/// Errors that abort a merge. No output is written when any of these occur.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The selection or directory yielded no `.gpx` files.
    #[error("No GPX files selected.")]
    NoInputFiles,

    /// An input has no `<trk>` line.
    #[error("No <trk> tag found in GPX file: {}", path.display())]
    MissingTrackTag { path: PathBuf },

    /// An input file or directory could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The merged output could not be written.
    #[error("Failed to write merged file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MergeError {
    /// Attach the offending input path to a transformer error.
    pub fn from_transform(err: TransformError, path: impl Into<PathBuf>) -> Self {
        match err {
            TransformError::MissingTrackTag => MergeError::MissingTrackTag { path: path.into() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_no_input_files_display() {
        assert_eq!(MergeError::NoInputFiles.to_string(), "No GPX files selected.");
    }

    #[test]
    fn test_missing_track_tag_names_file() {
        let err = MergeError::from_transform(TransformError::MissingTrackTag, "tracks/a.gpx");
        assert!(matches!(err, MergeError::MissingTrackTag { .. }));
        assert!(err.to_string().contains("a.gpx"));
    }

    #[test]
    fn test_read_error_source() {
        let err = MergeError::Read {
            path: PathBuf::from("missing.gpx"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        assert!(err.to_string().contains("missing.gpx"));
        assert!(err.to_string().contains("file not found"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_non_io_error_source() {
        assert!(MergeError::NoInputFiles.source().is_none());
    }
}
