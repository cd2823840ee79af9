//! Error types for the GPX line transformer.

use thiserror::Error;

/// Errors raised while normalizing a single document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The document has no line starting with `<trk>`.
    #[error("No <trk> tag found in GPX file!")]
    MissingTrackTag,
}
