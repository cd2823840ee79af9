//! GPX module - line-oriented rewriting of GPX track files

pub mod error;
pub mod style;
pub mod tags;
pub mod transform;

pub use error::TransformError;
pub use style::{pick_style, track_name, TrackStyle};
pub use tags::{Document, LineTag};
pub use transform::*;
