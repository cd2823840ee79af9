//! gpxmerge: GPX Track Merging Library
//!
//! A library for merging GPX track files with line-oriented rewriting:
//! description relocation, color-coded track styling by name, and
//! preamble/closing-tag trimming so the bodies can be concatenated.

pub mod cli;
pub mod gpx;
pub mod pipeline;
pub mod report;
pub mod utils;
