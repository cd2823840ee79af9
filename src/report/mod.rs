//! Report module - summarizing merge results

pub mod summary;

pub use summary::*;
