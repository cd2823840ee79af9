//! Pipeline module - discovers inputs and drives the merge

pub mod discover;
pub mod error;
pub mod merge;

pub use discover::*;
pub use error::MergeError;
pub use merge::*;
