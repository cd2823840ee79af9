//! Utilities - logging, progress bars and terminal styling

pub mod logging;
pub mod progress;
pub mod styling;

pub use progress::*;
pub use styling::*;
