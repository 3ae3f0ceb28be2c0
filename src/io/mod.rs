//! Writers for sweep results consumed by plotting and post-processing tools.

/// Plain-text and CSV writers for sweep results.
pub mod sweep_log;

pub use sweep_log::*;
