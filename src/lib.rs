#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and fixed numerical settings.
pub mod constants;
/// Unit conversions and the operating-frequency type.
pub mod units;
/// Shared complex-number helpers.
pub mod math;
/// Cables, lumped elements and the network evaluator.
pub mod circuits;
/// Reflection coefficient and its display forms.
pub mod reflection;
/// Parameter sweeps and sensitivity estimates.
pub mod sweep;
/// The stub-tuning example network.
pub mod topology;
/// Sweep result writers.
pub mod io;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

pub use errors::{Result, ZmatchError};
