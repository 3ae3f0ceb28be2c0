//! Network elements and the recursive impedance evaluator.

/// Transmission-line segments.
pub mod cable;
/// Element trait shared by every node kind.
pub mod component;
/// Lumped R/L/C elements.
pub mod lumped;
/// Arena-backed component tree and its impedance evaluation.
pub mod network;

pub use cable::Cable;
pub use component::Component;
pub use lumped::{Connection, LumpedElement};
pub use network::{Element, Network, NodeId};
