//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Convenience alias for results produced by this crate.
pub type Result<T, E = ZmatchError> = std::result::Result<T, E>;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum ZmatchError {
    /// A physical quantity is outside its domain (non-positive frequency,
    /// velocity factor or length, negative lumped value, NaN, ...).
    #[error("invalid physical parameter {name} = {value}")]
    InvalidPhysicalParameter {
        /// Name of the offending quantity.
        name: &'static str,
        /// Rejected value.
        value: Scalar,
    },
    /// The admittance seen at a node vanishes and its impedance diverges.
    #[error("network diverges at node `{node}`")]
    DivergentNetwork {
        /// Name of the node whose impedance diverged.
        node: String,
    },
    /// `Z1 + Z2 == 0`, so the reflection coefficient is undefined.
    #[error("reflection coefficient is undefined for opposite impedances")]
    SingularReflection,
    /// The parameter name is not one of the sweepable parameters.
    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),
    /// The parameter exists but not on the targeted element kind.
    #[error("parameter `{parameter}` does not apply to node `{node}`")]
    UnsupportedParameter {
        /// Parameter name.
        parameter: &'static str,
        /// Name of the targeted node.
        node: String,
    },
    /// A node id does not belong to the network.
    #[error("unknown node id {0}")]
    UnknownNode(usize),
    /// No node carries the requested name.
    #[error("no node named `{0}`")]
    NodeNotFound(String),
    /// Raised when writing sweep output fails.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ZmatchError {
    /// Validates that `value` is finite and strictly positive.
    pub(crate) fn require_positive(name: &'static str, value: Scalar) -> Result<Scalar> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidPhysicalParameter { name, value })
        }
    }

    /// Validates that `value` is finite and not negative.
    pub(crate) fn require_non_negative(name: &'static str, value: Scalar) -> Result<Scalar> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidPhysicalParameter { name, value })
        }
    }
}
