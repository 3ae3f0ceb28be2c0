use crate::errors::Result;
use crate::math::CScalar;
use crate::units::Frequency;

/// Trait implemented by every element that can sit in a matching network.
///
/// An element is seen from its input side. With nothing attached beyond it,
/// it presents [`Component::terminal_impedance`]; with a load hanging off its
/// far side it presents [`Component::loaded_impedance`].
pub trait Component {
    /// Impedance of the element on its own (open cable end, bare lumped element).
    fn terminal_impedance(&self, frequency: Frequency) -> Result<CScalar>;

    /// Impedance looking into the element when `load` terminates it.
    fn loaded_impedance(&self, frequency: Frequency, load: CScalar) -> Result<CScalar>;

    /// Human-readable identifier (e.g. `stub`).
    fn name(&self) -> &str;
}
