//! Physical constants and fixed numerical settings used by the impedance model.
//!
//! ## Units
//!
//! The model keeps the engineering units of cable datasheets and bench work:
//! frequency in GHz, cable length in centimetres (stored in metres), loss in
//! dB per 100 ft, capacitance in pF and inductance in nH. The constants below
//! carry the conversions between those units and SI.
//!
//! The propagation speed is the nominal 3 × 10⁸ m/s rather than the exact SI
//! value, so that cable phase lengths agree with the usual hand calculation.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Nominal speed of light in vacuum (m/s) used for cable phase constants.
pub const SPEED_OF_LIGHT: Scalar = 3.0e8;
/// Metres per 100 ft, as used to normalise datasheet loss figures.
pub const METRES_PER_100_FT: Scalar = 30.5;
/// Default characteristic impedance of a cable (Ω).
pub const DEFAULT_CHARACTERISTIC_IMPEDANCE: Scalar = 50.0;
/// Reference impedance the network is matched against when computing S11 (Ω).
pub const REFERENCE_IMPEDANCE: Scalar = 50.0;
/// Capacitance nudge (pF) applied to the probe element for ΔS11.
pub const PROBE_CAPACITANCE_STEP_PF: Scalar = 1.0e-6;
/// Capacitances below this value (pF) are treated as absent.
///
/// Sits well below [`PROBE_CAPACITANCE_STEP_PF`] so a probe nudge on a
/// zero-capacitance element always registers.
pub const CAPACITANCE_EPSILON_PF: Scalar = 1.0e-12;
/// Log-magnitude reported for a reflection coefficient of (near) zero, in dB.
pub const DB_FLOOR: Scalar = -200.0;
/// Relative tolerance below which a cancelling sum counts as exactly zero.
///
/// A sum is singular when its norm is within this many units of round-off
/// of the magnitudes that were added to form it.
pub const SINGULARITY_TOLERANCE: Scalar = 64.0 * Scalar::EPSILON;

/// Returns the angular frequency in rad/ns for a frequency in GHz.
///
/// Multiplying by an inductance in nH gives ohms directly.
#[inline]
#[must_use]
pub fn angular_frequency(ghz: Scalar) -> Scalar {
    2.0 * PI * ghz
}
