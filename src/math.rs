//! Shared numerical primitives anchored on `num-complex`.

use num_complex::Complex;

use crate::constants::SINGULARITY_TOLERANCE;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for impedances and reflection coefficients.
pub type CScalar = Complex<Scalar>;

/// Combines impedances in parallel: `1 / Σ(1/Zi)`.
///
/// A zero impedance anywhere in the set shorts the combination and yields
/// zero. Returns `None` when the admittances cancel to within round-off of
/// their summed magnitudes (or the set is empty), i.e. the combined impedance
/// diverges.
#[must_use]
pub fn parallel_combination<I>(impedances: I) -> Option<CScalar>
where
    I: IntoIterator<Item = CScalar>,
{
    let one = CScalar::new(1.0, 0.0);
    let mut admittance = CScalar::default();
    let mut scale: Scalar = 0.0;
    for z in impedances {
        if z.norm() == 0.0 {
            return Some(CScalar::default());
        }
        let y = one / z;
        scale += y.norm();
        admittance += y;
    }

    if admittance.norm() <= SINGULARITY_TOLERANCE * scale {
        None
    } else {
        Some(one / admittance)
    }
}
