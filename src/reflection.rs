//! Voltage reflection coefficients and their display forms.

use crate::constants::{DB_FLOOR, SINGULARITY_TOLERANCE};
use crate::errors::{Result, ZmatchError};
use crate::math::{CScalar, Scalar};

/// Voltage reflection coefficient for a wave travelling from a medium of
/// impedance `z1` into one of impedance `z2`: `(Z2 − Z1)/(Z2 + Z1)`.
///
/// `|Γ| ≤ 1` holds for passive `z2` only when `z1` is real; a complex `z1`
/// can reflect more than it receives.
pub fn reflection(z1: CScalar, z2: CScalar) -> Result<CScalar> {
    let sum = z2 + z1;
    if sum.norm() <= SINGULARITY_TOLERANCE * (z1.norm() + z2.norm()) {
        return Err(ZmatchError::SingularReflection);
    }
    Ok((z2 - z1) / sum)
}

/// S11 of a one-port with input impedance `z_in` against a real reference impedance.
pub fn s11(z_in: CScalar, reference: Scalar) -> Result<CScalar> {
    reflection(CScalar::new(reference, 0.0), z_in)
}

/// Linear magnitude `|Γ|`.
#[must_use]
pub fn magnitude(gamma: CScalar) -> Scalar {
    gamma.norm()
}

/// Log magnitude `20·log10(|Γ|)` in dB, clamped to [`DB_FLOOR`].
#[must_use]
pub fn magnitude_db(gamma: CScalar) -> Scalar {
    let floor = 10.0_f64.powf(DB_FLOOR / 20.0);
    let m = gamma.norm();
    if m <= floor {
        DB_FLOOR
    } else {
        20.0 * m.log10()
    }
}

/// Return loss in dB (`-20·log10|Γ|`), the positive-is-better convention.
#[must_use]
pub fn return_loss_db(gamma: CScalar) -> Scalar {
    -magnitude_db(gamma)
}

/// Voltage standing wave ratio `(1 + |Γ|)/(1 − |Γ|)`; infinite for total reflection.
#[must_use]
pub fn vswr(gamma: CScalar) -> Scalar {
    let m = gamma.norm();
    if m >= 1.0 {
        Scalar::INFINITY
    } else {
        (1.0 + m) / (1.0 - m)
    }
}
