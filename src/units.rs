//! Unit conversions and the validated operating-frequency type.

use std::fmt;

use crate::constants::angular_frequency;
use crate::errors::{Result, ZmatchError};
use crate::math::Scalar;

/// Centimetres per metre.
pub const CM_PER_M: Scalar = 100.0;
/// Hertz per gigahertz.
pub const HZ_PER_GHZ: Scalar = 1.0e9;

/// Converts a length in centimetres to metres.
#[inline]
#[must_use]
pub fn cm_to_m(cm: Scalar) -> Scalar {
    cm / CM_PER_M
}

/// Converts a length in metres to centimetres.
#[inline]
#[must_use]
pub fn m_to_cm(m: Scalar) -> Scalar {
    m * CM_PER_M
}

/// Operating frequency, stored in GHz.
///
/// Every impedance computation takes one of these explicitly; there is no
/// process-wide frequency. Construction guarantees a finite, positive value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Scalar", into = "Scalar"))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Frequency(Scalar);

impl Frequency {
    /// Creates a frequency from a value in GHz.
    pub fn ghz(value: Scalar) -> Result<Self> {
        ZmatchError::require_positive("frequency", value).map(Self)
    }

    /// Creates a frequency from a value in Hz.
    pub fn hz(value: Scalar) -> Result<Self> {
        Self::ghz(value / HZ_PER_GHZ)
    }

    /// Frequency in GHz.
    #[must_use]
    pub fn as_ghz(self) -> Scalar {
        self.0
    }

    /// Frequency in Hz.
    #[must_use]
    pub fn as_hz(self) -> Scalar {
        self.0 * HZ_PER_GHZ
    }

    /// Angular frequency in rad/ns (`2π·f[GHz]`).
    #[must_use]
    pub fn omega(self) -> Scalar {
        angular_frequency(self.0)
    }
}

impl TryFrom<Scalar> for Frequency {
    type Error = ZmatchError;

    fn try_from(value: Scalar) -> Result<Self> {
        Self::ghz(value)
    }
}

impl From<Frequency> for Scalar {
    fn from(f: Frequency) -> Self {
        f.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} GHz", self.0)
    }
}
