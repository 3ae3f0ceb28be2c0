//! Lossy transmission-line segments.

use num_complex::Complex;

use crate::constants::{DEFAULT_CHARACTERISTIC_IMPEDANCE, METRES_PER_100_FT, SINGULARITY_TOLERANCE, SPEED_OF_LIGHT};
use crate::errors::{Result, ZmatchError};
use crate::math::{CScalar, Scalar};
use crate::reflection::reflection;
use crate::units::{cm_to_m, m_to_cm, Frequency, HZ_PER_GHZ};

use super::component::Component;

/// Coaxial cable segment described by datasheet figures.
///
/// Loss and velocity factor are fixed at construction; length can be changed
/// between evaluations with [`Cable::set_length`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Cable {
    name: String,
    characteristic_impedance: Scalar,
    /// Attenuation in Np/m at 1 GHz; scales with √f.
    attenuation: Scalar,
    velocity_factor: Scalar,
    length_m: Scalar,
}

impl Cable {
    /// Creates a cable with the default 50 Ω characteristic impedance.
    ///
    /// `loss_db_per_100ft` is the datasheet loss at 1 GHz, `velocity_factor`
    /// the propagation speed as a fraction of `c`, `length_cm` the physical
    /// length in centimetres.
    pub fn new(
        name: impl Into<String>,
        loss_db_per_100ft: Scalar,
        velocity_factor: Scalar,
        length_cm: Scalar,
    ) -> Result<Self> {
        let loss = ZmatchError::require_non_negative("loss", loss_db_per_100ft)?;
        let velocity_factor = ZmatchError::require_positive("velocity_factor", velocity_factor)?;
        let length_cm = ZmatchError::require_positive("length", length_cm)?;
        Ok(Self {
            name: name.into(),
            characteristic_impedance: DEFAULT_CHARACTERISTIC_IMPEDANCE,
            attenuation: -(10.0_f64.powf(-loss / 20.0)).ln() / METRES_PER_100_FT,
            velocity_factor,
            length_m: cm_to_m(length_cm),
        })
    }

    /// Replaces the characteristic impedance (Ω).
    pub fn with_characteristic_impedance(mut self, z0: Scalar) -> Result<Self> {
        self.characteristic_impedance = ZmatchError::require_positive("characteristic_impedance", z0)?;
        Ok(self)
    }

    /// Characteristic impedance in ohms.
    #[must_use]
    pub fn characteristic_impedance(&self) -> Scalar {
        self.characteristic_impedance
    }

    /// Attenuation constant at 1 GHz in Np/m.
    #[must_use]
    pub fn attenuation(&self) -> Scalar {
        self.attenuation
    }

    /// Velocity factor (fraction of `c`).
    #[must_use]
    pub fn velocity_factor(&self) -> Scalar {
        self.velocity_factor
    }

    /// Physical length in metres.
    #[must_use]
    pub fn length_m(&self) -> Scalar {
        self.length_m
    }

    /// Physical length in centimetres.
    #[must_use]
    pub fn length_cm(&self) -> Scalar {
        m_to_cm(self.length_m)
    }

    /// Sets the physical length from a value in centimetres.
    pub fn set_length(&mut self, length_cm: Scalar) -> Result<()> {
        let length_cm = ZmatchError::require_positive("length", length_cm)?;
        self.length_m = cm_to_m(length_cm);
        Ok(())
    }

    /// Attenuation coefficient α (Np/m) at `frequency`.
    #[must_use]
    pub fn alpha(&self, frequency: Frequency) -> Scalar {
        self.attenuation * frequency.as_ghz().sqrt()
    }

    /// Phase coefficient β (rad/m) at `frequency`.
    #[must_use]
    pub fn beta(&self, frequency: Frequency) -> Scalar {
        frequency.omega() * HZ_PER_GHZ / (self.velocity_factor * SPEED_OF_LIGHT)
    }

    /// Complex propagation constant γ = α + jβ.
    #[must_use]
    pub fn gamma(&self, frequency: Frequency) -> CScalar {
        Complex::new(self.alpha(frequency), self.beta(frequency))
    }

    /// `Z0·(1 + Γe)/(1 − Γe)` for a far-end reflection coefficient Γ,
    /// with `e = e^(-2γl)`.
    ///
    /// The denominator is singular when it vanishes relative to the round-off
    /// carried by `e`, which grows with both `|1 + Γe|` and the phase `|2γl|`.
    fn transform(&self, frequency: Frequency, far_end: CScalar) -> Result<CScalar> {
        let exponent = -2.0 * self.gamma(frequency) * self.length_m;
        let e = far_end * exponent.exp();
        let one = CScalar::new(1.0, 0.0);
        let numerator = one + e;
        let denominator = one - e;
        let scale = numerator.norm().max(1.0) * exponent.norm().max(1.0);
        if denominator.norm() <= SINGULARITY_TOLERANCE * scale {
            return Err(ZmatchError::DivergentNetwork { node: self.name.clone() });
        }
        Ok(self.characteristic_impedance * numerator / denominator)
    }
}

impl Component for Cable {
    /// Open-circuited line, `Z0·(1 + e^(-2γl))/(1 − e^(-2γl))`.
    fn terminal_impedance(&self, frequency: Frequency) -> Result<CScalar> {
        self.transform(frequency, CScalar::new(1.0, 0.0))
    }

    fn loaded_impedance(&self, frequency: Frequency, load: CScalar) -> Result<CScalar> {
        let far_end = reflection(CScalar::new(self.characteristic_impedance, 0.0), load)?;
        self.transform(frequency, far_end)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn ghz(f: Scalar) -> Frequency {
        Frequency::ghz(f).unwrap()
    }

    #[test]
    fn constructor_rejects_unphysical_inputs() {
        assert!(Cable::new("c", 20.0, 0.0, 4.5).is_err());
        assert!(Cable::new("c", 20.0, 0.7, 0.0).is_err());
        assert!(Cable::new("c", -1.0, 0.7, 4.5).is_err());
        assert!(Cable::new("c", 20.0, 0.7, 4.5)
            .unwrap()
            .with_characteristic_impedance(0.0)
            .is_err());
    }

    #[test]
    fn loss_figure_converts_to_nepers_per_metre() {
        let cable = Cable::new("c", 20.0, 0.7, 4.5).unwrap();
        let expected = 20.0 / 20.0 * std::f64::consts::LN_10 / 30.5;
        assert_relative_eq!(cable.attenuation(), expected, max_relative = 1.0e-12);
    }

    #[test]
    fn alpha_scales_with_root_frequency() {
        let cable = Cable::new("c", 20.0, 0.7, 4.5).unwrap();
        assert_relative_eq!(
            cable.alpha(ghz(4.0)),
            2.0 * cable.alpha(ghz(1.0)),
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn beta_scales_with_frequency_and_inverse_velocity() {
        let fast = Cable::new("fast", 0.0, 1.0, 1.0).unwrap();
        let slow = Cable::new("slow", 0.0, 0.5, 1.0).unwrap();
        assert_relative_eq!(fast.beta(ghz(1.0)), 2.0 * std::f64::consts::PI / 0.3, max_relative = 1.0e-12);
        assert_relative_eq!(slow.beta(ghz(1.0)), 2.0 * fast.beta(ghz(1.0)), max_relative = 1.0e-12);
        assert_relative_eq!(fast.beta(ghz(2.0)), 2.0 * fast.beta(ghz(1.0)), max_relative = 1.0e-12);
    }

    #[test]
    fn set_length_takes_centimetres() {
        let mut cable = Cable::new("c", 20.0, 0.7, 4.5).unwrap();
        cable.set_length(7.0).unwrap();
        assert_relative_eq!(cable.length_m(), 0.07, max_relative = 1.0e-15);
        assert!(cable.set_length(-3.0).is_err());
        assert_relative_eq!(cable.length_cm(), 7.0, max_relative = 1.0e-15);
    }

    #[test]
    fn lossless_open_stub_matches_cotangent() {
        let cable = Cable::new("stub", 0.0, 0.7, 4.5).unwrap();
        let f = ghz(1.0);
        let z = cable.terminal_impedance(f).unwrap();
        let bl = cable.beta(f) * cable.length_m();
        // Open lossless line: Zin = -j·Z0·cot(βl)
        assert_relative_eq!(z.re, 0.0, epsilon = 1.0e-9);
        assert_relative_eq!(z.im, -50.0 / bl.tan(), max_relative = 1.0e-9);
    }

    #[test]
    fn vanishing_loss_converges_to_lossless_stub() {
        let f = ghz(1.0);
        let lossless = Cable::new("stub", 0.0, 0.7, 4.5).unwrap();
        let nearly = Cable::new("stub", 1.0e-9, 0.7, 4.5).unwrap();
        let a = lossless.terminal_impedance(f).unwrap();
        let b = nearly.terminal_impedance(f).unwrap();
        assert!((a - b).norm() < 1.0e-6);
    }

    #[test]
    fn open_lossy_stub_golden_value() {
        let cable = Cable::new("stub", 20.0, 0.7, 4.5).unwrap();
        let z = cable.terminal_impedance(ghz(1.0)).unwrap();
        assert_relative_eq!(z.re, 0.178_711_058_333_949_5, max_relative = 1.0e-9);
        assert_relative_eq!(z.im, -11.412_035_147_187_28, max_relative = 1.0e-9);
    }

    #[test]
    fn matched_load_presents_z0() {
        let cable = Cable::new("line", 73.0, 0.7, 4.2).unwrap();
        let z = cable.loaded_impedance(ghz(1.0), CScalar::new(50.0, 0.0)).unwrap();
        assert_relative_eq!(z.re, 50.0, max_relative = 1.0e-12);
        assert_relative_eq!(z.im, 0.0, epsilon = 1.0e-9);
    }

    #[test]
    fn quarter_wave_line_inverts_load() {
        // λ/4 at 1 GHz with vf = 1 is 7.5 cm.
        let line = Cable::new("qw", 0.0, 1.0, 7.5).unwrap();
        let z = line.loaded_impedance(ghz(1.0), CScalar::new(25.0, 0.0)).unwrap();
        assert_relative_eq!(z.re, 100.0, max_relative = 1.0e-9);
        assert_relative_eq!(z.im, 0.0, epsilon = 1.0e-6);
    }

    #[test]
    fn lossless_half_wave_open_stub_diverges() {
        // λ/2 at 1 GHz with vf = 1 is 15 cm; the open end reappears at the input.
        let line = Cable::new("hw", 0.0, 1.0, 15.0).unwrap();
        let result = line.terminal_impedance(ghz(1.0));
        assert!(
            matches!(result, Err(ZmatchError::DivergentNetwork { ref node }) if node == "hw"),
            "expected divergence, got {result:?}"
        );
    }

    #[test]
    fn lossless_half_wave_line_reproduces_its_load() {
        let line = Cable::new("hw", 0.0, 1.0, 15.0).unwrap();
        let z = line.loaded_impedance(ghz(1.0), CScalar::new(30.0, -12.0)).unwrap();
        assert_relative_eq!(z.re, 30.0, max_relative = 1.0e-9);
        assert_relative_eq!(z.im, -12.0, max_relative = 1.0e-9);
    }

    #[test]
    fn long_lossy_open_stub_stays_finite() {
        let stub = Cable::new("long", 20.0, 0.7, 3000.0).unwrap();
        let z = stub.terminal_impedance(ghz(1.0)).unwrap();
        assert!(z.re > 0.0 && z.norm().is_finite());
    }

    #[test]
    fn impedance_is_idempotent() {
        let cable = Cable::new("stub", 20.0, 0.7, 4.5).unwrap();
        let a = cable.terminal_impedance(ghz(0.93)).unwrap();
        let b = cable.terminal_impedance(ghz(0.93)).unwrap();
        assert_eq!(a.re.to_bits(), b.re.to_bits());
        assert_eq!(a.im.to_bits(), b.im.to_bits());
    }
}
