//! Lumped R/L/C junction and termination elements.

use num_complex::Complex;

use crate::constants::CAPACITANCE_EPSILON_PF;
use crate::errors::{Result, ZmatchError};
use crate::math::{parallel_combination, CScalar, Scalar};
use crate::units::Frequency;

use super::component::Component;

/// How a lumped element combines with the load attached beyond it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connection {
    /// Element shunts the load (`Zload ∥ Zself`).
    #[default]
    Shunt,
    /// Element sits in series with the load (`Zload + Zself`).
    Series,
}

/// Lumped element with resistance (Ω), capacitance (pF) and inductance (nH).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LumpedElement {
    name: String,
    resistance: Scalar,
    capacitance_pf: Scalar,
    inductance_nh: Scalar,
    connection: Connection,
}

impl LumpedElement {
    /// Creates a shunt-connected element.
    pub fn new(
        name: impl Into<String>,
        resistance: Scalar,
        capacitance_pf: Scalar,
        inductance_nh: Scalar,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            resistance: ZmatchError::require_non_negative("resistance", resistance)?,
            capacitance_pf: ZmatchError::require_non_negative("capacitance", capacitance_pf)?,
            inductance_nh: ZmatchError::require_non_negative("inductance", inductance_nh)?,
            connection: Connection::Shunt,
        })
    }

    /// Creates a series-connected element; with all values zero it is a
    /// transparent junction.
    pub fn series(
        name: impl Into<String>,
        resistance: Scalar,
        capacitance_pf: Scalar,
        inductance_nh: Scalar,
    ) -> Result<Self> {
        Ok(Self::new(name, resistance, capacitance_pf, inductance_nh)?.with_connection(Connection::Series))
    }

    /// Replaces the connection style.
    #[must_use]
    pub fn with_connection(mut self, connection: Connection) -> Self {
        self.connection = connection;
        self
    }

    /// Resistance in ohms.
    #[must_use]
    pub fn resistance(&self) -> Scalar {
        self.resistance
    }

    /// Capacitance in picofarads.
    #[must_use]
    pub fn capacitance(&self) -> Scalar {
        self.capacitance_pf
    }

    /// Inductance in nanohenries.
    #[must_use]
    pub fn inductance(&self) -> Scalar {
        self.inductance_nh
    }

    /// Connection style.
    #[must_use]
    pub fn connection(&self) -> Connection {
        self.connection
    }

    /// Sets the resistance (Ω).
    pub fn set_resistance(&mut self, resistance: Scalar) -> Result<()> {
        self.resistance = ZmatchError::require_non_negative("resistance", resistance)?;
        Ok(())
    }

    /// Sets the capacitance (pF).
    pub fn set_capacitance(&mut self, capacitance_pf: Scalar) -> Result<()> {
        self.capacitance_pf = ZmatchError::require_non_negative("capacitance", capacitance_pf)?;
        Ok(())
    }

    /// Sets the inductance (nH).
    pub fn set_inductance(&mut self, inductance_nh: Scalar) -> Result<()> {
        self.inductance_nh = ZmatchError::require_non_negative("inductance", inductance_nh)?;
        Ok(())
    }

    /// `R + j(ωL − 1/(ωC))` at `frequency`.
    ///
    /// The capacitive term is dropped when the capacitance is below
    /// [`CAPACITANCE_EPSILON_PF`].
    #[must_use]
    pub fn self_impedance(&self, frequency: Frequency) -> CScalar {
        let omega = frequency.omega();
        let inductive = omega * self.inductance_nh;
        let reactance = if self.capacitance_pf < CAPACITANCE_EPSILON_PF {
            inductive
        } else {
            // ω in rad/ns times C in pF gives mS, hence the 1e-3.
            inductive - 1.0 / (omega * self.capacitance_pf * 1.0e-3)
        };
        Complex::new(self.resistance, reactance)
    }
}

impl Component for LumpedElement {
    fn terminal_impedance(&self, frequency: Frequency) -> Result<CScalar> {
        Ok(self.self_impedance(frequency))
    }

    fn loaded_impedance(&self, frequency: Frequency, load: CScalar) -> Result<CScalar> {
        let own = self.self_impedance(frequency);
        match self.connection {
            Connection::Series => Ok(load + own),
            Connection::Shunt => parallel_combination([load, own])
                .ok_or_else(|| ZmatchError::DivergentNetwork { node: self.name.clone() }),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
