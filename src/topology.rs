//! Ready-made stub-tuning network.
//!
//! An end junction feeds two parallel branches: an open lossy stub and a
//! quarter-wave transformer cable, the latter terminated by a lumped tip
//! element. The tip doubles as the sensitivity probe.

use crate::circuits::{Cable, LumpedElement, Network, NodeId};
use crate::errors::Result;
use crate::math::Scalar;
use crate::sweep::Sweeper;
use crate::units::Frequency;

/// Datasheet description of a cable branch.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableSpec {
    /// Loss in dB per 100 ft at 1 GHz.
    pub loss_db_per_100ft: Scalar,
    /// Velocity factor.
    pub velocity_factor: Scalar,
    /// Length in centimetres.
    pub length_cm: Scalar,
    /// Characteristic impedance in ohms.
    pub characteristic_impedance: Scalar,
}

impl CableSpec {
    fn build(&self, name: &str) -> Result<Cable> {
        Cable::new(name, self.loss_db_per_100ft, self.velocity_factor, self.length_cm)?
            .with_characteristic_impedance(self.characteristic_impedance)
    }
}

/// Values of a lumped element.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LumpedSpec {
    /// Resistance in ohms.
    pub resistance: Scalar,
    /// Capacitance in pF.
    pub capacitance_pf: Scalar,
    /// Inductance in nH.
    pub inductance_nh: Scalar,
}

/// Component values of the stub-tuning network.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StubTuningConfig {
    /// Series junction at the input.
    pub end: LumpedSpec,
    /// Open tuning stub.
    pub stub: CableSpec,
    /// Quarter-wave transformer cable.
    pub quarter_wave: CableSpec,
    /// Load at the far end of the transformer.
    pub tip: LumpedSpec,
}

impl Default for StubTuningConfig {
    fn default() -> Self {
        Self {
            end: LumpedSpec {
                resistance: 0.0,
                capacitance_pf: 0.0,
                inductance_nh: 0.0,
            },
            stub: CableSpec {
                loss_db_per_100ft: 20.0,
                velocity_factor: 0.7,
                length_cm: 4.5,
                characteristic_impedance: 50.0,
            },
            quarter_wave: CableSpec {
                loss_db_per_100ft: 73.0,
                velocity_factor: 0.7,
                length_cm: 4.2,
                characteristic_impedance: 50.0,
            },
            tip: LumpedSpec {
                resistance: 4.0,
                capacitance_pf: 1.0,
                inductance_nh: 2.0,
            },
        }
    }
}

/// The built network and handles to its named nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct StubTuning {
    /// Component tree.
    pub network: Network,
    /// Input junction (evaluation root).
    pub end: NodeId,
    /// Open stub.
    pub stub: NodeId,
    /// Quarter-wave cable.
    pub quarter_wave: NodeId,
    /// Tip load (sensitivity probe).
    pub tip: NodeId,
}

impl StubTuning {
    /// Builds the network from `config`.
    pub fn build(config: &StubTuningConfig) -> Result<Self> {
        let mut network = Network::new();
        let e = config.end;
        let t = config.tip;
        let end = network.add(LumpedElement::series("end", e.resistance, e.capacitance_pf, e.inductance_nh)?);
        let stub = network.add(config.stub.build("stub")?);
        let quarter_wave = network.add(config.quarter_wave.build("quarter_wave")?);
        let tip = network.add(LumpedElement::new("tip", t.resistance, t.capacitance_pf, t.inductance_nh)?);

        network.attach(end, stub)?;
        network.attach(end, quarter_wave)?;
        network.attach(quarter_wave, tip)?;

        Ok(Self {
            network,
            end,
            stub,
            quarter_wave,
            tip,
        })
    }

    /// Sweeper looking into the end junction and probing the tip.
    #[must_use]
    pub fn sweeper(&self, frequency: Frequency) -> Sweeper {
        Sweeper::new(self.end, self.tip, frequency)
    }
}
