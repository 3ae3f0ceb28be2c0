//! Convenience re-exports for building and tuning matching networks.

pub use crate::circuits::{Cable, Component, Connection, Element, LumpedElement, Network, NodeId};
pub use crate::constants::*;
pub use crate::errors::{Result, ZmatchError};
pub use crate::io::{save_sweep_log, write_grid_csv, write_one_parameter_csv, write_sweep_log, SWEEP_LOG_FILE};
pub use crate::math::{parallel_combination, CScalar, Scalar};
pub use crate::reflection::{magnitude, magnitude_db, reflection, return_loss_db, s11, vswr};
pub use crate::sweep::{
    linspace, GridMinimum, OneParameterSweep, Parameter, SweepAxis, SweepSample, Sweeper,
    TwoParameterSweep,
};
pub use crate::topology::{CableSpec, LumpedSpec, StubTuning, StubTuningConfig};
pub use crate::units::Frequency;
