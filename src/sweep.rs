//! One- and two-parameter tuning sweeps with S11 sensitivity estimates.
//!
//! A [`Sweeper`] owns the evaluation context of a sweep: the root the network
//! is looked into, the lumped element probed for sensitivity, the reference
//! impedance and the current operating frequency. Sweeps mutate the network
//! in place and leave it (and the sweeper's frequency) in the configuration
//! of the last sample evaluated. Re-apply a resting configuration afterwards
//! if one is needed.
//!
//! Sweeps are fail-fast: the first sample that cannot be evaluated aborts the
//! sweep and its error is returned. The probe capacitance is restored before
//! any error propagates.

use std::fmt;

use nalgebra::DMatrix;
use tracing::{debug, trace};

use crate::circuits::{Component, Element, Network, NodeId};
use crate::constants::{PROBE_CAPACITANCE_STEP_PF, REFERENCE_IMPEDANCE};
use crate::errors::{Result, ZmatchError};
use crate::math::{CScalar, Scalar};
use crate::reflection::{magnitude, magnitude_db, s11};
use crate::units::Frequency;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// A sweepable quantity together with the node it acts on.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// Operating frequency in GHz (held by the [`Sweeper`], not the network).
    Frequency,
    /// Resistance (Ω) of a lumped element.
    Resistance(NodeId),
    /// Capacitance (pF) of a lumped element.
    Capacitance(NodeId),
    /// Inductance (nH) of a lumped element.
    Inductance(NodeId),
    /// Physical length (cm) of a cable.
    Length(NodeId),
}

impl Parameter {
    /// Names accepted by [`Parameter::from_name`].
    pub const NAMES: [&'static str; 5] = ["frequency", "resistance", "capacitance", "inductance", "length"];

    /// Resolves a parameter by name. `target` is ignored for `"frequency"`.
    pub fn from_name(name: &str, target: NodeId) -> Result<Self> {
        match name {
            "frequency" => Ok(Self::Frequency),
            "resistance" => Ok(Self::Resistance(target)),
            "capacitance" => Ok(Self::Capacitance(target)),
            "inductance" => Ok(Self::Inductance(target)),
            "length" => Ok(Self::Length(target)),
            other => Err(ZmatchError::UnknownParameter(other.to_owned())),
        }
    }

    /// Canonical parameter name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Resistance(_) => "resistance",
            Self::Capacitance(_) => "capacitance",
            Self::Inductance(_) => "inductance",
            Self::Length(_) => "length",
        }
    }

    /// Node the parameter acts on, if any.
    #[must_use]
    pub fn target(&self) -> Option<NodeId> {
        match *self {
            Self::Frequency => None,
            Self::Resistance(id) | Self::Capacitance(id) | Self::Inductance(id) | Self::Length(id) => Some(id),
        }
    }

    /// Writes `value` into the network (or `frequency`).
    pub fn apply(&self, network: &mut Network, frequency: &mut Frequency, value: Scalar) -> Result<()> {
        match *self {
            Self::Frequency => {
                *frequency = Frequency::ghz(value)?;
                Ok(())
            }
            Self::Length(id) => match network.element_mut(id)? {
                Element::Cable(cable) => cable.set_length(value),
                Element::Lumped(l) => Err(self.unsupported(l.name())),
            },
            Self::Resistance(id) | Self::Capacitance(id) | Self::Inductance(id) => {
                match network.element_mut(id)? {
                    Element::Lumped(lumped) => match self {
                        Self::Resistance(_) => lumped.set_resistance(value),
                        Self::Capacitance(_) => lumped.set_capacitance(value),
                        _ => lumped.set_inductance(value),
                    },
                    Element::Cable(c) => Err(self.unsupported(c.name())),
                }
            }
        }
    }

    /// Reads the current value of the parameter.
    pub fn value(&self, network: &Network, frequency: Frequency) -> Result<Scalar> {
        let element = match self.target() {
            None => return Ok(frequency.as_ghz()),
            Some(id) => network.element(id)?,
        };
        match (self, element) {
            (Self::Length(_), Element::Cable(c)) => Ok(c.length_cm()),
            (Self::Resistance(_), Element::Lumped(l)) => Ok(l.resistance()),
            (Self::Capacitance(_), Element::Lumped(l)) => Ok(l.capacitance()),
            (Self::Inductance(_), Element::Lumped(l)) => Ok(l.inductance()),
            (_, other) => Err(self.unsupported(other.name())),
        }
    }

    fn unsupported(&self, node: &str) -> ZmatchError {
        ZmatchError::UnsupportedParameter {
            parameter: self.name(),
            node: node.to_owned(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target() {
            None => f.write_str(self.name()),
            Some(id) => write!(f, "{}[{}]", self.name(), id.index()),
        }
    }
}

/// Parameter and the ordered values it takes during a sweep.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SweepAxis {
    /// Swept parameter.
    pub parameter: Parameter,
    /// Values in evaluation order.
    pub values: Vec<Scalar>,
}

impl SweepAxis {
    /// Axis over explicit values.
    #[must_use]
    pub fn new(parameter: Parameter, values: Vec<Scalar>) -> Self {
        Self { parameter, values }
    }

    /// Axis over `n` linearly spaced values in [start, stop].
    #[must_use]
    pub fn linear(parameter: Parameter, start: Scalar, stop: Scalar, n: usize) -> Self {
        Self::new(parameter, linspace(start, stop, n))
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the axis has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One evaluated point of a one-parameter sweep.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSample {
    /// Parameter value.
    pub value: Scalar,
    /// Complex S11.
    pub s11: CScalar,
    /// `20·log10|S11|`, floored.
    pub s11_db: Scalar,
    /// `|S11|`.
    pub s11_linear: Scalar,
    /// `|S11(C + δ) − S11(C)|` for the probe capacitance.
    pub delta_s11: Scalar,
}

/// Result of [`Sweeper::one_parameter`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct OneParameterSweep {
    parameter: Parameter,
    samples: Vec<SweepSample>,
}

impl OneParameterSweep {
    /// Swept parameter.
    #[must_use]
    pub fn parameter(&self) -> Parameter {
        self.parameter
    }

    /// Samples in sweep order.
    #[must_use]
    pub fn samples(&self) -> &[SweepSample] {
        &self.samples
    }

    /// Parameter values.
    #[must_use]
    pub fn values(&self) -> Vec<Scalar> {
        self.samples.iter().map(|s| s.value).collect()
    }

    /// S11 in dB.
    #[must_use]
    pub fn s11_db(&self) -> Vec<Scalar> {
        self.samples.iter().map(|s| s.s11_db).collect()
    }

    /// Linear |S11|.
    #[must_use]
    pub fn s11_linear(&self) -> Vec<Scalar> {
        self.samples.iter().map(|s| s.s11_linear).collect()
    }

    /// ΔS11 sensitivity.
    #[must_use]
    pub fn delta_s11(&self) -> Vec<Scalar> {
        self.samples.iter().map(|s| s.delta_s11).collect()
    }

    /// Sample with the lowest S11 (earliest on ties).
    #[must_use]
    pub fn minimum(&self) -> Option<&SweepSample> {
        self.samples
            .iter()
            .fold(None, |best: Option<&SweepSample>, s| match best {
                Some(b) if b.s11_db <= s.s11_db => Some(b),
                _ => Some(s),
            })
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when nothing was swept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Lowest-S11 cell of a two-parameter grid.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMinimum {
    /// Row (outer axis index).
    pub row: usize,
    /// Column (inner axis index).
    pub column: usize,
    /// Outer parameter value.
    pub outer_value: Scalar,
    /// Inner parameter value.
    pub inner_value: Scalar,
    /// S11 at the cell, in dB.
    pub s11_db: Scalar,
}

/// Result of [`Sweeper::two_parameter`]; grids are indexed `(outer, inner)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TwoParameterSweep {
    outer: SweepAxis,
    inner: SweepAxis,
    s11_db: DMatrix<Scalar>,
    delta_s11: DMatrix<Scalar>,
}

impl TwoParameterSweep {
    /// Outer (row) axis.
    #[must_use]
    pub fn outer(&self) -> &SweepAxis {
        &self.outer
    }

    /// Inner (column) axis.
    #[must_use]
    pub fn inner(&self) -> &SweepAxis {
        &self.inner
    }

    /// S11 grid in dB.
    #[must_use]
    pub fn s11_db(&self) -> &DMatrix<Scalar> {
        &self.s11_db
    }

    /// ΔS11 grid.
    #[must_use]
    pub fn delta_s11(&self) -> &DMatrix<Scalar> {
        &self.delta_s11
    }

    /// Cell with the lowest S11 (earliest in row-major order on ties).
    #[must_use]
    pub fn minimum(&self) -> Option<GridMinimum> {
        let mut best: Option<GridMinimum> = None;
        for row in 0..self.s11_db.nrows() {
            for column in 0..self.s11_db.ncols() {
                let db = self.s11_db[(row, column)];
                if best.map_or(true, |b| db < b.s11_db) {
                    best = Some(GridMinimum {
                        row,
                        column,
                        outer_value: self.outer.values[row],
                        inner_value: self.inner.values[column],
                        s11_db: db,
                    });
                }
            }
        }
        best
    }
}

/// S11 and its probe sensitivity at one network configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Measurement {
    s11: CScalar,
    delta_s11: Scalar,
}

/// Evaluation context for tuning sweeps.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweeper {
    root: NodeId,
    probe: NodeId,
    reference_impedance: Scalar,
    frequency: Frequency,
}

impl Sweeper {
    /// Creates a sweeper looking into `root`, probing the capacitance of the
    /// lumped element `probe`, starting at `frequency`, against 50 Ω.
    #[must_use]
    pub fn new(root: NodeId, probe: NodeId, frequency: Frequency) -> Self {
        Self {
            root,
            probe,
            reference_impedance: REFERENCE_IMPEDANCE,
            frequency,
        }
    }

    /// Replaces the reference impedance (Ω).
    pub fn with_reference_impedance(mut self, ohms: Scalar) -> Result<Self> {
        self.reference_impedance = ZmatchError::require_positive("reference_impedance", ohms)?;
        Ok(self)
    }

    /// Current operating frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Sets the operating frequency.
    pub fn set_frequency(&mut self, frequency: Frequency) {
        self.frequency = frequency;
    }

    /// Reference impedance in ohms.
    #[must_use]
    pub fn reference_impedance(&self) -> Scalar {
        self.reference_impedance
    }

    /// Applies `value` to `parameter`, routing frequency to this sweeper.
    pub fn apply(&mut self, network: &mut Network, parameter: Parameter, value: Scalar) -> Result<()> {
        parameter.apply(network, &mut self.frequency, value)
    }

    /// S11 of the network at the current frequency.
    pub fn s11(&self, network: &Network) -> Result<CScalar> {
        self.s11_at(network, self.frequency)
    }

    fn s11_at(&self, network: &Network, frequency: Frequency) -> Result<CScalar> {
        s11(network.impedance(self.root, frequency)?, self.reference_impedance)
    }

    /// Evaluates S11 and ΔS11 by nudging the probe capacitance, then restores it.
    fn measure(&self, network: &mut Network, frequency: Frequency) -> Result<Measurement> {
        let s11 = self.s11_at(network, frequency)?;
        let probe = Parameter::Capacitance(self.probe);
        let original = probe.value(network, frequency)?;

        let mut f = frequency;
        probe.apply(network, &mut f, original + PROBE_CAPACITANCE_STEP_PF)?;
        let perturbed = self.s11_at(network, frequency);
        probe.apply(network, &mut f, original)?;

        Ok(Measurement {
            s11,
            delta_s11: (perturbed? - s11).norm(),
        })
    }

    /// Sweeps one parameter over `axis`, in order.
    pub fn one_parameter(&mut self, network: &mut Network, axis: &SweepAxis) -> Result<OneParameterSweep> {
        debug!(parameter = %axis.parameter, samples = axis.len(), "one-parameter sweep");
        let mut samples = Vec::with_capacity(axis.len());
        for &value in &axis.values {
            self.apply(network, axis.parameter, value)?;
            let m = self.measure(network, self.frequency)?;
            let sample = SweepSample {
                value,
                s11: m.s11,
                s11_db: magnitude_db(m.s11),
                s11_linear: magnitude(m.s11),
                delta_s11: m.delta_s11,
            };
            trace!(value, s11_db = sample.s11_db, delta_s11 = sample.delta_s11, "sample");
            samples.push(sample);
        }

        let sweep = OneParameterSweep {
            parameter: axis.parameter,
            samples,
        };
        if let Some(best) = sweep.minimum() {
            debug!(value = best.value, s11_db = best.s11_db, "one-parameter sweep minimum");
        }
        Ok(sweep)
    }

    /// Sweeps `inner` for every value of `outer`.
    ///
    /// The outer parameter is applied once per row, the inner one per cell.
    pub fn two_parameter(
        &mut self,
        network: &mut Network,
        outer: &SweepAxis,
        inner: &SweepAxis,
    ) -> Result<TwoParameterSweep> {
        debug!(
            outer = %outer.parameter,
            inner = %inner.parameter,
            rows = outer.len(),
            columns = inner.len(),
            "two-parameter sweep"
        );
        let mut s11_db = DMatrix::<Scalar>::zeros(outer.len(), inner.len());
        let mut delta_s11 = DMatrix::<Scalar>::zeros(outer.len(), inner.len());
        for (row, &o) in outer.values.iter().enumerate() {
            self.apply(network, outer.parameter, o)?;
            for (column, &i) in inner.values.iter().enumerate() {
                self.apply(network, inner.parameter, i)?;
                let m = self.measure(network, self.frequency)?;
                s11_db[(row, column)] = magnitude_db(m.s11);
                delta_s11[(row, column)] = m.delta_s11;
            }
            trace!(row, outer = o, "row complete");
        }

        Ok(self.finish_grid(outer, inner, s11_db, delta_s11))
    }

    /// Parallel variant of [`Sweeper::two_parameter`].
    ///
    /// Every row runs on its own deep copy of `network`. The grids match the
    /// sequential sweep, and `network` and the sweeper end in the same
    /// last-sample configuration. When several rows fail, which error is
    /// reported is unspecified.
    #[cfg(feature = "parallel")]
    pub fn two_parameter_par(
        &mut self,
        network: &mut Network,
        outer: &SweepAxis,
        inner: &SweepAxis,
    ) -> Result<TwoParameterSweep> {
        use rayon::prelude::*;

        debug!(
            outer = %outer.parameter,
            inner = %inner.parameter,
            rows = outer.len(),
            columns = inner.len(),
            "parallel two-parameter sweep"
        );
        let base: &Network = network;
        let this: &Self = self;
        let rows = outer
            .values
            .par_iter()
            .map(|&o| {
                let mut net = base.clone();
                let mut frequency = this.frequency;
                outer.parameter.apply(&mut net, &mut frequency, o)?;
                inner
                    .values
                    .iter()
                    .map(|&i| {
                        inner.parameter.apply(&mut net, &mut frequency, i)?;
                        this.measure(&mut net, frequency)
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let s11_db = DMatrix::from_fn(outer.len(), inner.len(), |r, c| magnitude_db(rows[r][c].s11));
        let delta_s11 = DMatrix::from_fn(outer.len(), inner.len(), |r, c| rows[r][c].delta_s11);

        if let (Some(&o), Some(&i)) = (outer.values.last(), inner.values.last()) {
            self.apply(network, outer.parameter, o)?;
            self.apply(network, inner.parameter, i)?;
        }

        Ok(self.finish_grid(outer, inner, s11_db, delta_s11))
    }

    fn finish_grid(
        &self,
        outer: &SweepAxis,
        inner: &SweepAxis,
        s11_db: DMatrix<Scalar>,
        delta_s11: DMatrix<Scalar>,
    ) -> TwoParameterSweep {
        let sweep = TwoParameterSweep {
            outer: outer.clone(),
            inner: inner.clone(),
            s11_db,
            delta_s11,
        };
        if let Some(best) = sweep.minimum() {
            debug!(
                outer = best.outer_value,
                inner = best.inner_value,
                s11_db = best.s11_db,
                "two-parameter sweep minimum"
            );
        }
        sweep
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::circuits::{Cable, LumpedElement};

    struct Fixture {
        network: Network,
        end: NodeId,
        stub: NodeId,
        tip: NodeId,
    }

    fn fixture() -> Fixture {
        let mut network = Network::new();
        let end = network.add(LumpedElement::series("end", 0.0, 0.0, 0.0).unwrap());
        let stub = network.add(Cable::new("stub", 20.0, 0.7, 4.5).unwrap());
        let qwc = network.add(Cable::new("qwc", 73.0, 0.7, 4.2).unwrap());
        let tip = network.add(LumpedElement::new("tip", 4.0, 1.0, 2.0).unwrap());
        network.attach(end, stub).unwrap();
        network.attach(end, qwc).unwrap();
        network.attach(qwc, tip).unwrap();
        Fixture { network, end, stub, tip }
    }

    fn ghz(f: Scalar) -> Frequency {
        Frequency::ghz(f).unwrap()
    }

    #[test]
    fn linspace_basic() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn parameter_names_resolve() {
        let id = fixture().stub;
        for name in Parameter::NAMES {
            assert_eq!(Parameter::from_name(name, id).unwrap().name(), name);
        }
        assert!(matches!(
            Parameter::from_name("colour", id),
            Err(ZmatchError::UnknownParameter(n)) if n == "colour"
        ));
    }

    #[test]
    fn parameter_kind_must_match_element() {
        let mut fx = fixture();
        let mut f = ghz(1.0);
        let err = Parameter::Length(fx.tip).apply(&mut fx.network, &mut f, 3.0).unwrap_err();
        assert!(matches!(err, ZmatchError::UnsupportedParameter { parameter: "length", .. }));
        let err = Parameter::Capacitance(fx.stub).apply(&mut fx.network, &mut f, 3.0).unwrap_err();
        assert!(matches!(err, ZmatchError::UnsupportedParameter { parameter: "capacitance", .. }));
    }

    #[test]
    fn apply_then_read_back() {
        let mut fx = fixture();
        let mut f = ghz(1.0);
        Parameter::Length(fx.stub).apply(&mut fx.network, &mut f, 6.1).unwrap();
        assert_relative_eq!(Parameter::Length(fx.stub).value(&fx.network, f).unwrap(), 6.1, max_relative = 1.0e-15);
        Parameter::Frequency.apply(&mut fx.network, &mut f, 0.85).unwrap();
        assert_eq!(f.as_ghz(), 0.85);
        assert!(Parameter::Frequency.apply(&mut fx.network, &mut f, 0.0).is_err());
        assert_eq!(f.as_ghz(), 0.85);
    }

    #[test]
    fn one_parameter_sweep_preserves_order_and_probe() {
        let mut fx = fixture();
        let mut sweeper = Sweeper::new(fx.end, fx.tip, ghz(1.0));
        let axis = SweepAxis::new(Parameter::Frequency, vec![1.1, 0.9, 1.0]);
        let sweep = sweeper.one_parameter(&mut fx.network, &axis).unwrap();

        assert_eq!(sweep.values(), vec![1.1, 0.9, 1.0]);
        assert_eq!(sweep.len(), 3);
        assert_eq!(sweeper.frequency().as_ghz(), 1.0);
        assert_eq!(Parameter::Capacitance(fx.tip).value(&fx.network, ghz(1.0)).unwrap(), 1.0);
        for s in sweep.samples() {
            assert!(s.s11_linear <= 1.0);
            assert_relative_eq!(s.s11_db, 20.0 * s.s11_linear.log10(), max_relative = 1.0e-12);
            assert!(s.delta_s11 > 0.0);
        }
    }

    #[test]
    fn sample_at_stub_4_57_matches_reference() {
        let mut fx = fixture();
        Parameter::Length(fx.stub).apply(&mut fx.network, &mut ghz(1.0), 4.57).unwrap();
        let mut sweeper = Sweeper::new(fx.end, fx.tip, ghz(1.0));
        let sweep = sweeper
            .one_parameter(&mut fx.network, &SweepAxis::new(Parameter::Frequency, vec![1.0]))
            .unwrap();
        let s = sweep.samples()[0];
        assert_relative_eq!(s.s11_linear, 0.955_577_192_827_725_4, max_relative = 1.0e-9);
        assert_relative_eq!(s.delta_s11, 7.214_534_318_453_332e-7, max_relative = 1.0e-4);
    }

    #[test]
    fn sweep_leaves_last_configuration() {
        let mut fx = fixture();
        let mut sweeper = Sweeper::new(fx.end, fx.tip, ghz(1.0));
        let axis = SweepAxis::linear(Parameter::Length(fx.stub), 4.0, 7.0, 4);
        sweeper.one_parameter(&mut fx.network, &axis).unwrap();
        let len = Parameter::Length(fx.stub).value(&fx.network, sweeper.frequency()).unwrap();
        assert_relative_eq!(len, 7.0, max_relative = 1.0e-15);
    }

    #[test]
    fn fail_fast_on_invalid_sample() {
        let mut fx = fixture();
        let mut sweeper = Sweeper::new(fx.end, fx.tip, ghz(1.0));
        let axis = SweepAxis::new(Parameter::Length(fx.stub), vec![5.0, -1.0, 6.0]);
        let err = sweeper.one_parameter(&mut fx.network, &axis).unwrap_err();
        assert!(matches!(err, ZmatchError::InvalidPhysicalParameter { name: "length", .. }));
        let len = Parameter::Length(fx.stub).value(&fx.network, sweeper.frequency()).unwrap();
        assert_relative_eq!(len, 5.0, max_relative = 1.0e-15);
    }

    #[test]
    fn probe_must_be_lumped() {
        let mut fx = fixture();
        let mut sweeper = Sweeper::new(fx.end, fx.stub, ghz(1.0));
        let axis = SweepAxis::new(Parameter::Frequency, vec![1.0]);
        assert!(matches!(
            sweeper.one_parameter(&mut fx.network, &axis),
            Err(ZmatchError::UnsupportedParameter { .. })
        ));
    }

    #[test]
    fn two_parameter_grid_matches_one_parameter_rows() {
        let mut fx = fixture();
        let outer = SweepAxis::linear(Parameter::Frequency, 0.9, 1.1, 3);
        let inner = SweepAxis::linear(Parameter::Length(fx.stub), 4.0, 7.0, 4);
        let mut sweeper = Sweeper::new(fx.end, fx.tip, ghz(1.0));
        let grid = sweeper.two_parameter(&mut fx.network, &outer, &inner).unwrap();
        assert_eq!(grid.s11_db().shape(), (3, 4));

        for (row, &f) in outer.values.iter().enumerate() {
            let mut row_sweeper = Sweeper::new(fx.end, fx.tip, ghz(f));
            let line = row_sweeper.one_parameter(&mut fx.network, &inner).unwrap();
            for (column, s) in line.samples().iter().enumerate() {
                assert_eq!(grid.s11_db()[(row, column)], s.s11_db);
                assert_eq!(grid.delta_s11()[(row, column)], s.delta_s11);
            }
        }
    }

    #[test]
    fn grid_minimum_is_global() {
        let mut fx = fixture();
        let outer = SweepAxis::linear(Parameter::Frequency, 0.7, 1.1, 9);
        let inner = SweepAxis::linear(Parameter::Length(fx.stub), 4.0, 7.0, 9);
        let mut sweeper = Sweeper::new(fx.end, fx.tip, ghz(1.0));
        let grid = sweeper.two_parameter(&mut fx.network, &outer, &inner).unwrap();
        let best = grid.minimum().unwrap();
        assert_eq!(best.s11_db, grid.s11_db().min());
        assert_eq!(best.outer_value, outer.values[best.row]);
        assert_eq!(best.inner_value, inner.values[best.column]);
    }

    #[test]
    fn empty_axes_produce_empty_results() {
        let mut fx = fixture();
        let mut sweeper = Sweeper::new(fx.end, fx.tip, ghz(1.0));
        let empty = SweepAxis::new(Parameter::Frequency, Vec::new());
        assert!(sweeper.one_parameter(&mut fx.network, &empty).unwrap().minimum().is_none());
        let inner = SweepAxis::linear(Parameter::Length(fx.stub), 4.0, 7.0, 3);
        assert!(sweeper.two_parameter(&mut fx.network, &empty, &inner).unwrap().minimum().is_none());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_grid_matches_sequential() {
        let mut seq = fixture();
        let mut par = fixture();
        let outer = SweepAxis::linear(Parameter::Frequency, 0.7, 1.1, 7);
        let inner = SweepAxis::linear(Parameter::Length(seq.stub), 4.0, 7.0, 5);

        let mut s = Sweeper::new(seq.end, seq.tip, ghz(1.0));
        let a = s.two_parameter(&mut seq.network, &outer, &inner).unwrap();
        let mut p = Sweeper::new(par.end, par.tip, ghz(1.0));
        let b = p.two_parameter_par(&mut par.network, &outer, &inner).unwrap();

        assert_eq!(a, b);
        assert_eq!(seq.network, par.network);
        assert_eq!(s.frequency(), p.frequency());
    }
}
