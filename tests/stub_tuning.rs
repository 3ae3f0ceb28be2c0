use approx::assert_relative_eq;
use zmatch::prelude::*;

fn grid() -> (StubTuning, Sweeper, TwoParameterSweep) {
    let mut tuning = StubTuning::build(&StubTuningConfig::default()).unwrap();
    let mut sweeper = tuning.sweeper(Frequency::ghz(1.0).unwrap());
    let outer = SweepAxis::linear(Parameter::Frequency, 0.7, 1.1, 100);
    let inner = SweepAxis::linear(Parameter::Length(tuning.stub), 4.0, 7.0, 100);
    let sweep = sweeper.two_parameter(&mut tuning.network, &outer, &inner).unwrap();
    (tuning, sweeper, sweep)
}

#[test]
fn grid_minimum_is_pinned() {
    let (_, _, sweep) = grid();
    assert_eq!(sweep.s11_db().shape(), (100, 100));
    let best = sweep.minimum().unwrap();
    assert_eq!((best.row, best.column), (96, 11));
    assert_relative_eq!(best.outer_value, 1.087_878_787_878_788, max_relative = 1.0e-12);
    assert_relative_eq!(best.inner_value, 4.333_333_333_333_333, max_relative = 1.0e-12);
    assert_relative_eq!(best.s11_db, -34.355_254_440_150_98, max_relative = 1.0e-6);
}

#[test]
fn grid_is_deterministic_across_runs() {
    let (_, _, a) = grid();
    let (_, _, b) = grid();
    assert_eq!(a, b);
}

#[test]
fn grid_leaves_last_sample_configuration() {
    let (tuning, sweeper, _) = grid();
    assert_relative_eq!(sweeper.frequency().as_ghz(), 1.1, max_relative = 1.0e-12);
    let length = Parameter::Length(tuning.stub)
        .value(&tuning.network, sweeper.frequency())
        .unwrap();
    assert_relative_eq!(length, 7.0, max_relative = 1.0e-12);
}

#[test]
fn frequency_sweep_at_fixed_stub() {
    let (mut tuning, mut sweeper, _) = grid();
    sweeper
        .apply(&mut tuning.network, Parameter::Length(tuning.stub), 4.57)
        .unwrap();
    let axis = SweepAxis::linear(Parameter::Frequency, 0.9, 1.1, 200);
    let sweep = sweeper.one_parameter(&mut tuning.network, &axis).unwrap();

    assert_eq!(sweep.len(), 200);
    let best = sweep.minimum().unwrap();
    assert_relative_eq!(best.value, axis.values[162], max_relative = 1.0e-15);
    assert_relative_eq!(best.s11_db, -10.691_648_575_832_481, max_relative = 1.0e-6);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SWEEP_LOG_FILE);
    save_sweep_log(&path, &sweep).unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap().lines().count(), 200);
}
