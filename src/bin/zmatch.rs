//! zmatch command-line interface: stub-tuning sweeps.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zmatch::io::{save_sweep_log, write_grid_csv, write_one_parameter_csv, SWEEP_LOG_FILE};
use zmatch::sweep::{Parameter, SweepAxis};
use zmatch::topology::{StubTuning, StubTuningConfig};
use zmatch::units::Frequency;

#[derive(Parser)]
#[command(name = "zmatch")]
#[command(about = "Stub-tuning sweeps over a cable/lumped-element matching network", long_about = None)]
#[command(version)]
struct Cli {
    /// Grid sweep start frequency (GHz)
    #[arg(long, default_value_t = 0.7)]
    grid_f_start: f64,

    /// Grid sweep stop frequency (GHz)
    #[arg(long, default_value_t = 1.1)]
    grid_f_stop: f64,

    /// Grid sweep stub length start (cm)
    #[arg(long, default_value_t = 4.0)]
    length_start: f64,

    /// Grid sweep stub length stop (cm)
    #[arg(long, default_value_t = 7.0)]
    length_stop: f64,

    /// Samples per grid axis
    #[arg(long, default_value_t = 100)]
    grid_steps: usize,

    /// Stub length used for the frequency sweep (cm)
    #[arg(long, default_value_t = 4.57)]
    stub_length: f64,

    /// Frequency sweep start (GHz)
    #[arg(long, default_value_t = 0.9)]
    f_start: f64,

    /// Frequency sweep stop (GHz)
    #[arg(long, default_value_t = 1.1)]
    f_stop: f64,

    /// Frequency sweep samples
    #[arg(long, default_value_t = 200)]
    steps: usize,

    /// Sweep log output (value,|S11| per line)
    #[arg(long, value_name = "FILE", default_value = SWEEP_LOG_FILE)]
    log: PathBuf,

    /// Optional CSV of the frequency sweep (value, dB, linear, ΔS11)
    #[arg(long, value_name = "FILE")]
    sweep_csv: Option<PathBuf>,

    /// Optional CSV of the grid sweep
    #[arg(long, value_name = "FILE")]
    grid_csv: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let mut tuning = StubTuning::build(&StubTuningConfig::default()).context("building network")?;
    let mut sweeper = tuning.sweeper(Frequency::ghz(cli.grid_f_start)?);

    let outer = SweepAxis::linear(Parameter::Frequency, cli.grid_f_start, cli.grid_f_stop, cli.grid_steps);
    let inner = SweepAxis::linear(Parameter::Length(tuning.stub), cli.length_start, cli.length_stop, cli.grid_steps);
    let grid = run_grid(&mut sweeper, &mut tuning, &outer, &inner)?;
    if let Some(best) = grid.minimum() {
        info!(
            frequency_ghz = best.outer_value,
            stub_length_cm = best.inner_value,
            s11_db = best.s11_db,
            "grid minimum"
        );
    }
    if let Some(ref path) = cli.grid_csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_grid_csv(BufWriter::new(file), &grid)?;
    }

    sweeper.apply(&mut tuning.network, Parameter::Length(tuning.stub), cli.stub_length)?;
    let axis = SweepAxis::linear(Parameter::Frequency, cli.f_start, cli.f_stop, cli.steps);
    let sweep = sweeper
        .one_parameter(&mut tuning.network, &axis)
        .context("frequency sweep")?;
    save_sweep_log(&cli.log, &sweep).with_context(|| format!("writing {}", cli.log.display()))?;
    if let Some(best) = sweep.minimum() {
        info!(frequency_ghz = best.value, s11_db = best.s11_db, "frequency sweep minimum");
    }
    if let Some(ref path) = cli.sweep_csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_one_parameter_csv(BufWriter::new(file), &sweep)?;
    }

    Ok(())
}

#[cfg(feature = "parallel")]
fn run_grid(
    sweeper: &mut zmatch::sweep::Sweeper,
    tuning: &mut StubTuning,
    outer: &SweepAxis,
    inner: &SweepAxis,
) -> Result<zmatch::sweep::TwoParameterSweep> {
    sweeper
        .two_parameter_par(&mut tuning.network, outer, inner)
        .context("grid sweep")
}

#[cfg(not(feature = "parallel"))]
fn run_grid(
    sweeper: &mut zmatch::sweep::Sweeper,
    tuning: &mut StubTuning,
    outer: &SweepAxis,
    inner: &SweepAxis,
) -> Result<zmatch::sweep::TwoParameterSweep> {
    sweeper
        .two_parameter(&mut tuning.network, outer, inner)
        .context("grid sweep")
}

/// Installs a fmt subscriber; `RUST_LOG` wins over `level`.
///
/// Fails if a global subscriber is already installed.
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("installing log subscriber")
}
