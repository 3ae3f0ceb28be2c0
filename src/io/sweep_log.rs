use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::errors::Result;
use crate::sweep::{OneParameterSweep, TwoParameterSweep};

/// Default file name of the one-parameter sweep log, relative to the working directory.
pub const SWEEP_LOG_FILE: &str = "one_parameter_search_output.txt";

/// Writes one `<value>,<|S11|>` line per sample.
pub fn write_sweep_log<W: Write>(mut w: W, sweep: &OneParameterSweep) -> io::Result<()> {
    for s in sweep.samples() {
        writeln!(w, "{},{}", s.value, s.s11_linear)?;
    }
    w.flush()
}

/// Creates (or truncates) `path` and writes the sweep log into it.
pub fn save_sweep_log(path: impl AsRef<Path>, sweep: &OneParameterSweep) -> Result<()> {
    let file = File::create(path)?;
    write_sweep_log(BufWriter::new(file), sweep)?;
    Ok(())
}

/// Writes a one-parameter sweep as CSV (dual-axis line chart input).
pub fn write_one_parameter_csv<W: Write>(mut w: W, sweep: &OneParameterSweep) -> io::Result<()> {
    writeln!(w, "{},s11_db,s11_linear,delta_s11", sweep.parameter().name())?;
    for s in sweep.samples() {
        writeln!(w, "{:.16e},{:.16e},{:.16e},{:.16e}", s.value, s.s11_db, s.s11_linear, s.delta_s11)?;
    }
    Ok(())
}

/// Writes a two-parameter sweep as long-format CSV, one row per grid cell
/// in row-major order (heatmap input).
pub fn write_grid_csv<W: Write>(mut w: W, sweep: &TwoParameterSweep) -> io::Result<()> {
    writeln!(
        w,
        "{},{},s11_db,delta_s11",
        sweep.outer().parameter.name(),
        sweep.inner().parameter.name()
    )?;
    for (row, outer) in sweep.outer().values.iter().enumerate() {
        for (column, inner) in sweep.inner().values.iter().enumerate() {
            writeln!(
                w,
                "{:.16e},{:.16e},{:.16e},{:.16e}",
                outer,
                inner,
                sweep.s11_db()[(row, column)],
                sweep.delta_s11()[(row, column)]
            )?;
        }
    }
    Ok(())
}
