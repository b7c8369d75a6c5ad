//! Point-source command implementation
//!
//! Prints the closed-form efficiency of a point source on the detector axis.

use std::io::Write;

use geoeff_kernel::mc::{linspace, point_source_approximation};
use tracing::info;

use crate::commands::open_output;
use crate::Result;

/// Compute `(z, efficiency %)` pairs over an evenly spaced range
pub fn table(z_min: f64, z_max: f64, n_points: usize) -> Result<Vec<(f64, f64)>> {
    let distances = linspace(z_min, z_max, n_points)?;
    let efficiencies = point_source_approximation(&distances);
    Ok(distances.into_iter().zip(efficiencies).collect())
}

/// Run the point-source command
pub fn run(z_min: f64, z_max: f64, n_points: usize) -> Result<()> {
    info!("Point-source approximation over {} distances", n_points);

    let rows = table(z_min, z_max, n_points)?;
    let mut writer = open_output(None)?;
    writeln!(writer, "z/rd\tpoint source")?;
    for (z, efficiency) in rows {
        writeln!(writer, "{z}\t{efficiency}")?;
    }
    writer.flush()?;
    Ok(())
}
