//! Sweep command implementation
//!
//! Runs a Monte Carlo distance sweep and exports the efficiencies next to the
//! point-source approximation.

use std::io::Write;

use geoeff_kernel::mc::{SweepDriver, SweepResult};
use tracing::info;

use crate::commands::open_output;
use crate::config::{OutputFormat, ResolvedSweep};
use crate::export;
use crate::Result;

/// Run the sweep command
pub fn run(resolved: &ResolvedSweep) -> Result<SweepResult> {
    let driver = SweepDriver::new(resolved.sweep.clone())?;
    let config = driver.config();
    info!("Starting sweep...");
    info!("  Source: {} (size {})", config.source().kind(), config.source().size());
    info!("  Detector: {:?}", config.detector());
    info!(
        "  Distances: {} to {} ({} points)",
        config.z_min(),
        config.z_max(),
        config.n_points()
    );
    info!("  Samples per distance: {}", config.n_samples());
    info!("  Output format: {}", resolved.format);

    let result = driver.run_with_progress(|_, point| {
        info!(
            completion = point.normalised_z,
            efficiency = point.efficiency_percent,
            relative_error = point.relative_error_percent,
            "Distance done"
        );
    })?;

    let mut writer = open_output(resolved.output.as_deref())?;
    match resolved.format {
        OutputFormat::Table => writer.write_all(export::render_table(&result).as_bytes())?,
        OutputFormat::Tsv => export::write_tsv(&mut writer, &result)?,
        OutputFormat::Json => {
            export::write_json(&mut writer, config, &result)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;

    if let Some(path) = &resolved.output {
        info!("Wrote {}", path.display());
    }
    info!("Sweep complete");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SweepOptions;

    #[test]
    fn test_run_writes_tsv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");

        let resolved = SweepOptions {
            z_min: Some(0.0),
            z_max: Some(1.0),
            n_points: Some(3),
            power: Some(3),
            output: Some(path.clone()),
            format: Some(OutputFormat::Tsv),
            ..Default::default()
        }
        .resolve()
        .unwrap();

        let result = run(&resolved).unwrap();
        assert_eq!(result.len(), 3);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_run_invalid_output_path() {
        let resolved = SweepOptions {
            z_min: Some(0.0),
            z_max: Some(1.0),
            n_points: Some(2),
            power: Some(1),
            output: Some("/nonexistent/dir/out.tsv".into()),
            format: Some(OutputFormat::Tsv),
            ..Default::default()
        }
        .resolve()
        .unwrap();

        assert!(matches!(run(&resolved), Err(crate::CliError::Io(_))));
    }
}
