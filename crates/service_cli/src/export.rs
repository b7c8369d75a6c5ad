//! Sweep result export
//!
//! - `tsv`: four tab-separated columns, one row per distance
//! - `json`: run parameters plus every point
//! - `table`: aligned text for the terminal

use std::fmt::Write as _;
use std::io::Write;

use geoeff_kernel::geometry::{DetectorKind, DetectorShape, SourceKind};
use geoeff_kernel::mc::{DistanceSweepPoint, SweepConfig, SweepResult};
use serde::Serialize;

use crate::error::Result;

/// Column header of the TSV export
pub const TSV_HEADER: [&str; 4] = ["z/rd", "point source", "Model", "Relative uncertainty"];

/// Write `result` as tab-separated values
pub fn write_tsv<W: Write>(writer: W, result: &SweepResult) -> Result<()> {
    let mut tsv = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);

    tsv.write_record(TSV_HEADER)?;
    let distances = result.distances();
    let efficiencies = result.efficiencies();
    let relative_errors = result.relative_errors();
    for i in 0..result.len() {
        tsv.write_record([
            distances[i].to_string(),
            result.point_source[i].to_string(),
            efficiencies[i].to_string(),
            relative_errors[i].to_string(),
        ])?;
    }
    tsv.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source: SourceKind,
    source_size: f64,
    detector: DetectorKind,
    ratio: Option<f64>,
    n_samples: usize,
    seed: u64,
    points: &'a [DistanceSweepPoint],
}

/// Write the run parameters and `result` as pretty-printed JSON
///
/// Infinite relative errors (distances without hits) are written as `null`.
pub fn write_json<W: Write>(writer: W, config: &SweepConfig, result: &SweepResult) -> Result<()> {
    let ratio = match config.detector() {
        DetectorShape::Circular => None,
        DetectorShape::Annular { ratio } => Some(ratio),
    };
    let report = JsonReport {
        source: config.source().kind(),
        source_size: config.source().size(),
        detector: config.detector().kind(),
        ratio,
        n_samples: config.n_samples(),
        seed: config.seed(),
        points: &result.points,
    };
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}

/// Render `result` as an aligned text table
pub fn render_table(result: &SweepResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>10}  {:>14}  {:>14}  {:>14}",
        "z/rd", "Point source %", "Efficiency %", "Rel. error %"
    );
    let _ = writeln!(out, "{}", "-".repeat(58));
    for point in &result.points {
        let _ = writeln!(
            out,
            "{:>10.4}  {:>14.6}  {:>14.6}  {:>14.4}",
            point.z,
            point.point_source_percent,
            point.efficiency_percent,
            point.relative_error_percent
        );
    }
    out
}
