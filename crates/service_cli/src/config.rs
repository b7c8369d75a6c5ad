//! Sweep configuration management
//!
//! Options come from three places. Priority (highest to lowest):
//! 1. Command-line arguments
//! 2. The `[sweep]` table of the TOML file given with `--config`
//! 3. Default values
//!
//! ```toml
//! [sweep]
//! source = "gaussian"
//! source_size = 0.5
//! detector = "annular"
//! ratio = 0.4
//! z_min = 0.0
//! z_max = 5.0
//! n_points = 26
//! power = 6
//! format = "tsv"
//! output = "efficiency.tsv"
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use geoeff_kernel::geometry::{DetectorKind, DetectorShape, SourceKind};
use geoeff_kernel::mc::{ExecutionMode, SweepConfig, DEFAULT_SEED};
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Output formats for sweep results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned table on stdout
    #[default]
    Table,
    /// Tab-separated values
    Tsv,
    /// JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "tsv" | "txt" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::InvalidArgument(format!(
                "Unknown format: {s}. Supported: table, tsv, json"
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Tsv => write!(f, "tsv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Contents of a configuration file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Defaults for `geoeff sweep`
    pub sweep: SweepOptions,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Sweep options, any of which may be unset
///
/// Used both for the `[sweep]` table and for the command-line overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepOptions {
    pub source: Option<SourceKind>,
    pub detector: Option<DetectorKind>,
    pub z_min: Option<f64>,
    pub z_max: Option<f64>,
    pub n_points: Option<usize>,
    pub source_size: Option<f64>,
    pub power: Option<u32>,
    pub ratio: Option<f64>,
    pub seed: Option<u64>,
    pub parallel: Option<bool>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl SweepOptions {
    /// Merge with higher-priority options (`other` takes precedence)
    pub fn merge(self, other: SweepOptions) -> Self {
        Self {
            source: other.source.or(self.source),
            detector: other.detector.or(self.detector),
            z_min: other.z_min.or(self.z_min),
            z_max: other.z_max.or(self.z_max),
            n_points: other.n_points.or(self.n_points),
            source_size: other.source_size.or(self.source_size),
            power: other.power.or(self.power),
            ratio: other.ratio.or(self.ratio),
            seed: other.seed.or(self.seed),
            parallel: other.parallel.or(self.parallel),
            output: other.output.or(self.output),
            format: other.format.or(self.format),
        }
    }

    /// Apply defaults and build a validated run configuration
    ///
    /// Distances, point count and sample power have no default. The source
    /// defaults to a point (uniform, size zero) and the detector to circular.
    pub fn resolve(self) -> Result<ResolvedSweep> {
        let z_min = self.z_min.ok_or(CliError::MissingOption("z_min"))?;
        let z_max = self.z_max.ok_or(CliError::MissingOption("z_max"))?;
        let n_points = self.n_points.ok_or(CliError::MissingOption("n_points"))?;
        let power = self.power.ok_or(CliError::MissingOption("power"))?;

        let source = self
            .source
            .unwrap_or(SourceKind::Uniform)
            .with_size(self.source_size.unwrap_or(0.0));
        let detector =
            DetectorShape::from_kind(self.detector.unwrap_or(DetectorKind::Circular), self.ratio)?;
        let mode = if self.parallel.unwrap_or(false) {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        };

        let sweep = SweepConfig::builder()
            .z_range(z_min, z_max)
            .n_points(n_points)
            .source(source)
            .detector(detector)
            .sample_power(power)
            .seed(self.seed.unwrap_or(DEFAULT_SEED))
            .mode(mode)
            .build()?;

        Ok(ResolvedSweep {
            sweep,
            output: self.output,
            format: self.format.unwrap_or_default(),
        })
    }
}

/// Fully resolved `geoeff sweep` invocation
#[derive(Debug, Clone)]
pub struct ResolvedSweep {
    pub sweep: SweepConfig,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Build sweep options from the optional config file and the CLI overrides
pub fn build_options(config_file: Option<&Path>, cli: SweepOptions) -> Result<SweepOptions> {
    let file = match config_file {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    Ok(file.sweep.merge(cli))
}
