//! geoeff CLI - Geometric Detection Efficiency Sweeps
//!
//! Command line entry point for the `geoeff_kernel` Monte Carlo engine.
//!
//! # Commands
//!
//! - `geoeff sweep` - Monte Carlo efficiency over a range of distances
//! - `geoeff point-source` - Closed-form point-source efficiency
//!
//! Sweep options may also be read from the `[sweep]` table of a TOML file
//! passed with `--config`; command-line values take precedence.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use geoeff_kernel::geometry::{DetectorKind, SourceKind};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod export;

pub use error::{CliError, Result};

use config::{OutputFormat, SweepOptions};

/// Geometric detection efficiency of disc detectors
#[derive(Parser)]
#[command(name = "geoeff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML with a [sweep] table)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the efficiency over a range of source-detector distances
    Sweep(SweepArgs),

    /// Print the point-source approximation over a range of distances
    PointSource {
        /// Smallest distance in detector radii
        #[arg(long)]
        z_min: f64,

        /// Largest distance in detector radii
        #[arg(long)]
        z_max: f64,

        /// Number of distances
        #[arg(short, long)]
        n_points: usize,
    },
}

#[derive(Args)]
struct SweepArgs {
    /// Source distribution (uniform, gaussian)
    #[arg(short, long)]
    source: Option<SourceKind>,

    /// Detector shape (circular, annular)
    #[arg(short, long)]
    detector: Option<DetectorKind>,

    /// Smallest distance in detector radii
    #[arg(long)]
    z_min: Option<f64>,

    /// Largest distance in detector radii
    #[arg(long)]
    z_max: Option<f64>,

    /// Number of distances
    #[arg(short, long)]
    n_points: Option<usize>,

    /// Source radius (uniform) or sigma (gaussian) in detector radii
    #[arg(long)]
    source_size: Option<f64>,

    /// Samples per distance as a power of ten
    #[arg(short, long)]
    power: Option<u32>,

    /// Inner over outer radius of an annular detector
    #[arg(short, long)]
    ratio: Option<f64>,

    /// Base seed
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate distances in parallel
    #[arg(long)]
    parallel: bool,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (table, tsv, json)
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

impl From<SweepArgs> for SweepOptions {
    fn from(args: SweepArgs) -> Self {
        Self {
            source: args.source,
            detector: args.detector,
            z_min: args.z_min,
            z_max: args.z_max,
            n_points: args.n_points,
            source_size: args.source_size,
            power: args.power,
            ratio: args.ratio,
            seed: args.seed,
            parallel: args.parallel.then_some(true),
            output: args.output,
            format: args.format,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Sweep(args) => {
            let options = config::build_options(cli.config.as_deref(), args.into())?;
            debug!(?options, "Resolved sweep options");
            commands::sweep::run(&options.resolve()?).map(|_| ())
        }
        Commands::PointSource {
            z_min,
            z_max,
            n_points,
        } => commands::point_source::run(z_min, z_max, n_points),
    }
}
