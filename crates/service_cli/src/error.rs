//! CLI error types

use std::path::PathBuf;

use geoeff_kernel::GeoEffError;
use thiserror::Error;

/// Errors surfaced by the `geoeff` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Kernel(#[from] GeoEffError),

    #[error("Missing required option '{0}' (pass it on the command line or in the [sweep] table)")]
    MissingOption(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read config file '{}': {source}", path.display())]
    ConfigFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_error_is_transparent() {
        let err: CliError = GeoEffError::invalid("n_points", "must be at least 2, got 1").into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration 'n_points': must be at least 2, got 1"
        );
    }

    #[test]
    fn test_missing_option_message() {
        let err = CliError::MissingOption("z_max");
        assert!(err.to_string().contains("'z_max'"));
    }
}
