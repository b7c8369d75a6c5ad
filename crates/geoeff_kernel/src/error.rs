//! Error types for the efficiency kernel.
//!
//! Configuration errors are raised once, when a [`SweepConfig`](crate::mc::SweepConfig)
//! is built or a selector string is parsed. Size mismatches signal broken
//! internal wiring between point batches and should never surface in practice.

use thiserror::Error;

/// Efficiency kernel error.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeoEffError {
    /// Invalid configuration value with parameter name and description.
    #[error("Invalid configuration '{name}': {reason}")]
    InvalidConfiguration {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// Two point batches with different lengths were combined.
    #[error("Point batch size mismatch: expected {expected} points, got {actual}")]
    SizeMismatch {
        /// Length of the batch being modified.
        expected: usize,
        /// Length of the offsets supplied.
        actual: usize,
    },
}

impl GeoEffError {
    /// Shorthand for an [`InvalidConfiguration`](Self::InvalidConfiguration) error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias for kernel operations.
pub type Result<T> = std::result::Result<T, GeoEffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeoEffError::invalid("n_points", "must be at least 2, got 1");
        assert_eq!(
            err.to_string(),
            "Invalid configuration 'n_points': must be at least 2, got 1"
        );

        let err = GeoEffError::SizeMismatch {
            expected: 10,
            actual: 9,
        };
        assert!(err.to_string().contains("expected 10 points, got 9"));
    }
}
