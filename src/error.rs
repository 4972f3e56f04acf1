//! Error types for planar.
//!
//! Structured errors built with thiserror so that the CLI can map each
//! failure to a stable status code, an exit code and a few recovery hints.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Coordinate axis, used to point at the offending value in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Errors raised while building geometric values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Coordinate {axis} must be a finite number, got {value}")]
    NonFiniteCoordinate { axis: Axis, value: f64 },
}

/// Main error type for planar operations
#[derive(Error, Debug)]
pub enum PlanarError {
    /// Invalid geometric input
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing the report failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("{0}")]
    General(String),
}

impl From<Box<figment::Error>> for PlanarError {
    fn from(error: Box<figment::Error>) -> Self {
        Self::ConfigError {
            reason: error.to_string(),
        }
    }
}

impl PlanarError {
    /// Get a stable status code for this error type.
    ///
    /// Used in JSON responses for programmatic error handling.
    pub fn status_code(&self) -> String {
        match self {
            Self::Geometry(GeometryError::NonFiniteCoordinate { .. }) => "NON_FINITE_COORDINATE",
            Self::ConfigError { .. } => "CONFIG_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::Output(_) => "OUTPUT_ERROR",
            Self::General(_) => "GENERAL_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::Geometry(_) => vec![
                "Point coordinates must be finite numbers (no NaN or infinity)",
                "Check the [inputs] table in .planar/settings.toml",
            ],
            Self::ConfigError { .. } => vec![
                "Run 'planar init --force' to regenerate the configuration",
                "Check PLANAR_* environment variables for typos",
            ],
            Self::FileWrite { .. } => {
                vec!["Check that you have write permissions in the current directory"]
            }
            _ => vec![],
        }
    }
}

/// Result type alias for planar operations
pub type PlanarResult<T> = Result<T, PlanarError>;

/// Result type alias for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;
