//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success
//! - `1`: General error - unspecified failure
//! - `3-125`: Specific errors
//! - `126-255`: Reserved by shell

use crate::error::PlanarError;

/// Standard exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Input values were rejected, e.g. a non-finite coordinate (code 4)
    InvalidInput = 4,

    /// File or stream I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

impl ExitCode {
    /// Convert a `PlanarError` to the appropriate exit code.
    pub fn from_error(error: &PlanarError) -> Self {
        match error {
            PlanarError::Geometry(_) => ExitCode::InvalidInput,
            PlanarError::ConfigError { .. } => ExitCode::ConfigError,
            PlanarError::FileWrite { .. } | PlanarError::Output(_) => ExitCode::IoError,
            PlanarError::General(_) => ExitCode::GeneralError,
        }
    }
}
