//! Output management for CLI commands.
//!
//! One place that decides between text and JSON and where each goes.

use crate::config::Settings;
use crate::error::{PlanarError, PlanarResult};
use crate::io::exit_code::ExitCode;
use crate::io::format::{JsonResponse, OutputFormat, ResponseMeta};
use crate::report::{DistanceStyle, SampleReport};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

/// Manages output formatting and display.
///
/// A closed stdout (e.g. `planar | head -1`) is not treated as a failure.
pub struct OutputManager {
    format: OutputFormat,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl OutputManager {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }

    /// Create an output manager with custom writers.
    pub fn new_with_writers(
        format: OutputFormat,
        stdout: Box<dyn Write>,
        stderr: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            stdout,
            stderr,
        }
    }

    /// Output a successful result.
    ///
    /// In JSON mode the data is wrapped in a success response, in text mode
    /// it is shown through its Display implementation.
    pub fn success<T>(&mut self, data: T) -> io::Result<ExitCode>
    where
        T: Serialize + Display,
    {
        let text = match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::success(&data).with_meta(ResponseMeta::now());
                serde_json::to_string_pretty(&response)?
            }
            OutputFormat::Text => data.to_string(),
        };
        self.write_stdout(&text)?;
        Ok(ExitCode::Success)
    }

    /// Output the sample report, honouring the distance style in text mode.
    pub fn report(&mut self, report: &SampleReport, style: DistanceStyle) -> io::Result<ExitCode> {
        match self.format {
            OutputFormat::Json => self.success(report),
            OutputFormat::Text => {
                self.write_stdout(&report.render(style))?;
                Ok(ExitCode::Success)
            }
        }
    }

    /// Output the effective settings, as TOML in text mode.
    pub fn settings(&mut self, settings: &Settings) -> PlanarResult<ExitCode> {
        let text = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&JsonResponse::success(settings))
                .map_err(io::Error::from)?,
            OutputFormat::Text => {
                let body =
                    toml::to_string_pretty(settings).map_err(|e| PlanarError::ConfigError {
                        reason: e.to_string(),
                    })?;
                format!(
                    "Current Configuration:\n{}\n{}",
                    "=".repeat(50),
                    body.trim_end()
                )
            }
        };
        self.write_stdout(&text)?;
        Ok(ExitCode::Success)
    }

    /// Output an error with suggestions.
    pub fn error(&mut self, error: &PlanarError) -> io::Result<ExitCode> {
        match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::from_error(error);
                writeln!(self.stderr, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                writeln!(self.stderr, "Error: {error}")?;
                for suggestion in error.recovery_suggestions() {
                    writeln!(self.stderr, "  Suggestion: {suggestion}")?;
                }
            }
        }
        Ok(ExitCode::from_error(error))
    }

    fn write_stdout(&mut self, text: &str) -> io::Result<()> {
        match writeln!(self.stdout, "{text}").and_then(|()| self.stdout.flush()) {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                tracing::debug!("stdout closed early, dropping output");
                Ok(())
            }
            other => other,
        }
    }
}
