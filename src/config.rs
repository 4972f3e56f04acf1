//! Configuration for planar.
//!
//! Layered the usual way:
//! - Default values (the fixture inputs)
//! - TOML configuration file (`.planar/settings.toml`)
//! - Environment variable overrides
//! - CLI argument overrides (applied by the binary)
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `PLANAR_` and use double
//! underscores to separate nested levels:
//! - `PLANAR_INPUTS__A=10` sets `inputs.a`
//! - `PLANAR_OUTPUT__PRECISION=6` sets `output.precision`
//! - `PLANAR_LOGGING__LEVEL=debug` sets `logging.level`

use crate::error::{PlanarError, PlanarResult};
use crate::report::{DistanceStyle, SampleInputs};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".planar";
pub const CONFIG_FILE: &str = "settings.toml";
const ENV_PREFIX: &str = "PLANAR_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Operands of the sample computation
    #[serde(default)]
    pub inputs: SampleInputs,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    /// Decimal places for the distance. Unset means shortest round-trip form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_version() -> u32 {
    1
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            inputs: SampleInputs::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl OutputConfig {
    pub fn distance_style(&self) -> DistanceStyle {
        DistanceStyle::from_precision(self.precision)
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));
        Self::load_from(config_path)
    }

    /// Load configuration from a specific file, still honouring env overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            // Double underscore separates nested levels, single underscore stays
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(Box::new)
    }

    /// Find `.planar/settings.toml` from the current directory upwards
    pub fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::find_config_from(&current)
    }

    /// Nearest ancestor of `start` holding a settings file. A bare `.planar/`
    /// directory does not stop the search.
    pub fn find_config_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR).join(CONFIG_FILE))
            .find(|path| path.is_file())
    }

    /// Check values that deserialize fine but are still unusable.
    pub fn validate(&self) -> PlanarResult<()> {
        crate::logging::parse_level(&self.logging.level)?;
        Ok(())
    }

    pub fn sample_inputs(&self) -> SampleInputs {
        self.inputs
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> PlanarResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PlanarError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let toml_string = toml::to_string_pretty(self).map_err(|e| PlanarError::ConfigError {
            reason: e.to_string(),
        })?;
        std::fs::write(path, toml_string).map_err(|source| PlanarError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a commented settings file under the current directory
    pub fn init_config_file(force: bool) -> PlanarResult<PathBuf> {
        let root = std::env::current_dir().map_err(|e| PlanarError::General(e.to_string()))?;
        Self::init_config_file_in(&root, force)
    }

    pub fn init_config_file_in(root: &Path, force: bool) -> PlanarResult<PathBuf> {
        let config_dir = root.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err(PlanarError::ConfigError {
                reason: format!(
                    "{} already exists. Use --force to overwrite",
                    config_path.display()
                ),
            });
        }

        std::fs::create_dir_all(&config_dir).map_err(|source| PlanarError::FileWrite {
            path: config_dir.clone(),
            source,
        })?;
        std::fs::write(&config_path, CONFIG_TEMPLATE).map_err(|source| {
            PlanarError::FileWrite {
                path: config_path.clone(),
                source,
            }
        })?;

        tracing::info!(path = %config_path.display(), force, "wrote configuration file");
        Ok(config_path)
    }
}

const CONFIG_TEMPLATE: &str = r#"# planar configuration file

# Version of the configuration schema
version = 1

[inputs]
# Operands for the sum line (64-bit signed integers).
# A sum outside the i64 range panics in debug builds and wraps in release builds.
a = 1
b = 2

# Endpoints for the distance line
from = { x = 0.0, y = 0.0 }
to = { x = 3.0, y = 4.0 }

[output]
# Decimal places for the distance. Leave unset for the shortest
# round-trip form (5.0); 6 gives printf-style output (5.000000).
# precision = 6

[logging]
# Default log level (error, warn, info, debug, trace).
# RUST_LOG takes precedence when set.
level = "warn"
"#;
