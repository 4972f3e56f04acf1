//! Logging setup.
//!
//! Logs go to stderr so stdout only ever carries the report.

use crate::error::{PlanarError, PlanarResult};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Parse a level name such as `warn` or `DEBUG`.
pub fn parse_level(level: &str) -> PlanarResult<LevelFilter> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|e| PlanarError::ConfigError {
            reason: format!("invalid log level '{level}': {e}"),
        })
}

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init(level: LevelFilter) -> PlanarResult<()> {
    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .without_time()
        .with_target(false);

    let result = if std::env::var_os("RUST_LOG").is_some() {
        subscriber_builder
            .with_env_filter(EnvFilter::from_default_env())
            .try_init()
    } else {
        subscriber_builder.try_init()
    };
    result.map_err(|e| PlanarError::General(format!("failed to install logger: {e}")))?;

    tracing::debug!(%level, "logger initialised");
    Ok(())
}
