//! CLI entry point for planar.
//!
//! Runs the sample report by default; `init` and `config` manage settings.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use planar::io::{ExitCode, OutputFormat, OutputManager};
use planar::{PlanarError, PlanarResult, SampleReport, Settings};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Sample sum and distance report
#[derive(Parser)]
#[command(
    name = "planar",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print a sample sum and a point-to-point distance",
    after_help = "Examples:\n  planar\n  planar run --precision 6\n  planar --json\n  PLANAR_INPUTS__A=10 planar",
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Show detailed loading information
    #[arg(long, global = true)]
    info: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print the report (default)
    Run {
        /// Decimal places for the distance (overrides config)
        #[arg(short, long)]
        precision: Option<usize>,
    },

    /// Set up .planar directory with default configuration
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Display active settings
    Config,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let mut output = OutputManager::new(OutputFormat::from_json_flag(cli.json));

    let code = match run(&cli, &mut output) {
        Ok(code) => code,
        Err(e) => output.error(&e).unwrap_or(ExitCode::GeneralError),
    };
    code.into()
}

fn run(cli: &Cli, output: &mut OutputManager) -> PlanarResult<ExitCode> {
    let (settings, fallback) = load_settings(cli)?;

    let level = if cli.info {
        LevelFilter::DEBUG
    } else {
        planar::logging::parse_level(&settings.logging.level)?
    };
    planar::logging::init(level)?;

    if let Some(e) = fallback {
        tracing::warn!("Configuration error: {e}. Using default configuration.");
    }

    match &cli.command {
        None => report(&settings, None, output),
        Some(Commands::Run { precision }) => report(&settings, *precision, output),
        Some(Commands::Init { force }) => {
            let path = Settings::init_config_file(*force)?;
            Ok(output.success(format!(
                "Created configuration file at: {}",
                path.display()
            ))?)
        }
        Some(Commands::Config) => output.settings(&settings),
    }
}

/// Load settings. An explicit `--config` must load cleanly; otherwise a broken
/// workspace config falls back to defaults and the error is handed back.
fn load_settings(cli: &Cli) -> PlanarResult<(Settings, Option<PlanarError>)> {
    if let Some(config_path) = &cli.config {
        let settings = Settings::load_from(config_path).map_err(|e| PlanarError::ConfigError {
            reason: format!("loading {}: {e}", config_path.display()),
        })?;
        settings.validate()?;
        return Ok((settings, None));
    }

    let loaded = Settings::load()
        .map_err(PlanarError::from)
        .and_then(|settings| settings.validate().map(|()| settings));
    Ok(match loaded {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    })
}

fn report(
    settings: &Settings,
    precision: Option<usize>,
    output: &mut OutputManager,
) -> PlanarResult<ExitCode> {
    let mut output_config = settings.output.clone();
    if precision.is_some() {
        output_config.precision = precision;
    }

    let report = SampleReport::compute(&settings.sample_inputs());
    tracing::info!(sum = report.sum, distance = report.distance, "report ready");
    Ok(output.report(&report, output_config.distance_style())?)
}
