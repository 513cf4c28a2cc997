mod cli;
mod commands;

use std::process::ExitCode;

use tint_common::ConfigError;
use tint_config::TintConfig;
use tracing_subscriber::EnvFilter;

fn load_config(args: &cli::Args) -> Result<TintConfig, ConfigError> {
    match &args.config {
        Some(path) => tint_config::load_config_from(path),
        None => tint_config::load_config(),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config carries the log level, so it is read before logging starts and
    // any failure is reported once the subscriber is up.
    let loaded = load_config(&args);
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config_level.to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap()),
            ),
        )
        .init();

    tracing::debug!("tint v{} starting", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = match loaded {
        Ok(config) => config,
        // a missing explicit file is fine to create, anything else stays untouched
        Err(ConfigError::FileNotFound(_)) if args.command.writes_config() => TintConfig::default(),
        Err(e) if args.command.writes_config() => {
            tracing::error!("Refusing to overwrite unreadable config: {e}");
            eprintln!("tint: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            TintConfig::default()
        }
    };

    match commands::run(&args.command, &config, args.config.as_deref(), args.json) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("tint: {e}");
            ExitCode::FAILURE
        }
    }
}
