//! dsreg - dataset builder registry
//!
//! Entry point for the dsreg CLI.

use std::path::Path;

use clap::Parser;
use tracing::{debug, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use dsreg_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};
use dsreg_core::{init_global, RegistryOptions};

mod catalog;
mod cli;
mod cmd_registry;

use cli::{Cli, Commands, OutputFormat, TableFilter};

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Console output goes to stderr so `--format json` stays parseable.
    let console = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .boxed();

    let file = match &logging.log_dir {
        Some(dir) => {
            let log_dir = ConfigLoader::expand_path(dir);
            std::fs::create_dir_all(&log_dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("dsreg")
                .filename_suffix("log")
                .max_log_files(logging.max_log_files)
                .build(Path::new(&log_dir))?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Keep the worker alive for the program duration.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file)
        .init();

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let config = ConfigLoader::load_or_default(path)?;
    let warnings = ConfigValidator::validate(&config).into_result()?;
    init_tracing(&config.logging)?;

    for warning in warnings {
        warn!(field = %warning.path, "{}", warning.message);
    }
    debug!(?config, "Loaded configuration");
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let options = RegistryOptions::default().with_overwrite(config.registry.allow_overwrite);

    match cli.command {
        Some(Commands::Check) => cmd_registry::registry_check(options),
        Some(Commands::List { table, format }) => {
            let registry = init_global(options)?;
            cmd_registry::registry_list(registry, table, format)
        }
        Some(Commands::Info { name, format }) => {
            let registry = init_global(options)?;
            cmd_registry::registry_info(registry, &name, format)
        }
        None => {
            let registry = init_global(options)?;
            cmd_registry::registry_list(registry, TableFilter::Concrete, OutputFormat::Table)
        }
    }
}
