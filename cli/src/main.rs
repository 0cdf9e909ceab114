//! CLI entrypoint for pir-direction
//!
//! This is the main binary that wires together all layers: it loads the
//! layered configuration and serves the inspection commands.

use anyhow::{Context, Result};
use clap::Parser;
use pir_domain::{SessionSummary, session_attempts};
use pir_infrastructure::{ConfigLoader, FileConfig, read_reasoning_log};
use pir_presentation::{Cli, Command, ConsoleFormatter, JsonFormatter, LogCommand, OutputFormatter};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("Starting pir-direction");

    let config = load_config(&cli)?;

    match &cli.command {
        Command::Config { sources: true } => {
            let sources = ConfigLoader::config_sources(cli.config.as_deref());
            print!("{}", ConsoleFormatter::format_config_sources(&sources));
        }
        Command::Config { sources: false } => {
            let rendered =
                toml::to_string_pretty(&config).context("Failed to render configuration")?;
            print!("{}", rendered);
        }
        Command::Log { command } => {
            let formatter: Box<dyn OutputFormatter> = if cli.json {
                Box::new(JsonFormatter)
            } else {
                Box::new(ConsoleFormatter)
            };
            let path = command
                .path()
                .cloned()
                .unwrap_or_else(|| config.reasoning_log.resolved_path());
            run_log_command(command, &path, formatter.as_ref())?;
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        debug!("Configuration files disabled, using defaults");
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn run_log_command(
    command: &LogCommand,
    path: &Path,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    debug!("Reading reasoning log {}", path.display());
    let entries = read_reasoning_log(path)?;
    info!("Loaded {} reasoning log entries", entries.len());

    let output = match command {
        LogCommand::Summary { .. } => {
            formatter.format_sessions(&SessionSummary::from_entries(&entries))
        }
        LogCommand::Show { session, .. } => {
            formatter.format_attempts(session, &session_attempts(&entries, session))
        }
    };
    println!("{}", output);

    Ok(())
}
