//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for pir-direction
#[derive(Parser, Debug)]
#[command(name = "pir-direction")]
#[command(author, version, about = "PIR direction phase - dialogue settings and reasoning audit log")]
#[command(long_about = r#"
pir-direction inspects the direction phase of a threat intelligence workflow:
the analyst dialogue that gathers requirements, and the audit log written each
time a Priority Intelligence Requirement (PIR) is generated and reviewed.

Configuration files are loaded from (in priority order):
1. PIR_* environment variables (e.g. PIR_DIALOGUE__MAX_QUESTIONS=10)
2. --config <path>             Explicit config file
3. ./pir-direction.toml        Project-level config
4. ~/.config/pir-direction/config.toml   Global config

Example:
  pir-direction config --sources
  pir-direction log summary
  pir-direction log show --session 3f2c9a1e-... --json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Emit JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the effective configuration as TOML
    Config {
        /// List configuration file locations instead
        #[arg(long)]
        sources: bool,
    },

    /// Inspect the PIR reasoning log
    Log {
        #[command(subcommand)]
        command: LogCommand,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum LogCommand {
    /// One line per orchestration session
    Summary {
        /// Log file (defaults to reasoning_log.path)
        #[arg(long, value_name = "PATH")]
        path: Option<PathBuf>,
    },

    /// Every attempt of one session, PIR text included
    Show {
        /// Session id as printed by `log summary`
        #[arg(long, value_name = "ID")]
        session: String,

        /// Log file (defaults to reasoning_log.path)
        #[arg(long, value_name = "PATH")]
        path: Option<PathBuf>,
    },
}

impl LogCommand {
    /// Explicit log path, if one was given
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            LogCommand::Summary { path } | LogCommand::Show { path, .. } => path.as_ref(),
        }
    }
}
