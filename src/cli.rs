//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use micro_store_tools::output::OutputConfig;

use crate::commands;

/// Micro-Store Tools - Manage the micro-store microservice workspace
#[derive(Parser, Debug)]
#[command(name = "micro-store")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone or update every service listed in the manifest
    Pull(commands::pull::PullArgs),

    /// Install dependencies, generate clients and build each service
    Prepare(commands::prepare::PrepareArgs),

    /// Rebuild the shared library and reinstall it into its dependents
    UpdateShared(commands::update_shared::UpdateSharedArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .init();

        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Pull(args) => commands::pull::execute(args, &output),
            Commands::Prepare(args) => commands::prepare::execute(args, &output),
            Commands::UpdateShared(args) => commands::update_shared::execute(args, &output),
        }
    }
}
