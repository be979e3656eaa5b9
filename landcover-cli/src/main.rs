//! Landcover CLI - Command-line interface
//!
//! Inspect how the global land-cover profile classifies source archives,
//! check the source plan, and manage the configuration file.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use commands::config::ConfigCommands;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "landcover")]
#[command(version = landcover::VERSION)]
#[command(about = "Global land-cover tile profile", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ~/.landcover/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the class and zoom band for source identifiers (e.g. 10-0)
    Classify {
        /// Source identifiers in the form <category>-<zoom>
        #[arg(required = true)]
        ids: Vec<String>,

        /// Reject unknown zoom codes instead of using zooms 0-3
        #[arg(long)]
        strict: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the source archives the profile reads
    Sources {
        /// Directory holding the archives (overrides config)
        #[arg(long)]
        archive_dir: Option<PathBuf>,

        /// Report missing archives and fail if any are absent
        #[arg(long)]
        check: bool,
    },

    /// Show profile metadata and merge settings
    Info,

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Classify { ids, strict, json } => start_runner(config, cli.debug, "classify")
            .and_then(|r| commands::classify::run(&r, &ids, strict, json)),
        Commands::Sources { archive_dir, check } => start_runner(config, cli.debug, "sources")
            .and_then(|r| commands::sources::run(&r, archive_dir.as_deref(), check)),
        Commands::Info => start_runner(config, cli.debug, "info").and_then(|r| commands::info::run(&r)),
        Commands::Config(command) => commands::config::run(command, config),
    };

    if let Err(e) = result {
        e.exit();
    }
}

/// Load config and start logging for commands that use the profile.
fn start_runner(config: Option<&Path>, debug: bool, command: &str) -> Result<CliRunner, CliError> {
    let runner = CliRunner::new(config, debug)?;
    runner.log_startup(command);
    Ok(runner)
}
