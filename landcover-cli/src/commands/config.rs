//! Configuration management CLI commands.
//!
//! Provides `config init`, `config show` and `config path`.

use clap::Subcommand;
use landcover::config::{config_file_path, ConfigFile};
use std::path::Path;

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a config file with default settings if none exists
    Init,

    /// Print the effective configuration
    Show,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands, config_path: Option<&Path>) -> Result<(), CliError> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config_file_path);

    match command {
        ConfigCommands::Init => run_init(&path),
        ConfigCommands::Show => run_show(&path),
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run_init(path: &Path) -> Result<(), CliError> {
    if ConfigFile::ensure_exists(path)? {
        println!("Created {}", path.display());
    } else {
        println!("Config file already exists: {}", path.display());
    }
    Ok(())
}

fn run_show(path: &Path) -> Result<(), CliError> {
    let config = ConfigFile::load_from(path)?;
    let source = if path.exists() {
        path.display().to_string()
    } else {
        "defaults".to_string()
    };

    println!("; effective configuration ({})", source);
    print!("{}", config);
    Ok(())
}
