//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use landcover::config::ConfigFileError;
use landcover::profile::ProfileError;
use std::fmt;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigFileError),
    /// A source identifier could not be classified
    Classify { id: String, error: ProfileError },
    /// Failed to render JSON output
    Json(serde_json::Error),
    /// Source archives are missing from the archive directory
    MissingSources { missing: usize, total: usize },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Classify { .. } => {
                eprintln!();
                eprintln!("Source identifiers look like <category>-<zoom>, for example 10-0.");
                eprintln!("Known zoom codes are 0-8; use --strict to reject others.");
            }
            CliError::MissingSources { .. } => {
                eprintln!();
                eprintln!("Set [sources] archive_dir in the config file or pass --archive-dir.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Classify { id, error } => {
                write!(f, "Cannot classify '{}': {}", id, error)
            }
            CliError::Json(e) => write!(f, "Failed to render JSON: {}", e),
            CliError::MissingSources { missing, total } => {
                write!(f, "{} of {} source archives are missing", missing, total)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Classify { error, .. } => Some(error),
            CliError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}
