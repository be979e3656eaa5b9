//! CLI runner for common setup.
//!
//! Loads the configuration and initializes logging once for every command
//! that works with the profile.

use crate::error::CliError;
use landcover::config::{config_file_path, ConfigFile};
use landcover::logging::{default_log_file, init_logging, LoggingGuard};
use landcover::profile::GlobalLandcoverProfile;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    config: ConfigFile,
    config_path: PathBuf,
}

impl CliRunner {
    /// Load config (defaults if the file is absent) and initialize logging.
    ///
    /// Stdout logging is only enabled for `--debug` on an interactive
    /// terminal so piped output such as `--json` stays clean.
    pub fn new(config_path: Option<&Path>, debug_mode: bool) -> Result<Self, CliError> {
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(config_file_path);
        let config = ConfigFile::load_from(&config_path)?;

        let log_path = &config.logging.file;
        let log_dir = log_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let log_file = log_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| default_log_file().to_string());

        let stdout_enabled = debug_mode && atty::is(atty::Stream::Stdout);

        let logging_guard = init_logging(log_dir, &log_file, stdout_enabled, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
            config_path,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Profile built from the loaded configuration.
    pub fn profile(&self) -> GlobalLandcoverProfile {
        self.config.build_profile()
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("Landcover v{}", landcover::VERSION);
        info!(
            config = %self.config_path.display(),
            "Landcover CLI: {} command", command
        );
    }
}
