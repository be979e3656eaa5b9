//! Configuration file handling for ~/.landcover/config.ini.
//!
//! Loads and saves user configuration with reference defaults.
//! Settings structs live in [`super::settings`], constants in [`super::defaults`],
//! parsing in [`super::parser`], and serialization in [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::settings::ConfigFile;
use crate::merge::MergePolicy;
use crate::profile::GlobalLandcoverProfile;
use crate::sources::SourcePlan;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.landcover/config.ini).
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Write the default config to `path` unless a file is already there.
    ///
    /// Returns `true` if a file was written.
    pub fn ensure_exists(path: &Path) -> Result<bool, ConfigFileError> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Merge thresholds from the `[merge]` section.
    pub fn merge_policy(&self) -> MergePolicy {
        MergePolicy {
            min_area: self.merge.min_area,
            min_hole_area: self.merge.min_hole_area,
            min_dist: self.merge.min_dist,
            buffer: self.merge.buffer,
        }
    }

    /// Profile configured from the `[profile]` and `[merge]` sections.
    pub fn build_profile(&self) -> GlobalLandcoverProfile {
        GlobalLandcoverProfile::new()
            .with_strict_zoom(self.profile.strict_zoom)
            .with_merge_policy(self.merge_policy())
    }

    /// Source plan for the configured archive directory and projection.
    pub fn source_plan(&self) -> SourcePlan {
        SourcePlan::with_projection(&self.sources.archive_dir, &self.sources.projection)
    }
}

/// Get the path to the config directory (~/.landcover).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".landcover")
}

/// Get the path to the config file (~/.landcover/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_LOG_FILE, DEFAULT_OUTPUT_PATH};
    use crate::profile::Profile;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert_eq!(config.sources.archive_dir, PathBuf::from("../zips"));
        assert_eq!(config.sources.projection, "EPSG:4326");
        assert_eq!(config.output.path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert!(config.output.overwrite);
        assert!(!config.profile.strict_zoom);
        assert_eq!(config.merge_policy(), MergePolicy::default());
        assert_eq!(config.logging.file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.sources.archive_dir = PathBuf::from("/data/worldcover");
        config.profile.strict_zoom = true;
        config.merge.min_area = 8.5;
        config.output.overwrite = false;

        config.save_to(&config_path).unwrap();
        let reloaded = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_ensure_exists_only_writes_once() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        assert!(ConfigFile::ensure_exists(&config_path).unwrap());
        std::fs::write(&config_path, "[profile]\nstrict_zoom = true\n").unwrap();
        assert!(!ConfigFile::ensure_exists(&config_path).unwrap());

        let config = ConfigFile::load_from(&config_path).unwrap();
        assert!(config.profile.strict_zoom);
    }

    #[test]
    fn test_build_profile_uses_settings() {
        let mut config = ConfigFile::default();
        config.profile.strict_zoom = true;
        config.merge.buffer = 0.0;

        let profile = config.build_profile();

        assert!(profile.emitter().is_strict());
        assert_eq!(profile.coalescer().policy().buffer, 0.0);
        assert_eq!(profile.metadata().name, "Global Landcover");
    }

    #[test]
    fn test_source_plan_uses_settings() {
        let mut config = ConfigFile::default();
        config.sources.archive_dir = PathBuf::from("archives");

        let plan = config.source_plan();

        assert_eq!(plan.len(), 108);
        assert_eq!(
            plan.find("10-0").unwrap().path,
            PathBuf::from("archives/10-0.zip")
        );
    }

    #[test]
    fn test_config_file_path_ends_with_ini() {
        let path = config_file_path();
        assert!(path.ends_with(".landcover/config.ini"));
    }
}
