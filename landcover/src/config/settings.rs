//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Source archive settings
    pub sources: SourcesSettings,
    /// Output tileset settings
    pub output: OutputSettings,
    /// Classification settings
    pub profile: ProfileSettings,
    /// Polygon merge thresholds
    pub merge: MergeSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Where source archives are read from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcesSettings {
    /// Directory holding `<category>-<zoom>.zip` archives
    pub archive_dir: PathBuf,
    /// Coordinate reference system of the archives
    pub projection: String,
}

/// Output tileset.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    /// Path of the tile archive
    pub path: PathBuf,
    /// Replace an existing archive at `path`
    pub overwrite: bool,
}

/// Classification behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSettings {
    /// Fail on unknown zoom codes instead of using the [0, 3] band
    pub strict_zoom: bool,
}

/// Merge thresholds, in tile pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeSettings {
    pub min_area: f64,
    pub min_hole_area: f64,
    pub min_dist: f64,
    pub buffer: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
