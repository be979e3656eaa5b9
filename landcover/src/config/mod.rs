//! Configuration file handling.
//!
//! The configuration lives in an INI file (`~/.landcover/config.ini` unless a
//! path is given). Every key is optional; missing keys keep the reference
//! defaults, so an empty file reproduces the reference tileset.
//!
//! # Example
//!
//! ```
//! use landcover::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.merge.min_area, 4.0);
//! assert!(!config.profile.strict_zoom);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    ConfigFile, LoggingSettings, MergeSettings, OutputSettings, ProfileSettings, SourcesSettings,
};
