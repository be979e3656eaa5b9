//! Default values and the `ConfigFile::default()` implementation.

use std::path::PathBuf;

use super::settings::*;
use crate::merge::{DEFAULT_BUFFER, DEFAULT_MIN_AREA, DEFAULT_MIN_DIST, DEFAULT_MIN_HOLE_AREA};
use crate::sources::{REFERENCE_ARCHIVE_DIR, REFERENCE_PROJECTION};

/// Reference output archive.
pub const DEFAULT_OUTPUT_PATH: &str = "data/esa-worldcover-polygons.pmtiles";

/// Default log file.
pub const DEFAULT_LOG_FILE: &str = "logs/landcover.log";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            sources: SourcesSettings {
                archive_dir: PathBuf::from(REFERENCE_ARCHIVE_DIR),
                projection: REFERENCE_PROJECTION.to_string(),
            },
            output: OutputSettings {
                path: PathBuf::from(DEFAULT_OUTPUT_PATH),
                overwrite: true,
            },
            profile: ProfileSettings { strict_zoom: false },
            merge: MergeSettings {
                min_area: DEFAULT_MIN_AREA,
                min_hole_area: DEFAULT_MIN_HOLE_AREA,
                min_dist: DEFAULT_MIN_DIST,
                buffer: DEFAULT_BUFFER,
            },
            logging: LoggingSettings {
                file: PathBuf::from(DEFAULT_LOG_FILE),
            },
        }
    }
}
