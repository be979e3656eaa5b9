//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`. The same text
//! is the `Display` form of a `ConfigFile`.

use std::fmt;
use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[sources]
; Directory holding one archive per source, named <category>-<zoom>.zip
; (12 categories x 9 zoom codes = 108 archives)
archive_dir = {}
; Coordinate reference system of the archives
projection = {}

[output]
; Tile archive to write
path = {}
; Replace an existing archive (true/false)
overwrite = {}

[profile]
; When true, zoom codes other than 0-8 are rejected instead of
; being shown at zooms 0-3
strict_zoom = {}

[merge]
; Thresholds for coalescing same-class polygons, in tile pixels
; Pieces with area at or below min_area are dropped
min_area = {}
; Holes with area at or below min_hole_area are filled
min_hole_area = {}
; Polygons closer than min_dist are merged together
min_dist = {}
; Grow-then-shrink distance used to close gaps between merged polygons
buffer = {}

[logging]
; Log file (truncated at the start of every session)
file = {}
"#,
        path_to_string(&config.sources.archive_dir),
        config.sources.projection,
        path_to_string(&config.output.path),
        config.output.overwrite,
        config.profile.strict_zoom,
        config.merge.min_area,
        config.merge.min_hole_area,
        config.merge.min_dist,
        config.merge.buffer,
        path_to_string(&config.logging.file),
    )
}

impl fmt::Display for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_config_string(self))
    }
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
