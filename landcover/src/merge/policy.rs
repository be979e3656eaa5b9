//! Merge thresholds.

use serde::Serialize;

/// Minimum polygon area kept after merging, in square tile pixels.
pub const DEFAULT_MIN_AREA: f64 = 4.0;
/// Minimum hole area kept after merging, in square tile pixels.
pub const DEFAULT_MIN_HOLE_AREA: f64 = 4.0;
/// Distance under which same-attribute polygons are grouped, in tile pixels.
pub const DEFAULT_MIN_DIST: f64 = 1.0;
/// Buffer applied around each polygon before union and removed after.
pub const DEFAULT_BUFFER: f64 = 1.0;

/// Thresholds used when coalescing a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MergePolicy {
    pub min_area: f64,
    pub min_hole_area: f64,
    pub min_dist: f64,
    pub buffer: f64,
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self::from_area(DEFAULT_MIN_AREA)
    }
}

impl MergePolicy {
    /// Policy where `area` bounds both polygons and holes, with unit grouping
    /// distance and buffer.
    pub fn from_area(area: f64) -> Self {
        Self {
            min_area: area,
            min_hole_area: area,
            min_dist: DEFAULT_MIN_DIST,
            buffer: DEFAULT_BUFFER,
        }
    }

    pub fn with_min_dist(mut self, min_dist: f64) -> Self {
        self.min_dist = min_dist;
        self
    }

    pub fn with_buffer(mut self, buffer: f64) -> Self {
        self.buffer = buffer;
        self
    }
}
