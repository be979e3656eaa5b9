//! Coordinate constants and errors.

use crate::classify::MAX_ZOOM;
use thiserror::Error;

/// Web Mercator valid latitude range
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Edge length of one tile in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Errors that can occur during projection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Zoom level is above the highest zoom a band may reach
    #[error("Invalid zoom level: {0} (must be at most {MAX_ZOOM})")]
    InvalidZoom(u8),
}
