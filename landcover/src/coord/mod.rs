//! Web Mercator projection into world-pixel space.
//!
//! Source archives are in EPSG:4326. Merge thresholds are expressed in tile
//! pixels, so geometry is projected to world-pixel coordinates (256 px tiles,
//! origin at the north-west corner) before a zoom batch is coalesced.

mod types;

pub use types::{CoordError, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON, TILE_SIZE};

use crate::classify::MAX_ZOOM;
use geo::{Coord, MapCoords, MultiPolygon};
use std::f64::consts::PI;

/// Width of the whole world in pixels at `zoom`.
#[inline]
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * 2.0_f64.powi(zoom as i32)
}

/// Projects a lon/lat position to world-pixel coordinates.
///
/// Latitude is clamped to the Web Mercator range so polar input stays finite.
#[inline]
pub fn lon_lat_to_world_pixel(lon: f64, lat: f64, zoom: u8) -> Coord<f64> {
    let size = world_size(zoom);
    let lat = lat.clamp(MIN_LAT, MAX_LAT);

    let x = (lon + 180.0) / 360.0 * size;
    let lat_rad = lat * PI / 180.0;
    let y = (1.0 - lat_rad.tan().asinh() / PI) / 2.0 * size;

    Coord { x, y }
}

/// Projects a lon/lat multipolygon to world pixels at `zoom`.
///
/// # Errors
///
/// Returns [`CoordError::InvalidZoom`] above the maximum band zoom.
pub fn project_to_world_pixels(
    geometry: &MultiPolygon<f64>,
    zoom: u8,
) -> Result<MultiPolygon<f64>, CoordError> {
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }
    Ok(geometry.map_coords(|c| lon_lat_to_world_pixel(c.x, c.y, zoom)))
}
