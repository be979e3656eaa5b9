//! Per-layer polygon coalescing.
//!
//! After features are cut into tiles, the engine hands every (layer, zoom)
//! batch to [`LayerCoalescer`]. Polygons sharing identical attributes that sit
//! within [`MergePolicy::min_dist`] of each other are unioned; slivers and
//! small holes are removed.
//!
//! ```text
//! batch ──► group by (layer, attrs) ──► group by proximity ──► buffer ∪ unbuffer
//!                                                                   │
//!                         one feature per attribute group ◄── drop < min_area
//! ```
//!
//! Merge failures are all-or-nothing: if any polygon in the batch cannot be
//! processed the whole batch is dropped.

mod coalescer;
mod policy;
mod polygons;

pub use coalescer::LayerCoalescer;
pub use policy::{
    MergePolicy, DEFAULT_BUFFER, DEFAULT_MIN_AREA, DEFAULT_MIN_DIST, DEFAULT_MIN_HOLE_AREA,
};
pub use polygons::merge_nearby_polygons;
