//! Landcover - global land-cover polygons for vector tiles
//!
//! This library is the map profile a tiling engine calls into while building
//! the global land-cover tileset. It classifies source archives into
//! land-cover classes and zoom bands, emits one tagged polygon feature per
//! source geometry, and coalesces same-class polygons per (layer, zoom).
//!
//! # High-Level API
//!
//! ```
//! use landcover::feature::{FeatureCollector, SourceFeature};
//! use landcover::profile::{GlobalLandcoverProfile, Profile};
//! use geo::polygon;
//!
//! let profile = GlobalLandcoverProfile::new();
//! let mut sink = FeatureCollector::new();
//!
//! let square = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)];
//! profile.process_feature(&SourceFeature::new("80-0", square), &mut sink)?;
//!
//! assert_eq!(sink.features()[0].class(), "water");
//! # Ok::<(), landcover::profile::ProfileError>(())
//! ```

pub mod classify;
pub mod config;
pub mod coord;
pub mod feature;
pub mod logging;
pub mod merge;
pub mod pipeline;
pub mod profile;
pub mod sources;

/// Version of the landcover library and CLI.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
