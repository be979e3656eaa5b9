//! Polygon tile features and the emitter that produces them.
//!
//! # Architecture
//!
//! ```text
//! SourceFeature (geometry + "<cat>-<zoom>")
//!        │
//!        ▼
//! ┌──────────────────────────────┐
//! │        FeatureEmitter        │  classify() + zoom_band()
//! │  validate geometry, tag it   │
//! └──────────────────────────────┘
//!        │ PolygonFeature (layer "globallandcover", class, band, tolerance 0.5)
//!        ▼
//!   dyn FeatureSink  (owned by the tiling engine)
//! ```

mod emitter;
mod error;
mod geometry;
mod sink;
mod types;

pub use emitter::{EmitError, FeatureEmitter};
pub use error::GeometryError;
pub use geometry::{to_polygonal, validate_polygonal};
pub use sink::{FeatureCollector, FeatureSink};
pub use types::{Attributes, PolygonFeature, SourceFeature, ATTR_CLASS, LAYER_NAME, PIXEL_TOLERANCE};
