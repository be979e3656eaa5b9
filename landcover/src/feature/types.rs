//! Feature data types.

use crate::classify::ZoomBand;
use geo::{Geometry, MultiPolygon};
use std::collections::BTreeMap;

/// Name of the single output layer.
pub const LAYER_NAME: &str = "globallandcover";

/// Attribute key carrying the land-cover class.
pub const ATTR_CLASS: &str = "class";

/// Maximum simplification deviation, in tile pixels at the target zoom.
pub const PIXEL_TOLERANCE: f64 = 0.5;

/// Feature attributes, ordered so that equal maps compare and hash equally.
pub type Attributes = BTreeMap<String, String>;

/// A decoded feature as read from a source archive.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFeature {
    /// Identifier of the archive the feature came from (`"<cat>-<zoom>"`)
    pub source: String,
    /// Geometry in source coordinates (lon/lat for the reference archives)
    pub geometry: Geometry<f64>,
}

impl SourceFeature {
    pub fn new(source: impl Into<String>, geometry: impl Into<Geometry<f64>>) -> Self {
        Self {
            source: source.into(),
            geometry: geometry.into(),
        }
    }
}

/// One polygon output feature.
///
/// Features are immutable once built: merging produces new features through
/// [`PolygonFeature::with_geometry`] and the inputs are discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonFeature {
    layer: String,
    geometry: MultiPolygon<f64>,
    attributes: Attributes,
    zoom_band: ZoomBand,
    pixel_tolerance: f64,
}

impl PolygonFeature {
    /// Create a feature with no attributes and the default pixel tolerance.
    pub fn new(layer: impl Into<String>, geometry: MultiPolygon<f64>, zoom_band: ZoomBand) -> Self {
        Self {
            layer: layer.into(),
            geometry,
            attributes: Attributes::new(),
            zoom_band,
            pixel_tolerance: PIXEL_TOLERANCE,
        }
    }

    /// Set an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set the simplification tolerance in tile pixels.
    pub fn with_pixel_tolerance(mut self, tolerance: f64) -> Self {
        self.pixel_tolerance = tolerance;
        self
    }

    /// Copy this feature's layer, attributes and band onto a new geometry.
    pub fn with_geometry(&self, geometry: MultiPolygon<f64>) -> Self {
        Self {
            layer: self.layer.clone(),
            geometry,
            attributes: self.attributes.clone(),
            zoom_band: self.zoom_band,
            pixel_tolerance: self.pixel_tolerance,
        }
    }

    pub fn layer(&self) -> &str {
        &self.layer
    }

    pub fn geometry(&self) -> &MultiPolygon<f64> {
        &self.geometry
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// The `class` attribute; empty when the category was not recognized.
    pub fn class(&self) -> &str {
        self.attr(ATTR_CLASS).unwrap_or("")
    }

    pub fn zoom_band(&self) -> ZoomBand {
        self.zoom_band
    }

    pub fn min_zoom(&self) -> u8 {
        self.zoom_band.min_zoom()
    }

    pub fn max_zoom(&self) -> u8 {
        self.zoom_band.max_zoom()
    }

    pub fn pixel_tolerance(&self) -> f64 {
        self.pixel_tolerance
    }
}
