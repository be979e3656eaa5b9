//! Feature emitter.

use super::{
    to_polygonal, validate_polygonal, FeatureSink, GeometryError, PolygonFeature, ATTR_CLASS,
    LAYER_NAME, PIXEL_TOLERANCE,
};
use crate::classify::{classify, zoom_band, zoom_band_strict, ClassifyError, ZoomBand};
use geo::Geometry;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that prevent a feature from being emitted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmitError {
    /// Geometry is empty, degenerate or not polygonal
    #[error("Invalid geometry: {0}")]
    Geometry(#[from] GeometryError),

    /// Zoom code rejected in strict mode
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

/// Builds tagged polygon features from classified source geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureEmitter {
    strict_zoom: bool,
}

impl FeatureEmitter {
    /// Emitter that falls back to the default band for unknown zoom codes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject unknown zoom codes instead of falling back to the default band.
    pub fn with_strict_zoom(mut self, strict: bool) -> Self {
        self.strict_zoom = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict_zoom
    }

    /// Resolve the zoom band for a code according to the emitter's mode.
    pub fn resolve_band(&self, zoom_code: &str) -> Result<ZoomBand, ClassifyError> {
        if self.strict_zoom {
            zoom_band_strict(zoom_code)
        } else {
            Ok(zoom_band(zoom_code))
        }
    }

    /// Build the polygon feature for one source geometry.
    ///
    /// Unknown category codes produce a feature with an empty `class`.
    pub fn emit(
        &self,
        geometry: &Geometry<f64>,
        category_code: &str,
        zoom_code: &str,
    ) -> Result<PolygonFeature, EmitError> {
        let polygons = to_polygonal(geometry)?;
        validate_polygonal(&polygons)?;

        let class = classify(category_code);
        if class.is_none() {
            debug!(category_code, "Unrecognized category code, emitting empty class");
        }
        let band = self.resolve_band(zoom_code)?;

        let feature = PolygonFeature::new(LAYER_NAME, polygons, band)
            .with_attr(ATTR_CLASS, class.map(|c| c.as_str()).unwrap_or(""))
            .with_pixel_tolerance(PIXEL_TOLERANCE);

        trace!(
            class = feature.class(),
            min_zoom = band.min_zoom(),
            max_zoom = band.max_zoom(),
            "Emitted polygon feature"
        );
        Ok(feature)
    }

    /// Emit a feature and hand it to `sink`.
    pub fn emit_into(
        &self,
        sink: &mut dyn FeatureSink,
        geometry: &Geometry<f64>,
        category_code: &str,
        zoom_code: &str,
    ) -> Result<(), EmitError> {
        let feature = self.emit(geometry, category_code, zoom_code)?;
        sink.accept(feature);
        Ok(())
    }
}
