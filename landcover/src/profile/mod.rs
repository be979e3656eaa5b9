//! Tile profiles.
//!
//! A profile is the set of callbacks a tiling engine needs from a map
//! definition: turn each source feature into output features, post-process
//! each (layer, zoom) batch, and describe the resulting tileset.

mod error;
mod landcover;
mod metadata;

pub use error::ProfileError;
pub use landcover::{Classification, GlobalLandcoverProfile};
pub use metadata::ProfileMetadata;

use crate::feature::{FeatureSink, GeometryError, PolygonFeature, SourceFeature};
use tracing::warn;

/// Callbacks invoked by the tiling engine.
///
/// Implementations hold no per-call state and may be shared across worker
/// threads.
pub trait Profile: Send + Sync {
    /// Emit zero or more output features for one source feature.
    fn process_feature(
        &self,
        source: &SourceFeature,
        sink: &mut dyn FeatureSink,
    ) -> Result<(), ProfileError>;

    /// Post-process the features of one (layer, zoom) batch.
    ///
    /// The default keeps the batch as-is.
    fn try_post_process_layer(
        &self,
        _layer: &str,
        _zoom: u8,
        items: Vec<PolygonFeature>,
    ) -> Result<Vec<PolygonFeature>, GeometryError> {
        Ok(items)
    }

    /// Post-process a batch, returning `None` to drop it from the tiles.
    fn post_process_layer(
        &self,
        layer: &str,
        zoom: u8,
        items: Vec<PolygonFeature>,
    ) -> Option<Vec<PolygonFeature>> {
        match self.try_post_process_layer(layer, zoom, items) {
            Ok(items) => Some(items),
            Err(e) => {
                warn!(layer, zoom, error = %e, "Post-processing failed, dropping batch");
                None
            }
        }
    }

    /// Tileset name, description and attribution.
    fn metadata(&self) -> ProfileMetadata;
}
