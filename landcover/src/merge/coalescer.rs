//! Batch-level coalescing policy.

use super::{merge_nearby_polygons, MergePolicy};
use crate::feature::{GeometryError, PolygonFeature, LAYER_NAME};
use tracing::{debug, warn};

/// Coalesces the polygon features of one (layer, zoom) batch.
///
/// Only the configured layer is merged; batches for any other layer pass
/// through untouched.
#[derive(Debug, Clone)]
pub struct LayerCoalescer {
    layer: String,
    policy: MergePolicy,
}

impl Default for LayerCoalescer {
    fn default() -> Self {
        Self::new(LAYER_NAME, MergePolicy::default())
    }
}

impl LayerCoalescer {
    pub fn new(layer: impl Into<String>, policy: MergePolicy) -> Self {
        Self {
            layer: layer.into(),
            policy,
        }
    }

    pub fn layer(&self) -> &str {
        &self.layer
    }

    pub fn policy(&self) -> &MergePolicy {
        &self.policy
    }

    /// Merge a batch, surfacing geometry failures to the caller.
    pub fn try_coalesce(
        &self,
        layer: &str,
        zoom: u8,
        items: Vec<PolygonFeature>,
    ) -> Result<Vec<PolygonFeature>, GeometryError> {
        if layer != self.layer {
            return Ok(items);
        }

        let input = items.len();
        let merged = merge_nearby_polygons(items, &self.policy)?;
        debug!(
            layer,
            zoom,
            input,
            output = merged.len(),
            "Coalesced layer batch"
        );
        Ok(merged)
    }

    /// Merge a batch, returning `None` when the merge fails.
    ///
    /// A failure drops every feature of the batch; no partially merged
    /// output is ever returned.
    pub fn coalesce(
        &self,
        layer: &str,
        zoom: u8,
        items: Vec<PolygonFeature>,
    ) -> Option<Vec<PolygonFeature>> {
        let input = items.len();
        match self.try_coalesce(layer, zoom, items) {
            Ok(merged) => Some(merged),
            Err(e) => {
                warn!(
                    layer,
                    zoom,
                    dropped = input,
                    error = %e,
                    "Polygon merge failed, dropping batch"
                );
                None
            }
        }
    }
}
