//! The global land-cover profile.

use super::{Profile, ProfileError, ProfileMetadata};
use crate::classify::{classify, LandCoverClass, SourcePartitionId, ZoomBand};
use crate::feature::{FeatureEmitter, FeatureSink, GeometryError, PolygonFeature, SourceFeature};
use crate::merge::{LayerCoalescer, MergePolicy};
use serde::{Serialize, Serializer};

const NAME: &str = "Global Landcover";
const DESCRIPTION: &str = "Land cover as polygons for the whole world, the following coverages \
are classified: tree, shrub, grass, crop, urban, barren, ice, water, herbaceous, mangroves, \
moss and land";
const ATTRIBUTION: &str = r#"<a href="https://worldcover2020.esa.int">©ESA WorldCover</a>"#;

/// Class and band resolved for one source identifier.
///
/// Serializes an unknown class as `""`, the value the emitted feature carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub source: String,
    #[serde(serialize_with = "serialize_class")]
    pub class: Option<LandCoverClass>,
    pub zoom_band: ZoomBand,
}

impl Classification {
    /// The `class` attribute value, empty for unknown categories.
    pub fn class_attr(&self) -> &'static str {
        self.class.map(|c| c.as_str()).unwrap_or("")
    }
}

fn serialize_class<S: Serializer>(
    class: &Option<LandCoverClass>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(class.map(|c| c.as_str()).unwrap_or(""))
}

/// Land-cover profile: one polygon layer, classified by source archive.
#[derive(Debug, Clone, Default)]
pub struct GlobalLandcoverProfile {
    emitter: FeatureEmitter,
    coalescer: LayerCoalescer,
}

impl GlobalLandcoverProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on unknown zoom codes instead of using the default band.
    pub fn with_strict_zoom(mut self, strict: bool) -> Self {
        self.emitter = self.emitter.with_strict_zoom(strict);
        self
    }

    /// Replace the merge thresholds.
    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.coalescer = LayerCoalescer::new(self.coalescer.layer().to_string(), policy);
        self
    }

    pub fn emitter(&self) -> &FeatureEmitter {
        &self.emitter
    }

    pub fn coalescer(&self) -> &LayerCoalescer {
        &self.coalescer
    }

    /// Resolve class and band for a raw source identifier.
    pub fn classify_source(&self, raw: &str) -> Result<Classification, ProfileError> {
        let id = SourcePartitionId::parse(raw)?;
        let zoom_band = self
            .emitter
            .resolve_band(id.zoom_code())
            .map_err(crate::feature::EmitError::from)?;
        Ok(Classification {
            source: id.to_string(),
            class: classify(id.category_code()),
            zoom_band,
        })
    }
}

impl Profile for GlobalLandcoverProfile {
    fn process_feature(
        &self,
        source: &SourceFeature,
        sink: &mut dyn FeatureSink,
    ) -> Result<(), ProfileError> {
        let id = SourcePartitionId::parse(&source.source)?;
        self.emitter
            .emit_into(sink, &source.geometry, id.category_code(), id.zoom_code())?;
        Ok(())
    }

    fn try_post_process_layer(
        &self,
        layer: &str,
        zoom: u8,
        items: Vec<PolygonFeature>,
    ) -> Result<Vec<PolygonFeature>, GeometryError> {
        self.coalescer.try_coalesce(layer, zoom, items)
    }

    fn post_process_layer(
        &self,
        layer: &str,
        zoom: u8,
        items: Vec<PolygonFeature>,
    ) -> Option<Vec<PolygonFeature>> {
        self.coalescer.coalesce(layer, zoom, items)
    }

    fn metadata(&self) -> ProfileMetadata {
        ProfileMetadata {
            name: NAME.to_string(),
            description: DESCRIPTION.to_string(),
            attribution: ATTRIBUTION.to_string(),
            version: crate::VERSION.to_string(),
        }
    }
}
