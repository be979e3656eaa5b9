//! Feature collection sinks.

use super::PolygonFeature;

/// Receiver for features emitted while processing one source feature.
///
/// The tiling engine owns the sink; emitters hand features over and keep no
/// reference to them.
pub trait FeatureSink {
    fn accept(&mut self, feature: PolygonFeature);
}

impl FeatureSink for Vec<PolygonFeature> {
    fn accept(&mut self, feature: PolygonFeature) {
        self.push(feature);
    }
}

/// Sink that buffers emitted features in memory.
#[derive(Debug, Default)]
pub struct FeatureCollector {
    features: Vec<PolygonFeature>,
}

impl FeatureCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn features(&self) -> &[PolygonFeature] {
        &self.features
    }

    pub fn into_features(self) -> Vec<PolygonFeature> {
        self.features
    }
}

impl FeatureSink for FeatureCollector {
    fn accept(&mut self, feature: PolygonFeature) {
        self.features.push(feature);
    }
}
