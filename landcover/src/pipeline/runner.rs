//! Parallel emission and per-batch post-processing.

use super::BatchStats;
use crate::coord::{project_to_world_pixels, CoordError};
use crate::feature::{PolygonFeature, SourceFeature};
use crate::profile::{Profile, ProfileError};
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Identifies one post-processing batch.
pub type BatchKey = (String, u8);

/// Result of emitting a set of source features.
#[derive(Debug, Default)]
pub struct EmitOutput {
    /// Emitted features, in source order
    pub features: Vec<PolygonFeature>,
    /// Index and error of every source feature that could not be emitted
    pub failures: Vec<(usize, ProfileError)>,
}

/// Result of post-processing every batch.
#[derive(Debug, Default)]
pub struct BatchOutput {
    /// Surviving batches; dropped batches are absent
    pub batches: BTreeMap<BatchKey, Vec<PolygonFeature>>,
    pub stats: BatchStats,
}

/// Drives a [`Profile`] the way the tiling engine does.
pub struct LayerBatchRunner<'a> {
    profile: &'a dyn Profile,
    project: bool,
}

impl<'a> LayerBatchRunner<'a> {
    /// Runner that projects lon/lat geometry to world pixels per zoom.
    pub fn new(profile: &'a dyn Profile) -> Self {
        Self {
            profile,
            project: true,
        }
    }

    /// Disable projection for geometry already in pixel space.
    pub fn with_projection(mut self, project: bool) -> Self {
        self.project = project;
        self
    }

    /// Run `process_feature` for every source in parallel.
    ///
    /// A failing source is recorded and skipped; the others still emit.
    pub fn emit_all(&self, sources: &[SourceFeature]) -> EmitOutput {
        let results: Vec<Result<Vec<PolygonFeature>, ProfileError>> = sources
            .par_iter()
            .map(|source| {
                let mut sink: Vec<PolygonFeature> = Vec::new();
                self.profile.process_feature(source, &mut sink)?;
                Ok(sink)
            })
            .collect();

        let mut output = EmitOutput::default();
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(features) => output.features.extend(features),
                Err(e) => {
                    warn!(
                        source = %sources[index].source,
                        error = %e,
                        "Skipping source feature"
                    );
                    output.failures.push((index, e));
                }
            }
        }
        output
    }

    /// Group features into (layer, zoom) batches for every zoom in their band.
    ///
    /// Features keep their input order within a batch.
    pub fn collect_batches(
        &self,
        features: &[PolygonFeature],
    ) -> Result<BTreeMap<BatchKey, Vec<PolygonFeature>>, CoordError> {
        let mut batches: BTreeMap<BatchKey, Vec<PolygonFeature>> = BTreeMap::new();

        for feature in features {
            for zoom in feature.zoom_band().zooms() {
                let placed = if self.project {
                    feature.with_geometry(project_to_world_pixels(feature.geometry(), zoom)?)
                } else {
                    feature.clone()
                };
                batches
                    .entry((feature.layer().to_string(), zoom))
                    .or_default()
                    .push(placed);
            }
        }

        Ok(batches)
    }

    /// Batch the features and post-process every batch in parallel.
    pub fn run(&self, features: &[PolygonFeature]) -> Result<BatchOutput, CoordError> {
        let batches = self.collect_batches(features)?;

        let processed: Vec<(BatchKey, usize, Option<Vec<PolygonFeature>>)> = batches
            .into_iter()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|((layer, zoom), items)| {
                let count = items.len();
                let out = self.profile.post_process_layer(&layer, zoom, items);
                ((layer, zoom), count, out)
            })
            .collect();

        let mut output = BatchOutput::default();
        for (key, count, result) in processed {
            output.stats.batches_run += 1;
            output.stats.features_in += count;
            match result {
                Some(items) => {
                    debug!(layer = %key.0, zoom = key.1, features = items.len(), "Batch kept");
                    output.stats.features_out += items.len();
                    output.batches.insert(key, items);
                }
                None => output.stats.batches_dropped += 1,
            }
        }

        info!(
            batches = output.stats.batches_run,
            dropped = output.stats.batches_dropped,
            features_in = output.stats.features_in,
            features_out = output.stats.features_out,
            "Post-processed layer batches"
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{FeatureSink, GeometryError, LAYER_NAME};
    use crate::profile::{GlobalLandcoverProfile, ProfileMetadata};
    use geo::{polygon, Geometry, Polygon};

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
        polygon![(x: x0, y: y0), (x: x1, y: y0), (x: x1, y: y1), (x: x0, y: y1)]
    }

    fn source(id: &str, polygon: Polygon<f64>) -> SourceFeature {
        SourceFeature::new(id, Geometry::Polygon(polygon))
    }

    #[test]
    fn test_emit_all_keeps_order_and_records_failures() {
        let profile = GlobalLandcoverProfile::new();
        let runner = LayerBatchRunner::new(&profile);
        let sources = vec![
            source("10-0", rect(0.0, 0.0, 1.0, 1.0)),
            source("broken", rect(0.0, 0.0, 1.0, 1.0)),
            source("80-1", rect(0.0, 0.0, 1.0, 1.0)),
        ];

        let output = runner.emit_all(&sources);

        let classes: Vec<_> = output.features.iter().map(|f| f.class()).collect();
        assert_eq!(classes, vec!["tree", "water"]);
        assert_eq!(output.failures.len(), 1);
        assert_eq!(output.failures[0].0, 1);
    }

    #[test]
    fn test_batches_cover_every_zoom_in_band() {
        let profile = GlobalLandcoverProfile::new();
        let runner = LayerBatchRunner::new(&profile);
        let emitted = runner
            .emit_all(&[
                source("10-0", rect(0.0, 0.0, 10.0, 10.0)),
                source("10-8", rect(0.0, 0.0, 10.0, 10.0)),
            ])
            .features;

        let batches = runner.collect_batches(&emitted).unwrap();

        let keys: Vec<u8> = batches.keys().map(|(_, z)| *z).collect();
        assert_eq!(keys, vec![0, 1, 2, 3, 11]);
        assert!(batches.keys().all(|(layer, _)| layer == LAYER_NAME));
    }

    #[test]
    fn test_run_merges_in_pixel_space() {
        let profile = GlobalLandcoverProfile::new();
        let runner = LayerBatchRunner::new(&profile).with_projection(false);
        let emitted = runner
            .emit_all(&[
                source("80-2", rect(0.0, 0.0, 10.0, 10.0)),
                source("80-2", rect(10.0, 0.0, 20.0, 10.0)),
            ])
            .features;

        let output = runner.run(&emitted).unwrap();

        let batch = &output.batches[&(LAYER_NAME.to_string(), 5)];
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].class(), "water");
        assert_eq!(
            output.stats,
            BatchStats {
                batches_run: 1,
                batches_dropped: 0,
                features_in: 2,
                features_out: 1,
            }
        );
    }

    /// Profile whose post-processing always fails.
    struct FailingProfile;

    impl Profile for FailingProfile {
        fn process_feature(
            &self,
            _source: &SourceFeature,
            _sink: &mut dyn FeatureSink,
        ) -> Result<(), ProfileError> {
            Ok(())
        }

        fn try_post_process_layer(
            &self,
            _layer: &str,
            _zoom: u8,
            _items: Vec<PolygonFeature>,
        ) -> Result<Vec<PolygonFeature>, GeometryError> {
            Err(GeometryError::Empty)
        }

        fn metadata(&self) -> ProfileMetadata {
            ProfileMetadata {
                name: "failing".to_string(),
                description: String::new(),
                attribution: String::new(),
                version: String::new(),
            }
        }
    }

    #[test]
    fn test_dropped_batches_are_absent() {
        let emitter_profile = GlobalLandcoverProfile::new();
        let emitted = LayerBatchRunner::new(&emitter_profile)
            .emit_all(&[source("60-0", rect(0.0, 0.0, 10.0, 10.0))])
            .features;

        let output = LayerBatchRunner::new(&FailingProfile).run(&emitted).unwrap();

        assert!(output.batches.is_empty());
        assert_eq!(output.stats.batches_run, 4);
        assert_eq!(output.stats.batches_dropped, 4);
        assert_eq!(output.stats.drop_ratio(), 1.0);
    }
}
