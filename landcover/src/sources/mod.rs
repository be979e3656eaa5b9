//! Source archive plan.
//!
//! The reference tileset is built from one GeoPackage archive per
//! (category, zoom) pair: 12 categories × 9 zoom codes = 108 archives, each
//! named after its source identifier.

use crate::classify::{SourcePartitionId, CATEGORY_CODES, ZOOM_CODES};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory the reference archives are read from.
pub const REFERENCE_ARCHIVE_DIR: &str = "../zips";

/// Coordinate reference system of the reference archives.
pub const REFERENCE_PROJECTION: &str = "EPSG:4326";

/// Archive file extension.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// One archive to ingest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub id: SourcePartitionId,
    pub path: PathBuf,
    pub projection: String,
    /// Layer to read from the archive; empty reads every layer
    pub layer_filter: String,
}

impl SourceSpec {
    /// Source identifier as handed to the profile.
    pub fn name(&self) -> String {
        self.id.to_string()
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

/// Ordered list of archives making up a tileset.
#[derive(Debug, Clone, Default)]
pub struct SourcePlan {
    sources: Vec<SourceSpec>,
}

impl SourcePlan {
    /// Every category × zoom archive under `archive_dir`, category-major.
    pub fn reference(archive_dir: impl AsRef<Path>) -> Self {
        Self::with_projection(archive_dir, REFERENCE_PROJECTION)
    }

    /// Same as [`SourcePlan::reference`] with a different projection.
    pub fn with_projection(archive_dir: impl AsRef<Path>, projection: &str) -> Self {
        let archive_dir = archive_dir.as_ref();
        let sources = CATEGORY_CODES
            .iter()
            .flat_map(|(category, _)| {
                ZOOM_CODES.iter().map(move |(zoom, _)| {
                    let id = SourcePartitionId::new(*category, *zoom);
                    let path = archive_dir.join(format!("{}.{}", id, ARCHIVE_EXTENSION));
                    SourceSpec {
                        id,
                        path,
                        projection: projection.to_string(),
                        layer_filter: String::new(),
                    }
                })
            })
            .collect();

        Self { sources }
    }

    pub fn sources(&self) -> &[SourceSpec] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Look up a source by its identifier string.
    pub fn find(&self, name: &str) -> Option<&SourceSpec> {
        self.sources.iter().find(|s| s.name() == name)
    }

    /// Archives that are not present on disk.
    pub fn missing(&self) -> Vec<&SourceSpec> {
        let missing: Vec<_> = self.sources.iter().filter(|s| !s.exists()).collect();
        debug!(
            total = self.sources.len(),
            missing = missing.len(),
            "Checked source archives"
        );
        missing
    }
}
