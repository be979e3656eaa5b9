//! In-process driver for the engine contract.
//!
//! The real tiling engine ingests archives, cuts tiles and encodes them. This
//! module reproduces only the part of its contract the profile depends on, so
//! the profile can be exercised end to end:
//!
//! ```text
//! SourceFeature[] ──par──► Profile::process_feature ──► PolygonFeature[]
//!                                                          │
//!                     group by (layer, zoom ∈ band), project to world px
//!                                                          │
//! BTreeMap<(layer, zoom), features> ◄──par── Profile::post_process_layer
//! ```

mod runner;
mod stats;

pub use runner::{BatchKey, BatchOutput, EmitOutput, LayerBatchRunner};
pub use stats::BatchStats;
