//! Batch run statistics.

/// Counters for one batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchStats {
    /// (layer, zoom) batches handed to post-processing
    pub batches_run: usize,
    /// Batches for which post-processing returned nothing
    pub batches_dropped: usize,
    /// Features going into post-processing, summed over batches
    pub features_in: usize,
    /// Features coming out of post-processing, summed over batches
    pub features_out: usize,
}

impl BatchStats {
    /// Fraction of batches dropped (0.0 to 1.0).
    pub fn drop_ratio(&self) -> f64 {
        if self.batches_run == 0 {
            0.0
        } else {
            self.batches_dropped as f64 / self.batches_run as f64
        }
    }
}
