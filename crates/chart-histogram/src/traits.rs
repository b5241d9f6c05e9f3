//! Core traits for choosing bin geometry

use crate::types::BinGeometry;
use chart_core::Result;

/// Trait for choosing a bin geometry from sample data
pub trait BinningStrategy {
    /// Choose a geometry covering every value in the sample
    fn select(&self, sample: &[f64]) -> Result<BinGeometry>;

    /// Get the target number of bins (if known)
    fn target_bins(&self) -> Option<usize> {
        None
    }
}

/// Exactly `n_bins` bins centred on the sample extremes
///
/// See [`BinGeometry::centred_on_sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedBinCount {
    n_bins: usize,
}

impl FixedBinCount {
    /// Create a fixed-count strategy
    pub fn new(n_bins: usize) -> Self {
        Self {
            n_bins: n_bins.max(1),
        }
    }
}

impl BinningStrategy for FixedBinCount {
    fn select(&self, sample: &[f64]) -> Result<BinGeometry> {
        BinGeometry::centred_on_sample(sample, self.n_bins)
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.n_bins)
    }
}
