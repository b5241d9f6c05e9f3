//! Assigning sample values to bins

use crate::types::{BinFrequencies, BinGeometry};
use chart_core::ChartValue;
use tracing::debug;

/// Counts sample values per bin of a [`BinGeometry`]
///
/// The top bin includes `upper_limit`, so a sample maximum sitting exactly on
/// the limit is counted rather than spilling into a bin that does not exist.
/// Values that cannot be placed (not convertible to a finite `f64`, or
/// outside the limits) are tallied as extra points and processing carries on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinFrequencyAssigner;

impl BinFrequencyAssigner {
    /// Count the values of `sample` in each bin of `geometry`
    pub fn assign<T: ChartValue>(&self, sample: &[T], geometry: &BinGeometry) -> BinFrequencies {
        let mut counts = vec![0usize; geometry.n_bins()];
        let mut extra_points = 0usize;

        for value in sample {
            match value.finite_f64().and_then(|v| geometry.bin_index(v)) {
                Some(idx) => counts[idx] += 1,
                None => extra_points += 1,
            }
        }

        if extra_points > 0 {
            debug!(extra_points, n = sample.len(), "values left outside every bin");
        }
        BinFrequencies::new(counts, extra_points)
    }
}
