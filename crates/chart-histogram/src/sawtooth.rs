//! Saw-tooth detection and re-binning
//!
//! Saw-toothing is a histogram where every k-th bin holds all the values and
//! the bins in between are empty. It appears when the bin width is a
//! multiple-fraction of the data's natural spacing, e.g. width 1 over
//! even-only integers. The fix is to merge bins until the pattern goes away.

use crate::frequency::BinFrequencyAssigner;
use crate::types::{BinFrequencies, BinGeometry};
use chart_core::{ChartValue, Result};
use tracing::debug;

/// Default bin count at or below which no further merging happens
pub const DEFAULT_SAW_TOOTH_FLOOR: usize = 5;

/// Patterns checked in order: (period, start index)
///
/// The first match wins and its period is also the shrink factor.
const SAW_TOOTH_PATTERNS: [(usize, usize); 3] = [(5, 0), (2, 0), (2, 1)];

/// Check whether all the mass sits in bins `start_idx, start_idx + period, ...`
///
/// A zero period never matches.
pub fn has_saw_toothing(counts: &[usize], period: usize, start_idx: usize) -> bool {
    if period == 0 {
        return false;
    }
    let total: usize = counts.iter().sum();
    let in_period: usize = counts.iter().skip(start_idx).step_by(period).sum();
    total == in_period
}

/// The shrink factor for the first saw-tooth pattern found, if any
pub fn detect_saw_tooth(counts: &[usize]) -> Option<usize> {
    SAW_TOOTH_PATTERNS
        .iter()
        .find(|&&(period, start_idx)| has_saw_toothing(counts, period, start_idx))
        .map(|&(period, _)| period)
}

/// Re-bins a histogram at coarser granularity while saw-toothing persists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SawToothCorrector {
    floor: usize,
}

impl Default for SawToothCorrector {
    fn default() -> Self {
        Self {
            floor: DEFAULT_SAW_TOOTH_FLOOR,
        }
    }
}

impl SawToothCorrector {
    /// Create a corrector that stops once `n_bins <= floor`
    pub fn new(floor: usize) -> Self {
        Self {
            floor: floor.max(1),
        }
    }

    /// Merge bins until no saw-tooth pattern remains or the floor is reached
    ///
    /// Every new geometry spans the limits of the geometry passed in; only
    /// the bin count changes. Returns the inputs untouched when no pattern
    /// is found.
    pub fn correct<T: ChartValue>(
        &self,
        sample: &[T],
        geometry: BinGeometry,
        frequencies: BinFrequencies,
    ) -> Result<(BinGeometry, BinFrequencies)> {
        let limits = (geometry.lower_limit(), geometry.upper_limit());
        let mut current = (geometry, frequencies);

        while current.0.n_bins() > self.floor {
            let Some(shrink_factor) = detect_saw_tooth(current.1.counts()) else {
                break;
            };
            let n_bins = current.0.n_bins().div_ceil(shrink_factor);
            debug!(
                from = current.0.n_bins(),
                to = n_bins,
                shrink_factor,
                "saw-toothing detected, merging bins"
            );
            let geometry = BinGeometry::from_limits(limits.0, limits.1, n_bins)?;
            let frequencies = BinFrequencyAssigner.assign(sample, &geometry);
            current = (geometry, frequencies);
        }

        Ok(current)
    }
}
