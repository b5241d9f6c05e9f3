//! Nice bin width selection
//!
//! Bin widths are restricted to 1, 2 or 5 times a power of ten so axis
//! labels stay readable. The width is first derived from a target bin count,
//! normalised into `(1, 10]`, snapped up to 5 or 10 and converted back. If
//! that leaves fewer bins than the data's variety deserves, the normalised
//! width is halved and snapped again with 2 as an extra option. Finally the
//! lower limit is moved onto a multiple of the width.

use crate::traits::BinningStrategy;
use crate::types::BinGeometry;
use chart_core::utils::{distinct_count, sample_extent};
use chart_core::{Error, Result};
use tracing::{debug, instrument};

/// Default bin count the initial width is derived from
pub const DEFAULT_TARGET_N_BINS: usize = 20;

/// Picks a nice bin width, limits and bin count for a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinWidthSelector {
    target_n_bins: usize,
}

impl Default for BinWidthSelector {
    fn default() -> Self {
        Self {
            target_n_bins: DEFAULT_TARGET_N_BINS,
        }
    }
}

impl BinWidthSelector {
    /// Create a selector aiming for `target_n_bins` bins
    pub fn new(target_n_bins: usize) -> Self {
        Self {
            target_n_bins: target_n_bins.max(1),
        }
    }

    /// Choose the geometry for a non-empty sample of finite values
    #[instrument(skip(self, sample), fields(n = sample.len()))]
    pub fn select(&self, sample: &[f64]) -> Result<BinGeometry> {
        let (min_val, max_val) = sample_extent(sample)?;
        let degenerate = max_val == min_val;
        let data_range = if degenerate { 1.0 } else { max_val - min_val };
        let init_bin_width = data_range / self.target_n_bins as f64;
        if !init_bin_width.is_finite() || init_bin_width <= 0.0 {
            return Err(Error::non_finite("histogram bin width"));
        }
        let min_n_bins = min_bins_for_distinct(distinct_count(sample));

        let mut norm_bin_width = init_bin_width;
        while norm_bin_width <= 1.0 {
            norm_bin_width *= 10.0;
        }
        while norm_bin_width > 10.0 {
            norm_bin_width /= 10.0;
        }
        let denorm_ratio = init_bin_width / norm_bin_width;
        debug!(init_bin_width, norm_bin_width, "normalised initial bin width");

        let mut bin_width = snap_coarse(norm_bin_width) * denorm_ratio;
        let mut n_bins = bins_needed(data_range, bin_width);
        if n_bins < min_n_bins {
            bin_width = snap_fine(norm_bin_width / 2.0) * denorm_ratio;
            n_bins = bins_needed(data_range, bin_width);
        }

        // an exact fit keeps the data's own limits
        let (mut lower_limit, mut upper_limit) = if degenerate {
            (min_val, min_val + data_range)
        } else {
            (min_val, max_val)
        };
        if bin_width * n_bins as f64 != data_range {
            let mut multiple = (min_val / bin_width).floor();
            if multiple * bin_width > min_val {
                multiple -= 1.0;
            }
            lower_limit = multiple * bin_width;
            upper_limit = lower_limit + n_bins as f64 * bin_width;
        }
        if max_val > upper_limit {
            upper_limit += bin_width;
            n_bins += 1;
        }

        debug!(
            min_val,
            max_val,
            bin_width,
            lower_limit,
            upper_limit,
            n_bins,
            "selected nice bins"
        );
        BinGeometry::from_limits(lower_limit, upper_limit, n_bins)
    }
}

impl BinningStrategy for BinWidthSelector {
    fn select(&self, sample: &[f64]) -> Result<BinGeometry> {
        BinWidthSelector::select(self, sample)
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.target_n_bins)
    }
}

/// Fewest bins worth showing for a given number of distinct values
///
/// Ten once there is plenty of variety, never fewer than four, otherwise one
/// per distinct value.
pub fn min_bins_for_distinct(n_distinct: usize) -> usize {
    if n_distinct >= 10 {
        10
    } else if n_distinct <= 4 {
        4
    } else {
        n_distinct
    }
}

fn snap_coarse(norm_bin_width: f64) -> f64 {
    if norm_bin_width <= 5.0 {
        5.0
    } else {
        10.0
    }
}

fn snap_fine(norm_bin_width: f64) -> f64 {
    if norm_bin_width <= 2.0 {
        2.0
    } else if norm_bin_width <= 5.0 {
        5.0
    } else {
        10.0
    }
}

fn bins_needed(data_range: f64, bin_width: f64) -> usize {
    ((data_range / bin_width).ceil() as usize).max(1)
}
