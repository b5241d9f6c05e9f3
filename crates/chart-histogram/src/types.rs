//! Core types for histogram representation

use chart_core::utils::{format_bound, sample_extent};
use chart_core::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Relative tolerance used when checking `n_bins * bin_width == range`
pub const GEOMETRY_TOLERANCE: f64 = 1e-9;

/// Placement of equal-width bins over a value range
///
/// The invariant `n_bins * bin_width == upper_limit - lower_limit` is checked
/// on construction. Every bin is half-open except the last, which also
/// includes `upper_limit`. A geometry is never modified; a different bin
/// count means a new geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinGeometry {
    lower_limit: f64,
    upper_limit: f64,
    n_bins: usize,
    bin_width: f64,
}

impl BinGeometry {
    /// Create a validated geometry
    pub fn new(lower_limit: f64, upper_limit: f64, n_bins: usize, bin_width: f64) -> Result<Self> {
        let invalid = || Error::invalid_geometry(lower_limit, upper_limit, n_bins, bin_width);
        if n_bins == 0
            || !lower_limit.is_finite()
            || !upper_limit.is_finite()
            || !bin_width.is_finite()
            || bin_width <= 0.0
        {
            return Err(invalid());
        }

        let range = upper_limit - lower_limit;
        let span = n_bins as f64 * bin_width;
        if (span - range).abs() > GEOMETRY_TOLERANCE * range.abs().max(bin_width) {
            return Err(invalid());
        }

        Ok(Self {
            lower_limit,
            upper_limit,
            n_bins,
            bin_width,
        })
    }

    /// Split `[lower_limit, upper_limit]` into `n_bins` equal bins
    pub fn from_limits(lower_limit: f64, upper_limit: f64, n_bins: usize) -> Result<Self> {
        if n_bins == 0 {
            return Err(Error::invalid_geometry(lower_limit, upper_limit, 0, f64::NAN));
        }
        let bin_width = (upper_limit - lower_limit) / n_bins as f64;
        Self::new(lower_limit, upper_limit, n_bins, bin_width)
    }

    /// Exactly `n_bins` bins with the sample minimum and maximum in the
    /// middle of the first and last bins
    ///
    /// The width is widened by one extra bin's worth spread over all bins,
    /// so half a bin of padding sits on either side of the data.
    pub fn centred_on_sample(sample: &[f64], n_bins: usize) -> Result<Self> {
        if n_bins == 0 {
            return Err(Error::InvalidParameter(
                "a centred geometry needs at least one bin".to_string(),
            ));
        }
        let (min_val, max_val) = sample_extent(sample)?;
        let n = n_bins as f64;
        let total_width = max_val - min_val;
        let initial_bin_width = total_width / n + 1e-6;
        let bin_width = (total_width + initial_bin_width) / n;
        let lower_limit = min_val - bin_width / 2.0;
        let upper_limit = lower_limit + n * bin_width;
        Self::new(lower_limit, upper_limit, n_bins, bin_width)
    }

    /// Lower limit of the first bin
    pub fn lower_limit(&self) -> f64 {
        self.lower_limit
    }

    /// Upper limit of the last bin (inclusive)
    pub fn upper_limit(&self) -> f64 {
        self.upper_limit
    }

    /// Number of bins
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// Width of every bin
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Distance between the limits
    pub fn range(&self) -> f64 {
        self.upper_limit - self.lower_limit
    }

    /// Check if a value lies within the limits (both inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower_limit && value <= self.upper_limit
    }

    /// Index of the bin holding `value`
    ///
    /// Values equal to `upper_limit` belong to the last bin. Values outside
    /// the limits (and NaN) have no bin.
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        if !self.contains(value) {
            return None;
        }
        let last = self.n_bins - 1;
        if value == self.upper_limit {
            return Some(last);
        }
        let position = ((value - self.lower_limit) / self.bin_width).floor();
        // floor of a non-negative in-range ratio; rounding can only push it up to n_bins
        Some((position as usize).min(last))
    }

    /// Start and end of every bin, in order
    pub fn bin_ranges(&self) -> Vec<(f64, f64)> {
        (0..self.n_bins)
            .map(|k| {
                let start = self.lower_limit + k as f64 * self.bin_width;
                (start, self.lower_limit + (k + 1) as f64 * self.bin_width)
            })
            .collect()
    }

    /// Bin edges including the rightmost edge
    pub fn bin_edges(&self) -> Vec<f64> {
        (0..=self.n_bins)
            .map(|k| self.lower_limit + k as f64 * self.bin_width)
            .collect()
    }

    /// Bin centres as a vector
    pub fn bin_midpoints(&self) -> Vec<f64> {
        self.bin_ranges()
            .into_iter()
            .map(|(start, end)| (start + end) / 2.0)
            .collect()
    }

    /// Human-readable bin labels such as `"10 to < 20"`
    ///
    /// The last label reads `"<="` because the top bin includes its upper
    /// bound. Bounds are rounded to `dp` decimal places and integral values
    /// are printed without decimals.
    pub fn bin_labels(&self, dp: u32) -> Vec<String> {
        let last = self.n_bins - 1;
        self.bin_ranges()
            .into_iter()
            .enumerate()
            .map(|(i, (start, end))| bin_label(start, end, i == last, dp))
            .collect()
    }
}

impl fmt::Display for BinGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinGeometry({} bins of width {} from {} to {})",
            self.n_bins, self.bin_width, self.lower_limit, self.upper_limit
        )
    }
}

fn bin_label(start: f64, end: f64, inclusive: bool, dp: u32) -> String {
    let op = if inclusive { "<=" } else { "<" };
    format!("{} to {} {}", format_bound(start, dp), op, format_bound(end, dp))
}

/// Per-bin counts aligned with a [`BinGeometry`]
///
/// `extra_points` tallies values that could not be placed in any bin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinFrequencies {
    counts: Vec<usize>,
    extra_points: usize,
}

impl BinFrequencies {
    /// Create bin frequencies from counts and unplaced values
    pub fn new(counts: Vec<usize>, extra_points: usize) -> Self {
        Self {
            counts,
            extra_points,
        }
    }

    /// Counts as a slice, one per bin
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Consume and return the counts
    pub fn into_counts(self) -> Vec<usize> {
        self.counts
    }

    /// Values that fell outside every bin
    pub fn extra_points(&self) -> usize {
        self.extra_points
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if there are no bins
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total of the bin counts (excludes extra points)
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Counts as fractions of the binned total
    pub fn proportions(&self) -> Vec<f64> {
        let total = self.total();
        self.counts
            .iter()
            .map(|&count| {
                if total > 0 {
                    count as f64 / total as f64
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Counts as percentages of the binned total
    pub fn percentages(&self) -> Vec<f64> {
        self.proportions().into_iter().map(|p| p * 100.0).collect()
    }
}

/// A single bin in a histogram
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
    /// Whether the right edge is inclusive
    pub is_last: bool,
}

impl HistogramBin {
    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && (value < self.right || (self.is_last && value == self.right))
    }

    /// Label for this bin, e.g. `"10 to < 20"`
    pub fn label(&self, dp: u32) -> String {
        bin_label(self.left, self.right, self.is_last, dp)
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.is_last { ']' } else { ')' };
        write!(
            f,
            "[{:.3}, {:.3}{}: count={}",
            self.left, self.right, close, self.count
        )
    }
}

/// Final bin geometry with the frequencies computed against it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    geometry: BinGeometry,
    frequencies: BinFrequencies,
}

impl Histogram {
    /// Pair a geometry with its frequencies
    pub fn new(geometry: BinGeometry, frequencies: BinFrequencies) -> Self {
        Self {
            geometry,
            frequencies,
        }
    }

    /// The bin geometry
    pub fn geometry(&self) -> &BinGeometry {
        &self.geometry
    }

    /// The bin frequencies
    pub fn frequencies(&self) -> &BinFrequencies {
        &self.frequencies
    }

    /// Split into geometry and frequencies
    pub fn into_parts(self) -> (BinGeometry, BinFrequencies) {
        (self.geometry, self.frequencies)
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.geometry.n_bins()
    }

    /// Always false: a histogram has at least one bin
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get counts as a slice
    pub fn counts(&self) -> &[usize] {
        self.frequencies.counts()
    }

    /// Bins with their counts
    pub fn bins(&self) -> Vec<HistogramBin> {
        let last = self.geometry.n_bins() - 1;
        self.geometry
            .bin_ranges()
            .into_iter()
            .zip(self.frequencies.counts())
            .enumerate()
            .map(|(i, ((left, right), &count))| HistogramBin {
                left,
                right,
                count,
                is_last: i == last,
            })
            .collect()
    }

    /// Labels for every bin
    pub fn bin_labels(&self, dp: u32) -> Vec<String> {
        self.geometry.bin_labels(dp)
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.frequencies.total(),
            self.geometry.lower_limit(),
            self.geometry.upper_limit()
        )
    }
}
