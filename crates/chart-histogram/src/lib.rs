//! Readable histogram binning for charts
//!
//! This crate turns a raw sample into bins a reader can make sense of at a
//! glance. Bin widths are always 1, 2 or 5 times a power of ten, limits sit on
//! multiples of the width, and the top bin includes the sample maximum so
//! labels read `"10 to < 20" ... "90 to <= 100"`.
//!
//! # Key Features
//!
//! - **Nice bin widths**: [`BinWidthSelector`] normalises, snaps and checks there
//!   are enough bins for the variety in the data
//! - **Saw-tooth correction**: [`SawToothCorrector`] merges bins when the width
//!   aliases against the spacing of the data
//! - **Best-effort counting**: values that cannot be placed are tallied as
//!   extra points instead of failing the chart
//! - **Shared axes**: several series counted against one geometry
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use chart_histogram::histogram;
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 12.0, 13.0, 20.0, 34.0, 35.0, 36.0, 45.0, 77.0];
//! let histogram = histogram(&data).unwrap();
//!
//! assert_eq!(histogram.geometry().bin_width(), 5.0);
//! assert_eq!(histogram.bin_labels(3)[0], "0 to < 5");
//! assert_eq!(histogram.bin_labels(3)[15], "75 to <= 80");
//! for bin in histogram.bins() {
//!     println!("  [{:.1}, {:.1}): count={}", bin.left, bin.right, bin.count);
//! }
//! ```
//!
//! ## Fixed Bin Count
//!
//! ```rust
//! use chart_histogram::fixed_histogram;
//!
//! let data = vec![1.0, 1.0, 2.0, 5.0, 9.0];
//! let histogram = fixed_histogram(&data, 4).unwrap();
//! assert_eq!(histogram.len(), 4);
//! assert_eq!(histogram.frequencies().total(), 5);
//! ```
//!
//! ## Series Sharing One Axis
//!
//! ```rust
//! use chart_histogram::HistogramBinEngine;
//!
//! let by_category = vec![vec![3.0, 8.0, 21.0], vec![40.0, 44.0, 47.0]];
//! let shared = HistogramBinEngine::default().compute_shared(&by_category).unwrap();
//!
//! for frequencies in shared.series() {
//!     assert_eq!(frequencies.len(), shared.geometry().n_bins());
//! }
//! ```

pub mod config;
pub mod engine;
pub mod frequency;
pub mod sawtooth;
pub mod selector;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use config::BinningConfig;
pub use engine::{HistogramBinEngine, SharedHistogram};
pub use frequency::BinFrequencyAssigner;
pub use sawtooth::{has_saw_toothing, SawToothCorrector};
pub use selector::BinWidthSelector;
pub use traits::{BinningStrategy, FixedBinCount};
pub use types::{BinFrequencies, BinGeometry, Histogram, HistogramBin};

pub use chart_core::{Error, Result};

// Convenience functions
/// Bin a sample with the default engine
pub fn histogram(data: &[f64]) -> Result<Histogram> {
    HistogramBinEngine::default().compute(data)
}

/// Bin a sample into exactly `num_bins` bins centred on its extremes
///
/// Saw-tooth correction still applies above the default floor.
pub fn fixed_histogram(data: &[f64], num_bins: usize) -> Result<Histogram> {
    HistogramBinEngine::with_strategy(FixedBinCount::new(num_bins), BinningConfig::default())?
        .compute(data)
}
