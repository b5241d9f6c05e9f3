//! Chart statistics
//!
//! The numeric core behind histogram, boxplot and scatterplot charts:
//!
//! - [`histogram`]: nice bin widths, inclusive top bin, saw-tooth correction
//! - [`boxplot`]: quartiles, capped whiskers and outliers
//! - [`axis`]: padded axis bounds that snap to zero when it reads better
//!
//! Everything is a pure function of its input. Library code logs through
//! `tracing`; install a subscriber to see the binning decisions.
//!
//! # Example
//!
//! ```rust
//! use chart_stats::prelude::*;
//!
//! let sample = vec![3.0, 7.0, 8.0, 12.0, 15.0, 21.0, 22.0, 28.0, 31.0, 44.0];
//! let histogram = HistogramBinEngine::default().compute(&sample).unwrap();
//! let labels = histogram.bin_labels(BinningConfig::default().label_dp);
//! assert_eq!(labels.len(), histogram.counts().len());
//!
//! let summary = BoxSummary::from_sample(&sample, BoxplotType::default()).unwrap();
//! let y_axis = y_axis_bounds(&[summary]).unwrap();
//! assert!(y_axis.min <= 3.0 && y_axis.max >= 44.0);
//! ```

pub use chart_axis as axis;
pub use chart_boxplot as boxplot;
pub use chart_core::utils;
pub use chart_histogram as histogram;

pub use chart_core::{Error, Result};

/// Commonly used types
pub mod prelude {
    pub use chart_axis::{optimal_axis_bounds, AxisBounds, AxisBoundsOptimizer};
    pub use chart_boxplot::{y_axis_bounds, BoxSummary, BoxplotType, WhiskerCapper};
    pub use chart_core::{ChartValue, Error, Result};
    pub use chart_histogram::{
        BinFrequencies, BinGeometry, BinningConfig, BinningStrategy, Histogram,
        HistogramBinEngine, SharedHistogram,
    };
}
