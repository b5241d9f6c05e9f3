//! Axis bounds for boxplots and scatterplots
//!
//! Given the exact extremes of the plotted values, [`AxisBoundsOptimizer`]
//! chooses display bounds with a little breathing room. Axes start at zero
//! when the data is close enough to it, and zoom in when it is not.
//!
//! ```rust
//! use chart_axis::AxisBoundsOptimizer;
//!
//! let bounds = AxisBoundsOptimizer.optimize(1.0, 10.0);
//! assert_eq!(bounds.min, 0.0);
//!
//! let bounds = AxisBoundsOptimizer.for_values([2003.0, 2001.0, 2010.0]).unwrap();
//! assert!(bounds.min > 2000.0 && bounds.max > 2010.0);
//! ```

pub mod optimizer;

pub use optimizer::{AxisBounds, AxisBoundsOptimizer, SNAP_TO_ZERO_RATIO};

/// Pad the exact extremes of a sample for display
pub fn optimal_axis_bounds(min_val: f64, max_val: f64) -> AxisBounds {
    AxisBoundsOptimizer.optimize(min_val, max_val)
}
