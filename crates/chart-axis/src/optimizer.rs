//! Sign-dependent padding of axis bounds
//!
//! A 0-based axis is what readers expect, but when every value sits far from
//! zero it squeezes the data into a sliver of the plot. The optimizer snaps
//! to zero when the gap to the origin is small relative to the data range and
//! otherwise zooms in just past the extreme values.

use chart_core::ChartValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Gap-to-range ratio below which the near bound snaps to zero
pub const SNAP_TO_ZERO_RATIO: f64 = 0.6;

/// Fraction of the gap or range used as padding
const PADDING_FRACTION: f64 = 0.1;

/// Scale applied to a single value, or to both ends when the data spans zero
const SPAN_SCALE: f64 = 1.1;

/// Display bounds for a chart axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    /// Lower end of the axis
    pub min: f64,
    /// Upper end of the axis
    pub max: f64,
}

impl AxisBounds {
    /// Create bounds from a pair of values
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Distance between the bounds
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check if a value lies on the axis
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<AxisBounds> for (f64, f64) {
    fn from(bounds: AxisBounds) -> Self {
        (bounds.min, bounds.max)
    }
}

impl fmt::Display for AxisBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Turns the exact extremes of a sample into padded axis bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisBoundsOptimizer;

impl AxisBoundsOptimizer {
    /// Pad the exact `(min_val, max_val)` of a sample for display
    ///
    /// Cases, in order:
    /// 1. equal values: `(1.1v, 0)`, `(-1, 1)` or `(0, 1.1v)` by sign
    /// 2. both non-negative: snap the minimum to zero or pull it down a little,
    ///    then push the maximum up
    /// 3. both non-positive: the mirror image of 2
    /// 4. spanning zero: scale both ends by 1.1
    ///
    /// Reversed arguments are swapped first. NaN input falls through every
    /// case and comes back unchanged.
    pub fn optimize(&self, min_val: f64, max_val: f64) -> AxisBounds {
        let (min_val, max_val) = if min_val > max_val {
            debug!(min_val, max_val, "axis bounds reversed, swapping");
            (max_val, min_val)
        } else {
            (min_val, max_val)
        };

        let bounds = if min_val == max_val {
            degenerate(min_val)
        } else if min_val >= 0.0 && max_val >= 0.0 {
            non_negative(min_val, max_val)
        } else if min_val <= 0.0 && max_val <= 0.0 {
            let mirrored = non_negative(-max_val, -min_val);
            AxisBounds::new(-mirrored.max, -mirrored.min)
        } else if min_val <= 0.0 && max_val >= 0.0 {
            AxisBounds::new(SPAN_SCALE * min_val, SPAN_SCALE * max_val)
        } else {
            AxisBounds::new(min_val, max_val)
        };

        debug!(min_val, max_val, %bounds, "optimized axis bounds");
        bounds
    }

    /// Bounds for the finite values of a sample
    ///
    /// Returns `None` when no value converts to a finite `f64`.
    pub fn for_values<I>(&self, values: I) -> Option<AxisBounds>
    where
        I: IntoIterator,
        I::Item: ChartValue,
    {
        let (min_val, max_val) = values
            .into_iter()
            .filter_map(|value| value.finite_f64())
            .fold(None, |extent, v| match extent {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            })?;
        Some(self.optimize(min_val, max_val))
    }
}

fn degenerate(value: f64) -> AxisBounds {
    if value < 0.0 {
        AxisBounds::new(SPAN_SCALE * value, 0.0)
    } else if value > 0.0 {
        AxisBounds::new(0.0, SPAN_SCALE * value)
    } else {
        AxisBounds::new(-1.0, 1.0)
    }
}

/// Padding for `0 <= min_val <= max_val`
fn non_negative(min_val: f64, max_val: f64) -> AxisBounds {
    let gap = min_val;
    let val_range = max_val - min_val;
    let mut lower = min_val;

    // a zero range leaves the near bound alone
    if val_range > 0.0 {
        if gap / val_range < SNAP_TO_ZERO_RATIO {
            lower = 0.0;
        } else {
            lower -= f64::min(PADDING_FRACTION * gap, PADDING_FRACTION * val_range);
        }
    }
    let upper = max_val + f64::min(PADDING_FRACTION * max_val, PADDING_FRACTION * val_range);
    AxisBounds::new(lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn optimize(min_val: f64, max_val: f64) -> (f64, f64) {
        AxisBoundsOptimizer.optimize(min_val, max_val).into()
    }

    #[test]
    fn test_degenerate() {
        let (lo, hi) = optimize(5.0, 5.0);
        assert_eq!(lo, 0.0);
        assert_relative_eq!(hi, 5.5);

        let (lo, hi) = optimize(-5.0, -5.0);
        assert_relative_eq!(lo, -5.5);
        assert_eq!(hi, 0.0);

        assert_eq!(optimize(0.0, 0.0), (-1.0, 1.0));
    }

    #[test]
    fn test_positive_snaps_to_zero() {
        let (lo, hi) = optimize(1.0, 10.0);
        assert_eq!(lo, 0.0);
        assert_relative_eq!(hi, 10.9);

        let (lo, hi) = optimize(0.0, 4.0);
        assert_eq!(lo, 0.0);
        assert_relative_eq!(hi, 4.4);
    }

    #[test]
    fn test_positive_far_from_zero() {
        let (lo, hi) = optimize(10.0, 12.0);
        assert_relative_eq!(lo, 9.8);
        assert_relative_eq!(hi, 12.2);

        // years stay zoomed in rather than dropping to zero
        let (lo, hi) = optimize(2000.0, 2010.0);
        assert_relative_eq!(lo, 1999.0);
        assert_relative_eq!(hi, 2011.0);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // gap / range == 0.6 does not snap
        let (lo, _) = optimize(6.0, 16.0);
        assert_relative_eq!(lo, 5.4);
    }

    #[test]
    fn test_negative() {
        let (lo, hi) = optimize(-12.0, -10.0);
        assert_relative_eq!(lo, -12.2);
        assert_relative_eq!(hi, -9.8);

        let (lo, hi) = optimize(-10.0, -1.0);
        assert_relative_eq!(lo, -10.9);
        assert_eq!(hi, 0.0);
    }

    #[test]
    fn test_spanning_zero() {
        let (lo, hi) = optimize(-3.0, 7.0);
        assert_relative_eq!(lo, -3.3);
        assert_relative_eq!(hi, 7.7);
    }

    #[test]
    fn test_reversed_arguments() {
        assert_eq!(optimize(7.0, -3.0), optimize(-3.0, 7.0));
    }

    #[test]
    fn test_nan_passes_through() {
        let (lo, hi) = optimize(f64::NAN, 1.0);
        assert!(lo.is_nan());
        assert_eq!(hi, 1.0);
    }

    #[test]
    fn test_for_values() {
        let bounds = AxisBoundsOptimizer
            .for_values([12.0, f64::NAN, 10.0, 11.0])
            .unwrap();
        assert_relative_eq!(bounds.min, 9.8);
        assert_relative_eq!(bounds.max, 12.2);

        let bounds = AxisBoundsOptimizer.for_values(vec![3i64, -3, 7]).unwrap();
        assert_relative_eq!(bounds.min, -3.3);

        assert!(AxisBoundsOptimizer.for_values(Vec::<f64>::new()).is_none());
        assert!(AxisBoundsOptimizer.for_values([f64::INFINITY]).is_none());
    }

    #[test]
    fn test_bounds_helpers() {
        let bounds = AxisBounds::new(-1.0, 3.0);
        assert_eq!(bounds.span(), 4.0);
        assert!(bounds.contains(0.0));
        assert!(!bounds.contains(3.5));
        assert_eq!(bounds.to_string(), "[-1, 3]");
    }
}
