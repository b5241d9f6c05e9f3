//! Conversion of caller-supplied values into chart arithmetic
//!
//! Histogram frequencies are computed on a best-effort basis: values that
//! cannot take part in `f64` arithmetic are tallied separately instead of
//! aborting the whole chart. [`ChartValue`] is the single place where that
//! decision is made.

use num_traits::ToPrimitive;

/// A value that may or may not be usable as a finite `f64`
pub trait ChartValue {
    /// The value as a finite `f64`, or `None` if it cannot be used
    fn finite_f64(&self) -> Option<f64>;
}

impl<T: ToPrimitive> ChartValue for T {
    fn finite_f64(&self) -> Option<f64> {
        self.to_f64().filter(|v| v.is_finite())
    }
}
