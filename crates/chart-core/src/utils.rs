//! Utility functions for working with chart samples

use crate::{Error, Result};
use ordered_float::OrderedFloat;
use std::collections::BTreeSet;

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use chart_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.total_cmp(b),
    });
    sorted
}

/// Check that a sample is non-empty and holds only finite values
pub fn validate_sample(sample: &[f64], operation: &str) -> Result<()> {
    if sample.is_empty() {
        return Err(Error::empty_sample(operation));
    }
    if sample.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite(operation));
    }
    Ok(())
}

/// Minimum and maximum of a validated sample
///
/// # Examples
///
/// ```rust
/// use chart_core::utils::sample_extent;
///
/// assert_eq!(sample_extent(&[4.0, -2.0, 9.5]).unwrap(), (-2.0, 9.5));
/// assert!(sample_extent(&[]).is_err());
/// ```
pub fn sample_extent(sample: &[f64]) -> Result<(f64, f64)> {
    validate_sample(sample, "sample extent")?;
    let extent = sample
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    Ok(extent)
}

/// Number of distinct values in a sample
///
/// `-0.0` and `0.0` count as the same value.
pub fn distinct_count(sample: &[f64]) -> usize {
    sample
        .iter()
        .map(|&v| OrderedFloat(if v == 0.0 { 0.0 } else { v }))
        .collect::<BTreeSet<_>>()
        .len()
}

/// Round a bound to `dp` decimal places for display
///
/// Integral results are printed without a fractional part, so `12.0` with
/// `dp = 3` becomes `"12"` rather than `"12.000"`.
///
/// # Examples
///
/// ```rust
/// use chart_core::utils::format_bound;
///
/// assert_eq!(format_bound(12.0, 3), "12");
/// assert_eq!(format_bound(2.71828, 3), "2.718");
/// assert_eq!(format_bound(0.30000000000000004, 3), "0.3");
/// ```
pub fn format_bound(value: f64, dp: u32) -> String {
    let rounded = round_to_dp(value, dp);
    if rounded == rounded.trunc() && rounded.abs() < i64::MAX as f64 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

/// Round to `dp` decimal places, leaving values that would overflow untouched
pub fn round_to_dp(value: f64, dp: u32) -> f64 {
    let factor = 10f64.powi(dp as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
