//! Snapping whiskers onto observed values
//!
//! A raw whisker such as `box_bottom - 1.5 * IQR` is usually not a value in
//! the sample. Whiskers are drawn to the most extreme observed value inside
//! the raw limit instead, and never cross the box.

use chart_core::{Error, Result};

/// Caps raw whisker candidates against a sorted sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhiskerCapper;

impl WhiskerCapper {
    /// Lower whisker: the smallest value `>= raw_whisker`, never above `box_bottom`
    ///
    /// `sorted_vals` must be in ascending order. If no value reaches the raw
    /// whisker it is kept as is before the clamp.
    pub fn cap_bottom(&self, raw_whisker: f64, box_bottom: f64, sorted_vals: &[f64]) -> Result<f64> {
        check_sorted(sorted_vals, "bottom whisker")?;
        let whisker = sorted_vals
            .iter()
            .copied()
            .find(|&v| v >= raw_whisker)
            .unwrap_or(raw_whisker);
        Ok(if whisker > box_bottom { box_bottom } else { whisker })
    }

    /// Upper whisker: the largest value `<= raw_whisker`, never below `box_top`
    ///
    /// `sorted_vals` must be in ascending order.
    pub fn cap_top(&self, raw_whisker: f64, box_top: f64, sorted_vals: &[f64]) -> Result<f64> {
        check_sorted(sorted_vals, "top whisker")?;
        let whisker = sorted_vals
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= raw_whisker)
            .unwrap_or(raw_whisker);
        Ok(if whisker < box_top { box_top } else { whisker })
    }
}

fn check_sorted(sorted_vals: &[f64], operation: &str) -> Result<()> {
    if sorted_vals.is_empty() {
        return Err(Error::empty_sample(operation));
    }
    debug_assert!(
        sorted_vals.windows(2).all(|pair| pair[0] <= pair[1]),
        "{operation} needs ascending values"
    );
    Ok(())
}
