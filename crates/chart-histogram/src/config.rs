//! Configuration for histogram binning

use chart_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Settings for [`HistogramBinEngine`](crate::HistogramBinEngine)
///
/// ```rust
/// use chart_histogram::BinningConfig;
///
/// let config = BinningConfig::default().with_label_dp(1);
/// assert_eq!(config.target_n_bins, 20);
/// assert_eq!(config.label_dp, 1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinningConfig {
    /// Bin count the initial width is derived from
    pub target_n_bins: usize,
    /// Whether to re-bin when saw-toothing is detected
    pub correct_saw_toothing: bool,
    /// Saw-tooth correction stops once the bin count is at or below this
    pub saw_tooth_floor: usize,
    /// Decimal places used in bin labels
    pub label_dp: u32,
}

impl Default for BinningConfig {
    fn default() -> Self {
        Self {
            target_n_bins: 20,
            correct_saw_toothing: true,
            saw_tooth_floor: 5,
            label_dp: 3,
        }
    }
}

impl BinningConfig {
    /// Set the target bin count
    pub fn with_target_n_bins(mut self, target_n_bins: usize) -> Self {
        self.target_n_bins = target_n_bins;
        self
    }

    /// Enable or disable saw-tooth correction
    pub fn with_saw_tooth_correction(mut self, enabled: bool) -> Self {
        self.correct_saw_toothing = enabled;
        self
    }

    /// Set the saw-tooth floor
    pub fn with_saw_tooth_floor(mut self, floor: usize) -> Self {
        self.saw_tooth_floor = floor;
        self
    }

    /// Set the label precision
    pub fn with_label_dp(mut self, dp: u32) -> Self {
        self.label_dp = dp;
        self
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.target_n_bins == 0 {
            return Err(Error::InvalidParameter(
                "target_n_bins must be at least 1".to_string(),
            ));
        }
        if self.saw_tooth_floor == 0 {
            return Err(Error::InvalidParameter(
                "saw_tooth_floor must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
