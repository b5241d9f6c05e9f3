//! Everything needed to draw one box

use crate::quartiles::{median, quartiles};
use crate::whisker::WhiskerCapper;
use chart_axis::{AxisBounds, AxisBoundsOptimizer};
use chart_core::utils::sorted;
use chart_core::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Multiple of the IQR the raw whiskers reach beyond the box
pub const WHISKER_IQR_MULTIPLE: f64 = 1.5;

/// How whiskers and outliers are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxplotType {
    /// Whiskers run to the sample minimum and maximum, no outliers
    MinMaxWhiskers,
    /// Whiskers capped at 1.5 IQR, values beyond them not drawn
    HideOutliers,
    /// Whiskers capped at 1.5 IQR, values beyond them drawn as outliers
    #[default]
    #[serde(rename = "iqr_based")]
    Inside1Point5TimesIqr,
}

impl fmt::Display for BoxplotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoxplotType::MinMaxWhiskers => "min-max whiskers",
            BoxplotType::HideOutliers => "hide outliers",
            BoxplotType::Inside1Point5TimesIqr => "IQR-based",
        };
        f.write_str(name)
    }
}

/// Box edges, median, whiskers and outliers for one sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    /// Lower quartile
    pub box_bottom: f64,
    /// Upper quartile
    pub box_top: f64,
    /// Median
    pub median: f64,
    /// Lower whisker, always an observed value or the box edge
    pub bottom_whisker: f64,
    /// Upper whisker, always an observed value or the box edge
    pub top_whisker: f64,
    /// Values beyond the whiskers, in sample order
    pub outliers: Vec<f64>,
    /// Drawing style the summary was computed for
    pub boxplot_type: BoxplotType,
}

impl BoxSummary {
    /// Summarise a non-empty sample of finite values
    #[instrument(skip(sample), fields(n = sample.len()))]
    pub fn from_sample(sample: &[f64], boxplot_type: BoxplotType) -> Result<Self> {
        let (box_bottom, box_top) = quartiles(sample)?;
        let median = median(sample)?;
        let vals = sorted(sample);

        let (bottom_whisker, top_whisker) = match boxplot_type {
            BoxplotType::MinMaxWhiskers => (vals[0], vals[vals.len() - 1]),
            BoxplotType::HideOutliers | BoxplotType::Inside1Point5TimesIqr => {
                let reach = WHISKER_IQR_MULTIPLE * (box_top - box_bottom);
                (
                    WhiskerCapper.cap_bottom(box_bottom - reach, box_bottom, &vals)?,
                    WhiskerCapper.cap_top(box_top + reach, box_top, &vals)?,
                )
            }
        };

        let outliers: Vec<f64> = match boxplot_type {
            BoxplotType::Inside1Point5TimesIqr => sample
                .iter()
                .copied()
                .filter(|&v| v < bottom_whisker || v > top_whisker)
                .collect(),
            _ => Vec::new(),
        };

        debug!(
            box_bottom,
            box_top,
            bottom_whisker,
            top_whisker,
            n_outliers = outliers.len(),
            "box summarised"
        );
        Ok(Self {
            box_bottom,
            box_top,
            median,
            bottom_whisker,
            top_whisker,
            outliers,
            boxplot_type,
        })
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.box_top - self.box_bottom
    }

    /// Lowest point drawn for this box
    pub fn lowest(&self) -> f64 {
        self.outliers
            .iter()
            .copied()
            .fold(self.bottom_whisker, f64::min)
    }

    /// Highest point drawn for this box
    pub fn highest(&self) -> f64 {
        self.outliers.iter().copied().fold(self.top_whisker, f64::max)
    }
}

/// Shared y-axis for a set of boxes
///
/// Spans every whisker and outlier, padded by the axis optimizer. `None`
/// when there are no boxes.
pub fn y_axis_bounds(boxes: &[BoxSummary]) -> Option<AxisBounds> {
    let min_y = boxes.iter().map(BoxSummary::lowest).reduce(f64::min)?;
    let max_y = boxes.iter().map(BoxSummary::highest).reduce(f64::max)?;
    Some(AxisBoundsOptimizer.optimize(min_y, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn with_outlier() -> Vec<f64> {
        vec![5.0, 1.0, 2.0, 100.0, 3.0, 4.0, 6.0, 7.0, 8.0]
    }

    #[test]
    fn test_iqr_based() {
        let summary = BoxSummary::from_sample(&with_outlier(), BoxplotType::default()).unwrap();
        assert_eq!(summary.box_bottom, 2.5);
        assert_eq!(summary.box_top, 7.5);
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.iqr(), 5.0);
        assert_eq!(summary.bottom_whisker, 1.0);
        assert_eq!(summary.top_whisker, 8.0);
        assert_eq!(summary.outliers, vec![100.0]);
        assert_eq!(summary.highest(), 100.0);
    }

    #[test]
    fn test_hide_outliers() {
        let summary = BoxSummary::from_sample(&with_outlier(), BoxplotType::HideOutliers).unwrap();
        assert_eq!(summary.top_whisker, 8.0);
        assert!(summary.outliers.is_empty());
    }

    #[test]
    fn test_min_max_whiskers() {
        let summary = BoxSummary::from_sample(&with_outlier(), BoxplotType::MinMaxWhiskers).unwrap();
        assert_eq!(summary.bottom_whisker, 1.0);
        assert_eq!(summary.top_whisker, 100.0);
        assert!(summary.outliers.is_empty());
    }

    #[test]
    fn test_single_value() {
        let summary = BoxSummary::from_sample(&[3.0], BoxplotType::default()).unwrap();
        assert_eq!(summary.box_bottom, 3.0);
        assert_eq!(summary.bottom_whisker, 3.0);
        assert_eq!(summary.top_whisker, 3.0);
        assert!(summary.outliers.is_empty());
    }

    #[test]
    fn test_empty_sample() {
        assert!(BoxSummary::from_sample(&[], BoxplotType::default()).is_err());
    }

    #[test]
    fn test_y_axis_bounds() {
        let boxes = vec![
            BoxSummary::from_sample(&with_outlier(), BoxplotType::default()).unwrap(),
            BoxSummary::from_sample(&[20.0, 22.0, 24.0], BoxplotType::default()).unwrap(),
        ];
        let bounds = y_axis_bounds(&boxes).unwrap();
        assert_eq!(bounds.min, 0.0);
        assert_relative_eq!(bounds.max, 109.9);
        assert!(y_axis_bounds(&[]).is_none());
    }

    #[test]
    fn test_boxplot_type_names() {
        assert_eq!(BoxplotType::default(), BoxplotType::Inside1Point5TimesIqr);
        assert_eq!(BoxplotType::HideOutliers.to_string(), "hide outliers");
        assert_eq!(
            serde_json::to_string(&BoxplotType::Inside1Point5TimesIqr).unwrap(),
            "\"iqr_based\""
        );
        let parsed: BoxplotType = serde_json::from_str("\"min_max_whiskers\"").unwrap();
        assert_eq!(parsed, BoxplotType::MinMaxWhiskers);
    }
}
