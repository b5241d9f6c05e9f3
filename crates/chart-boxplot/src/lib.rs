//! Boxplot statistics for charts
//!
//! Quartiles give the box, the median splits it, and whiskers reach out to
//! the most extreme observed values within 1.5 IQR of the box. Anything
//! further out is an outlier.
//!
//! # Examples
//!
//! ```rust
//! use chart_boxplot::{BoxSummary, BoxplotType, WhiskerCapper};
//!
//! // whiskers land on observed values
//! let vals = [7.0, 26.0, 46.0, 73.0, 95.0];
//! assert_eq!(WhiskerCapper.cap_bottom(1.0, 26.0, &vals).unwrap(), 7.0);
//!
//! let summary = BoxSummary::from_sample(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 100.0],
//!                                       BoxplotType::default()).unwrap();
//! assert_eq!(summary.outliers, vec![100.0]);
//! ```

pub mod quartiles;
pub mod summary;
pub mod whisker;

pub use quartiles::{median, quartiles};
pub use summary::{y_axis_bounds, BoxSummary, BoxplotType};
pub use whisker::WhiskerCapper;

pub use chart_axis::AxisBounds;
pub use chart_core::{Error, Result};
