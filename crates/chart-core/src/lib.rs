//! Core types shared by the chart statistics crates
//!
//! Every chart-stats crate reports failures through the same [`Error`] type
//! and validates its samples with the helpers in [`utils`]. Structural
//! problems (an empty sample, a malformed bin geometry) are surfaced
//! immediately; per-value problems are handled where they occur.
//!
//! # Example
//!
//! ```rust
//! use chart_core::{utils, Error};
//!
//! let sample = [3.0, 1.0, 4.0, 1.0, 5.0];
//! let (min, max) = utils::sample_extent(&sample).unwrap();
//! assert_eq!((min, max), (1.0, 5.0));
//! assert_eq!(utils::distinct_count(&sample), 4);
//!
//! assert!(matches!(utils::sample_extent(&[]), Err(Error::EmptySample { .. })));
//! ```

pub mod error;
pub mod numeric;
pub mod utils;

pub use error::{Error, Result};
pub use numeric::ChartValue;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
