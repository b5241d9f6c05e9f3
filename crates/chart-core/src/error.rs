//! Error types for chart statistics
//!
//! Provides a unified error type for all chart-stats crates.

use thiserror::Error;

/// Core error type for chart statistics operations
#[derive(Error, Debug)]
pub enum Error {
    /// An operation that needs at least one value was given none
    #[error("Empty sample: {operation} needs at least one value")]
    EmptySample { operation: String },

    /// A structural operation was given NaN or infinite values
    #[error("Non-finite input: {context} contains NaN or infinite values")]
    NonFinite { context: String },

    /// Bin geometry whose limits, width and count disagree
    #[error(
        "Invalid bin geometry: {n_bins} bins of width {bin_width} do not span \
         {lower_limit} to {upper_limit}"
    )]
    InvalidGeometry {
        lower_limit: f64,
        upper_limit: f64,
        n_bins: usize,
        bin_width: f64,
    },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_sample(operation: &str) -> Self {
        Self::EmptySample {
            operation: operation.to_string(),
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::NonFinite {
            context: context.to_string(),
        }
    }

    /// Create an error for a geometry that fails validation
    pub fn invalid_geometry(lower_limit: f64, upper_limit: f64, n_bins: usize, bin_width: f64) -> Self {
        Self::InvalidGeometry {
            lower_limit,
            upper_limit,
            n_bins,
            bin_width,
        }
    }
}
