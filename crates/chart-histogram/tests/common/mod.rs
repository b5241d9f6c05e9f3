//! Shared utilities for integration tests

#![allow(dead_code)]

use chart_histogram::Histogram;

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-9;

/// Regression fixture: 46 skewed values with a long right tail
pub fn skewed_fixture() -> Vec<f64> {
    let mut sample = Vec::new();
    for (value, repeats) in [
        (1.0, 8),
        (2.0, 8),
        (3.0, 6),
        (4.0, 3),
        (5.0, 3),
        (6.0, 4),
        (12.0, 1),
        (13.0, 3),
        (20.0, 2),
        (34.0, 3),
        (35.0, 1),
        (36.0, 1),
        (45.0, 2),
        (77.0, 1),
    ] {
        sample.extend(std::iter::repeat(value).take(repeats));
    }
    sample
}

/// Assert the structural guarantees every computed histogram must meet
pub fn assert_well_formed(histogram: &Histogram, sample: &[f64]) {
    let geometry = histogram.geometry();
    let span = geometry.n_bins() as f64 * geometry.bin_width();
    assert!(
        (span - geometry.range()).abs() <= EPSILON * geometry.range().abs().max(geometry.bin_width()),
        "{geometry} breaks n_bins * bin_width == range"
    );
    for &value in sample {
        assert!(geometry.contains(value), "{value} outside {geometry}");
    }
    let frequencies = histogram.frequencies();
    assert_eq!(frequencies.len(), geometry.n_bins());
    assert_eq!(frequencies.total() + frequencies.extra_points(), sample.len());
}

/// Install a test subscriber so `RUST_LOG=debug` shows the binning decisions
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
