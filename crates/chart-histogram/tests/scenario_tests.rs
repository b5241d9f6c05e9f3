//! End-to-end binning scenarios

mod common;

use chart_histogram::*;
use common::*;

#[test]
fn test_fixture_with_four_centred_bins() {
    init_tracing();
    let sample = skewed_fixture();
    let histogram = fixed_histogram(&sample, 4).unwrap();

    assert_well_formed(&histogram, &sample);
    assert_relative_eq!(histogram.geometry().bin_width(), 23.75000025, epsilon = EPSILON);
    assert_relative_eq!(histogram.geometry().lower_limit(), -10.875000125, epsilon = EPSILON);
    assert_eq!(histogram.counts(), &[33, 10, 2, 1]);
    assert_eq!(histogram.bin_labels(3)[0], "-10.875 to < 12.875");
    assert_eq!(histogram.bin_labels(3)[3], "60.375 to <= 84.125");
}

#[test]
fn test_fixture_is_reproducible() {
    let sample = skewed_fixture();
    let first = fixed_histogram(&sample, 4).unwrap();
    for _ in 0..5 {
        assert_eq!(fixed_histogram(&sample, 4).unwrap(), first);
    }
    let mut reversed = sample.clone();
    reversed.reverse();
    assert_eq!(fixed_histogram(&reversed, 4).unwrap(), first);
}

#[test]
fn test_fixture_with_nice_bins() {
    init_tracing();
    let sample = skewed_fixture();
    let histogram = histogram(&sample).unwrap();

    assert_well_formed(&histogram, &sample);
    assert_relative_eq!(histogram.geometry().lower_limit(), 0.0);
    assert_relative_eq!(histogram.geometry().upper_limit(), 80.0);
    assert_relative_eq!(histogram.geometry().bin_width(), 5.0);
    assert_eq!(
        histogram.counts(),
        &[25, 7, 4, 0, 2, 0, 3, 2, 0, 2, 0, 0, 0, 0, 0, 1]
    );
    assert_eq!(histogram.frequencies().max_count(), 25);
    let labels = histogram.bin_labels(3);
    assert_eq!(labels[1], "5 to < 10");
    assert_eq!(labels[15], "75 to <= 80");
}

#[test]
fn test_identical_values_do_not_fail() {
    let sample = vec![42.0; 10];
    let histogram = histogram(&sample).unwrap();
    assert_well_formed(&histogram, &sample);
    assert_relative_eq!(histogram.geometry().range(), 1.0, epsilon = EPSILON);
    assert_eq!(histogram.frequencies().total(), 10);
}

#[test]
fn test_upper_limit_value_lands_in_last_bin() {
    // 0..=100 in steps of 5 fits width 5 exactly, so 100 is the upper limit
    let sample: Vec<f64> = (0..=20).map(|i| (i * 5) as f64).collect();
    let histogram = histogram(&sample).unwrap();
    assert_relative_eq!(histogram.geometry().upper_limit(), 100.0);
    let last = *histogram.counts().last().unwrap();
    assert_eq!(last, 2);
    assert_eq!(histogram.frequencies().extra_points(), 0);
}

#[test]
fn test_saw_tooth_is_merged_away() {
    init_tracing();
    let mut sample: Vec<f64> = (0..10).map(|i| (i * 10) as f64).collect();
    sample.push(93.0);
    let histogram = histogram(&sample).unwrap();

    assert_well_formed(&histogram, &sample);
    assert_eq!(histogram.len(), 10);
    assert!(!has_saw_toothing(histogram.counts(), 2, 0));
    assert!(!has_saw_toothing(histogram.counts(), 2, 1));
}

#[test]
fn test_empty_sample_is_a_precondition_error() {
    assert!(matches!(histogram(&[]), Err(Error::EmptySample { .. })));
    let series: Vec<Vec<f64>> = Vec::new();
    assert!(HistogramBinEngine::default().compute_shared(&series).is_err());
}

#[test]
fn test_config_from_json() {
    let config: BinningConfig =
        serde_json::from_str(r#"{"correct_saw_toothing": false, "label_dp": 0}"#).unwrap();
    let engine = HistogramBinEngine::new(config).unwrap();
    let mut sample: Vec<f64> = (0..10).map(|i| (i * 10) as f64).collect();
    sample.push(93.0);
    let histogram = engine.compute(&sample).unwrap();
    assert_eq!(histogram.len(), 19);
    assert_eq!(histogram.bin_labels(engine.config().label_dp)[18], "90 to <= 95");
}

#[test]
fn test_shared_series_line_up() {
    let sample = skewed_fixture();
    let (low, high): (Vec<f64>, Vec<f64>) = sample.iter().copied().partition(|&v| v < 10.0);
    let shared = HistogramBinEngine::default()
        .compute_shared(&[low.clone(), high.clone()])
        .unwrap();

    let alone = histogram(&sample).unwrap();
    assert_eq!(shared.geometry(), alone.geometry());
    assert_eq!(shared.series()[0].total(), low.len());
    assert_eq!(shared.series()[1].total(), high.len());

    let summed: Vec<usize> = shared.series()[0]
        .counts()
        .iter()
        .zip(shared.series()[1].counts())
        .map(|(a, b)| a + b)
        .collect();
    assert_eq!(summed, alone.counts());
}

#[test]
fn test_histogram_serializes() {
    let histogram = histogram(&[1.0, 2.0, 3.0, 4.0, 25.0]).unwrap();
    let json = serde_json::to_value(&histogram).unwrap();
    assert_eq!(
        json["geometry"]["n_bins"].as_u64().unwrap() as usize,
        histogram.len()
    );
    assert_eq!(json["frequencies"]["extra_points"], 0);
}
