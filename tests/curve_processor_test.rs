// ABOUTME: Integration tests for metric curve smoothing, downsampling, and normalization
// ABOUTME: Verifies point caps, the [0, 0.8] vertical range, degenerate inputs, and path output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_telemetry::algorithms::curve_processor::{
    downsample_mean, smooth_trailing, CurveProcessor, PathCommand, ValueRange,
};

fn ramp(len: usize) -> Vec<f64> {
    (0..len).map(|index| index as f64).collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_output_never_exceeds_max_points() {
    let processor = CurveProcessor::default();

    for (len, expected) in [(3600, 600), (1199, 600), (601, 301), (600, 600), (42, 42)] {
        let curve = processor.process(&ramp(len));
        assert_eq!(curve.len(), expected, "input of {len} samples");
        assert!(curve.len() <= processor.max_points());
    }
}

#[test]
fn test_normalized_range_spans_zero_to_headroom() {
    let processor = CurveProcessor::new(600, 1);
    let curve = processor.process(&[150.0, 300.0, 225.0, 180.0]);

    let points = curve.points();
    assert_eq!(points.len(), 4);
    assert_close(points[0].y, 0.0);
    assert_close(points[1].y, 0.8);
    assert_close(points[2].y, 0.4);
    for point in points {
        assert!((0.0..=0.8 + 1e-12).contains(&point.y), "y out of range: {}", point.y);
    }

    let range = curve.value_range().expect("range");
    assert_close(range.min, 150.0);
    assert_close(range.max, 300.0);
}

#[test]
fn test_x_spans_unit_interval() {
    let curve = CurveProcessor::default().process(&ramp(1000));

    let points = curve.points();
    assert_close(points.first().unwrap().x, 0.0);
    assert_close(points.last().unwrap().x, 1.0);
    assert!(
        points.windows(2).all(|pair| pair[0].x < pair[1].x),
        "x must be strictly increasing"
    );
}

#[test]
fn test_constant_series_is_empty() {
    let curve = CurveProcessor::default().process(&[200.0; 120]);

    assert!(curve.is_empty(), "flat series has nothing to draw");
    assert!(curve.value_range().is_none());
}

#[test]
fn test_inexact_constants_are_empty() {
    let processor = CurveProcessor::default();

    for value in [0.1, 0.3, 7.7, 33.3, 29.88] {
        let curve = processor.process(&vec![value; 3000]);
        assert!(
            curve.is_empty(),
            "constant {value} produced {} points",
            curve.len()
        );
    }
}

#[test]
fn test_small_real_spread_is_still_drawn() {
    let series: Vec<f64> = (0..100).map(|index| if index < 50 { 0.0 } else { 0.001 }).collect();

    let curve = CurveProcessor::new(600, 1).process(&series);

    assert_eq!(curve.len(), 100);
    assert_close(curve.points()[99].y, 0.8);
}

#[test]
fn test_short_series_is_empty() {
    let processor = CurveProcessor::default();

    assert!(processor.process(&[]).is_empty());
    assert!(processor.process(&[250.0]).is_empty());
    assert!(
        processor.process(&[250.0, f64::NAN]).is_empty(),
        "one finite sample is not enough"
    );
}

#[test]
fn test_non_finite_samples_are_skipped() {
    let processor = CurveProcessor::new(600, 1);
    let curve = processor.process(&[100.0, f64::NAN, 200.0, f64::INFINITY, 300.0]);

    assert_eq!(curve.len(), 3);
    assert_close(curve.points()[1].y, 0.4);
}

#[test]
fn test_smoothing_runs_before_range_measurement() {
    // A lone spike is averaged down before normalization
    let mut series = vec![100.0; 10];
    series[5] = 200.0;

    let curve = CurveProcessor::new(600, 5).process(&series);
    let range = curve.value_range().expect("range");

    assert_close(range.max, 120.0);
    assert_close(range.min, 100.0);
}

#[test]
fn test_smooth_trailing_uses_partial_windows() {
    let smoothed = smooth_trailing(&[2.0, 4.0, 6.0, 8.0], 3);

    assert_eq!(smoothed.len(), 4);
    assert_close(smoothed[0], 2.0);
    assert_close(smoothed[1], 3.0);
    assert_close(smoothed[2], 4.0);
    assert_close(smoothed[3], 6.0);
}

#[test]
fn test_downsample_mean_averages_chunks() {
    let sampled = downsample_mean(&[1.0, 3.0, 5.0, 7.0, 9.0], 2);

    // Chunk size ceil(5 / 2) = 3, last chunk shorter
    assert_eq!(sampled.len(), 2);
    assert_close(sampled[0], 3.0);
    assert_close(sampled[1], 8.0);
}

#[test]
fn test_zero_configuration_is_clamped() {
    let processor = CurveProcessor::new(0, 0);

    assert_eq!(processor.max_points(), 1);
    assert_eq!(processor.smooth_window(), 1);
    assert!(
        processor.process(&ramp(50)).is_empty(),
        "a single averaged point is flat"
    );
}

#[test]
fn test_path_commands_start_with_move() {
    let curve = CurveProcessor::new(600, 1).process(&[1.0, 3.0, 2.0]);
    let commands = curve.path_commands();

    assert_eq!(commands.len(), 3);
    assert!(matches!(commands[0], PathCommand::MoveTo(_)));
    assert!(commands[1..]
        .iter()
        .all(|command| matches!(command, PathCommand::LineTo(_))));
}

#[test]
fn test_fill_polygon_closes_on_baseline() {
    let curve = CurveProcessor::new(600, 1).process(&[1.0, 3.0, 2.0]);
    let polygon = curve.fill_polygon();

    assert_eq!(polygon.len(), curve.len() + 2);
    let closing = &polygon[polygon.len() - 2..];
    assert_close(closing[0].x, 1.0);
    assert_close(closing[0].y, 0.0);
    assert_close(closing[1].x, 0.0);
    assert_close(closing[1].y, 0.0);
}

#[test]
fn test_empty_curve_has_no_geometry() {
    let curve = CurveProcessor::default().process(&[5.0]);

    assert!(curve.path_commands().is_empty());
    assert!(curve.fill_polygon().is_empty());
}

#[test]
fn test_value_range_rejects_flat_values() {
    assert!(ValueRange::from_values(&[]).is_none());
    assert!(ValueRange::from_values(&[4.0, 4.0]).is_none());
    assert!(
        ValueRange::from_values(&[0.1, 0.1 + 1.5e-16]).is_none(),
        "rounding residue is not a range"
    );

    let range = ValueRange::from_values(&[4.0, 2.0, 6.0]).unwrap();
    assert_close(range.span(), 4.0);
    assert!(range.contains(6.0));
    assert!(!range.contains(6.5));
}
