// ABOUTME: Integration tests for the TelemetryEngine facade and chart overlays
// ABOUTME: Exercises the full pipeline from raw streams to curves, markers, power curves, and routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_telemetry::algorithms::stream_aggregator::combine;
use pierre_telemetry::config::intelligence::CurveConfig;
use pierre_telemetry::models::{PowerCurve, PowerCurvePoint, RawStreamSet, StreamKind};
use pierre_telemetry::{ChartOverlay, ConfigError, TelemetryConfig, TelemetryEngine};
use std::thread;

fn ride_streams(samples: usize) -> RawStreamSet {
    let wave = |index: usize, base: f64, amplitude: f64| {
        (index as f64 / 30.0).sin().mul_add(amplitude, base)
    };
    RawStreamSet::new()
        .with_series("altitude", (0..samples).map(|i| wave(i, 300.0, 40.0)))
        .with_series("watts", (0..samples).map(|i| wave(i, 230.0, 80.0)))
        .with_series("heartrate", (0..samples).map(|i| wave(i, 145.0, 15.0)))
        .with_series("cadence", (0..samples).map(|_| 90.0))
}

#[test]
fn test_render_all_keeps_canonical_order() {
    let metrics = combine(&ride_streams(1800));
    let curves = TelemetryEngine::default().render_all(&metrics);

    let kinds: Vec<StreamKind> = curves.iter().map(|metric| metric.kind).collect();
    assert_eq!(
        kinds,
        vec![
            StreamKind::Power,
            StreamKind::HeartRate,
            StreamKind::Cadence,
            StreamKind::Altitude,
        ]
    );
    assert!(
        curves[2].curve.is_empty(),
        "constant cadence renders as an empty curve"
    );
    assert!(curves
        .iter()
        .filter(|metric| metric.kind != StreamKind::Cadence)
        .all(|metric| metric.curve.len() == 600));
}

#[test]
fn test_render_metric_absent_kind() {
    let metrics = combine(&ride_streams(100));
    let engine = TelemetryEngine::default();

    assert!(engine.render_metric(&metrics, StreamKind::Speed).is_none());
    assert!(engine.render_metric(&metrics, StreamKind::Power).is_some());
}

#[test]
fn test_steady_converted_speed_renders_empty() {
    let raw = RawStreamSet::new().with_series("velocity_smooth", (0..2000).map(|_| 8.3));
    let metrics = combine(&raw);

    let curve = TelemetryEngine::default()
        .render_metric(&metrics, StreamKind::Speed)
        .unwrap();

    assert!(curve.is_empty(), "steady 29.88 km/h is flat, got {} points", curve.len());
}

#[test]
fn test_custom_point_cap_is_applied() {
    let config = TelemetryConfig {
        curve: CurveConfig {
            max_points: 100,
            smooth_window: 10,
        },
        ..TelemetryConfig::default()
    };
    let engine = TelemetryEngine::new(config).unwrap();
    let metrics = combine(&ride_streams(1000));

    let curve = engine.render_metric(&metrics, StreamKind::Power).unwrap();
    assert_eq!(curve.len(), 100);
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let config = TelemetryConfig {
        curve: CurveConfig {
            max_points: 0,
            smooth_window: 60,
        },
        ..TelemetryConfig::default()
    };

    assert!(matches!(
        TelemetryEngine::new(config),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_overlay_for_power_curve() {
    let metrics = combine(&ride_streams(1800));
    let engine = TelemetryEngine::default();
    let curves = engine.render_all(&metrics);
    let power = curves
        .iter()
        .find(|metric| metric.kind == StreamKind::Power)
        .unwrap();

    let overlay = ChartOverlay::for_metric(power, Some(250.0), metrics.duration_seconds());

    assert!(!overlay.bands.is_empty());
    assert!(overlay.threshold_y.is_some(), "250 W lies inside the power range");
    assert_eq!(overlay.time_grid.len(), 6, "1799 s gets a 300 s grid");
}

#[test]
fn test_overlay_without_threshold_only_has_grid() {
    let metrics = combine(&ride_streams(600));
    let curves = TelemetryEngine::default().render_all(&metrics);
    let altitude = curves.last().unwrap();

    let with_threshold = ChartOverlay::for_metric(altitude, Some(300.0), 599.0);
    assert!(with_threshold.bands.is_empty(), "altitude has no zones");
    assert!(with_threshold.threshold_y.is_some());

    let bare = ChartOverlay::for_metric(altitude, None, 599.0);
    assert!(bare.bands.is_empty());
    assert!(bare.threshold_y.is_none());
    assert_eq!(bare.time_grid.len(), 10);
}

#[test]
fn test_marker_uses_configured_rounding() {
    let metrics = combine(&ride_streams(101));
    let mut config = TelemetryConfig::default();
    config.markers.time_rounding_secs = 30;
    let engine = TelemetryEngine::new(config).unwrap();

    let marker = engine.marker_at(&metrics, 0.47).unwrap();

    assert_eq!(marker.index, 47);
    assert_eq!(marker.time_label, "1:00", "47 s rounds to a minute");
    assert!(marker.power.is_some());
}

#[test]
fn test_power_curve_overlays_follow_configuration() {
    let curve = PowerCurve::new(
        vec![
            PowerCurvePoint::new(5, 1000.0),
            PowerCurvePoint::new(60, 500.0),
            PowerCurvePoint::new(1200, 300.0),
        ],
        Some(280.0),
    )
    .unwrap();
    let mut config = TelemetryConfig::default();
    config.power_curve.comparison_factor = 0.5;
    config.power_curve.axis_ticks = 3;
    let engine = TelemetryEngine::new(config).unwrap();

    let comparison = engine.comparison_series(&curve);
    assert!((comparison[1].y - 250.0).abs() < 1e-9);

    let ticks = engine.power_axis_ticks(&curve);
    assert_eq!(ticks.len(), 3);
    assert!((ticks[1].power_watts - 650.0).abs() < 1e-9);
}

#[test]
fn test_route_guard_uses_configured_cap() {
    let mut config = TelemetryConfig::default();
    config.route.point_cap = 1;
    let engine = TelemetryEngine::new(config).unwrap();

    assert_eq!(engine.decode_route("_p~iF~ps|U_ulLnnqC_mqNvxq`@").len(), 1);
    assert!(engine.decode_route("not a polyline").is_empty());
    assert_eq!(engine.route_from_pairs("1.0,2.0;3.0,4.0").len(), 1);
}

#[test]
fn test_engine_is_shared_across_threads() {
    let engine = TelemetryEngine::default();
    let metrics = combine(&ride_streams(900));

    let counts: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.render_all(&metrics).len()))
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    assert!(counts.iter().all(|&count| count == 4));
}
