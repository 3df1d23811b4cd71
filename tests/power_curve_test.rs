// ABOUTME: Integration tests for power curve tap resolution, zones, overlays, and payload validation
// ABOUTME: Uses a five-point curve from 5 seconds to one hour with a 250 W reference FTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_telemetry::algorithms::power_curve::{zone_for, LogAxis, PowerCurveResolver};
use pierre_telemetry::errors::ErrorCode;
use pierre_telemetry::models::{
    format_interval_label, is_power_curve_eligible, PowerCurve, PowerCurvePoint,
    PowerCurveResponse, PowerZone, SportType,
};
use serde_json::json;

const INTERVALS: [u32; 5] = [5, 60, 300, 1200, 3600];
const POWER: [f64; 5] = [900.0, 450.0, 320.0, 280.0, 240.0];

fn sample_curve() -> PowerCurve {
    PowerCurve::from_columns(&INTERVALS, &POWER, &[180.0, 175.0], &[], Some(250.0))
        .expect("valid curve")
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_zone_lower_bounds_are_inclusive() {
    assert_eq!(zone_for(225.0, 250.0), Some(PowerZone::Threshold));
    assert_eq!(zone_for(224.9, 250.0), Some(PowerZone::Tempo));
    assert_eq!(zone_for(375.0, 250.0), Some(PowerZone::Neuromuscular));
    assert_eq!(zone_for(0.0, 250.0), Some(PowerZone::Recovery));
}

#[test]
fn test_zone_requires_positive_ftp() {
    assert_eq!(zone_for(200.0, 0.0), None);
    assert_eq!(zone_for(200.0, -10.0), None);
    assert_eq!(zone_for(200.0, f64::NAN), None);
}

#[test]
fn test_zone_labels() {
    assert_eq!(PowerZone::Threshold.label(), "Zone 4 (Threshold)");
    assert_eq!(PowerZone::Vo2Max.to_string(), "Zone 5 (VO2 Max)");
    assert!(PowerZone::Recovery < PowerZone::Neuromuscular);
}

#[test]
fn test_tap_at_edges_selects_first_and_last() {
    let curve = sample_curve();
    let resolver = PowerCurveResolver::new(&curve);

    let first = resolver.resolve_tap(0.0).unwrap();
    assert_eq!(first.index, 0);
    assert_eq!(first.point.interval_seconds, 5);
    assert_close(first.x_fraction, 0.0);

    let last = resolver.resolve_tap(1.0).unwrap();
    assert_eq!(last.index, 4);
    assert_eq!(last.point.interval_seconds, 3600);
    assert_close(last.x_fraction, 1.0);
}

#[test]
fn test_tap_midpoint_resolves_by_seconds() {
    let curve = sample_curve();
    let resolver = PowerCurveResolver::new(&curve);

    // Target is sqrt(5 * 3600) ~ 134 s, nearest in seconds is 60 s
    let selection = resolver.resolve_tap(0.5).unwrap();
    assert_eq!(selection.index, 1);
    assert_eq!(selection.point.interval_seconds, 60);

    let expected_x = (60_f64.log10() - 5_f64.log10()) / (3600_f64.log10() - 5_f64.log10());
    assert_close(selection.x_fraction, expected_x);
}

#[test]
fn test_tap_outside_range_is_clamped() {
    let curve = sample_curve();
    let resolver = PowerCurveResolver::new(&curve);

    assert_eq!(resolver.resolve_tap(-0.5).unwrap().index, 0);
    assert_eq!(resolver.resolve_tap(3.0).unwrap().index, 4);
    assert_eq!(resolver.resolve_tap(f64::NAN).unwrap().index, 0);
}

#[test]
fn test_empty_curve_resolves_nothing() {
    let curve = PowerCurve::default();
    let resolver = PowerCurveResolver::new(&curve);

    assert!(resolver.axis().is_none());
    assert!(resolver.resolve_tap(0.5).is_none());
    assert!(resolver.comparison_series(0.9).is_empty());
    assert!(resolver.render_points().is_empty());
    assert!(resolver.power_axis_ticks(6).is_empty());
    assert!(resolver.key_efforts(Some(250.0)).is_empty());
}

#[test]
fn test_single_point_curve_always_resolves_it() {
    let curve = PowerCurve::new(vec![PowerCurvePoint::new(60, 400.0)], None).unwrap();
    let resolver = PowerCurveResolver::new(&curve);

    for tap in [0.0, 0.3, 1.0] {
        let selection = resolver.resolve_tap(tap).unwrap();
        assert_eq!(selection.index, 0);
        assert_close(selection.x_fraction, 0.0);
    }
    assert!(resolver.render_points().is_empty(), "single point is flat");
}

#[test]
fn test_log_axis_round_trips_fraction() {
    let axis = LogAxis::new(5, 3600);

    assert_close(axis.fraction(5.0), 0.0);
    assert_close(axis.fraction(3600.0), 1.0);
    assert!((axis.interval_at(0.5) - 18000_f64.sqrt()).abs() < 1e-6);
    assert_close(LogAxis::new(60, 60).fraction(60.0), 0.0);
}

#[test]
fn test_comparison_series_scales_power() {
    let curve = sample_curve();
    let resolver = PowerCurveResolver::new(&curve);

    let comparison = resolver.comparison_series(0.9);
    let rendered = resolver.render_points();

    assert_eq!(comparison.len(), 5);
    assert_close(comparison[0].y, 810.0);
    assert_close(comparison[4].y, 216.0);
    for (scaled, point) in comparison.iter().zip(&rendered) {
        assert_close(scaled.x, point.x);
    }
}

#[test]
fn test_render_points_are_normalized() {
    let curve = sample_curve();
    let points = PowerCurveResolver::new(&curve).render_points();

    assert_close(points[0].y, 1.0);
    assert_close(points[4].y, 0.0);
    assert_close(points[1].y, (450.0 - 240.0) / 660.0);
}

#[test]
fn test_threshold_fraction_within_range() {
    let curve = sample_curve();
    let resolver = PowerCurveResolver::new(&curve);

    assert_close(resolver.threshold_fraction(250.0).unwrap(), 10.0 / 660.0);
    assert!(resolver.threshold_fraction(1000.0).is_none());
    assert!(resolver.threshold_fraction(100.0).is_none());
}

#[test]
fn test_axis_ticks_descend_from_max() {
    let curve = sample_curve();
    let resolver = PowerCurveResolver::new(&curve);

    let ticks = resolver.power_axis_ticks(6);
    assert_eq!(ticks.len(), 6);
    assert_close(ticks[0].power_watts, 900.0);
    assert_close(ticks[0].y_fraction, 1.0);
    assert_close(ticks[5].power_watts, 240.0);
    assert_close(ticks[5].y_fraction, 0.0);

    assert_eq!(resolver.power_axis_ticks(0).len(), 2, "count raised to two");
}

#[test]
fn test_key_efforts_use_reference_ftp() {
    let curve = sample_curve();
    let efforts = PowerCurveResolver::new(&curve).key_efforts(None);

    let labels: Vec<&str> = efforts.iter().map(|effort| effort.label.as_str()).collect();
    assert_eq!(labels, vec!["5s", "1m", "5m", "20m"]);

    let zones: Vec<Option<PowerZone>> = efforts.iter().map(|effort| effort.zone).collect();
    assert_eq!(
        zones,
        vec![
            Some(PowerZone::Neuromuscular),
            Some(PowerZone::Neuromuscular),
            Some(PowerZone::Anaerobic),
            Some(PowerZone::Vo2Max),
        ]
    );
}

#[test]
fn test_key_efforts_ftp_override_and_gaps() {
    let curve = sample_curve();
    let efforts = PowerCurveResolver::new(&curve).key_efforts(Some(300.0));
    assert_eq!(efforts[3].zone, Some(PowerZone::Threshold));

    let sparse = PowerCurve::new(
        vec![PowerCurvePoint::new(5, 800.0), PowerCurvePoint::new(30, 500.0)],
        None,
    )
    .unwrap();
    let sparse_efforts = PowerCurveResolver::new(&sparse).key_efforts(None);
    assert_eq!(sparse_efforts.len(), 1);
    assert_eq!(sparse_efforts[0].zone, None, "no FTP, no zone");
}

#[test]
fn test_marker_for_tap_carries_heart_rate_and_zone() {
    let curve = sample_curve();
    let resolver = PowerCurveResolver::new(&curve);

    let marker = resolver.marker_for_tap(0.5, None).unwrap();
    assert_eq!(marker.interval_label, "1m");
    assert_eq!(marker.heart_rate, Some(175.0));
    assert_eq!(marker.zone, Some(PowerZone::Neuromuscular));

    let late = resolver.marker_for_tap(1.0, None).unwrap();
    assert_eq!(late.heart_rate, None, "heart rate column is shorter");
    assert_eq!(late.zone, Some(PowerZone::Threshold));
}

#[test]
fn test_from_columns_rejects_malformed_payloads() {
    let mismatched = PowerCurve::from_columns(&[5, 60], &[500.0], &[], &[], None).unwrap_err();
    assert_eq!(mismatched.code, ErrorCode::InvalidFormat);

    let descending =
        PowerCurve::from_columns(&[60, 5], &[300.0, 500.0], &[], &[], None).unwrap_err();
    assert_eq!(descending.code, ErrorCode::InvalidInput);
    assert_eq!(descending.details, json!({ "index": 1 }));

    let zero = PowerCurve::from_columns(&[0, 5], &[300.0, 500.0], &[], &[], None).unwrap_err();
    assert_eq!(zero.code, ErrorCode::ValueOutOfRange);

    let non_finite =
        PowerCurve::from_columns(&[5, 60], &[f64::NAN, 500.0], &[], &[], None).unwrap_err();
    assert_eq!(non_finite.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_from_json_reports_parse_and_validation_errors() {
    let curve = PowerCurveResponse::from_json(
        r#"{"powerCurve": {"intervals": [5, 60], "powerValues": [800.0, 400.0]},
            "referenceData": {"userFtp": 250.0}}"#,
    )
    .unwrap();
    assert_eq!(curve.len(), 2);
    assert_eq!(curve.user_ftp(), Some(250.0));

    let malformed = PowerCurveResponse::from_json("{\"powerCurve\": [").unwrap_err();
    assert_eq!(malformed.code, ErrorCode::SerializationError);
    assert!(malformed.source.is_some(), "serde error is chained");

    let mismatched =
        PowerCurveResponse::from_json(r#"{"powerCurve": {"intervals": [5], "powerValues": []}}"#)
            .unwrap_err();
    assert_eq!(mismatched.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_response_payload_converts_to_curve() {
    let response: PowerCurveResponse = serde_json::from_value(json!({
        "powerCurve": {
            "intervals": [5, 60, 300],
            "powerValues": [850.0, 420.0, 310.0],
            "hrValues": [170.0],
            "labels": ["5s", "1 min"]
        },
        "referenceData": { "userFtp": 260.0 }
    }))
    .unwrap();

    let curve = response.into_curve().unwrap();
    assert_eq!(curve.len(), 3);
    assert_eq!(curve.user_ftp(), Some(260.0));
    assert_eq!(curve.points()[1].label, "1 min");
    assert_eq!(curve.points()[2].label, "5m", "missing labels are generated");
    assert_eq!(curve.points()[1].heart_rate, None);
    assert_eq!(curve.power_range(), Some((310.0, 850.0)));
}

#[test]
fn test_interval_labels() {
    assert_eq!(format_interval_label(5), "5s");
    assert_eq!(format_interval_label(60), "1m");
    assert_eq!(format_interval_label(90), "1m30s");
    assert_eq!(format_interval_label(1200), "20m");
    assert_eq!(format_interval_label(3600), "1h");
    assert_eq!(format_interval_label(5400), "1h30m");
}

#[test]
fn test_power_curve_eligibility() {
    assert!(is_power_curve_eligible(Some("Ride")));
    assert!(is_power_curve_eligible(Some("VirtualRide")));
    assert!(is_power_curve_eligible(Some("cycling")));
    assert!(!is_power_curve_eligible(Some("Run")));
    assert!(!is_power_curve_eligible(None));

    assert!(SportType::from_provider_string("virtualride").supports_power_curve());
    assert!(!SportType::from_provider_string("swim").supports_power_curve());
}
