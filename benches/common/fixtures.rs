// ABOUTME: Benchmark fixtures generating deterministic activity streams, power curves, and routes
// ABOUTME: Sizes match a one-hour ride recorded at 1 Hz
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic telemetry fixtures for reproducible benchmark runs.

use pierre_telemetry::models::{PowerCurve, RawStreamSet};
use serde_json::Value;

/// Predefined activity lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum RideLength {
    /// 10 minutes at 1 Hz
    Short,
    /// One hour at 1 Hz
    Hour,
    /// Four hours at 1 Hz
    Long,
}

impl RideLength {
    #[must_use]
    pub const fn samples(self) -> usize {
        match self {
            Self::Short => 600,
            Self::Hour => 3600,
            Self::Long => 14_400,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn wave(index: usize, base: f64, amplitude: f64, period: f64) -> f64 {
    (index as f64 / period).sin().mul_add(amplitude, base)
}

/// Power series with intervals on top of a slow drift
#[must_use]
pub fn power_series(samples: usize) -> Vec<f64> {
    (0..samples)
        .map(|index| wave(index, 220.0, 60.0, 45.0) + wave(index, 0.0, 25.0, 7.0))
        .collect()
}

/// Raw stream map with every supported metric and a few provider quirks
///
/// Every 97th heart rate sample is `null` and an unrecognized stream is
/// included so the aggregator exercises its filtering paths.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ride_streams(length: RideLength) -> RawStreamSet {
    let samples = length.samples();
    let heart_rate = (0..samples)
        .map(|index| {
            if index % 97 == 0 {
                Value::Null
            } else {
                Value::from(wave(index, 150.0, 12.0, 120.0))
            }
        })
        .collect();

    RawStreamSet::new()
        .with_series("time", (0..samples).map(|index| index as f64))
        .with_series("watts", power_series(samples))
        .with_raw("heartrate", heart_rate)
        .with_series("cadence", (0..samples).map(|i| wave(i, 88.0, 6.0, 30.0)))
        .with_series("velocity_smooth", (0..samples).map(|i| wave(i, 9.0, 1.5, 60.0)))
        .with_series("altitude", (0..samples).map(|i| wave(i, 400.0, 80.0, 900.0)))
        .with_series("temp", (0..samples).map(|_| 21.0))
}

/// Power curve with 40 intervals between 1 s and 4 h
///
/// # Panics
///
/// Never in practice: the generated intervals are positive and ascending.
#[must_use]
#[allow(clippy::expect_used, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn power_curve() -> PowerCurve {
    let intervals: Vec<u32> = (0..40)
        .map(|step| 1.27_f64.powi(step).round() as u32)
        .scan(0, |previous, interval: u32| {
            *previous = interval.max(*previous + 1);
            Some(*previous)
        })
        .collect();
    let power: Vec<f64> = intervals
        .iter()
        .map(|&seconds| 1100.0 / f64::from(seconds).powf(0.18))
        .collect();
    PowerCurve::from_columns(&intervals, &power, &[], &[], Some(260.0))
        .expect("generated curve is valid")
}

/// Encode a route in the polyline format
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn encoded_route(points: usize) -> String {
    let mut encoded = String::new();
    let mut previous = (0_i64, 0_i64);
    for index in 0..points {
        let angle = f64::from(u32::try_from(index).unwrap_or(u32::MAX)) / 50.0;
        let current = (
            angle.sin().mul_add(0.05, 45.0) * 1e5,
            angle.cos().mul_add(0.05, 7.0) * 1e5,
        );
        let current = (current.0.round() as i64, current.1.round() as i64);
        encode_value(current.0 - previous.0, &mut encoded);
        encode_value(current.1 - previous.1, &mut encoded);
        previous = current;
    }
    encoded
}

#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn encode_value(delta: i64, out: &mut String) {
    let zig_zag = if delta < 0 { !(delta << 1) } else { delta << 1 };
    let mut value = zig_zag as u64;
    while value >= 0x20 {
        out.push(char::from((((value & 0x1f) | 0x20) + 63) as u8));
        value >>= 5;
    }
    out.push(char::from((value + 63) as u8));
}
