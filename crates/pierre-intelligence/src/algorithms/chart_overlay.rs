// ABOUTME: Background overlays for activity charts: zone bands, threshold lines, adaptive time grid
// ABOUTME: Bands and lines share the [0, 0.8] normalization of the curve they are drawn behind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::curve_processor::ValueRange;
use crate::physiological_constants::{heart_rate_bands, power_bands, time_grid as grid};
use serde::{Deserialize, Serialize};

/// Horizontal zone band behind a curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBand {
    /// Zone number, starting at 1
    pub zone: u8,
    /// Lower bound in metric units (before clipping)
    pub lower_value: f64,
    /// Upper bound in metric units (before clipping)
    pub upper_value: f64,
    /// Normalized bottom edge, clipped to the curve range
    pub lower_y: f64,
    /// Normalized top edge, clipped to the curve range
    pub upper_y: f64,
}

/// Vertical time gridline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeGridLine {
    /// Elapsed time at the line
    pub seconds: f64,
    /// Horizontal fraction
    pub x_fraction: f64,
}

/// Seven power zone bands relative to FTP
///
/// Only bands overlapping the curve's value range are returned. Empty when
/// FTP is not a positive number.
#[must_use]
pub fn power_zone_bands(range: &ValueRange, ftp_watts: f64) -> Vec<ZoneBand> {
    zone_bands(range, ftp_watts, &power_bands::FTP_FRACTIONS)
}

/// Five heart rate zone bands relative to FTHR
///
/// Only bands overlapping the curve's value range are returned. Empty when
/// FTHR is not a positive number.
#[must_use]
pub fn heart_rate_zone_bands(range: &ValueRange, fthr_bpm: f64) -> Vec<ZoneBand> {
    zone_bands(range, fthr_bpm, &heart_rate_bands::FTHR_FRACTIONS)
}

fn zone_bands(range: &ValueRange, threshold: f64, fractions: &[f64]) -> Vec<ZoneBand> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Vec::new();
    }
    fractions
        .windows(2)
        .zip(1_u8..)
        .filter_map(|(bounds, zone)| {
            let lower_value = threshold * bounds[0];
            let upper_value = threshold * bounds[1];
            if lower_value > range.max || upper_value < range.min {
                return None;
            }
            Some(ZoneBand {
                zone,
                lower_value,
                upper_value,
                lower_y: range.normalize(lower_value.max(range.min).min(range.max)),
                upper_y: range.normalize(upper_value.max(range.min).min(range.max)),
            })
        })
        .collect()
}

/// Normalized height of a threshold line (FTP, FTHR)
///
/// `None` when the value falls outside the curve's range.
#[must_use]
pub fn threshold_line(range: &ValueRange, value: f64) -> Option<f64> {
    range.contains(value).then(|| range.normalize(value))
}

/// Grid step in seconds for an activity duration
#[must_use]
pub fn time_grid_step(max_time_seconds: f64) -> f64 {
    if max_time_seconds <= grid::SHORT_ACTIVITY_SECS {
        grid::SHORT_STEP_SECS
    } else if max_time_seconds <= grid::MEDIUM_ACTIVITY_SECS {
        grid::MEDIUM_STEP_SECS
    } else if max_time_seconds <= grid::LONG_ACTIVITY_SECS {
        grid::LONG_STEP_SECS
    } else {
        max_time_seconds * grid::OPEN_ENDED_STEP_FRACTION
    }
}

/// Vertical gridlines from zero up to the activity duration
///
/// Empty for a non-positive or non-finite duration.
#[must_use]
pub fn time_grid(max_time_seconds: f64) -> Vec<TimeGridLine> {
    if !max_time_seconds.is_finite() || max_time_seconds <= 0.0 {
        return Vec::new();
    }
    let step = time_grid_step(max_time_seconds);
    // Tolerance keeps the closing line when the duration is an exact multiple
    let limit = step.mul_add(1e-9, max_time_seconds);
    (0_u32..)
        .map(|index| f64::from(index) * step)
        .take_while(|&seconds| seconds <= limit)
        .map(|seconds| TimeGridLine {
            seconds,
            x_fraction: (seconds / max_time_seconds).min(1.0),
        })
        .collect()
}
