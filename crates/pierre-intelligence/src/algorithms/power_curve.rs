// ABOUTME: Log-scale power curve lookups: tap resolution, comparison overlay, axis ticks, key efforts
// ABOUTME: Classifies resolved efforts into FTP training zones for tooltips and statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Power Curve Resolution
//!
//! The power curve's x-axis maps effort duration logarithmically between the
//! first and last interval of the curve:
//!
//! ```text
//! x(interval) = (log10(interval) - log10(first)) / (log10(last) - log10(first))
//! ```
//!
//! A tap at fraction `f` targets `10^(log10(first) + f * span)` seconds and
//! resolves to the point whose interval is nearest by absolute difference in
//! seconds (ties go to the lower index). The returned x fraction is the
//! point's own position so a marker snaps onto the curve.
//!
//! All lookups are linear in the number of curve points.

use super::curve_processor::CurvePoint;
use pierre_core::constants::power_curve::KEY_EFFORT_INTERVALS;
use pierre_core::models::{PowerCurve, PowerCurvePoint, PowerZone};
use serde::{Deserialize, Serialize};

/// Classify power against FTP
///
/// `None` when FTP is zero, negative, or not finite.
#[must_use]
pub fn zone_for(power_watts: f64, ftp_watts: f64) -> Option<PowerZone> {
    PowerZone::for_power(power_watts, ftp_watts)
}

/// Logarithmic duration axis spanning a curve's first and last interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogAxis {
    log_min: f64,
    log_max: f64,
}

impl LogAxis {
    /// Axis between two interval durations in seconds
    #[must_use]
    pub fn new(first_seconds: u32, last_seconds: u32) -> Self {
        Self {
            log_min: f64::from(first_seconds.max(1)).log10(),
            log_max: f64::from(last_seconds.max(1)).log10(),
        }
    }

    /// Width of the axis in decades
    #[must_use]
    pub fn span(&self) -> f64 {
        self.log_max - self.log_min
    }

    /// Horizontal fraction of an interval (0 for a zero-width axis)
    #[must_use]
    pub fn fraction(&self, interval_seconds: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        (interval_seconds.log10() - self.log_min) / span
    }

    /// Interval in seconds at a horizontal fraction
    #[must_use]
    pub fn interval_at(&self, fraction: f64) -> f64 {
        10_f64.powf(self.span().mul_add(fraction, self.log_min))
    }
}

/// A curve point picked by a tap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSelection {
    /// Index of the point in the curve
    pub index: usize,
    /// The selected point
    pub point: PowerCurvePoint,
    /// The point's own horizontal fraction
    pub x_fraction: f64,
}

/// Tooltip content for a tapped power curve point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerCurveMarker {
    /// Duration label (`5s`, `20m`)
    pub interval_label: String,
    /// Effort duration in seconds
    pub interval_seconds: u32,
    /// Best power for the duration
    pub power_watts: f64,
    /// Heart rate during that effort
    pub heart_rate: Option<f64>,
    /// Zone relative to FTP, when an FTP is known
    pub zone: Option<PowerZone>,
    /// Horizontal fraction the marker snaps to
    pub x_fraction: f64,
}

/// Horizontal power gridline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    /// Power at the gridline
    pub power_watts: f64,
    /// Vertical fraction, 0 at the lowest power
    pub y_fraction: f64,
}

/// Peak power for one of the headline durations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEffort {
    /// Duration label
    pub label: String,
    /// Effort duration in seconds
    pub interval_seconds: u32,
    /// Best power for the duration
    pub power_watts: f64,
    /// Zone relative to FTP, when an FTP is known
    pub zone: Option<PowerZone>,
}

/// Query helper over a validated [`PowerCurve`]
#[derive(Debug, Clone, Copy)]
pub struct PowerCurveResolver<'a> {
    curve: &'a PowerCurve,
    axis: Option<LogAxis>,
}

impl<'a> PowerCurveResolver<'a> {
    /// Build a resolver for a curve
    #[must_use]
    pub fn new(curve: &'a PowerCurve) -> Self {
        let axis = curve
            .points()
            .first()
            .zip(curve.points().last())
            .map(|(first, last)| LogAxis::new(first.interval_seconds, last.interval_seconds));
        Self { curve, axis }
    }

    /// The underlying curve
    #[must_use]
    pub const fn curve(&self) -> &'a PowerCurve {
        self.curve
    }

    /// The log axis, `None` for an empty curve
    #[must_use]
    pub const fn axis(&self) -> Option<LogAxis> {
        self.axis
    }

    /// Resolve a tap at a horizontal fraction to the nearest curve point
    ///
    /// Fractions outside `[0, 1]` are clamped and NaN is treated as 0.
    /// Returns `None` for an empty curve; a single-point curve always
    /// resolves to that point at `x = 0`.
    #[must_use]
    pub fn resolve_tap(&self, tap_x_fraction: f64) -> Option<CurveSelection> {
        let axis = self.axis?;
        let fraction = if tap_x_fraction.is_nan() {
            0.0
        } else {
            tap_x_fraction.clamp(0.0, 1.0)
        };
        let target = axis.interval_at(fraction);

        let mut best: Option<(usize, f64)> = None;
        for (index, point) in self.curve.points().iter().enumerate() {
            let distance = (f64::from(point.interval_seconds) - target).abs();
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((index, distance));
            }
        }

        let (index, _) = best?;
        let point = self.curve.points().get(index)?.clone();
        let x_fraction = axis.fraction(f64::from(point.interval_seconds));
        Some(CurveSelection {
            index,
            point,
            x_fraction,
        })
    }

    /// Each point's power scaled by `factor`, at the curve's x positions
    ///
    /// `y` carries watts, not a normalized fraction.
    #[must_use]
    pub fn comparison_series(&self, factor: f64) -> Vec<CurvePoint> {
        self.positioned(|point| point.power_watts * factor)
    }

    /// Curve coordinates with `y` normalized to the power range
    ///
    /// Empty when the curve is empty or every power value is equal.
    #[must_use]
    pub fn render_points(&self) -> Vec<CurvePoint> {
        let Some((min, max)) = self.drawable_range() else {
            return Vec::new();
        };
        self.positioned(|point| (point.power_watts - min) / (max - min))
    }

    /// Vertical fraction of an FTP reference line
    ///
    /// `None` when the FTP lies outside the curve's power range or the range
    /// is flat.
    #[must_use]
    pub fn threshold_fraction(&self, ftp_watts: f64) -> Option<f64> {
        let (min, max) = self.drawable_range()?;
        (min..=max)
            .contains(&ftp_watts)
            .then(|| (ftp_watts - min) / (max - min))
    }

    /// Evenly spaced power gridlines from the maximum down to the minimum
    ///
    /// `count` below 2 is raised to 2. Empty for an empty or flat curve.
    #[must_use]
    pub fn power_axis_ticks(&self, count: usize) -> Vec<AxisTick> {
        let Some((min, max)) = self.drawable_range() else {
            return Vec::new();
        };
        let count = count.max(2);
        let step = (max - min) / (count - 1) as f64;
        (0..count)
            .map(|index| {
                let power_watts = (index as f64).mul_add(-step, max);
                AxisTick {
                    power_watts,
                    y_fraction: (power_watts - min) / (max - min),
                }
            })
            .collect()
    }

    /// Peak power at 5 s, 1 min, 5 min, and 20 min
    ///
    /// Durations missing from the curve are skipped. `ftp_watts` overrides
    /// the curve's reference FTP for zone classification.
    #[must_use]
    pub fn key_efforts(&self, ftp_watts: Option<f64>) -> Vec<KeyEffort> {
        let ftp = ftp_watts.or_else(|| self.curve.user_ftp());
        KEY_EFFORT_INTERVALS
            .iter()
            .filter_map(|&interval| self.curve.point_at(interval))
            .map(|point| KeyEffort {
                label: point.label.clone(),
                interval_seconds: point.interval_seconds,
                power_watts: point.power_watts,
                zone: ftp.and_then(|ftp| zone_for(point.power_watts, ftp)),
            })
            .collect()
    }

    /// Resolve a tap and classify the selected effort
    ///
    /// `ftp_watts` overrides the curve's reference FTP.
    #[must_use]
    pub fn marker_for_tap(
        &self,
        tap_x_fraction: f64,
        ftp_watts: Option<f64>,
    ) -> Option<PowerCurveMarker> {
        let selection = self.resolve_tap(tap_x_fraction)?;
        let ftp = ftp_watts.or_else(|| self.curve.user_ftp());
        let CurveSelection {
            point, x_fraction, ..
        } = selection;
        Some(PowerCurveMarker {
            zone: ftp.and_then(|ftp| zone_for(point.power_watts, ftp)),
            interval_label: point.label,
            interval_seconds: point.interval_seconds,
            power_watts: point.power_watts,
            heart_rate: point.heart_rate,
            x_fraction,
        })
    }

    fn positioned(&self, y: impl Fn(&PowerCurvePoint) -> f64) -> Vec<CurvePoint> {
        let Some(axis) = self.axis else {
            return Vec::new();
        };
        self.curve
            .points()
            .iter()
            .map(|point| {
                CurvePoint::new(axis.fraction(f64::from(point.interval_seconds)), y(point))
            })
            .collect()
    }

    fn drawable_range(&self) -> Option<(f64, f64)> {
        self.curve
            .power_range()
            .filter(|(min, max)| max - min > 0.0)
    }
}
