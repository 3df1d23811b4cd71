// ABOUTME: Power curve reference data (best power per effort duration) supplied pre-computed by the server
// ABOUTME: Validates ascending positive intervals and converts the columnar server payload into points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// One duration bucket of a power curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerCurvePoint {
    /// Effort duration in seconds
    pub interval_seconds: u32,
    /// Best mean power sustained for that duration
    pub power_watts: f64,
    /// Heart rate during that effort, when the server supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
    /// Display label (`5s`, `1m`, `20m`, `1h`)
    pub label: String,
}

impl PowerCurvePoint {
    /// Create a point with a generated label and no heart rate
    #[must_use]
    pub fn new(interval_seconds: u32, power_watts: f64) -> Self {
        Self {
            interval_seconds,
            power_watts,
            heart_rate: None,
            label: format_interval_label(interval_seconds),
        }
    }

    /// Attach a heart rate
    #[must_use]
    pub fn with_heart_rate(mut self, heart_rate: f64) -> Self {
        self.heart_rate = Some(heart_rate);
        self
    }

    /// Override the label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Validated power curve plus the athlete's reference FTP
///
/// Intervals are positive and non-decreasing, power values are finite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerCurve {
    points: Vec<PowerCurvePoint>,
    user_ftp: Option<f64>,
}

impl PowerCurve {
    /// Build a curve from points already ordered by interval
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when an interval is zero or a power value is
    /// not finite, and `InvalidInput` when intervals decrease.
    pub fn new(points: Vec<PowerCurvePoint>, user_ftp: Option<f64>) -> AppResult<Self> {
        for (index, point) in points.iter().enumerate() {
            if point.interval_seconds == 0 {
                return Err(AppError::value_out_of_range(
                    "Power curve intervals must be greater than zero",
                )
                .with_details(json!({ "index": index })));
            }
            if !point.power_watts.is_finite() {
                return Err(AppError::value_out_of_range(format!(
                    "Power value for {} is not a finite number",
                    point.label
                ))
                .with_details(json!({ "index": index })));
            }
        }

        if let Some(index) = points
            .windows(2)
            .position(|pair| pair[1].interval_seconds < pair[0].interval_seconds)
        {
            return Err(AppError::invalid_input(
                "Power curve intervals must be in ascending order",
            )
            .with_details(json!({ "index": index + 1 })));
        }

        Ok(Self { points, user_ftp })
    }

    /// Build a curve from the server's parallel arrays
    ///
    /// Heart rates may be shorter than the intervals (missing trailing values
    /// become `None`); missing labels are generated from the interval.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the power column length differs from the
    /// interval column, or whatever [`PowerCurve::new`] rejects the points with.
    pub fn from_columns(
        intervals: &[u32],
        power_values: &[f64],
        heart_rates: &[f64],
        labels: &[String],
        user_ftp: Option<f64>,
    ) -> AppResult<Self> {
        if intervals.len() != power_values.len() {
            return Err(AppError::invalid_format(format!(
                "Power curve has {} intervals but {} power values",
                intervals.len(),
                power_values.len()
            )));
        }

        let points = intervals
            .iter()
            .zip(power_values)
            .enumerate()
            .map(|(index, (&interval_seconds, &power_watts))| PowerCurvePoint {
                interval_seconds,
                power_watts,
                heart_rate: heart_rates.get(index).copied(),
                label: labels
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| format_interval_label(interval_seconds)),
            })
            .collect();

        Self::new(points, user_ftp)
    }

    /// Points in ascending interval order
    #[must_use]
    pub fn points(&self) -> &[PowerCurvePoint] {
        &self.points
    }

    /// Reference FTP supplied with the curve
    #[must_use]
    pub const fn user_ftp(&self) -> Option<f64> {
        self.user_ftp
    }

    /// Point with exactly this interval, if present
    #[must_use]
    pub fn point_at(&self, interval_seconds: u32) -> Option<&PowerCurvePoint> {
        self.points
            .iter()
            .find(|point| point.interval_seconds == interval_seconds)
    }

    /// Smallest and largest power values
    #[must_use]
    pub fn power_range(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?.power_watts;
        Some(self.points.iter().fold((first, first), |(min, max), point| {
            (min.min(point.power_watts), max.max(point.power_watts))
        }))
    }

    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Columnar power curve as delivered by the power curve endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerCurveColumns {
    /// Interval durations in seconds
    pub intervals: Vec<u32>,
    /// Best power per interval
    #[serde(alias = "powerValues")]
    pub power_values: Vec<f64>,
    /// Heart rate per interval (may be shorter or empty)
    #[serde(default, alias = "hrValues")]
    pub hr_values: Vec<f64>,
    /// Display labels per interval (may be empty)
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Athlete reference values sent alongside the curve
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Functional threshold power in watts
    #[serde(default, alias = "userFtp")]
    pub user_ftp: Option<f64>,
}

/// Full power curve payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerCurveResponse {
    /// The curve columns
    #[serde(alias = "powerCurve")]
    pub power_curve: PowerCurveColumns,
    /// Reference values
    #[serde(default, alias = "referenceData")]
    pub reference_data: ReferenceData,
}

impl PowerCurveResponse {
    /// Parse a JSON payload and validate it into a [`PowerCurve`]
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON, otherwise the
    /// validation failures of [`PowerCurveResponse::into_curve`].
    pub fn from_json(text: &str) -> AppResult<PowerCurve> {
        let response: Self = serde_json::from_str(text)?;
        response.into_curve()
    }

    /// Validate the payload into a [`PowerCurve`]
    ///
    /// # Errors
    ///
    /// Propagates validation failures from [`PowerCurve::from_columns`].
    pub fn into_curve(self) -> AppResult<PowerCurve> {
        PowerCurve::from_columns(
            &self.power_curve.intervals,
            &self.power_curve.power_values,
            &self.power_curve.hr_values,
            &self.power_curve.labels,
            self.reference_data.user_ftp,
        )
    }
}

/// Compact duration label: `5s`, `1m`, `1m30s`, `20m`, `1h`, `1h30m`
#[must_use]
pub fn format_interval_label(interval_seconds: u32) -> String {
    let minutes = interval_seconds / SECONDS_PER_MINUTE;
    let seconds = interval_seconds % SECONDS_PER_MINUTE;
    if interval_seconds < SECONDS_PER_MINUTE {
        format!("{interval_seconds}s")
    } else if interval_seconds < SECONDS_PER_HOUR {
        if seconds == 0 {
            format!("{minutes}m")
        } else {
            format!("{minutes}m{seconds}s")
        }
    } else {
        let hours = interval_seconds / SECONDS_PER_HOUR;
        let rest_minutes = (interval_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        if rest_minutes == 0 {
            format!("{hours}h")
        } else {
            format!("{hours}h{rest_minutes}m")
        }
    }
}
