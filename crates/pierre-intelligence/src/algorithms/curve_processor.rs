// ABOUTME: Turns one metric series into renderable chart coordinates
// ABOUTME: Trailing moving average, chunk-mean downsampling, and [0, 0.8] normalization in that order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Curve processing for activity charts
//!
//! The pipeline order is fixed and affects the output: smoothing runs on the
//! full-resolution series, then chunks are averaged down to the point cap,
//! and only then is the value range measured for normalization. A series
//! that is too short or flat after reduction yields an empty curve, which
//! callers treat as "nothing to draw".

use crate::config::intelligence::CurveConfig;
use pierre_core::constants::curves::{
    DEFAULT_MAX_POINTS, DEFAULT_SMOOTH_WINDOW, FLAT_RELATIVE_TOLERANCE, MIN_RENDERABLE_SAMPLES,
    RENDER_HEADROOM,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// One chart coordinate
///
/// `x` is a fraction of the chart width in `[0, 1]`; `y` is a fraction of the
/// chart height in `[0, 0.8]` for metric curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Horizontal fraction
    pub x: f64,
    /// Vertical fraction
    pub y: f64,
}

impl CurvePoint {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Value range a curve was normalized against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Smallest sampled value (maps to `y = 0`)
    pub min: f64,
    /// Largest sampled value (maps to `y = 0.8`)
    pub max: f64,
}

impl ValueRange {
    /// Range of the values, `None` when empty or flat
    ///
    /// A spread within [`FLAT_RELATIVE_TOLERANCE`] of the larger magnitude
    /// (at least 1.0) is rounding residue and counts as flat.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let first = *values.first()?;
        let (min, max) = values
            .iter()
            .fold((first, first), |(min, max), &value| (min.min(value), max.max(value)));
        let magnitude = min.abs().max(max.abs()).max(1.0);
        let flat = max - min <= FLAT_RELATIVE_TOLERANCE * magnitude;
        (!flat).then_some(Self { min, max })
    }

    /// Distance between min and max
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Map a value into `[0, 0.8]` (values outside the range extrapolate)
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / self.span() * RENDER_HEADROOM
    }

    /// Whether the value lies within the range (bounds included)
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Path segment for the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    /// Start of the path
    MoveTo(CurvePoint),
    /// Straight segment to the point
    LineTo(CurvePoint),
}

/// Renderable curve derived from one metric series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderCurve {
    points: Vec<CurvePoint>,
    value_range: Option<ValueRange>,
}

impl RenderCurve {
    /// Curve with nothing to draw
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            points: Vec::new(),
            value_range: None,
        }
    }

    /// Points in ascending x order
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Sampled value range used for normalization (`None` when empty)
    #[must_use]
    pub const fn value_range(&self) -> Option<ValueRange> {
        self.value_range
    }

    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there is nothing to draw
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Straight-line path: first point moves, the rest draw lines
    #[must_use]
    pub fn path_commands(&self) -> Vec<PathCommand> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, &point)| {
                if index == 0 {
                    PathCommand::MoveTo(point)
                } else {
                    PathCommand::LineTo(point)
                }
            })
            .collect()
    }

    /// Area under the curve, closed along the baseline
    ///
    /// Empty for an empty curve.
    #[must_use]
    pub fn fill_polygon(&self) -> Vec<CurvePoint> {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return Vec::new();
        };
        let mut polygon = Vec::with_capacity(self.points.len() + 2);
        polygon.extend_from_slice(&self.points);
        polygon.push(CurvePoint::new(last.x, 0.0));
        polygon.push(CurvePoint::new(first.x, 0.0));
        polygon
    }
}

/// Smooths, downsamples, and normalizes metric series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveProcessor {
    max_points: usize,
    smooth_window: usize,
}

impl Default for CurveProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_POINTS, DEFAULT_SMOOTH_WINDOW)
    }
}

impl CurveProcessor {
    /// Create a processor (zero caps are treated as one)
    #[must_use]
    pub fn new(max_points: usize, smooth_window: usize) -> Self {
        Self {
            max_points: max_points.max(1),
            smooth_window: smooth_window.max(1),
        }
    }

    /// Create a processor from curve configuration
    #[must_use]
    pub fn from_config(config: &CurveConfig) -> Self {
        Self::new(config.max_points, config.smooth_window)
    }

    /// Maximum number of output points
    #[must_use]
    pub const fn max_points(&self) -> usize {
        self.max_points
    }

    /// Moving-average window in samples
    #[must_use]
    pub const fn smooth_window(&self) -> usize {
        self.smooth_window
    }

    /// Process a series into a render curve
    ///
    /// Non-finite samples are skipped. Returns an empty curve when fewer than
    /// two samples remain or the downsampled series is flat.
    #[must_use]
    pub fn process(&self, series: &[f64]) -> RenderCurve {
        let finite: Vec<f64> = series.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.len() < MIN_RENDERABLE_SAMPLES {
            return RenderCurve::empty();
        }

        let smoothed = smooth_trailing(&finite, self.smooth_window);
        let sampled = downsample_mean(&smoothed, self.max_points);
        let Some(range) = ValueRange::from_values(&sampled) else {
            trace!(samples = finite.len(), "Flat series, no curve rendered");
            return RenderCurve::empty();
        };

        let last_index = sampled.len().saturating_sub(1).max(1) as f64;
        let points = sampled
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                CurvePoint::new(index as f64 / last_index, range.normalize(value))
            })
            .collect();

        RenderCurve {
            points,
            value_range: Some(range),
        }
    }
}

/// Trailing moving average with partial windows at the start
///
/// Output has the same length as the input. Index `i` averages the samples
/// `max(0, i + 1 - window)..=i`. Runs in O(n) with a running sum.
#[must_use]
pub fn smooth_trailing(series: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    let mut sum = 0.0;
    series
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            sum += value;
            if index >= window {
                sum -= series[index - window];
            }
            let count = (index + 1).min(window);
            sum / count as f64
        })
        .collect()
}

/// Average contiguous chunks so at most `max_points` values remain
///
/// The chunk size is `ceil(len / max_points)`; the last chunk may be shorter.
/// A floor factor would let up to `2 * max_points - 1` values through (601
/// samples stay 601 with a cap of 600); the ceiling keeps the cap strict, so
/// 601 samples become 301 points.
#[must_use]
pub fn downsample_mean(values: &[f64], max_points: usize) -> Vec<f64> {
    let factor = values.len().div_ceil(max_points.max(1)).max(1);
    values
        .chunks(factor)
        .map(|chunk| chunk.iter().sum::<f64>() / chunk.len() as f64)
        .collect()
}
