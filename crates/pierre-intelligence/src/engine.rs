// ABOUTME: TelemetryEngine binds the telemetry algorithms to one validated configuration
// ABOUTME: Renders every present metric of an activity in parallel with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Telemetry Engine
//!
//! Thin facade over [`crate::algorithms`] so callers configure caps, windows,
//! and factors once. The engine holds no mutable state and can be shared
//! across threads.

use crate::algorithms::chart_overlay::{self, TimeGridLine, ZoneBand};
use crate::algorithms::curve_processor::{CurvePoint, CurveProcessor, RenderCurve};
use crate::algorithms::polyline;
use crate::algorithms::power_curve::{AxisTick, PowerCurveResolver};
use crate::algorithms::sample_marker::SampleMarker;
use crate::config::intelligence::{ConfigError, TelemetryConfig};
use pierre_core::models::{CombinedMetrics, GeoPoint, PowerCurve, StreamKind};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Render curve for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCurve {
    /// Which metric the curve shows
    pub kind: StreamKind,
    /// The curve (possibly empty)
    pub curve: RenderCurve,
}

/// Background decorations for one metric curve
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOverlay {
    /// Zone bands (power and heart rate only)
    pub bands: Vec<ZoneBand>,
    /// Normalized height of the threshold line, when it is in range
    pub threshold_y: Option<f64>,
    /// Vertical time gridlines
    pub time_grid: Vec<TimeGridLine>,
}

impl ChartOverlay {
    /// Zone bands, threshold line, and time grid behind a metric curve
    ///
    /// `threshold` is FTP for power and FTHR for heart rate; other metrics
    /// only get the threshold line and grid.
    #[must_use]
    pub fn for_metric(
        metric: &MetricCurve,
        threshold: Option<f64>,
        duration_seconds: f64,
    ) -> Self {
        let time_grid = chart_overlay::time_grid(duration_seconds);
        let (Some(range), Some(threshold)) = (metric.curve.value_range(), threshold) else {
            return Self {
                time_grid,
                ..Self::default()
            };
        };
        let bands = match metric.kind {
            StreamKind::Power => chart_overlay::power_zone_bands(&range, threshold),
            StreamKind::HeartRate => chart_overlay::heart_rate_zone_bands(&range, threshold),
            _ => Vec::new(),
        };
        Self {
            bands,
            threshold_y: chart_overlay::threshold_line(&range, threshold),
            time_grid,
        }
    }
}

/// Configured entry point to the telemetry algorithms
#[derive(Debug, Clone, Default)]
pub struct TelemetryEngine {
    config: TelemetryConfig,
    processor: CurveProcessor,
}

impl TelemetryEngine {
    /// Create an engine from a configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the configuration fails validation.
    pub fn new(config: TelemetryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let processor = CurveProcessor::from_config(&config.curve);
        Ok(Self { config, processor })
    }

    /// Create an engine from environment variables
    ///
    /// An invalid environment configuration is logged and replaced with the
    /// defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(TelemetryConfig::from_env()).unwrap_or_else(|error| {
            warn!(%error, "Invalid telemetry configuration, using defaults");
            Self::default()
        })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &TelemetryConfig {
        &self.config
    }

    /// Curve for one metric, `None` when the metric is absent
    #[must_use]
    pub fn render_metric(
        &self,
        metrics: &CombinedMetrics,
        kind: StreamKind,
    ) -> Option<RenderCurve> {
        metrics
            .series(kind)
            .map(|series| self.processor.process(series))
    }

    /// Curves for every present metric, in canonical metric order
    ///
    /// Metrics are processed in parallel; absent metrics are skipped and
    /// degenerate ones yield empty curves.
    #[must_use]
    pub fn render_all(&self, metrics: &CombinedMetrics) -> Vec<MetricCurve> {
        let kinds: Vec<StreamKind> = metrics.present_metrics().collect();
        let curves: Vec<MetricCurve> = kinds
            .par_iter()
            .filter_map(|&kind| {
                self.render_metric(metrics, kind)
                    .map(|curve| MetricCurve { kind, curve })
            })
            .collect();

        debug!(
            metrics = curves.len(),
            drawable = curves.iter().filter(|metric| !metric.curve.is_empty()).count(),
            "Rendered activity curves"
        );
        curves
    }

    /// Sample under a tap on the activity chart
    #[must_use]
    pub fn marker_at(&self, metrics: &CombinedMetrics, progress: f64) -> Option<SampleMarker> {
        let rounding = self.config.markers.time_rounding_secs;
        SampleMarker::at_fraction_rounded(metrics, progress, rounding)
    }

    /// Comparison overlay at the configured factor
    #[must_use]
    pub fn comparison_series(&self, curve: &PowerCurve) -> Vec<CurvePoint> {
        let factor = self.config.power_curve.comparison_factor;
        PowerCurveResolver::new(curve).comparison_series(factor)
    }

    /// Power gridlines at the configured count
    #[must_use]
    pub fn power_axis_ticks(&self, curve: &PowerCurve) -> Vec<AxisTick> {
        PowerCurveResolver::new(curve).power_axis_ticks(self.config.power_curve.axis_ticks)
    }

    /// Decode a polyline and apply the route render guard
    ///
    /// Empty when the polyline is malformed.
    #[must_use]
    pub fn decode_route(&self, encoded: &str) -> Vec<GeoPoint> {
        polyline::downsample_route(&polyline::decode(encoded), self.config.route.point_cap)
    }

    /// Parse a `lat,lng;lat,lng` route and apply the route render guard
    #[must_use]
    pub fn route_from_pairs(&self, pairs: &str) -> Vec<GeoPoint> {
        polyline::downsample_route(
            &polyline::parse_coordinate_pairs(pairs),
            self.config.route.point_cap,
        )
    }
}
