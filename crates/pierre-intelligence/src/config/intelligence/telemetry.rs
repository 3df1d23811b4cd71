// ABOUTME: Telemetry rendering configuration (curve caps, smoothing, route guard, overlays, markers)
// ABOUTME: Loaded from environment variables with constant defaults and explicit validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Telemetry Configuration
//!
//! Environment-only configuration. `from_env` is lenient (unparsable values
//! fall back to defaults), `try_from_env` reports them as [`ConfigError`].

use super::error::ConfigError;
use pierre_core::constants::{curves, markers, power_curve, routes};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Environment variable for the curve downsampling cap
pub const ENV_CURVE_MAX_POINTS: &str = "TELEMETRY_CURVE_MAX_POINTS";
/// Environment variable for the moving-average window
pub const ENV_CURVE_SMOOTH_WINDOW: &str = "TELEMETRY_CURVE_SMOOTH_WINDOW";
/// Environment variable for the route render guard
pub const ENV_ROUTE_POINT_CAP: &str = "TELEMETRY_ROUTE_POINT_CAP";
/// Environment variable for the power curve comparison factor
pub const ENV_COMPARISON_FACTOR: &str = "TELEMETRY_COMPARISON_FACTOR";
/// Environment variable for marker time rounding
pub const ENV_MARKER_TIME_ROUNDING_SECS: &str = "TELEMETRY_MARKER_TIME_ROUNDING_SECS";

/// Telemetry configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Metric curve settings
    pub curve: CurveConfig,
    /// Route rendering settings
    pub route: RouteConfig,
    /// Power curve chart settings
    pub power_curve: PowerCurveConfig,
    /// Sample marker settings
    pub markers: MarkerConfig,
}

/// Smoothing and downsampling of metric curves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Maximum points per rendered curve
    pub max_points: usize,
    /// Trailing moving-average window in samples
    pub smooth_window: usize,
}

/// Route rendering guard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Routes longer than this are stride-sampled
    pub point_cap: usize,
}

/// Power curve overlays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerCurveConfig {
    /// Multiplier for the comparison overlay
    pub comparison_factor: f64,
    /// Number of power gridlines
    pub axis_ticks: usize,
}

/// Tap markers on the activity chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Marker times are rounded to this many seconds
    pub time_rounding_secs: u32,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            max_points: curves::DEFAULT_MAX_POINTS,
            smooth_window: curves::DEFAULT_SMOOTH_WINDOW,
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            point_cap: routes::DEFAULT_ROUTE_POINT_CAP,
        }
    }
}

impl Default for PowerCurveConfig {
    fn default() -> Self {
        Self {
            comparison_factor: power_curve::DEFAULT_COMPARISON_FACTOR,
            axis_ticks: power_curve::DEFAULT_AXIS_TICKS,
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            time_rounding_secs: markers::DEFAULT_TIME_ROUNDING_SECS,
        }
    }
}

impl TelemetryConfig {
    /// Load telemetry configuration from environment
    ///
    /// Missing or unparsable variables keep their defaults; unparsable ones
    /// are logged.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            curve: CurveConfig {
                max_points: lenient(ENV_CURVE_MAX_POINTS, defaults.curve.max_points),
                smooth_window: lenient(ENV_CURVE_SMOOTH_WINDOW, defaults.curve.smooth_window),
            },
            route: RouteConfig {
                point_cap: lenient(ENV_ROUTE_POINT_CAP, defaults.route.point_cap),
            },
            power_curve: PowerCurveConfig {
                comparison_factor: lenient(
                    ENV_COMPARISON_FACTOR,
                    defaults.power_curve.comparison_factor,
                ),
                axis_ticks: defaults.power_curve.axis_ticks,
            },
            markers: MarkerConfig {
                time_rounding_secs: lenient(
                    ENV_MARKER_TIME_ROUNDING_SECS,
                    defaults.markers.time_rounding_secs,
                ),
            },
        }
    }

    /// Load and validate telemetry configuration from environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for unparsable values, `ConfigError::EnvVar`
    /// for non-unicode values, and any error raised by [`validate`](Self::validate).
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            curve: CurveConfig {
                max_points: strict(ENV_CURVE_MAX_POINTS, defaults.curve.max_points)?,
                smooth_window: strict(ENV_CURVE_SMOOTH_WINDOW, defaults.curve.smooth_window)?,
            },
            route: RouteConfig {
                point_cap: strict(ENV_ROUTE_POINT_CAP, defaults.route.point_cap)?,
            },
            power_curve: PowerCurveConfig {
                comparison_factor: strict(
                    ENV_COMPARISON_FACTOR,
                    defaults.power_curve.comparison_factor,
                )?,
                axis_ticks: defaults.power_curve.axis_ticks,
            },
            markers: MarkerConfig {
                time_rounding_secs: strict(
                    ENV_MARKER_TIME_ROUNDING_SECS,
                    defaults.markers.time_rounding_secs,
                )?,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for zero caps, windows or rounding,
    /// and `ConfigError::ValueOutOfRange` for a non-positive comparison factor
    /// or fewer than two axis ticks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.curve.max_points == 0 {
            return Err(ConfigError::InvalidRange(
                "curve.max_points must be greater than zero",
            ));
        }
        if self.curve.smooth_window == 0 {
            return Err(ConfigError::InvalidRange(
                "curve.smooth_window must be greater than zero",
            ));
        }
        if self.route.point_cap == 0 {
            return Err(ConfigError::InvalidRange(
                "route.point_cap must be greater than zero",
            ));
        }
        if !self.power_curve.comparison_factor.is_finite()
            || self.power_curve.comparison_factor <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "power_curve.comparison_factor must be a positive number",
            ));
        }
        if self.power_curve.axis_ticks < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "power_curve.axis_ticks must be at least 2",
            ));
        }
        if self.markers.time_rounding_secs == 0 {
            return Err(ConfigError::InvalidRange(
                "markers.time_rounding_secs must be greater than zero",
            ));
        }
        Ok(())
    }
}

fn lenient<T: FromStr + Copy>(key: &'static str, fallback: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(config.key = key, config.value = %raw, "Ignoring unparsable telemetry setting");
            fallback
        }),
        Err(_) => fallback,
    }
}

fn strict<T: FromStr>(key: &'static str, fallback: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("{key}={raw}"))),
        Err(env::VarError::NotPresent) => Ok(fallback),
        Err(error) => Err(error.into()),
    }
}
