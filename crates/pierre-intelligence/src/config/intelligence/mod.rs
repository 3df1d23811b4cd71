// ABOUTME: Intelligence configuration module for telemetry rendering settings
// ABOUTME: Re-exports the telemetry configuration and its validation error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration validation errors
pub mod error;

/// Curve, route, power curve, and marker settings
pub mod telemetry;

pub use error::ConfigError;
pub use telemetry::{CurveConfig, MarkerConfig, PowerCurveConfig, RouteConfig, TelemetryConfig};
