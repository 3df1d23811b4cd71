// ABOUTME: Configuration module for pierre-intelligence crate
// ABOUTME: Re-exports telemetry configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Telemetry rendering configuration (curves, routes, power curve, markers)
pub mod intelligence;

pub use intelligence::{ConfigError, TelemetryConfig};
