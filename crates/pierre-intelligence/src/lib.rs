// ABOUTME: Telemetry analytics algorithms for activity charts, power curves, and routes
// ABOUTME: Pure functions over immutable snapshots plus a configured TelemetryEngine facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! The analytic core behind activity telemetry views. It turns raw sensor
//! streams into smoothed, downsampled chart curves, resolves taps on a
//! pre-computed power curve, classifies efforts into FTP zones, and decodes
//! encoded GPS routes.
//!
//! Nothing here performs I/O or keeps state between calls; the fetched
//! snapshot is handed in and derived artifacts come back.
//!
//! ## Modules
//!
//! - **algorithms**: stream aggregation, curve processing, overlays, markers,
//!   power curve resolution, polyline decoding
//! - **config**: environment-driven telemetry configuration
//! - **engine**: `TelemetryEngine` bound to one configuration
//! - **physiological_constants**: zone band boundaries for chart overlays

/// Telemetry algorithms
pub mod algorithms;

/// Telemetry configuration and validation errors
pub mod config;

/// Configured engine facade with parallel curve rendering
pub mod engine;

/// Zone band boundaries and time grid thresholds
pub mod physiological_constants;

pub use config::{ConfigError, TelemetryConfig};
pub use engine::{ChartOverlay, MetricCurve, TelemetryEngine};
