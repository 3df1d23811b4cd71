// ABOUTME: Main library entry point for the Pierre performance telemetry engine
// ABOUTME: Re-exports the core models and telemetry algorithms and provides logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Telemetry
//!
//! Turns raw per-sample activity streams and encoded routes into renderable,
//! queryable artifacts for activity views.
//!
//! ## Features
//!
//! - **Stream aggregation**: provider stream keys merged into one canonical record
//! - **Activity curves**: smoothed, downsampled, normalized chart coordinates
//! - **Power curve**: log-scale tap resolution with FTP zone classification
//! - **Routes**: encoded polyline decoding with a render-cost guard
//!
//! ## Architecture
//!
//! - **`pierre-core`**: errors, constants, and data models
//! - **`pierre-intelligence`**: the algorithms, configuration, and `TelemetryEngine`
//! - **this crate**: re-exports plus `logging` and the `pierre-telemetry-inspect` binary
//!
//! ## Example
//!
//! ```rust
//! use pierre_telemetry::models::RawStreamSet;
//! use pierre_telemetry::algorithms::stream_aggregator;
//! use pierre_telemetry::TelemetryEngine;
//!
//! let raw = RawStreamSet::new()
//!     .with_series("watts", [150.0, 210.0, 240.0])
//!     .with_series("heartrate_stream", [120.0, 128.0]);
//! let metrics = stream_aggregator::combine(&raw);
//! assert_eq!(metrics.time, vec![0.0, 1.0, 2.0]);
//!
//! let curves = TelemetryEngine::default().render_all(&metrics);
//! assert_eq!(curves.len(), 2);
//! ```

/// Structured logging setup with tracing-subscriber
pub mod logging;

pub use pierre_core::{constants, errors, models};
pub use pierre_intelligence::{algorithms, config, engine, physiological_constants};
pub use pierre_intelligence::{
    ChartOverlay, ConfigError, MetricCurve, TelemetryConfig, TelemetryEngine,
};
