// ABOUTME: Telemetry algorithms turning raw streams, power curves, and polylines into render artifacts
// ABOUTME: Every function here is pure and synchronous, safe to call from any thread
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Telemetry Algorithms
//!
//! Data flows leaf-first:
//!
//! - [`stream_aggregator`]: raw streams to [`CombinedMetrics`](pierre_core::models::CombinedMetrics)
//! - [`curve_processor`]: one metric series to a [`RenderCurve`]
//! - [`chart_overlay`] and [`sample_marker`]: decorations and tap lookups on
//!   the activity chart
//! - [`power_curve`]: log-scale tap resolution and zone classification
//! - [`polyline`]: encoded routes to coordinates
//!
//! # Example
//!
//! ```rust
//! use pierre_core::models::RawStreamSet;
//! use pierre_intelligence::algorithms::{stream_aggregator, CurveProcessor};
//!
//! let raw = RawStreamSet::new()
//!     .with_series("watts", [180.0, 220.0, 260.0, 240.0])
//!     .with_series("heartrate", [120.0, 130.0, 140.0, 145.0]);
//! let metrics = stream_aggregator::combine(&raw);
//! let curve = CurveProcessor::default().process(metrics.power.as_deref().unwrap_or_default());
//! assert_eq!(curve.len(), 4);
//! ```

pub mod chart_overlay;
pub mod curve_processor;
pub mod polyline;
pub mod power_curve;
pub mod sample_marker;
pub mod stream_aggregator;

pub use chart_overlay::{TimeGridLine, ZoneBand};
pub use curve_processor::{CurvePoint, CurveProcessor, PathCommand, RenderCurve, ValueRange};
pub use polyline::PolylineError;
pub use power_curve::{
    AxisTick, CurveSelection, KeyEffort, LogAxis, PowerCurveMarker, PowerCurveResolver,
};
pub use sample_marker::SampleMarker;
