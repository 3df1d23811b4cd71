// ABOUTME: Core data models for the telemetry analytics engine
// ABOUTME: Re-exports raw streams, combined metrics, power curve, zone, route, and sport types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Immutable snapshots handed from the data-fetch layer to the analytics
//! algorithms, and the artifacts those algorithms hand back.
//!
//! ## Core Models
//!
//! - `RawStreamSet`: loosely typed stream map as fetched (key -> JSON samples)
//! - `StreamKind`: canonical metric kinds with their accepted key aliases
//! - `CombinedMetrics`: index-aligned canonical metric series for one activity
//! - `PowerCurve`: validated best-power-per-duration reference data
//! - `PowerZone`: seven %FTP training zones
//! - `GeoPoint` / `RouteBounds`: decoded route geometry
//! - `SportType`: activity types relevant to telemetry rendering

mod geo;
mod metrics;
mod power_curve;
mod sport;
mod stream;
mod zone;

pub use geo::{GeoPoint, RouteBounds};
pub use metrics::CombinedMetrics;
pub use power_curve::{
    format_interval_label, PowerCurve, PowerCurveColumns, PowerCurvePoint, PowerCurveResponse,
    ReferenceData,
};
pub use sport::{is_power_curve_eligible, SportType};
pub use stream::{RawStreamSet, StreamKind, StreamsEnvelope};
pub use zone::PowerZone;
