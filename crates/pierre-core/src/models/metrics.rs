// ABOUTME: Canonical combined metric record built from raw activity streams
// ABOUTME: Holds the time axis plus optional power, heart rate, cadence, speed, and altitude series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::stream::StreamKind;
use serde::{Deserialize, Serialize};

/// Canonical per-activity metric series
///
/// Built once per activity query and never mutated afterwards; a re-query
/// produces a new value. Series are index-aligned but may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedMetrics {
    /// Seconds from start (synthesized as `0..N-1` when the source had none)
    pub time: Vec<f64>,
    /// Power in watts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<Vec<f64>>,
    /// Heart rate in bpm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<Vec<f64>>,
    /// Cadence in rpm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<Vec<f64>>,
    /// Speed in km/h
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<Vec<f64>>,
    /// Altitude in metres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<Vec<f64>>,
}

impl CombinedMetrics {
    /// Borrow the series for a kind, if present
    #[must_use]
    pub fn series(&self, kind: StreamKind) -> Option<&[f64]> {
        match kind {
            StreamKind::Time => Some(&self.time),
            StreamKind::Power => self.power.as_deref(),
            StreamKind::HeartRate => self.heart_rate.as_deref(),
            StreamKind::Cadence => self.cadence.as_deref(),
            StreamKind::Speed => self.speed.as_deref(),
            StreamKind::Altitude => self.altitude.as_deref(),
        }
    }

    /// Builder that sets the series of a kind
    #[must_use]
    pub fn with_series(mut self, kind: StreamKind, values: Vec<f64>) -> Self {
        match kind {
            StreamKind::Time => self.time = values,
            StreamKind::Power => self.power = Some(values),
            StreamKind::HeartRate => self.heart_rate = Some(values),
            StreamKind::Cadence => self.cadence = Some(values),
            StreamKind::Speed => self.speed = Some(values),
            StreamKind::Altitude => self.altitude = Some(values),
        }
        self
    }

    /// Metric kinds (time excluded) that have a series, in canonical order
    pub fn present_metrics(&self) -> impl Iterator<Item = StreamKind> + '_ {
        StreamKind::METRICS
            .into_iter()
            .filter(|kind| self.series(*kind).is_some())
    }

    /// Number of samples on the time axis
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.time.len()
    }

    /// True when neither a time axis nor any metric is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty() && self.present_metrics().next().is_none()
    }

    /// Largest time value in seconds (0 when the time axis is empty)
    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        self.time.iter().copied().fold(0.0, f64::max)
    }
}
