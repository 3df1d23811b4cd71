// ABOUTME: Raw sensor stream containers and the canonical stream kind alias table
// ABOUTME: Maps case-insensitive provider stream keys onto the six canonical metric kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::MPS_TO_KMH;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Canonical kinds of per-sample telemetry streams
///
/// Provider keys are matched against the static alias table in
/// [`StreamKind::aliases`]; keys outside the table resolve to `None` and are
/// ignored by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamKind {
    /// Seconds since the start of the activity
    Time,
    /// Power in watts
    Power,
    /// Heart rate in bpm
    HeartRate,
    /// Cadence in rpm
    Cadence,
    /// Speed, delivered in m/s and exposed in km/h
    Speed,
    /// Altitude in metres
    Altitude,
}

impl StreamKind {
    /// Every kind, time first
    pub const ALL: [Self; 6] = [
        Self::Time,
        Self::Power,
        Self::HeartRate,
        Self::Cadence,
        Self::Speed,
        Self::Altitude,
    ];

    /// Kinds that carry a measured metric (everything except time)
    pub const METRICS: [Self; 5] = [
        Self::Power,
        Self::HeartRate,
        Self::Cadence,
        Self::Speed,
        Self::Altitude,
    ];

    /// Lowercase stream keys accepted for this kind
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Time => &["time", "time_stream"],
            Self::Power => &["watts", "power", "power_stream"],
            Self::HeartRate => &["heartrate", "hr", "heartrate_stream"],
            Self::Cadence => &["cadence", "cadence_stream"],
            Self::Speed => &["velocity_smooth", "speed", "velocity_stream"],
            Self::Altitude => &["altitude", "altitude_stream"],
        }
    }

    /// Resolve a provider stream key (case-insensitive)
    ///
    /// Returns `None` for unrecognized keys.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.aliases().contains(&normalized.as_str()))
    }

    /// Multiplier applied to raw samples of this kind
    #[must_use]
    pub const fn scale(self) -> f64 {
        match self {
            Self::Speed => MPS_TO_KMH,
            _ => 1.0,
        }
    }

    /// Display unit of the canonical series
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Time => "s",
            Self::Power => "W",
            Self::HeartRate => "bpm",
            Self::Cadence => "rpm",
            Self::Speed => "km/h",
            Self::Altitude => "m",
        }
    }

    /// Canonical snake-case name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Power => "power",
            Self::HeartRate => "heart_rate",
            Self::Cadence => "cadence",
            Self::Speed => "speed",
            Self::Altitude => "altitude",
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw stream map exactly as supplied by the data-fetch layer
///
/// Samples stay as JSON values: providers occasionally emit `null` or strings
/// inside numeric streams, and those are filtered during aggregation rather
/// than rejected here. Keys iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawStreamSet {
    streams: BTreeMap<String, Vec<Value>>,
}

impl RawStreamSet {
    /// Create an empty stream set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a raw stream
    pub fn insert(&mut self, key: impl Into<String>, samples: Vec<Value>) {
        self.streams.insert(key.into(), samples);
    }

    /// Builder variant of [`insert`](Self::insert) for raw JSON samples
    #[must_use]
    pub fn with_raw(mut self, key: impl Into<String>, samples: Vec<Value>) -> Self {
        self.insert(key, samples);
        self
    }

    /// Builder for a purely numeric stream
    #[must_use]
    pub fn with_series<I>(self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        self.with_raw(key, values.into_iter().map(Value::from).collect())
    }

    /// Iterate over `(key, samples)` in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.streams
            .iter()
            .map(|(key, samples)| (key.as_str(), samples.as_slice()))
    }

    /// Number of streams (recognized or not)
    #[must_use]
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    /// Whether the set holds no streams at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }
}

impl FromIterator<(String, Vec<Value>)> for RawStreamSet {
    fn from_iter<T: IntoIterator<Item = (String, Vec<Value>)>>(iter: T) -> Self {
        Self {
            streams: iter.into_iter().collect(),
        }
    }
}

/// Stream payload as returned by the activity streams endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamsEnvelope {
    /// Where the streams came from (e.g. `strava`, `database`)
    #[serde(default)]
    pub source: Option<String>,
    /// The raw streams
    #[serde(default)]
    pub streams: RawStreamSet,
}
