// ABOUTME: Maps a tap on the activity chart to the sample under it
// ABOUTME: Rounds the sample time for display and reports power, heart rate, and cadence at that index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::constants::markers::DEFAULT_TIME_ROUNDING_SECS;
use pierre_core::constants::units::SECONDS_PER_MINUTE;
use pierre_core::models::{CombinedMetrics, StreamKind};
use serde::{Deserialize, Serialize};

/// Values under a tapped chart position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleMarker {
    /// Sample index on the time axis
    pub index: usize,
    /// Tap position, clamped to `[0, 1]`
    pub x_fraction: f64,
    /// Sample time rounded to the marker resolution
    pub time_seconds: f64,
    /// Rounded time as `m:ss`
    pub time_label: String,
    /// Power at the sample
    pub power: Option<f64>,
    /// Heart rate at the sample
    pub heart_rate: Option<f64>,
    /// Cadence at the sample
    pub cadence: Option<f64>,
}

impl SampleMarker {
    /// Marker at a tap fraction, with times rounded to 5 s
    ///
    /// `None` when the time axis is empty.
    #[must_use]
    pub fn at_fraction(metrics: &CombinedMetrics, progress: f64) -> Option<Self> {
        Self::at_fraction_rounded(metrics, progress, DEFAULT_TIME_ROUNDING_SECS)
    }

    /// Marker at a tap fraction with a custom time rounding
    ///
    /// The index is `round(progress * (n - 1))` over the time axis. Series
    /// shorter than the time axis report `None` past their end.
    #[must_use]
    pub fn at_fraction_rounded(
        metrics: &CombinedMetrics,
        progress: f64,
        rounding_secs: u32,
    ) -> Option<Self> {
        let last = metrics.time.len().checked_sub(1)?;
        let x_fraction = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let index = ((x_fraction * last as f64).round() as usize).min(last);

        let raw_time = metrics.time.get(index).copied().unwrap_or(0.0);
        let time_seconds = round_to_step(raw_time, rounding_secs);
        let at = |kind| metrics.series(kind).and_then(|series| series.get(index).copied());

        Some(Self {
            index,
            x_fraction,
            time_seconds,
            time_label: format_clock(time_seconds),
            power: at(StreamKind::Power),
            heart_rate: at(StreamKind::HeartRate),
            cadence: at(StreamKind::Cadence),
        })
    }

    /// Tooltip lines such as `250 W`, `142 bpm`, `88 rpm` for present values
    #[must_use]
    pub fn value_labels(&self) -> Vec<String> {
        [
            (StreamKind::Power, self.power),
            (StreamKind::HeartRate, self.heart_rate),
            (StreamKind::Cadence, self.cadence),
        ]
        .into_iter()
        .filter_map(|(kind, value)| {
            value.map(|value| format!("{} {}", value.trunc(), kind.unit()))
        })
        .collect()
    }
}

fn round_to_step(seconds: f64, step: u32) -> f64 {
    let step = f64::from(step.max(1));
    (seconds / step).round() * step
}

/// Format seconds as `m:ss` (minutes are not wrapped into hours)
#[must_use]
pub fn format_clock(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let per_minute = u64::from(SECONDS_PER_MINUTE);
    format!("{}:{:02}", total / per_minute, total % per_minute)
}
