// ABOUTME: Seven-zone FTP power classification used by power curve tooltips and statistics
// ABOUTME: Zone lower bounds are inclusive percentages of functional threshold power
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::zones::{
    ANAEROBIC_MIN_PERCENT, ENDURANCE_MIN_PERCENT, NEUROMUSCULAR_MIN_PERCENT, TEMPO_MIN_PERCENT,
    THRESHOLD_MIN_PERCENT, VO2_MAX_MIN_PERCENT,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Training zone derived from power as a percentage of FTP
///
/// Zones are ordinal: `Recovery < Endurance < ... < Neuromuscular`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerZone {
    /// Zone 1: below 56% FTP
    Recovery = 1,
    /// Zone 2: 56-76% FTP
    Endurance = 2,
    /// Zone 3: 76-90% FTP
    Tempo = 3,
    /// Zone 4: 90-105% FTP
    Threshold = 4,
    /// Zone 5: 105-120% FTP
    Vo2Max = 5,
    /// Zone 6: 120-150% FTP
    Anaerobic = 6,
    /// Zone 7: 150% FTP and above
    Neuromuscular = 7,
}

impl PowerZone {
    /// All zones in ascending order
    pub const ALL: [Self; 7] = [
        Self::Recovery,
        Self::Endurance,
        Self::Tempo,
        Self::Threshold,
        Self::Vo2Max,
        Self::Anaerobic,
        Self::Neuromuscular,
    ];

    /// Classify a percentage of FTP
    ///
    /// The highest zone whose inclusive lower bound is met wins. Non-finite
    /// percentages fall through to `Recovery`.
    #[must_use]
    pub fn from_percent_ftp(percent: f64) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|zone| percent >= zone.lower_bound_percent())
            .unwrap_or(Self::Recovery)
    }

    /// Classify a power value against an FTP
    ///
    /// Returns `None` when `ftp_watts` is not a positive finite number: an
    /// FTP of zero or below is a caller contract violation and yields no
    /// classification rather than an error.
    #[must_use]
    pub fn for_power(power_watts: f64, ftp_watts: f64) -> Option<Self> {
        if !ftp_watts.is_finite() || ftp_watts <= 0.0 || !power_watts.is_finite() {
            return None;
        }
        Some(Self::from_percent_ftp(power_watts * 100.0 / ftp_watts))
    }

    /// Inclusive lower bound as percentage of FTP
    #[must_use]
    pub const fn lower_bound_percent(self) -> f64 {
        match self {
            Self::Recovery => 0.0,
            Self::Endurance => ENDURANCE_MIN_PERCENT,
            Self::Tempo => TEMPO_MIN_PERCENT,
            Self::Threshold => THRESHOLD_MIN_PERCENT,
            Self::Vo2Max => VO2_MAX_MIN_PERCENT,
            Self::Anaerobic => ANAEROBIC_MIN_PERCENT,
            Self::Neuromuscular => NEUROMUSCULAR_MIN_PERCENT,
        }
    }

    /// Zone number, 1 through 7
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Short zone name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Recovery => "Recovery",
            Self::Endurance => "Endurance",
            Self::Tempo => "Tempo",
            Self::Threshold => "Threshold",
            Self::Vo2Max => "VO2 Max",
            Self::Anaerobic => "Anaerobic",
            Self::Neuromuscular => "Neuromuscular",
        }
    }

    /// Tooltip label, e.g. `Zone 4 (Threshold)`
    #[must_use]
    pub fn label(self) -> String {
        format!("Zone {} ({})", self.number(), self.name())
    }
}

impl fmt::Display for PowerZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zone {} ({})", self.number(), self.name())
    }
}
