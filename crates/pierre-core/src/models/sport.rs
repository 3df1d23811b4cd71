// ABOUTME: Sport type enumeration for activities whose telemetry is rendered
// ABOUTME: Decides which activity types get a power curve section
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::power_curve::ELIGIBLE_ACTIVITY_TYPES;
use serde::{Deserialize, Serialize};

/// Enumeration of activity types the telemetry views distinguish
///
/// The `Other` variant keeps provider-specific activity types that don't map
/// to the standard categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SportType {
    /// Running activity
    Run,
    /// Outdoor cycling activity
    Ride,
    /// Indoor/trainer cycling activity
    VirtualRide,
    /// Swimming activity
    Swim,
    /// Walking activity
    Walk,
    /// Hiking activity
    Hike,
    /// Other activity type not covered by standard categories
    Other(String),
}

impl SportType {
    /// Create `SportType` from a provider activity type (case-insensitive)
    #[must_use]
    pub fn from_provider_string(provider_sport: &str) -> Self {
        match provider_sport.to_lowercase().as_str() {
            "run" | "running" => Self::Run,
            "ride" | "cycling" => Self::Ride,
            "virtualride" | "virtual_ride" => Self::VirtualRide,
            "swim" | "swimming" => Self::Swim,
            "walk" | "walking" => Self::Walk,
            "hike" | "hiking" => Self::Hike,
            _ => Self::Other(provider_sport.to_owned()),
        }
    }

    /// Whether a power curve section applies to this sport
    #[must_use]
    pub const fn supports_power_curve(&self) -> bool {
        matches!(self, Self::Ride | Self::VirtualRide)
    }
}

/// Whether a raw activity type string gets a power curve
///
/// Matches `ride`, `virtualride` and `cycling` case-insensitively; `None`
/// (unknown type) is not eligible.
#[must_use]
pub fn is_power_curve_eligible(activity_type: Option<&str>) -> bool {
    activity_type.is_some_and(|value| {
        let normalized = value.to_lowercase();
        ELIGIBLE_ACTIVITY_TYPES.contains(&normalized.as_str())
    })
}
