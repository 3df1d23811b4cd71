// ABOUTME: Chart zone band boundaries for power and heart rate overlays
// ABOUTME: Expressed as fractions of FTP and FTHR following Coggan and Friel zone models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants used by chart overlays
//!
//! Band boundaries are drawn behind activity curves, so they are fractions of
//! the athlete's threshold rather than the percentage bounds used for
//! classification in `pierre_core::models::PowerZone`.

/// Power zone band boundaries as fractions of FTP
///
/// References:
/// - Coggan, A. & Allen, H. (2010). Training and Racing with a Power Meter
/// - <https://www.trainingpeaks.com/blog/power-training-levels/>
pub mod power_bands {
    /// Eight boundaries delimiting seven bands (active recovery to neuromuscular)
    ///
    /// The top boundary is an open-ended cap at 300% FTP.
    pub const FTP_FRACTIONS: [f64; 8] = [0.0, 0.55, 0.75, 0.90, 1.05, 1.20, 1.50, 3.0];
}

/// Heart rate zone band boundaries as fractions of FTHR
///
/// Reference: Friel, J. (2009). The Cyclist's Training Bible, lactate threshold heart rate zones
pub mod heart_rate_bands {
    /// Six boundaries delimiting five bands
    pub const FTHR_FRACTIONS: [f64; 6] = [0.0, 0.68, 0.83, 0.94, 1.05, 1.15];
}

/// Adaptive time grid for activity charts
pub mod time_grid {
    /// Activities up to this duration get a one-minute grid
    pub const SHORT_ACTIVITY_SECS: f64 = 600.0;
    /// Activities up to this duration get a five-minute grid
    pub const MEDIUM_ACTIVITY_SECS: f64 = 1800.0;
    /// Activities up to this duration get a ten-minute grid
    pub const LONG_ACTIVITY_SECS: f64 = 3600.0;
    /// Grid step for short activities
    pub const SHORT_STEP_SECS: f64 = 60.0;
    /// Grid step for medium activities
    pub const MEDIUM_STEP_SECS: f64 = 300.0;
    /// Grid step for long activities
    pub const LONG_STEP_SECS: f64 = 600.0;
    /// Beyond one hour the step is this fraction of the duration
    pub const OPEN_ENDED_STEP_FRACTION: f64 = 0.1;
}
