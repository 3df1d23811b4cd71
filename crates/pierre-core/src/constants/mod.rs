// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for curve rendering, routes, power zones, and unit conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Configuration defaults in `pierre-intelligence` read from here.

/// Metric curve rendering defaults
pub mod curves {
    /// Maximum number of points emitted for a rendered metric curve
    pub const DEFAULT_MAX_POINTS: usize = 600;

    /// Trailing moving-average window (samples)
    pub const DEFAULT_SMOOTH_WINDOW: usize = 60;

    /// Fraction of the vertical range a curve may occupy; the rest is headroom
    pub const RENDER_HEADROOM: f64 = 0.8;

    /// Minimum number of samples required to draw a curve
    pub const MIN_RENDERABLE_SAMPLES: usize = 2;

    /// Spread below this fraction of the series magnitude counts as flat
    ///
    /// Running-sum smoothing leaves rounding residue of a few ULPs on
    /// constant input; that residue must not be stretched to full height.
    pub const FLAT_RELATIVE_TOLERANCE: f64 = 1e-9;
}

/// Route geometry constants
pub mod routes {
    /// Decoded routes longer than this are stride-sampled before rendering
    pub const DEFAULT_ROUTE_POINT_CAP: usize = 500;

    /// Encoded polyline coordinate precision (5 decimal places)
    pub const POLYLINE_PRECISION: f64 = 1e-5;

    /// ASCII offset applied to every encoded polyline character
    pub const POLYLINE_CHAR_OFFSET: u8 = 63;

    /// Continuation flag of an encoded 5-bit chunk
    pub const POLYLINE_CONTINUATION_BIT: u64 = 0x20;

    /// Payload mask of an encoded 5-bit chunk
    pub const POLYLINE_CHUNK_MASK: u64 = 0x1f;

    /// Largest shift accepted while accumulating one value (keeps it within 64 bits)
    pub const POLYLINE_MAX_SHIFT: u32 = 60;
}

/// Power curve reference data constants
pub mod power_curve {
    /// Default factor for the "previous best" comparison overlay
    pub const DEFAULT_COMPARISON_FACTOR: f64 = 0.9;

    /// Number of horizontal power gridlines drawn on the power curve chart
    pub const DEFAULT_AXIS_TICKS: usize = 6;

    /// Activity types for which a power curve is meaningful
    pub const ELIGIBLE_ACTIVITY_TYPES: [&str; 3] = ["ride", "virtualride", "cycling"];

    /// Key effort durations highlighted in power statistics (seconds)
    pub const KEY_EFFORT_INTERVALS: [u32; 4] = [5, 60, 300, 1200];
}

/// Power zone lower bounds as percentage of FTP (inclusive)
pub mod zones {
    /// Zone 2 (Endurance) lower bound
    pub const ENDURANCE_MIN_PERCENT: f64 = 56.0;
    /// Zone 3 (Tempo) lower bound
    pub const TEMPO_MIN_PERCENT: f64 = 76.0;
    /// Zone 4 (Threshold) lower bound
    pub const THRESHOLD_MIN_PERCENT: f64 = 90.0;
    /// Zone 5 (VO2 Max) lower bound
    pub const VO2_MAX_MIN_PERCENT: f64 = 105.0;
    /// Zone 6 (Anaerobic) lower bound
    pub const ANAEROBIC_MIN_PERCENT: f64 = 120.0;
    /// Zone 7 (Neuromuscular) lower bound
    pub const NEUROMUSCULAR_MIN_PERCENT: f64 = 150.0;
}

/// Sample marker constants
pub mod markers {
    /// Marker times are rounded to this many seconds
    pub const DEFAULT_TIME_ROUNDING_SECS: u32 = 5;
}

/// Unit conversion constants
pub mod units {
    /// Metres per second to kilometres per hour
    pub const MPS_TO_KMH: f64 = 3.6;

    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: u32 = 60;

    /// Seconds per hour
    pub const SECONDS_PER_HOUR: u32 = 3600;
}
