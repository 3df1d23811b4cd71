// ABOUTME: Encoded polyline route decoding with a stride-sampling guard for long routes
// ABOUTME: Also parses the pre-decoded "lat,lng;lat,lng" coordinate string form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Polyline Decoding
//!
//! Implements the standard encoded polyline format: each coordinate is a
//! zig-zag signed delta from the previous value at 1e-5 degree precision,
//! written as 5-bit chunks offset by 63 with bit `0x20` marking continuation.
//!
//! A malformed string is rejected as a whole. [`decode`] returns an empty
//! route in that case so callers can show an "invalid route" state, and
//! [`try_decode`] reports where decoding failed.

use pierre_core::constants::routes::{
    POLYLINE_CHAR_OFFSET, POLYLINE_CHUNK_MASK, POLYLINE_CONTINUATION_BIT, POLYLINE_MAX_SHIFT,
    POLYLINE_PRECISION,
};
use pierre_core::models::GeoPoint;
use thiserror::Error;
use tracing::{debug, warn};

/// Highest byte that can appear in an encoded polyline
const POLYLINE_MAX_CHAR: u8 = 126;

/// Reasons an encoded polyline is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolylineError {
    /// Byte outside the `?`..=`~` alphabet
    #[error("invalid polyline character {character:?} at byte {position}")]
    InvalidCharacter {
        /// Byte offset
        position: usize,
        /// Offending character
        character: char,
    },

    /// String ended while a value still had its continuation bit set
    #[error("polyline truncated inside a value at byte {position}")]
    Truncated {
        /// Byte offset where input ran out
        position: usize,
    },

    /// Latitude delta without a longitude delta
    #[error("polyline ends with an unpaired latitude at byte {position}")]
    UnpairedLatitude {
        /// Byte offset where the longitude was expected
        position: usize,
    },

    /// Value does not fit in 64 bits
    #[error("polyline value overflows at byte {position}")]
    Overflow {
        /// Byte offset of the overflowing chunk
        position: usize,
    },
}

/// Decode a polyline, returning an empty route if it is malformed
#[must_use]
pub fn decode(encoded: &str) -> Vec<GeoPoint> {
    match try_decode(encoded) {
        Ok(points) => points,
        Err(error) => {
            warn!(%error, length = encoded.len(), "Rejecting malformed route polyline");
            Vec::new()
        }
    }
}

/// Decode a polyline
///
/// # Errors
///
/// Returns a [`PolylineError`] describing the first malformed position.
pub fn try_decode(encoded: &str) -> Result<Vec<GeoPoint>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut position = 0;
    let mut latitude: i64 = 0;
    let mut longitude: i64 = 0;
    let mut points = Vec::with_capacity(bytes.len() / 4);

    while position < bytes.len() {
        let lat_delta = read_value(bytes, &mut position)?;
        if position >= bytes.len() {
            return Err(PolylineError::UnpairedLatitude { position });
        }
        let lng_delta = read_value(bytes, &mut position)?;

        latitude = latitude
            .checked_add(lat_delta)
            .ok_or(PolylineError::Overflow { position })?;
        longitude = longitude
            .checked_add(lng_delta)
            .ok_or(PolylineError::Overflow { position })?;

        points.push(GeoPoint::new(
            latitude as f64 * POLYLINE_PRECISION,
            longitude as f64 * POLYLINE_PRECISION,
        ));
    }

    Ok(points)
}

fn read_value(bytes: &[u8], position: &mut usize) -> Result<i64, PolylineError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&byte) = bytes.get(*position) else {
            return Err(PolylineError::Truncated {
                position: *position,
            });
        };
        if !(POLYLINE_CHAR_OFFSET..=POLYLINE_MAX_CHAR).contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                position: *position,
                character: char::from(byte),
            });
        }
        let chunk = u64::from(byte - POLYLINE_CHAR_OFFSET);
        let payload = chunk & POLYLINE_CHUNK_MASK;
        // The chunk at shift 60 only has room for four of its five bits
        if shift > POLYLINE_MAX_SHIFT || (payload << shift) >> shift != payload {
            return Err(PolylineError::Overflow {
                position: *position,
            });
        }

        result |= payload << shift;
        shift += 5;
        *position += 1;

        if chunk & POLYLINE_CONTINUATION_BIT == 0 {
            break;
        }
    }

    // Zig-zag: the low bit carries the sign
    let magnitude = i64::try_from(result >> 1).map_err(|_| PolylineError::Overflow {
        position: *position,
    })?;
    Ok(if result & 1 == 0 { magnitude } else { !magnitude })
}

/// Stride-sample a route longer than `cap`
///
/// Keeps every `len / cap`-th point starting with the first. The integer
/// stride means the result can exceed `cap` by up to a factor of two; no
/// geometric simplification is attempted.
#[must_use]
pub fn downsample_route(points: &[GeoPoint], cap: usize) -> Vec<GeoPoint> {
    let cap = cap.max(1);
    if points.len() <= cap {
        return points.to_vec();
    }
    let stride = points.len() / cap;
    let sampled: Vec<GeoPoint> = points.iter().step_by(stride).copied().collect();
    debug!(
        original = points.len(),
        sampled = sampled.len(),
        stride,
        "Downsampled route for rendering"
    );
    sampled
}

/// Parse the `lat,lng;lat,lng` coordinate string form
///
/// Pairs that do not hold exactly two numbers are skipped.
#[must_use]
pub fn parse_coordinate_pairs(input: &str) -> Vec<GeoPoint> {
    input
        .split(';')
        .filter_map(|pair| {
            let (lat, lng) = pair.split_once(',')?;
            if lng.contains(',') {
                return None;
            }
            let latitude: f64 = lat.trim().parse().ok()?;
            let longitude: f64 = lng.trim().parse().ok()?;
            (latitude.is_finite() && longitude.is_finite())
                .then(|| GeoPoint::new(latitude, longitude))
        })
        .collect()
}
