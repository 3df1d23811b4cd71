// ABOUTME: Geographic coordinate and bounding box types for decoded activity routes
// ABOUTME: RouteBounds supports fitting a map viewport around a route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A single route coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a coordinate
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Axis-aligned bounding box of a route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteBounds {
    /// Minimum latitude and longitude
    pub south_west: GeoPoint,
    /// Maximum latitude and longitude
    pub north_east: GeoPoint,
}

impl RouteBounds {
    /// Bounds enclosing every point, `None` for an empty route
    #[must_use]
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let first = *points.first()?;
        Some(
            points
                .iter()
                .fold(Self::point(first), |bounds, point| bounds.extend(*point)),
        )
    }

    const fn point(point: GeoPoint) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    fn extend(self, point: GeoPoint) -> Self {
        Self {
            south_west: GeoPoint::new(
                self.south_west.latitude.min(point.latitude),
                self.south_west.longitude.min(point.longitude),
            ),
            north_east: GeoPoint::new(
                self.north_east.latitude.max(point.latitude),
                self.north_east.longitude.max(point.longitude),
            ),
        }
    }

    /// Midpoint of the box
    #[must_use]
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south_west.latitude + self.north_east.latitude) / 2.0,
            (self.south_west.longitude + self.north_east.longitude) / 2.0,
        )
    }

    /// Whether the point lies inside the box (edges included)
    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.south_west.latitude..=self.north_east.latitude).contains(&point.latitude)
            && (self.south_west.longitude..=self.north_east.longitude).contains(&point.longitude)
    }
}
