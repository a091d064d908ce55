//! Haversine distance provider (fallback when the routing service is unavailable).
//!
//! Uses great-circle distance between two points.
//! Less accurate than a routed walking distance (ignores streets) but always available.

use crate::model::Coordinate;
use crate::traits::DistanceProvider;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance provider.
///
/// Deterministic, symmetric and never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineDistance;

impl HaversineDistance {
    pub fn new() -> Self {
        Self
    }
}

/// Haversine distance between two points in kilometers.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points.
    let c = 2.0 * a.min(1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

impl DistanceProvider for HaversineDistance {
    fn estimate_distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        haversine_km(from, to)
    }
}
