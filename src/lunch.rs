//! Lunch finder backed by an outside pool of food venues.

use crate::haversine::haversine_km;
use crate::model::{Category, Poi};
use crate::traits::LunchFinder;

const DEFAULT_RADIUS_KM: f64 = 1.0;

/// Picks the closest `food` venue within `radius_km` of the previous stop.
#[derive(Debug, Clone)]
pub struct PoolLunchFinder {
    venues: Vec<Poi>,
    radius_km: f64,
}

impl PoolLunchFinder {
    /// Non-food entries of `pool` are ignored.
    pub fn new(pool: &[Poi]) -> Self {
        Self {
            venues: pool
                .iter()
                .filter(|poi| poi.category == Category::Food)
                .cloned()
                .collect(),
            radius_km: DEFAULT_RADIUS_KM,
        }
    }

    pub fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

impl LunchFinder for PoolLunchFinder {
    fn find_lunch(&self, near: &Poi) -> Option<Poi> {
        self.venues
            .iter()
            .filter(|venue| venue.name != near.name)
            .map(|venue| (haversine_km(near.location(), venue.location()), venue))
            .filter(|(km, _)| *km <= self.radius_km)
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, venue)| venue.clone())
    }
}
