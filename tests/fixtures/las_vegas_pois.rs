//! Real Las Vegas points of interest for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Everything on the Strip sits
//! within a few kilometers of walking.

use chrono::NaiveDate;
use walk_planner::model::{Category, Poi};

/// A named, categorized location.
#[derive(Debug, Clone)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub category: Category,
    pub rating: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lng: f64, category: Category, rating: f64) -> Self {
        Self {
            name,
            lat,
            lng,
            category,
            rating,
        }
    }

    pub fn poi(&self) -> Poi {
        Poi::new(self.name, self.lat, self.lng, self.category).with_rating(self.rating)
    }
}

// ============================================================================
// Strip Sights
// ============================================================================

pub const STRIP_SIGHTS: &[Place] = &[
    Place::new("Bellagio Fountains", 36.1126, -115.1767, Category::Landmarks, 4.7),
    Place::new("The LINQ High Roller", 36.1186, -115.1716, Category::Views, 4.6),
    Place::new("The Venetian Canals", 36.1216, -115.1707, Category::Landmarks, 4.6),
    Place::new("Welcome to Fabulous Las Vegas Sign", 36.0820, -115.1722, Category::Landmarks, 4.6),
    Place::new("Eiffel Tower Viewing Deck", 36.1125, -115.1728, Category::Views, 4.6),
    Place::new("Bellagio Conservatory", 36.1129, -115.1752, Category::Nature, 4.7),
    Place::new("Mirage Volcano", 36.1212, -115.1741, Category::Landmarks, 4.4),
    Place::new("The Mob Museum", 36.1728, -115.1411, Category::Museums, 4.7),
];

// ============================================================================
// Strip Food
// ============================================================================

pub const STRIP_FOOD: &[Place] = &[
    Place::new("Gordon Ramsay BurGR", 36.1107195, -115.1720818, Category::Food, 4.5),
    Place::new("Hard Rock Cafe", 36.1041592, -115.1722166, Category::Food, 4.2),
    Place::new("Earl of Sandwich Planet Hollywood", 36.1093912, -115.1720087, Category::Food, 4.6),
    Place::new("Bacchanal Buffet", 36.1159581, -115.1762929, Category::Food, 4.4),
    Place::new("Grand Lux Cafe", 36.1216416, -115.1685024, Category::Food, 4.3),
];

// ============================================================================
// Nightlife
// ============================================================================

pub const STRIP_NIGHTLIFE: &[Place] = &[
    Place::new("Chandelier Bar", 36.1097, -115.1745, Category::Nightlife, 4.6),
    Place::new("Brooklyn Bowl", 36.1175388, -115.1695094, Category::Nightlife, 4.5),
];

/// Sights followed by food, as a retrieval sorted by relevance might return.
pub fn strip_pool() -> Vec<Poi> {
    STRIP_SIGHTS
        .iter()
        .take(7)
        .chain(STRIP_FOOD.iter().take(3))
        .map(Place::poi)
        .collect()
}

/// Food venues usable as a lunch pool.
pub fn food_pool() -> Vec<Poi> {
    STRIP_FOOD.iter().map(Place::poi).collect()
}

/// Places not in [`strip_pool`], for swaps.
pub fn outside_pool() -> Vec<Poi> {
    STRIP_FOOD
        .iter()
        .skip(3)
        .chain(STRIP_NIGHTLIFE)
        .map(Place::poi)
        .collect()
}

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_in_vegas_area() {
        for place in STRIP_SIGHTS.iter().chain(STRIP_FOOD).chain(STRIP_NIGHTLIFE) {
            assert!(place.lat > 35.9 && place.lat < 36.3, "{} lat out of range: {}", place.name, place.lat);
            assert!(place.lng > -115.4 && place.lng < -114.8, "{} lng out of range: {}", place.name, place.lng);
        }
    }

    #[test]
    fn test_pools_do_not_overlap() {
        let pool = strip_pool();
        for poi in outside_pool() {
            assert!(pool.iter().all(|inner| inner.name != poi.name), "{} in both pools", poi.name);
        }
    }
}
