//! Domain model: points of interest, categories, paces and their lookup tables.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::hours::OpeningHours;

/// Geographic coordinate as (latitude, longitude) in degrees.
pub type Coordinate = (f64, f64);

/// Venue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Landmarks,
    Museums,
    Nature,
    Food,
    Views,
    Nightlife,
    /// Anything a places catalog reports outside the known set.
    #[serde(other)]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Landmarks,
        Category::Museums,
        Category::Nature,
        Category::Food,
        Category::Views,
        Category::Nightlife,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Landmarks => "landmarks",
            Category::Museums => "museums",
            Category::Nature => "nature",
            Category::Food => "food",
            Category::Views => "views",
            Category::Nightlife => "nightlife",
            Category::Other => "other",
        }
    }

    /// Default opening window used when a stop carries no structured hours.
    ///
    /// Nightlife closes after midnight; the day builder clamps such windows
    /// to the end of the day.
    pub fn default_window(&self) -> (NaiveTime, NaiveTime) {
        let (open, close) = match self {
            Category::Museums => ((10, 0), (18, 0)),
            Category::Landmarks => ((9, 0), (19, 0)),
            Category::Nature => ((6, 0), (20, 0)),
            Category::Views => ((10, 0), (22, 0)),
            Category::Food => ((11, 30), (22, 0)),
            Category::Nightlife => ((18, 0), (2, 0)),
            Category::Other => ((9, 0), (19, 0)),
        };
        (clock(open), clock(close))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// Trip pace: governs dwell durations and the daily walking cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Chill,
    #[default]
    Normal,
    Packed,
}

impl Pace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Chill => "chill",
            Pace::Normal => "normal",
            Pace::Packed => "packed",
        }
    }

    /// Minutes spent at a stop of the given category.
    pub fn dwell_minutes(&self, category: Category) -> i64 {
        use Category::*;

        match (self, category) {
            (Pace::Chill, Museums) => 120,
            (Pace::Chill, Landmarks | Nature | Nightlife) => 90,
            (Pace::Chill, Views | Food) => 60,
            (Pace::Normal, Museums) => 90,
            (Pace::Normal, Landmarks | Nature | Nightlife) => 75,
            (Pace::Normal, Views | Food) => 50,
            (Pace::Packed, Museums) => 75,
            (Pace::Packed, Landmarks | Nature | Nightlife) => 60,
            (Pace::Packed, Views) => 40,
            (Pace::Packed, Food) => 45,
            (_, Other) => 60,
        }
    }

    /// Walking budget per day in kilometers.
    pub fn max_walk_km_per_day(&self) -> f64 {
        match self {
            Pace::Chill => 8.0,
            Pace::Normal => 12.0,
            Pace::Packed => 16.0,
        }
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pace {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Pace::Chill, Pace::Normal, Pace::Packed]
            .into_iter()
            .find(|pace| pace.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// A name that matched no known category or pace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown name: {0:?}")]
pub struct UnknownName(pub String);

/// A single visitable venue.
///
/// Names are unique within a pool; the planner uses them as identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<OpeningHours>,
}

impl Poi {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64, category: Category) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
            category,
            rating: None,
            address: None,
            opening_hours: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_opening_hours(mut self, hours: OpeningHours) -> Self {
        self.opening_hours = Some(hours);
        self
    }

    pub fn location(&self) -> Coordinate {
        (self.lat, self.lng)
    }
}

/// Build a clock time from a static (hour, minute) pair.
pub(crate) fn clock((hour, minute): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dwell_table_normal() {
        assert_eq!(Pace::Normal.dwell_minutes(Category::Landmarks), 75);
        assert_eq!(Pace::Normal.dwell_minutes(Category::Museums), 90);
        assert_eq!(Pace::Normal.dwell_minutes(Category::Food), 50);
    }

    #[test]
    fn test_dwell_table_packed_food_differs_from_views() {
        assert_eq!(Pace::Packed.dwell_minutes(Category::Food), 45);
        assert_eq!(Pace::Packed.dwell_minutes(Category::Views), 40);
    }

    #[test]
    fn test_unrecognized_category_dwells_an_hour() {
        for pace in [Pace::Chill, Pace::Normal, Pace::Packed] {
            assert_eq!(pace.dwell_minutes(Category::Other), 60);
        }
    }

    #[test]
    fn test_walk_caps() {
        assert_eq!(Pace::Chill.max_walk_km_per_day(), 8.0);
        assert_eq!(Pace::Normal.max_walk_km_per_day(), 12.0);
        assert_eq!(Pace::Packed.max_walk_km_per_day(), 16.0);
    }

    #[test]
    fn test_nightlife_window_rolls_past_midnight() {
        let (open, close) = Category::Nightlife.default_window();
        assert!(close < open);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Museums".parse::<Category>(), Ok(Category::Museums));
        assert_eq!(" packed ".parse::<Pace>(), Ok(Pace::Packed));
        assert!("shopping".parse::<Category>().is_err());
    }

    #[test]
    fn test_unknown_category_deserializes_to_other() {
        let poi: Poi = serde_json::from_str(
            r#"{"name":"Mall","lat":1.0,"lng":2.0,"category":"shopping"}"#,
        )
        .unwrap();
        assert_eq!(poi.category, Category::Other);
        assert!(poi.opening_hours.is_none());
    }
}
