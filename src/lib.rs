//! walk-planner core
//!
//! Plans multi-day walking itineraries: splits a pool of points of interest
//! across days, orders each day's stops to keep walking short and builds a
//! minute-level timeline that respects opening windows, dwell times, lunch
//! and the end of the day.

pub mod allocate;
pub mod cache;
pub mod config;
pub mod error;
pub mod haversine;
pub mod hours;
pub mod itinerary;
pub mod live;
pub mod lunch;
pub mod model;
pub mod osrm;
pub mod schedule;
pub mod solver;
pub mod traits;
