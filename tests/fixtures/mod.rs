//! Test fixtures for walk-planner.
//!
//! Provides realistic test data including:
//! - Real Las Vegas Strip points of interest with categories
//! - Builders for POI pools and planners

#![allow(dead_code)]

pub mod las_vegas_pois;

pub use las_vegas_pois::*;
