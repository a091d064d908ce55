//! Error taxonomy.
//!
//! Only [`PlannerError`] reaches callers. Provider and cache errors are
//! recovered inside the crate and logged.

use thiserror::Error;

/// Errors returned by planning and re-sequencing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// The POI source produced nothing to schedule.
    #[error("no points of interest found")]
    EmptyPool,
    /// The stop to replace is not on the targeted day.
    #[error("stop {name:?} is not scheduled on day {day}")]
    NotFound { day: usize, name: String },
    #[error("day {day} is out of range (itinerary has {days} days)")]
    DayOutOfRange { day: usize, days: usize },
    /// The candidate pool had nothing that could replace the stop.
    #[error("no replacement available for {name:?}")]
    NoReplacement { name: String },
}

/// Failure of a live distance backend.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service responded with status {0}")]
    Status(u16),
    #[error("service error {code}: {message}")]
    Service { code: String, message: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Failure to load or persist the distance cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache io: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache json: {0}")]
    Json(#[from] serde_json::Error),
}

/// The sequencer found no complete tour. Recovered internally.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("no feasible route: {0}")]
pub struct InfeasibleRoute(pub String);
