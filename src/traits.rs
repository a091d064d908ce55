//! Capability traits the planner is built on.
//!
//! Concrete distance backends and lunch strategies implement these; the
//! sequencer and day builder only see the traits.

use crate::error::ProviderError;
use crate::model::{Coordinate, Poi};

/// Total distance function between two coordinates, in kilometers.
///
/// Implementations must always return a value. Backends that can fail are
/// modelled as a [`DistanceSource`] and wrapped so that failures fall back
/// to a geometric estimate.
pub trait DistanceProvider: Send + Sync {
    fn estimate_distance(&self, from: Coordinate, to: Coordinate) -> f64;

    /// Distance between two points of interest.
    fn poi_distance(&self, from: &Poi, to: &Poi) -> f64 {
        self.estimate_distance(from.location(), to.location())
    }
}

impl<T: DistanceProvider + ?Sized> DistanceProvider for &T {
    fn estimate_distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        (**self).estimate_distance(from, to)
    }
}

impl<T: DistanceProvider + ?Sized> DistanceProvider for Box<T> {
    fn estimate_distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        (**self).estimate_distance(from, to)
    }
}

/// A fallible distance backend, e.g. a routing service.
pub trait DistanceSource: Send + Sync {
    /// Travel mode this source measures (part of cache keys).
    fn mode(&self) -> &str;

    fn fetch_distance(&self, from: Coordinate, to: Coordinate) -> Result<f64, ProviderError>;
}

/// Finds somewhere to eat near a stop.
pub trait LunchFinder: Send + Sync {
    /// Return a food venue close to `near`, if one is known.
    fn find_lunch(&self, near: &Poi) -> Option<Poi>;
}
