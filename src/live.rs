//! Live distance provider: a cached [`DistanceSource`] that never fails.
//!
//! Lookups hit the cache first, then the source. Any source failure
//! (network, timeout, bad status, malformed payload) falls back to the
//! haversine estimate, which is returned but not cached.
//!
//! The first failed request marks the source as down for the lifetime of the
//! provider; later lookups that miss the cache go straight to haversine
//! instead of paying the request timeout again.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::cache::DistanceCache;
use crate::haversine::haversine_km;
use crate::model::Coordinate;
use crate::traits::{DistanceProvider, DistanceSource};

#[derive(Debug)]
pub struct LiveDistance<S> {
    source: Option<S>,
    cache: DistanceCache,
    source_down: AtomicBool,
}

impl<S: DistanceSource> LiveDistance<S> {
    pub fn new(source: S) -> Self {
        Self::with_cache(Some(source), DistanceCache::new())
    }

    /// `source: None` disables the live lookup and always uses haversine.
    pub fn with_cache(source: Option<S>, cache: DistanceCache) -> Self {
        Self {
            source,
            cache,
            source_down: AtomicBool::new(false),
        }
    }

    /// Whether a source is configured and has not failed yet.
    pub fn source_available(&self) -> bool {
        self.source.is_some() && !self.source_down.load(Ordering::Acquire)
    }

    /// Try the source again after it was marked down.
    pub fn reset_source(&self) {
        self.source_down.store(false, Ordering::Release);
    }

    pub fn cache(&self) -> &DistanceCache {
        &self.cache
    }

    /// Persist the cache. Failures are logged, never returned.
    pub fn flush(&self) {
        if let Err(err) = self.cache.persist() {
            warn!(error = %err, path = ?self.cache.path(), "failed to persist distance cache");
        }
    }
}

impl<S: DistanceSource> DistanceProvider for LiveDistance<S> {
    fn estimate_distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        let Some(source) = &self.source else {
            return haversine_km(from, to);
        };

        let mode = source.mode();
        if let Some(km) = self.cache.get(mode, from, to) {
            return km;
        }
        if self.source_down.load(Ordering::Acquire) {
            return haversine_km(from, to);
        }

        match source.fetch_distance(from, to) {
            Ok(km) if km.is_finite() && km >= 0.0 => {
                debug!(mode, ?from, ?to, km, "fetched live distance");
                self.cache.insert(mode, from, to, km)
            }
            Ok(km) => {
                warn!(mode, km, "live distance out of range, using haversine");
                haversine_km(from, to)
            }
            Err(err) => {
                if !self.source_down.swap(true, Ordering::AcqRel) {
                    warn!(mode, error = %err, "live distance failed, using haversine for this session");
                }
                haversine_km(from, to)
            }
        }
    }
}
