//! Itinerary assembly and single-day re-sequencing.

use chrono::{Duration, NaiveDate};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::allocate::allocate;
use crate::config::PlanOptions;
use crate::error::PlannerError;
use crate::model::{Pace, Poi};
use crate::schedule::{DayTimeline, build_day};
use crate::solver::{Route, sequence};
use crate::traits::{DistanceProvider, LunchFinder};

/// One planned day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    /// POIs allocated to this day, in allocation order.
    pub bucket: Vec<Poi>,
    pub route: Route,
    pub timeline: DayTimeline,
}

/// Verdict of the walking-distance cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkCheck {
    Pass,
    AdjustNeeded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub city: String,
    /// Days requested, or the one scheduled day when zero were requested.
    /// `days.len()` may be smaller for small pools.
    pub day_count: usize,
    pub pace: Pace,
    pub start_date: NaiveDate,
    pub max_walk_km_per_day: f64,
    /// Sum of the route distances of every day.
    pub total_distance_km: f64,
    pub days: Vec<DayPlan>,
}

impl Itinerary {
    /// `Pass` when the total stays within the per-day cap times scheduled days.
    ///
    /// Advisory only: plans over the cap are still returned.
    pub fn walk_check(&self) -> WalkCheck {
        if self.total_distance_km <= self.max_walk_km_per_day * self.days.len() as f64 {
            WalkCheck::Pass
        } else {
            WalkCheck::AdjustNeeded
        }
    }

    /// Whether any day's bucket holds a POI called `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.days
            .iter()
            .any(|day| day.bucket.iter().any(|poi| poi.name == name))
    }

    fn recompute_total(&mut self) {
        self.total_distance_km = self.days.iter().map(|day| day.route.distance_km).sum();
    }
}

/// Runs allocation, sequencing and day building for a POI pool.
pub struct ItineraryPlanner<D> {
    distance: D,
    options: PlanOptions,
    lunch_finder: Option<Box<dyn LunchFinder>>,
}

impl<D: DistanceProvider> ItineraryPlanner<D> {
    pub fn new(distance: D, options: PlanOptions) -> Self {
        Self {
            distance,
            options,
            lunch_finder: None,
        }
    }

    pub fn with_lunch_finder(mut self, finder: impl LunchFinder + 'static) -> Self {
        self.lunch_finder = Some(Box::new(finder));
        self
    }

    pub fn options(&self) -> &PlanOptions {
        &self.options
    }

    pub fn distance(&self) -> &D {
        &self.distance
    }

    /// Plan `pois` over `num_days` days starting at `start_date`.
    ///
    /// `num_days == 0` plans everything as a single day.
    pub fn assemble(
        &self,
        city: &str,
        pois: &[Poi],
        num_days: usize,
        start_date: NaiveDate,
    ) -> Result<Itinerary, PlannerError> {
        if pois.is_empty() {
            return Err(PlannerError::EmptyPool);
        }

        let buckets = allocate(pois, num_days);
        debug!(pois = pois.len(), buckets = buckets.len(), "allocated days");

        let plan = |(index, bucket): (usize, Vec<Poi>)| {
            self.plan_day(bucket, start_date + Duration::days(index as i64))
        };
        let days: Vec<DayPlan> = if self.options.parallel {
            buckets.into_par_iter().enumerate().map(plan).collect()
        } else {
            buckets.into_iter().enumerate().map(plan).collect()
        };

        let pace = self.options.schedule.pace;
        let mut itinerary = Itinerary {
            city: city.to_string(),
            day_count: num_days.max(days.len()),
            pace,
            start_date,
            max_walk_km_per_day: pace.max_walk_km_per_day(),
            total_distance_km: 0.0,
            days,
        };
        itinerary.recompute_total();

        info!(
            city,
            days = itinerary.days.len(),
            total_km = itinerary.total_distance_km,
            check = ?itinerary.walk_check(),
            "assembled itinerary"
        );
        Ok(itinerary)
    }

    /// Replace the stop called `remove` on day `day` with the first usable
    /// entry of `candidates`, then re-plan that day only.
    ///
    /// A candidate is usable when it is not already in the itinerary, or
    /// when it is the removed stop itself. Nothing is changed on error.
    pub fn swap_stop(
        &self,
        itinerary: &mut Itinerary,
        day: usize,
        remove: &str,
        candidates: &[Poi],
    ) -> Result<(), PlannerError> {
        let days = itinerary.days.len();
        let plan = itinerary
            .days
            .get(day)
            .ok_or(PlannerError::DayOutOfRange { day, days })?;

        if !plan.route.contains(remove) {
            return Err(PlannerError::NotFound {
                day,
                name: remove.to_string(),
            });
        }

        let replacement = candidates
            .iter()
            .find(|candidate| candidate.name == remove || !itinerary.contains(&candidate.name))
            .ok_or_else(|| PlannerError::NoReplacement {
                name: remove.to_string(),
            })?;

        let bucket: Vec<Poi> = plan
            .bucket
            .iter()
            .map(|poi| {
                if poi.name == remove {
                    replacement.clone()
                } else {
                    poi.clone()
                }
            })
            .collect();
        let date = plan.date;

        debug!(day, remove, with = %replacement.name, "re-sequencing day");
        itinerary.days[day] = self.plan_day(bucket, date);
        itinerary.recompute_total();
        Ok(())
    }

    fn plan_day(&self, bucket: Vec<Poi>, date: NaiveDate) -> DayPlan {
        // The walker starts the day at its first allocated stop.
        let home = bucket.first().map(Poi::location).unwrap_or_default();
        let route = sequence(&bucket, home, &self.distance, &self.options.sequence);
        let timeline = build_day(
            date,
            &route.stops,
            &self.distance,
            &self.options.schedule,
            self.lunch_finder.as_deref(),
        );

        DayPlan {
            date,
            bucket,
            route,
            timeline,
        }
    }
}
