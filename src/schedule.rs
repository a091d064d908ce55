//! Day timeline builder.
//!
//! Walks an ordered route with a single clock that only moves forward,
//! emitting walking legs and visits. Closed venues, short remaining windows
//! and the end of the day are handled by skipping or truncating stops; the
//! builder never fails.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScheduleOptions;
use crate::model::{Category, Poi};
use crate::traits::{DistanceProvider, LunchFinder};

/// Walking speed used to turn distance into minutes.
pub const WALKING_SPEED_KMH: f64 = 4.5;

/// Length of the lunch break.
pub const LUNCH_MINUTES: i64 = 45;

/// Visits shorter than this are dropped rather than squeezed in.
pub const MIN_VISIT_MINUTES: i64 = 20;

/// Name used when no lunch venue is known.
pub const LUNCH_PLACEHOLDER: &str = "Lunch (nearby)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
}

/// One walking segment between consecutive schedule items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub depart: NaiveTime,
    pub arrive: NaiveTime,
    /// Rounded to one decimal.
    pub distance_km: f64,
    pub mode: TravelMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitKind {
    Stop,
    Lunch,
}

/// One scheduled dwell period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub name: String,
    pub category: Category,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub dwell_minutes: i64,
    pub kind: VisitKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScheduleItem {
    Leg(Leg),
    Visit(Visit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Arrived at or after closing.
    Closed,
    /// Less than the minimum visit length left before closing.
    TooShort,
    /// The day ended before this stop.
    DayOver,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedStop {
    pub name: String,
    pub reason: SkipReason,
}

/// Schedule for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTimeline {
    pub date: NaiveDate,
    /// Legs and visits in the order they happen.
    pub items: Vec<ScheduleItem>,
    /// Rounded to one decimal.
    pub total_walk_km: f64,
    pub skipped: Vec<SkippedStop>,
}

impl DayTimeline {
    pub fn legs(&self) -> impl Iterator<Item = &Leg> {
        self.items.iter().filter_map(|item| match item {
            ScheduleItem::Leg(leg) => Some(leg),
            ScheduleItem::Visit(_) => None,
        })
    }

    pub fn visits(&self) -> impl Iterator<Item = &Visit> {
        self.items.iter().filter_map(|item| match item {
            ScheduleItem::Visit(visit) => Some(visit),
            ScheduleItem::Leg(_) => None,
        })
    }

    pub fn lunch(&self) -> Option<&Visit> {
        self.visits().find(|visit| visit.kind == VisitKind::Lunch)
    }
}

/// Whole minutes needed to walk `km`, truncated.
pub fn walking_minutes(km: f64) -> i64 {
    (km / WALKING_SPEED_KMH * 60.0) as i64
}

/// Opening window of `stop` on `date`.
///
/// Structured hours for the date's weekday win over the category default.
/// A close at or before the open (past midnight) is clamped to `day_end`.
pub fn resolve_window(stop: &Poi, date: NaiveDate, day_end: NaiveTime) -> (NaiveDateTime, NaiveDateTime) {
    let (open, close) = stop
        .opening_hours
        .as_ref()
        .and_then(|hours| hours.for_date(date))
        .unwrap_or_else(|| stop.category.default_window());

    let open = date.and_time(open);
    let close = date.and_time(close);
    if close <= open {
        (open, date.and_time(day_end))
    } else {
        (open, close)
    }
}

/// Build the timeline for `stops`, visited in the given order.
pub fn build_day<D>(
    date: NaiveDate,
    stops: &[Poi],
    distance: &D,
    options: &ScheduleOptions,
    lunch_finder: Option<&dyn LunchFinder>,
) -> DayTimeline
where
    D: DistanceProvider + ?Sized,
{
    let day_end = date.and_time(options.day_end);
    let lunch_at = date.and_time(options.lunch_time);

    let mut current = date.and_time(options.day_start);
    let mut previous: Option<&Poi> = None;
    let mut lunch_taken = !options.insert_lunch;
    let mut total_km = 0.0;
    let mut items = Vec::new();
    let mut skipped = Vec::new();

    for (index, stop) in stops.iter().enumerate() {
        if let Some(from) = previous {
            let km = distance.poi_distance(from, stop);
            let arrive = current + Duration::minutes(walking_minutes(km));
            items.push(ScheduleItem::Leg(Leg {
                from: from.name.clone(),
                to: stop.name.clone(),
                depart: current.time(),
                arrive: arrive.time(),
                distance_km: round1(km),
                mode: TravelMode::Walk,
            }));
            current = arrive;
            total_km += km;
        }

        if !lunch_taken && current >= lunch_at {
            let venue = lunch_finder.and_then(|finder| finder.find_lunch(previous.unwrap_or(stop)));
            let end = current + Duration::minutes(LUNCH_MINUTES);
            items.push(ScheduleItem::Visit(Visit {
                name: venue.map_or_else(|| LUNCH_PLACEHOLDER.to_string(), |poi| poi.name),
                category: Category::Food,
                start: current.time(),
                end: end.time(),
                dwell_minutes: LUNCH_MINUTES,
                kind: VisitKind::Lunch,
            }));
            current = end;
            lunch_taken = true;
        }

        let (open, close) = resolve_window(stop, date, options.day_end);
        // Waiting for the opening is spent even if the stop is then skipped.
        current = current.max(open);
        let start = current;

        if start >= close {
            debug!(stop = %stop.name, %close, "closed on arrival, skipping");
            skipped.push(SkippedStop {
                name: stop.name.clone(),
                reason: SkipReason::Closed,
            });
            continue;
        }

        let mut dwell = options.pace.dwell_minutes(stop.category);
        if start + Duration::minutes(dwell) > close {
            dwell = (close - start).num_minutes();
            if dwell < MIN_VISIT_MINUTES {
                debug!(stop = %stop.name, dwell, "too little time before closing, skipping");
                skipped.push(SkippedStop {
                    name: stop.name.clone(),
                    reason: SkipReason::TooShort,
                });
                continue;
            }
        }

        let end = start + Duration::minutes(dwell);
        items.push(ScheduleItem::Visit(Visit {
            name: stop.name.clone(),
            category: stop.category,
            start: start.time(),
            end: end.time(),
            dwell_minutes: dwell,
            kind: VisitKind::Stop,
        }));
        current = end;
        previous = Some(stop);

        if current >= day_end {
            debug!(stop = %stop.name, "day over, dropping remaining stops");
            skipped.extend(stops[index + 1..].iter().map(|rest| SkippedStop {
                name: rest.name.clone(),
                reason: SkipReason::DayOver,
            }));
            break;
        }
    }

    DayTimeline {
        date,
        items,
        total_walk_km: round1(total_km),
        skipped,
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
