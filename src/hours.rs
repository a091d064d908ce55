//! Structured opening hours attached to a point of interest.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Opening window for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub weekday: Weekday,
    pub open: NaiveTime,
    /// May be earlier than `open` when the venue closes after midnight.
    pub close: NaiveTime,
}

/// Per-weekday opening windows.
///
/// Weekdays without an entry are unknown, not closed: callers fall back to
/// the category default for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    days: Vec<DayHours>,
}

impl OpeningHours {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window for `weekday`, replacing any earlier entry.
    pub fn with_day(mut self, weekday: Weekday, open: NaiveTime, close: NaiveTime) -> Self {
        self.days.retain(|day| day.weekday != weekday);
        self.days.push(DayHours {
            weekday,
            open,
            close,
        });
        self
    }

    /// Same window on every day of the week.
    pub fn every_day(open: NaiveTime, close: NaiveTime) -> Self {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .fold(Self::new(), |hours, weekday| hours.with_day(weekday, open, close))
    }

    pub fn for_weekday(&self, weekday: Weekday) -> Option<(NaiveTime, NaiveTime)> {
        self.days
            .iter()
            .find(|day| day.weekday == weekday)
            .map(|day| (day.open, day.close))
    }

    pub fn for_date(&self, date: NaiveDate) -> Option<(NaiveTime, NaiveTime)> {
        self.for_weekday(date.weekday())
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
