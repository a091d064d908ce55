//! Planner options.

use chrono::NaiveTime;

use crate::model::{Pace, clock};

/// Settings for building one day's timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleOptions {
    pub pace: Pace,
    /// Clock time the first visit may start.
    pub day_start: NaiveTime,
    /// Processing stops once a visit ends at or after this time.
    pub day_end: NaiveTime,
    /// First stop transition at or after this time gets a lunch break.
    pub lunch_time: NaiveTime,
    pub insert_lunch: bool,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            pace: Pace::Normal,
            day_start: clock((9, 30)),
            day_end: clock((19, 0)),
            lunch_time: clock((13, 0)),
            insert_lunch: true,
        }
    }
}

impl ScheduleOptions {
    pub fn with_pace(mut self, pace: Pace) -> Self {
        self.pace = pace;
        self
    }

    pub fn with_day(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.day_start = start;
        self.day_end = end;
        self
    }

    pub fn with_lunch_at(mut self, lunch_time: NaiveTime) -> Self {
        self.lunch_time = lunch_time;
        self.insert_lunch = true;
        self
    }

    pub fn without_lunch(mut self) -> Self {
        self.insert_lunch = false;
        self
    }
}

#[derive(Debug, Clone)]
pub struct SequenceOptions {
    /// Maximum improvement passes after the greedy construction.
    pub local_search_iterations: usize,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            local_search_iterations: 100,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlanOptions {
    pub schedule: ScheduleOptions,
    pub sequence: SequenceOptions,
    /// Schedule days on the rayon pool.
    pub parallel: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            schedule: ScheduleOptions::default(),
            sequence: SequenceOptions::default(),
            parallel: true,
        }
    }
}

impl PlanOptions {
    pub fn with_schedule(mut self, schedule: ScheduleOptions) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ScheduleOptions::default();
        assert_eq!(options.day_start, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(options.day_end, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        assert_eq!(options.lunch_time, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
        assert!(options.insert_lunch);
        assert_eq!(options.pace, Pace::Normal);
    }

    #[test]
    fn test_builders() {
        let options = ScheduleOptions::default().with_pace(Pace::Chill).without_lunch();
        assert_eq!(options.pace, Pace::Chill);
        assert!(!options.insert_lunch);
        assert!(options.with_lunch_at(clock((12, 0))).insert_lunch);
    }
}
