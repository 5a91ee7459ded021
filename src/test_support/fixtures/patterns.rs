// Shared test fixture for weekly patterns and schedule templates.
// The baseline is a Monday to Friday 09:00-17:00 office week read from JSON,
// the same text the backend stores in `weeklyPatternJson`.

use crate::core::schedule::day_key::DayKey;
use crate::core::schedule::template::ScheduleTemplate;
use crate::core::schedule::weekly_pattern::{TimeSlot, WeeklyPattern};
use chrono::NaiveDate;
use std::fs;

const OFFICE_WEEK_PATH: &str = "./src/test_support/fixtures/patterns/json/office_week.json";

pub fn office_week_json() -> String {
    fs::read_to_string(OFFICE_WEEK_PATH).unwrap()
}

pub struct WeeklyPatternBuilder {
    inner: WeeklyPattern,
}

impl Default for WeeklyPatternBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl WeeklyPatternBuilder {
    pub fn new() -> Self {
        Self {
            inner: office_week_json().parse().unwrap(),
        }
    }

    pub fn empty() -> Self {
        Self {
            inner: WeeklyPattern::default(),
        }
    }

    pub fn day(mut self, day: DayKey, slots: &[(&str, &str)]) -> Self {
        self.inner.days.insert(
            day,
            slots
                .iter()
                .map(|(start, end)| TimeSlot::new(*start, *end))
                .collect(),
        );
        self
    }

    pub fn without(mut self, day: DayKey) -> Self {
        self.inner.days.remove(&day);
        self
    }

    pub fn pause_duration(mut self, minutes: u32) -> Self {
        self.inner.pause_duration = Some(minutes);
        self
    }

    pub fn excluded_date(mut self, date: NaiveDate) -> Self {
        self.inner.excluded_dates.push(date);
        self
    }

    pub fn valid_between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.inner.start_date = Some(start);
        self.inner.end_date = Some(end);
        self
    }

    pub fn build(self) -> WeeklyPattern {
        self.inner
    }

    pub fn build_template(self) -> ScheduleTemplate {
        ScheduleTemplate::from_pattern(&self.inner)
    }
}
