// Older pattern shape: one shift repeated on a list of weekday numbers.
//
// { "workDays": [1, 2, 3, 4, 5], "startTime": "09:00", "endTime": "17:30", "excludedDates": [] }
//
// Weekday numbers use Sunday = 0. Conversion to the weekly pattern is explicit;
// the pattern parser never guesses which shape it was given.

use crate::core::schedule::day_key::DayKey;
use crate::core::schedule::weekly_pattern::{TimeSlot, WeeklyPattern};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPattern {
    pub work_days: Vec<u32>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub excluded_dates: Vec<NaiveDate>,
}

impl Default for LegacyPattern {
    fn default() -> Self {
        Self {
            work_days: vec![1, 2, 3, 4, 5],
            start_time: "09:00".to_string(),
            end_time: "17:30".to_string(),
            excluded_dates: Vec::new(),
        }
    }
}

impl LegacyPattern {
    pub fn is_work_day(&self, date: NaiveDate) -> bool {
        self.work_days.contains(&DayKey::of(date).index())
    }
}

impl From<&LegacyPattern> for WeeklyPattern {
    fn from(legacy: &LegacyPattern) -> Self {
        let slot = TimeSlot::new(legacy.start_time.clone(), legacy.end_time.clone());
        WeeklyPattern {
            days: legacy
                .work_days
                .iter()
                .filter_map(|index| DayKey::from_index(*index))
                .map(|day| (day, vec![slot.clone()]))
                .collect(),
            excluded_dates: legacy.excluded_dates.clone(),
            ..WeeklyPattern::default()
        }
    }
}
