// Scheduled minutes for one calendar date.
//
// Purpose
// - Look up the weekday's slots in a pattern and sum their durations.
//
// Responsibilities
// - Skip slots that do not parse instead of failing the whole day.
// - Apply an optional same-day cutoff: slots starting at or after it are excluded,
//   slots running past it are clipped.
// - Never perform input or output.

use crate::core::schedule::day_key::DayKey;
use crate::core::schedule::time_of_day::minutes_of_day;
use crate::core::schedule::weekly_pattern::WeeklyPattern;
use chrono::{NaiveDate, NaiveDateTime};

impl WeeklyPattern {
    pub fn scheduled_minutes_on(&self, date: NaiveDate, cutoff: Option<NaiveDateTime>) -> i64 {
        let cutoff_minutes = cutoff.map(minutes_of_day);
        self.slots_for(DayKey::of(date))
            .iter()
            .map(|slot| slot.scheduled_minutes(cutoff_minutes))
            .sum()
    }
}

/// Fail-soft form: a missing date or pattern schedules nothing.
pub fn scheduled_minutes_for_date(
    date: Option<NaiveDate>,
    pattern: Option<&WeeklyPattern>,
    cutoff: Option<NaiveDateTime>,
) -> i64 {
    match (date, pattern) {
        (Some(date), Some(pattern)) => pattern.scheduled_minutes_on(date, cutoff),
        _ => 0,
    }
}
