// Scheduled minutes over a date range for one schedule template.
//
// Purpose
// - Walk the calendar days from the start day through the end day and collect
//   the scheduled minutes of each into an AggregateResult.
//
// Responsibilities
// - The start is taken at midnight of its day. The end keeps its time of day, which
//   acts as a cutoff on the end day only (matched by calendar date).
// - Days with no scheduled time stay out of the map.
// - A missing or unreadable template gives an empty result rather than an error.
// - An end before the start still processes the start day, then stops.

use crate::core::minutes::{AggregateResult, calendar_days};
use crate::core::schedule::template::ScheduleTemplate;
use crate::core::schedule::weekly_pattern::WeeklyPattern;
use chrono::NaiveDateTime;
use tracing::debug;

pub fn scheduled_minutes_over_range(
    start: NaiveDateTime,
    end: NaiveDateTime,
    template: Option<&ScheduleTemplate>,
) -> AggregateResult {
    match template.and_then(ScheduleTemplate::pattern) {
        Some(pattern) => pattern_minutes_over_range(start, end, &pattern),
        None => AggregateResult::default(),
    }
}

pub fn pattern_minutes_over_range(
    start: NaiveDateTime,
    end: NaiveDateTime,
    pattern: &WeeklyPattern,
) -> AggregateResult {
    let end_day = end.date();
    let mut result = AggregateResult::default();
    for day in calendar_days(start.date(), end_day) {
        let cutoff = (day == end_day).then_some(end);
        result.add_day(day, pattern.scheduled_minutes_on(day, cutoff));
    }
    debug!(
        %start,
        %end,
        total_minutes = result.total_minutes,
        days = result.daily_map.len(),
        "aggregated scheduled minutes"
    );
    result
}
