// Display summary of a weekly pattern: which days are worked, the reference
// shift (first slot of the first worked day, Monday first) and the net daily
// duration once the pause is taken off.

use crate::core::schedule::day_key::DayKey;
use crate::core::schedule::time_of_day::{MINUTES_PER_DAY, time_to_minutes};
use crate::core::schedule::weekly_pattern::{TimeSlot, WeeklyPattern};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSummary {
    pub days: Vec<DayKey>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub pause_duration: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub net_minutes_per_day: Option<i64>,
}

impl PatternSummary {
    pub fn from_pattern(pattern: &WeeklyPattern) -> Self {
        let days: Vec<DayKey> = DayKey::MONDAY_FIRST
            .into_iter()
            .filter(|day| !pattern.slots_for(*day).is_empty())
            .collect();
        let reference = days.first().and_then(|day| pattern.slots_for(*day).first());

        Self {
            start_time: reference.map(|slot| slot.start.clone()),
            end_time: reference.map(|slot| slot.end.clone()),
            net_minutes_per_day: reference.and_then(|slot| net_minutes(slot, pattern.pause_duration)),
            days,
            pause_duration: pattern.pause_duration,
            start_date: pattern.start_date,
            end_date: pattern.end_date,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.days.is_empty()
    }
}

/// Shift length minus pause. A shift ending before it starts runs past midnight.
fn net_minutes(slot: &TimeSlot, pause: Option<u32>) -> Option<i64> {
    let start = i64::from(time_to_minutes(&slot.start)?);
    let end = i64::from(time_to_minutes(&slot.end)?);
    let mut span = end - start;
    if span < 0 {
        span += i64::from(MINUTES_PER_DAY);
    }
    Some(span - i64::from(pause.unwrap_or(0)))
}
