// Day-keyed minute totals shared by the scheduled and worked calculations.
//
// Purpose
// - Give every aggregate the same shape: a total plus a map from calendar day to minutes.
//
// Invariants
// - total_minutes is the sum of daily_map values.
// - Keys serialize as zero-padded "YYYY-MM-DD" strings in the caller's local calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

pub type DailyMinutesMap = BTreeMap<NaiveDate, i64>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub total_minutes: i64,
    pub daily_map: DailyMinutesMap,
}

impl AggregateResult {
    /// Adds minutes to a day. Days with nothing to add stay out of the map.
    pub fn add_day(&mut self, date: NaiveDate, minutes: i64) {
        if minutes <= 0 {
            return;
        }
        *self.daily_map.entry(date).or_insert(0) += minutes;
        self.total_minutes += minutes;
    }

    /// Merges another result, multiplying each of its days by `factor`.
    pub fn merge_scaled(&mut self, other: &AggregateResult, factor: i64) {
        for (&date, &minutes) in &other.daily_map {
            self.add_day(date, minutes.saturating_mul(factor));
        }
    }

    pub fn minutes_on(&self, date: NaiveDate) -> i64 {
        self.daily_map.get(&date).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.daily_map.is_empty()
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Reads "YYYY-MM-DD", also accepting a full timestamp and keeping its date.
pub fn parse_date_key(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, DATE_KEY_FORMAT)
        .ok()
        .or_else(|| text.get(..10).and_then(|head| NaiveDate::parse_from_str(head, DATE_KEY_FORMAT).ok()))
}

/// Calendar days from `start` through `end`, inclusive.
///
/// When `end` is before `start` only `start` is yielded.
pub fn calendar_days(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), move |day| {
        if *day >= end { None } else { day.succ_opt() }
    })
}

/// Serde helper for backend dates that may arrive as a date or a timestamp.
pub fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_date_key(&text)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {text:?}")))
}
