// Weekly work pattern as persisted by the backend in `weeklyPatternJson`.
//
// Shape
// - { "mon": [["09:00","17:00"]], ..., "excludedDates": [...], "pauseDuration": 60,
//     "startDate": "2025-01-01", "endDate": "2025-12-31" }
// - Day keys outside the seven tokens are ignored. Slots need at least two string
//   elements; anything else in a day list is dropped when the pattern is read.
//
// Errors
// - Reading is typed (PatternError). `parse_weekly_pattern` is the fail-soft entry
//   point: it logs and returns None instead of surfacing the error.

use crate::core::minutes::parse_date_key;
use crate::core::schedule::day_key::DayKey;
use crate::core::schedule::time_of_day::time_to_minutes;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("weekly pattern is empty")]
    Empty,

    #[error("weekly pattern is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("weekly pattern must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// One working interval within a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
}

impl TimeSlot {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Minutes this slot contributes, optionally clipped to a same-day cutoff.
    ///
    /// A slot with an unparsable end contributes 0. A slot starting at or after
    /// the cutoff is excluded entirely; one running past it is clipped.
    pub fn scheduled_minutes(&self, cutoff_minutes: Option<i32>) -> i64 {
        let (Some(start), Some(mut end)) = (time_to_minutes(&self.start), time_to_minutes(&self.end))
        else {
            return 0;
        };
        if let Some(cutoff) = cutoff_minutes {
            if start >= cutoff {
                return 0;
            }
            end = end.min(cutoff);
        }
        (i64::from(end) - i64::from(start)).max(0)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value.as_array()?.as_slice() {
            [start, end, ..] => Some(Self::new(start.as_str()?, end.as_str()?)),
            _ => None,
        }
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.start, &self.end).serialize(serializer)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct WeeklyPattern {
    #[serde(flatten)]
    pub days: BTreeMap<DayKey, Vec<TimeSlot>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excluded_dates: Vec<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl WeeklyPattern {
    pub fn with_day(mut self, day: DayKey, slots: Vec<TimeSlot>) -> Self {
        self.days.insert(day, slots);
        self
    }

    pub fn slots_for(&self, day: DayKey) -> &[TimeSlot] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_excluded(&self, date: NaiveDate) -> bool {
        self.excluded_dates.contains(&date)
    }

    /// True when `date` lies within the optional start/end validity bounds.
    pub fn is_within_validity(&self, date: NaiveDate) -> bool {
        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
    }

    fn from_fields(fields: &Map<String, Value>) -> Self {
        let days = DayKey::ALL
            .into_iter()
            .filter_map(|day| {
                let slots = fields.get(day.as_str())?.as_array()?;
                Some((day, slots.iter().filter_map(TimeSlot::from_value).collect()))
            })
            .collect();

        Self {
            days,
            excluded_dates: fields
                .get("excludedDates")
                .and_then(Value::as_array)
                .map(|dates| {
                    dates
                        .iter()
                        .filter_map(Value::as_str)
                        .filter_map(parse_date_key)
                        .collect()
                })
                .unwrap_or_default(),
            pause_duration: fields.get("pauseDuration").and_then(minutes_value),
            start_date: fields
                .get("startDate")
                .and_then(Value::as_str)
                .and_then(parse_date_key),
            end_date: fields
                .get("endDate")
                .and_then(Value::as_str)
                .and_then(parse_date_key),
        }
    }
}

impl FromStr for WeeklyPattern {
    type Err = PatternError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Err(PatternError::Empty);
        }
        match serde_json::from_str::<Value>(text)? {
            Value::Object(fields) => Ok(Self::from_fields(&fields)),
            other => Err(PatternError::NotAnObject(json_kind(&other))),
        }
    }
}

impl TryFrom<&Value> for WeeklyPattern {
    type Error = PatternError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Err(PatternError::Empty),
            Value::String(text) => text.parse(),
            Value::Object(fields) => Ok(Self::from_fields(fields)),
            other => Err(PatternError::NotAnObject(json_kind(other))),
        }
    }
}

impl TryFrom<Value> for WeeklyPattern {
    type Error = PatternError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

/// Reads a stored pattern, either JSON text or an already decoded object.
///
/// Null and empty input give `None` silently. Anything else that cannot be
/// read gives `None` and a warning.
pub fn parse_weekly_pattern(input: &Value) -> Option<WeeklyPattern> {
    fail_soft(WeeklyPattern::try_from(input))
}

pub fn parse_weekly_pattern_str(text: &str) -> Option<WeeklyPattern> {
    fail_soft(text.parse())
}

fn fail_soft(parsed: Result<WeeklyPattern, PatternError>) -> Option<WeeklyPattern> {
    match parsed {
        Ok(pattern) => Some(pattern),
        Err(PatternError::Empty) => None,
        Err(error) => {
            warn!(%error, "could not parse weekly pattern");
            None
        }
    }
}

fn minutes_value(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => number.as_u64().and_then(|m| u32::try_from(m).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
