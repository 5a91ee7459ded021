// Weekday tokens used as keys in a stored weekly pattern.
//
// Indexing follows the stored pattern convention: Sunday is 0, Saturday is 6.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl DayKey {
    /// Sunday-first, matching the index order.
    pub const ALL: [DayKey; 7] = [
        DayKey::Sun,
        DayKey::Mon,
        DayKey::Tue,
        DayKey::Wed,
        DayKey::Thu,
        DayKey::Fri,
        DayKey::Sat,
    ];

    /// Monday-first, the order used when describing a pattern.
    pub const MONDAY_FIRST: [DayKey; 7] = [
        DayKey::Mon,
        DayKey::Tue,
        DayKey::Wed,
        DayKey::Thu,
        DayKey::Fri,
        DayKey::Sat,
        DayKey::Sun,
    ];

    pub fn from_weekday(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::from_weekday(date.weekday())
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayKey::Sun => "sun",
            DayKey::Mon => "mon",
            DayKey::Tue => "tue",
            DayKey::Wed => "wed",
            DayKey::Thu => "thu",
            DayKey::Fri => "fri",
            DayKey::Sat => "sat",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == token)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
