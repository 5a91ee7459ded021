// Calendar helpers for tests. January 2025 is the reference month:
// the 13th is a Monday, the 18th a Saturday and the 19th a Sunday.

use chrono::{NaiveDate, NaiveDateTime};

pub fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
}

pub fn jan_at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    jan(day).and_hms_opt(hour, minute, 0).unwrap()
}

pub fn jan_end_of_day(day: u32) -> NaiveDateTime {
    jan(day).and_hms_opt(23, 59, 59).unwrap()
}
