// Report configuration read from the environment.
//
// Keys
// - REPORT_INPUT_FILE: path of the JSON input document.
// - REPORT_FROM / REPORT_TO: "YYYY-MM-DDTHH:MM[:SS]" or "YYYY-MM-DD". A bare end date
//   means the end of that day.
//
// Parsing works over a lookup function so tests never touch the process environment.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::path::PathBuf;
use thiserror::Error;

pub const INPUT_FILE_KEY: &str = "REPORT_INPUT_FILE";
pub const FROM_KEY: &str = "REPORT_FROM";
pub const TO_KEY: &str = "REPORT_TO";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid date or time for {key}: {value:?}")]
    InvalidDateTime { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub input_file: PathBuf,
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl ReportConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        Ok(Self {
            input_file: PathBuf::from(required(INPUT_FILE_KEY)?),
            from: parse_bound(FROM_KEY, &required(FROM_KEY)?, NaiveTime::MIN)?,
            to: parse_bound(TO_KEY, &required(TO_KEY)?, end_of_day())?,
        })
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}

fn parse_bound(
    key: &'static str,
    value: &str,
    time_for_bare_date: NaiveTime,
) -> Result<NaiveDateTime, ConfigError> {
    let value = value.trim();
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(time_for_bare_date))
        })
        .ok_or_else(|| ConfigError::InvalidDateTime {
            key,
            value: value.to_string(),
        })
}
