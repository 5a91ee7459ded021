// This module groups the weekly schedule domain components.
//
// Structure
// - day_key.rs: the seven weekday tokens used as pattern keys
// - time_of_day.rs: "HH:MM" parsing into minutes since midnight
// - weekly_pattern.rs: pattern and slot types plus the fail-soft parser
// - scheduled_day.rs: scheduled minutes for a single calendar date
// - template.rs: schedule template and team records owned by the backend
// - legacy.rs: the older workDays/startTime/endTime pattern shape
// - summary.rs: display summary of a pattern

pub mod day_key;
pub mod legacy;
pub mod scheduled_day;
pub mod summary;
pub mod template;
pub mod time_of_day;
pub mod weekly_pattern;
