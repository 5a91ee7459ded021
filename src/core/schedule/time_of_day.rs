// Clock time parsing for pattern slots.
//
// Parsing is lenient: each side of the colon is read like an
// integer prefix (leading whitespace, optional sign, digits, trailing text
// ignored) and the result is not range checked. "25:99" yields 1599.

use chrono::{NaiveDateTime, Timelike};

pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Minutes since midnight for an "H:MM" or "HH:MM" string.
///
/// Returns `None` when there is no colon-separated pair or either side has
/// no leading digits. Values that overflow an `i32` are also rejected.
pub fn time_to_minutes(text: &str) -> Option<i32> {
    let mut parts = text.split(':');
    let hours = leading_int(parts.next()?)?;
    let minutes = leading_int(parts.next()?)?;
    hours.checked_mul(60)?.checked_add(minutes)
}

/// Minutes since midnight of a timestamp, seconds dropped.
pub fn minutes_of_day(moment: NaiveDateTime) -> i32 {
    (moment.hour() * 60 + moment.minute()) as i32
}

fn leading_int(part: &str) -> Option<i32> {
    let trimmed = part.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }
    let value: i32 = unsigned[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
