// Worked minutes per calendar day from clock records.
//
// Responsibilities
// - Split a record that runs past midnight across the days it touches.
// - Records still open, or closing before they open, contribute nothing.
// - Partial minutes are dropped per day segment.
// - With an end bound, time after it is not counted.

use crate::core::minutes::DailyMinutesMap;
use crate::core::schedule::template::UserId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockRecord {
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub clock_in: NaiveDateTime,
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
}

pub fn worked_minutes_by_day(records: &[ClockRecord]) -> DailyMinutesMap {
    minutes_by_day(records, None)
}

/// Same as `worked_minutes_by_day`, with every record clipped at `until`.
pub fn worked_minutes_by_day_until(records: &[ClockRecord], until: NaiveDateTime) -> DailyMinutesMap {
    minutes_by_day(records, Some(until))
}

fn minutes_by_day(records: &[ClockRecord], until: Option<NaiveDateTime>) -> DailyMinutesMap {
    let mut daily = DailyMinutesMap::new();
    for record in records {
        let Some(recorded_out) = record.clock_out else {
            continue;
        };
        if recorded_out <= record.clock_in {
            debug!(clock_in = %record.clock_in, clock_out = %recorded_out, "ignoring inverted clock record");
            continue;
        }
        let clock_out = until.map_or(recorded_out, |until| recorded_out.min(until));
        let mut cursor = record.clock_in;
        while cursor < clock_out {
            let day = cursor.date();
            let segment_end = day
                .succ_opt()
                .and_then(|next| next.and_hms_opt(0, 0, 0))
                .map_or(clock_out, |midnight| midnight.min(clock_out));
            let minutes = (segment_end - cursor).num_minutes();
            if minutes > 0 {
                *daily.entry(day).or_insert(0) += minutes;
            }
            cursor = segment_end;
        }
    }
    daily
}
