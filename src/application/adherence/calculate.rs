// Adherence of worked time to scheduled time.
//
// Purpose
// - Compare two day-keyed minute maps and report how much of the scheduled time was covered.
//
// Responsibilities
// - Only days present in the scheduled map count. Unscheduled work never enters the denominator.
// - Each day's overlap is capped at that day's scheduled minutes; surplus on one day does not
//   make up for a shortfall on another.
// - The rate is a percentage in [0, 100], and 0 when nothing was scheduled.

use crate::core::minutes::DailyMinutesMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdherenceResult {
    pub overlap_minutes: i64,
    pub scheduled_minutes: i64,
    pub rate: f64,
}

pub fn adherence(worked: &DailyMinutesMap, scheduled: &DailyMinutesMap) -> AdherenceResult {
    let (overlap_minutes, scheduled_minutes) =
        scheduled
            .iter()
            .fold((0i64, 0i64), |(overlap, total), (day, &scheduled_on_day)| {
                let scheduled_on_day = scheduled_on_day.max(0);
                let worked_on_day = worked.get(day).copied().unwrap_or(0).max(0);
                (
                    overlap + worked_on_day.min(scheduled_on_day),
                    total + scheduled_on_day,
                )
            });

    let rate = if scheduled_minutes > 0 {
        (overlap_minutes as f64 / scheduled_minutes as f64 * 100.0).min(100.0)
    } else {
        0.0
    };

    AdherenceResult {
        overlap_minutes,
        scheduled_minutes,
        rate,
    }
}
