// Status of a single day, as shown on the clock calendar.
//
// Order of checks
// - A day covered by an approved leave, or excluded by the schedule, is a day off
//   whatever was scheduled.
// - A day with nothing scheduled has no data to judge.
// - Otherwise worked minutes decide between absent, partial and complete.

use crate::core::minutes::deserialize_lenient_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    DayOff,
    NoData,
    Absent,
    Partial,
    Complete,
}

/// Approved leave or closure, both bounds inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    #[serde(deserialize_with = "deserialize_lenient_date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_lenient_date")]
    pub end_date: NaiveDate,
}

impl Leave {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

pub fn is_leave_day(date: NaiveDate, leaves: &[Leave]) -> bool {
    leaves.iter().any(|leave| leave.covers(date))
}

pub fn day_status(
    date: NaiveDate,
    worked_minutes: i64,
    scheduled_minutes: i64,
    leaves: &[Leave],
    excluded_dates: &BTreeSet<NaiveDate>,
) -> DayStatus {
    if is_leave_day(date, leaves) || excluded_dates.contains(&date) {
        DayStatus::DayOff
    } else if scheduled_minutes <= 0 {
        DayStatus::NoData
    } else if worked_minutes <= 0 {
        DayStatus::Absent
    } else if worked_minutes >= scheduled_minutes {
        DayStatus::Complete
    } else {
        DayStatus::Partial
    }
}

#[cfg(test)]
mod day_status_tests {
    use super::*;
    use crate::test_support::fixtures::dates::jan;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn leaves() -> Vec<Leave> {
        vec![Leave {
            start_date: jan(20),
            end_date: jan(22),
        }]
    }

    #[rstest]
    #[case(13, 480, 480, DayStatus::Complete)]
    #[case(13, 500, 480, DayStatus::Complete)]
    #[case(13, 300, 480, DayStatus::Partial)]
    #[case(13, 0, 480, DayStatus::Absent)]
    #[case(18, 120, 0, DayStatus::NoData)]
    #[case(20, 480, 480, DayStatus::DayOff)]
    #[case(22, 0, 480, DayStatus::DayOff)]
    #[case(23, 0, 480, DayStatus::Absent)]
    fn it_should_classify_the_day(
        leaves: Vec<Leave>,
        #[case] day: u32,
        #[case] worked: i64,
        #[case] scheduled: i64,
        #[case] expected: DayStatus,
    ) {
        assert_eq!(
            day_status(jan(day), worked, scheduled, &leaves, &BTreeSet::new()),
            expected
        );
    }

    #[rstest]
    #[case(14, 480, 480)]
    #[case(14, 0, 480)]
    #[case(14, 0, 0)]
    fn it_should_give_an_excluded_date_the_day_off(
        leaves: Vec<Leave>,
        #[case] day: u32,
        #[case] worked: i64,
        #[case] scheduled: i64,
    ) {
        let excluded = BTreeSet::from([jan(14)]);
        assert_eq!(
            day_status(jan(day), worked, scheduled, &leaves, &excluded),
            DayStatus::DayOff
        );
        assert_eq!(
            day_status(jan(15), 0, 480, &leaves, &excluded),
            DayStatus::Absent
        );
    }

    #[rstest]
    fn it_should_read_leaves_given_as_dates_or_timestamps() {
        let leave: Leave = serde_json::from_value(json!({
            "startDate": "2025-01-20T00:00:00",
            "endDate": "2025-01-22",
        }))
        .unwrap();
        assert_eq!(leave.start_date, jan(20));
        assert!(leave.covers(jan(22)));
        assert!(!leave.covers(jan(23)));
        assert!(serde_json::from_value::<Leave>(json!({ "startDate": "soon", "endDate": "2025-01-22" })).is_err());
    }

    #[rstest]
    fn it_should_serialize_statuses_in_kebab_case() {
        assert_eq!(serde_json::to_value(DayStatus::DayOff).unwrap(), json!("day-off"));
        assert_eq!(serde_json::to_value(DayStatus::NoData).unwrap(), json!("no-data"));
    }
}
