// Input and output shapes of the schedule report.
//
// Purpose
// - ReportInput mirrors what the backend hands over: templates, teams, members,
//   clock records and closure periods. Everything but the templates is optional.
// - ScheduleReport is what the report binary prints.

use crate::application::adherence::calculate::AdherenceResult;
use crate::application::adherence::day_status::{DayStatus, Leave};
use crate::application::worked::by_day::ClockRecord;
use crate::core::minutes::AggregateResult;
use crate::core::schedule::template::{ScheduleTemplate, Team, TeamId, UserId};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInput {
    pub templates: Vec<ScheduleTemplate>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub members: HashMap<TeamId, Vec<UserId>>,
    #[serde(default)]
    pub clocks: Vec<ClockRecord>,
    #[serde(default)]
    pub leaves: Vec<Leave>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayReport {
    pub date: NaiveDate,
    pub scheduled_minutes: i64,
    pub worked_minutes: i64,
    pub status: DayStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReport {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
    pub scheduled: AggregateResult,
    pub worked: AggregateResult,
    pub adherence: AdherenceResult,
    pub days: Vec<DayReport>,
}
