// Scheduled minutes across several teams, weighted by head-count.
//
// Purpose
// - Combine each team's range result, multiplied per day by its member count,
//   into one AggregateResult.
//
// Responsibilities
// - Skip teams without a schedule and teams without members.
// - A team whose schedule cannot be read contributes nothing; the others still count.

use crate::application::scheduled::over_range::scheduled_minutes_over_range;
use crate::core::minutes::AggregateResult;
use crate::core::schedule::template::{ScheduleTemplate, Team, TeamId, UserId};
use chrono::NaiveDateTime;
use std::borrow::Borrow;
use std::collections::HashMap;
use tracing::debug;

pub fn scheduled_minutes_for_teams<S>(
    start: NaiveDateTime,
    end: NaiveDateTime,
    teams: &[Team],
    schedules_by_team_id: &HashMap<TeamId, S>,
    team_members: &HashMap<TeamId, Vec<UserId>>,
) -> AggregateResult
where
    S: Borrow<ScheduleTemplate>,
{
    teams.iter().fold(AggregateResult::default(), |mut combined, team| {
        let Some(schedule) = schedules_by_team_id.get(&team.id) else {
            debug!(team_id = team.id, "team has no schedule, skipping");
            return combined;
        };
        let member_count = team_members.get(&team.id).map_or(0, Vec::len);
        if member_count == 0 {
            debug!(team_id = team.id, "team has no members, skipping");
            return combined;
        }
        let team_result = scheduled_minutes_over_range(start, end, Some(schedule.borrow()));
        combined.merge_scaled(&team_result, i64::try_from(member_count).unwrap_or(i64::MAX));
        combined
    })
}
