// Builds the schedule report for a period.
//
// Purpose
// - Tie together team scheduling, worked time, adherence and day statuses.
//
// Responsibilities
// - Schedule each team from its active template.
// - Count worked time only for members of scheduled teams, and only up to the end of
//   the period.
// - Treat dates excluded by a scheduled team's pattern as days off. They keep their
//   scheduled minutes.
// - List every day of the period, including days with nothing scheduled.

use crate::application::adherence::calculate::adherence;
use crate::application::adherence::day_status::day_status;
use crate::application::report::model::{DayReport, ReportInput, ScheduleReport};
use crate::application::scheduled::for_teams::scheduled_minutes_for_teams;
use crate::application::worked::by_day::{ClockRecord, worked_minutes_by_day_until};
use crate::core::minutes::{AggregateResult, calendar_days};
use crate::core::schedule::template::{
    ScheduleTemplate, Team, TeamId, UserId, active_templates_by_team,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, info};

pub fn build_report(input: &ReportInput, from: NaiveDateTime, to: NaiveDateTime) -> ScheduleReport {
    let schedules = active_templates_by_team(&input.templates);
    let scheduled = scheduled_minutes_for_teams(from, to, &input.teams, &schedules, &input.members);

    let scheduled_teams: Vec<&Team> = input
        .teams
        .iter()
        .filter(|team| schedules.contains_key(&team.id))
        .collect();
    let member_clocks = clocks_of_members(input, &scheduled_teams);
    let excluded_dates = schedule_excluded_dates(&scheduled_teams, &schedules);

    let worked_by_day = worked_minutes_by_day_until(&member_clocks, to);
    let mut worked = AggregateResult::default();
    let mut days = Vec::new();
    for date in calendar_days(from.date(), to.date()) {
        let worked_minutes = worked_by_day.get(&date).copied().unwrap_or(0);
        worked.add_day(date, worked_minutes);
        let scheduled_minutes = scheduled.minutes_on(date);
        days.push(DayReport {
            date,
            scheduled_minutes,
            worked_minutes,
            status: day_status(
                date,
                worked_minutes,
                scheduled_minutes,
                &input.leaves,
                &excluded_dates,
            ),
        });
    }

    let adherence = adherence(&worked.daily_map, &scheduled.daily_map);
    info!(
        teams = input.teams.len(),
        scheduled_minutes = scheduled.total_minutes,
        worked_minutes = worked.total_minutes,
        rate = adherence.rate,
        "schedule report built"
    );

    ScheduleReport {
        from,
        to,
        scheduled,
        worked,
        adherence,
        days,
    }
}

fn clocks_of_members(input: &ReportInput, scheduled_teams: &[&Team]) -> Vec<ClockRecord> {
    let members: HashSet<UserId> = scheduled_teams
        .iter()
        .filter_map(|team| input.members.get(&team.id))
        .flatten()
        .copied()
        .collect();
    let clocks: Vec<ClockRecord> = input
        .clocks
        .iter()
        .filter(|record| record.user_id.is_some_and(|user_id| members.contains(&user_id)))
        .cloned()
        .collect();
    if clocks.len() < input.clocks.len() {
        debug!(
            ignored = input.clocks.len() - clocks.len(),
            "ignoring clock records of users outside scheduled teams"
        );
    }
    clocks
}

fn schedule_excluded_dates(
    scheduled_teams: &[&Team],
    schedules: &HashMap<TeamId, &ScheduleTemplate>,
) -> BTreeSet<NaiveDate> {
    scheduled_teams
        .iter()
        .filter_map(|team| schedules.get(&team.id))
        .filter_map(|template| template.pattern())
        .flat_map(|pattern| pattern.excluded_dates)
        .collect()
}

#[cfg(test)]
mod build_report_tests {
    use super::*;
    use crate::application::adherence::day_status::{DayStatus, Leave};
    use crate::core::schedule::day_key::DayKey;
    use crate::test_support::fixtures::dates::{jan, jan_at, jan_end_of_day};
    use crate::test_support::fixtures::patterns::WeeklyPatternBuilder;
    use rstest::{fixture, rstest};

    fn clock(day: u32, from: (u32, u32), to: (u32, u32)) -> ClockRecord {
        clock_of(101, day, from, to)
    }

    fn clock_of(user_id: UserId, day: u32, from: (u32, u32), to: (u32, u32)) -> ClockRecord {
        ClockRecord {
            user_id: Some(user_id),
            clock_in: jan_at(day, from.0, from.1),
            clock_out: Some(jan_at(day, to.0, to.1)),
        }
    }

    #[fixture]
    fn input() -> ReportInput {
        let active = ScheduleTemplate {
            id: Some(1),
            team_id: Some(10),
            active: true,
            ..WeeklyPatternBuilder::new().build_template()
        };
        let inactive = ScheduleTemplate {
            id: Some(2),
            team_id: Some(10),
            active: false,
            ..WeeklyPatternBuilder::empty()
                .day(DayKey::Sat, &[("00:00", "23:00")])
                .build_template()
        };
        ReportInput {
            templates: vec![inactive, active],
            teams: vec![Team::new(10)],
            members: HashMap::from([(10, vec![101])]),
            clocks: vec![
                clock(13, (9, 0), (17, 0)),
                clock(14, (9, 0), (13, 0)),
                clock(18, (10, 0), (12, 0)),
                clock(27, (9, 0), (17, 0)),
            ],
            leaves: vec![Leave {
                start_date: jan(16),
                end_date: jan(16),
            }],
        }
    }

    #[rstest]
    fn it_should_report_every_day_of_the_period(input: ReportInput) {
        let report = build_report(&input, jan_at(13, 0, 0), jan_end_of_day(19));
        let statuses: Vec<_> = report.days.iter().map(|day| day.status).collect();
        assert_eq!(
            statuses,
            vec![
                DayStatus::Complete,
                DayStatus::Partial,
                DayStatus::Absent,
                DayStatus::DayOff,
                DayStatus::Absent,
                DayStatus::NoData,
                DayStatus::NoData,
            ]
        );
        assert_eq!(report.days[0].date, jan(13));
        assert_eq!(report.days[5].worked_minutes, 120);
    }

    #[rstest]
    fn it_should_compute_adherence_from_scheduled_days_only(input: ReportInput) {
        let report = build_report(&input, jan_at(13, 0, 0), jan_end_of_day(19));
        assert_eq!(report.scheduled.total_minutes, 2400);
        assert_eq!(report.worked.total_minutes, 480 + 240 + 120);
        assert_eq!(report.adherence.overlap_minutes, 720);
        assert_eq!(report.adherence.scheduled_minutes, 2400);
        assert_eq!(report.adherence.rate, 30.0);
    }

    #[rstest]
    fn it_should_leave_out_clocks_outside_the_period(input: ReportInput) {
        let report = build_report(&input, jan_at(13, 0, 0), jan_end_of_day(19));
        assert!(!report.worked.daily_map.contains_key(&jan(27)));
    }

    #[rstest]
    fn it_should_report_nothing_scheduled_without_teams(mut input: ReportInput) {
        input.teams.clear();
        let report = build_report(&input, jan_at(13, 0, 0), jan_end_of_day(13));
        assert_eq!(report.scheduled.total_minutes, 0);
        assert_eq!(report.adherence.rate, 0.0);
        assert_eq!(report.days.len(), 1);
        assert_eq!(report.days[0].status, DayStatus::NoData);
    }

    #[rstest]
    fn it_should_ignore_clock_records_of_non_members(mut input: ReportInput) {
        let anonymous = ClockRecord {
            user_id: None,
            ..clock(13, (9, 0), (17, 0))
        };
        input.clocks = vec![clock_of(999, 13, (9, 0), (17, 0)), anonymous];
        let report = build_report(&input, jan_at(13, 0, 0), jan_end_of_day(13));
        assert_eq!(report.worked.total_minutes, 0);
        assert_eq!(report.adherence.overlap_minutes, 0);
        assert_eq!(report.adherence.rate, 0.0);
        assert_eq!(report.days[0].status, DayStatus::Absent);
    }

    #[rstest]
    fn it_should_ignore_members_of_teams_without_a_schedule(mut input: ReportInput) {
        input.teams.push(Team::new(20));
        input.members.insert(20, vec![201]);
        input.clocks = vec![clock_of(201, 13, (9, 0), (17, 0))];
        let report = build_report(&input, jan_at(13, 0, 0), jan_end_of_day(13));
        assert_eq!(report.worked.total_minutes, 0);
        assert_eq!(report.days[0].status, DayStatus::Absent);
    }

    #[rstest]
    fn it_should_give_dates_excluded_by_the_schedule_the_day_off(mut input: ReportInput) {
        input.templates[1] = ScheduleTemplate {
            id: Some(1),
            team_id: Some(10),
            active: true,
            ..WeeklyPatternBuilder::new()
                .excluded_date(jan(13))
                .excluded_date(jan(15))
                .build_template()
        };
        let report = build_report(&input, jan_at(13, 0, 0), jan_end_of_day(19));
        assert_eq!(report.days[0].status, DayStatus::DayOff);
        assert_eq!(report.days[1].status, DayStatus::Partial);
        assert_eq!(report.days[2].status, DayStatus::DayOff);
        assert_eq!(report.scheduled.total_minutes, 2400);
    }

    #[rstest]
    fn it_should_measure_worked_time_up_to_the_end_of_the_period(input: ReportInput) {
        let report = build_report(&input, jan_at(13, 0, 0), jan_at(13, 12, 0));
        assert_eq!(report.days.len(), 1);
        assert_eq!(report.days[0].scheduled_minutes, 180);
        assert_eq!(report.days[0].worked_minutes, 180);
        assert_eq!(report.days[0].status, DayStatus::Complete);
        assert_eq!(report.adherence.rate, 100.0);
    }
}
