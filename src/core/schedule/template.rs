// Schedule template and team records as the backend serves them.
//
// Purpose
// - Carry the stored `weeklyPatternJson` payload without interpreting it up front.
//
// Boundaries
// - These are read-only inputs. The engine never mutates a template.
// - At most one template per team is expected to be active; when the data says
//   otherwise the first active one wins.

use crate::core::schedule::weekly_pattern::{WeeklyPattern, parse_weekly_pattern};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

pub type TeamId = i64;
pub type UserId = i64;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTemplate {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub active: bool,
    /// JSON text or an already decoded object.
    #[serde(default)]
    pub weekly_pattern_json: Option<Value>,
}

impl ScheduleTemplate {
    pub fn from_pattern_json(json: impl Into<String>) -> Self {
        Self {
            weekly_pattern_json: Some(Value::String(json.into())),
            ..Self::default()
        }
    }

    pub fn from_pattern(pattern: &WeeklyPattern) -> Self {
        Self {
            weekly_pattern_json: serde_json::to_value(pattern).ok(),
            ..Self::default()
        }
    }

    /// Fail-soft: a missing or unreadable payload gives `None`.
    pub fn pattern(&self) -> Option<WeeklyPattern> {
        self.weekly_pattern_json.as_ref().and_then(parse_weekly_pattern)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    #[serde(default)]
    pub name: Option<String>,
}

impl Team {
    pub fn new(id: TeamId) -> Self {
        Self { id, name: None }
    }
}

pub fn active_template_for_team(
    templates: &[ScheduleTemplate],
    team_id: TeamId,
) -> Option<&ScheduleTemplate> {
    templates
        .iter()
        .find(|template| template.active && template.team_id == Some(team_id))
}

pub fn active_templates_by_team(templates: &[ScheduleTemplate]) -> HashMap<TeamId, &ScheduleTemplate> {
    let mut by_team = HashMap::new();
    for template in templates.iter().filter(|template| template.active) {
        if let Some(team_id) = template.team_id {
            by_team.entry(team_id).or_insert(template);
        }
    }
    by_team
}

#[cfg(test)]
mod schedule_template_tests {
    use super::*;
    use crate::core::schedule::day_key::DayKey;
    use crate::test_support::fixtures::patterns::{WeeklyPatternBuilder, office_week_json};
    use rstest::rstest;
    use serde_json::json;

    fn template(id: i64, team_id: TeamId, active: bool) -> ScheduleTemplate {
        ScheduleTemplate {
            id: Some(id),
            team_id: Some(team_id),
            name: format!("template-{id}"),
            active,
            weekly_pattern_json: None,
        }
    }

    #[rstest]
    fn it_should_deserialize_the_backend_record_with_a_text_pattern() {
        let record = json!({
            "id": 7,
            "teamId": 3,
            "name": "Office hours",
            "active": true,
            "weeklyPatternJson": office_week_json(),
        });
        let template: ScheduleTemplate = serde_json::from_value(record).unwrap();
        assert_eq!(template.id, Some(7));
        assert_eq!(template.team_id, Some(3));
        assert!(template.active);
        assert_eq!(template.pattern(), Some(WeeklyPatternBuilder::new().build()));
    }

    #[rstest]
    fn it_should_accept_an_already_decoded_pattern_object() {
        let record = json!({ "weeklyPatternJson": { "mon": [["09:00", "17:00"]] } });
        let template: ScheduleTemplate = serde_json::from_value(record).unwrap();
        let pattern = template.pattern().unwrap();
        assert_eq!(pattern.days.len(), 1);
        assert_eq!(pattern.slots_for(DayKey::Mon).len(), 1);
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({ "weeklyPatternJson": null }))]
    #[case(json!({ "weeklyPatternJson": "" }))]
    #[case(json!({ "weeklyPatternJson": "{not json" }))]
    fn it_should_have_no_pattern_when_the_payload_is_unusable(#[case] record: Value) {
        let template: ScheduleTemplate = serde_json::from_value(record).unwrap();
        assert_eq!(template.pattern(), None);
    }

    #[rstest]
    fn it_should_round_trip_a_pattern_through_a_template() {
        let pattern = WeeklyPatternBuilder::new().pause_duration(30).build();
        assert_eq!(ScheduleTemplate::from_pattern(&pattern).pattern(), Some(pattern));
        assert_eq!(
            ScheduleTemplate::from_pattern_json(office_week_json()).pattern(),
            Some(WeeklyPatternBuilder::new().build())
        );
    }

    #[rstest]
    fn it_should_pick_the_active_template_of_a_team() {
        let templates = vec![template(1, 10, false), template(2, 10, true), template(3, 20, true)];
        assert_eq!(active_template_for_team(&templates, 10).and_then(|t| t.id), Some(2));
        assert_eq!(active_template_for_team(&templates, 20).and_then(|t| t.id), Some(3));
        assert_eq!(active_template_for_team(&templates, 30), None);
    }

    #[rstest]
    fn it_should_index_active_templates_by_team_keeping_the_first() {
        let mut orphan = template(5, 0, true);
        orphan.team_id = None;
        let templates = vec![
            template(1, 10, true),
            template(2, 10, true),
            template(3, 20, false),
            orphan,
        ];
        let by_team = active_templates_by_team(&templates);
        assert_eq!(by_team.len(), 1);
        assert_eq!(by_team[&10].id, Some(1));
    }
}
