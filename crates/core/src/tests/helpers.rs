// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{PlanningSnapshot, ScheduleOutcome, schedule};
use passage_planner_domain::{DayLock, IsoWeekday, Project, ProjectId, Team};
use time::Date;

pub fn create_test_project(id: &str, annual_visits: i32) -> Project {
    Project::new(id, &format!("Project {id}"))
        .with_annual_visits(annual_visits)
        .with_address("12 Orchard Road")
        .with_visit_duration_hours(1.5)
}

pub fn create_test_team(id: &str) -> Team {
    Team::new(id, &format!("Team {id}"), "#2e7d32")
}

pub fn complete_lock(project_id: &str, weekday: IsoWeekday) -> DayLock {
    DayLock::complete(project_id, weekday, "Site closed").unwrap()
}

pub fn spacing_lock(project_id: &str, weekday: IsoWeekday, days: u32) -> DayLock {
    DayLock::spacing(project_id, weekday, "Irrigation cycle", days).unwrap()
}

pub fn single_project_snapshot(annual_visits: i32) -> PlanningSnapshot {
    PlanningSnapshot::new().with_project(create_test_project("p1", annual_visits))
}

pub fn dates_of(outcome: &ScheduleOutcome, project_id: &str) -> Vec<Date> {
    outcome
        .schedule
        .passages(&ProjectId::new(project_id))
        .map(|passages| passages.keys().copied().collect())
        .unwrap_or_default()
}

pub fn schedule_2024(snapshot: &PlanningSnapshot) -> ScheduleOutcome {
    schedule(snapshot, 2024, false).unwrap()
}
