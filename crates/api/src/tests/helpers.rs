// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{
    DayLockDto, PlannerState, PlanningSnapshotRequest, ProjectDto, SpacingRuleDto, TeamDto,
    replace_snapshot,
};
use passage_planner::PlanningSnapshot;
use std::collections::BTreeMap;

pub fn create_project_dto(id: &str, annual_visits: i32) -> ProjectDto {
    ProjectDto {
        id: String::from(id),
        name: format!("Project {id}"),
        annual_visits: Some(annual_visits),
        visit_duration_hours: 2.0,
        team_id: None,
        is_archived: false,
        address: None,
    }
}

pub fn create_team_dto(id: &str) -> TeamDto {
    TeamDto {
        id: String::from(id),
        name: format!("Team {id}"),
        color_hex: String::from("#1565c0"),
    }
}

pub fn create_lock_dto(project_id: &str, day_of_week: u8, min_days: Option<u32>) -> DayLockDto {
    DayLockDto {
        project_id: String::from(project_id),
        day_of_week,
        reason: String::from("Client request"),
        description: None,
        is_active: true,
        min_days_between_visits: min_days,
    }
}

pub fn create_spacing_rule_dto(project_id: &str, spacing_type: &str, value: u32) -> SpacingRuleDto {
    SpacingRuleDto {
        project_id: String::from(project_id),
        spacing_type: String::from(spacing_type),
        spacing_value: value,
        is_priority: true,
    }
}

/// `lawn`: 12 visits for team `t1`, Mondays blocked.
/// `hedges`: 4 visits, unassigned, 30 days around Wednesday visits.
/// `orchard`: archived.
pub fn create_sample_request() -> PlanningSnapshotRequest {
    let mut lawn: ProjectDto = create_project_dto("lawn", 12);
    lawn.team_id = Some(String::from("t1"));
    lawn.address = Some(String::from("4 Mill Lane"));

    let mut orchard: ProjectDto = create_project_dto("orchard", 6);
    orchard.is_archived = true;

    PlanningSnapshotRequest {
        projects: vec![lawn, create_project_dto("hedges", 4), orchard],
        teams: vec![create_team_dto("t1")],
        locks: vec![
            create_lock_dto("lawn", 1, None),
            create_lock_dto("hedges", 3, Some(30)),
        ],
        distributions: BTreeMap::new(),
        spacing_rules: Vec::new(),
    }
}

pub fn create_loaded_state() -> PlannerState {
    let mut state: PlannerState = PlannerState::new(PlanningSnapshot::new(), false);
    replace_snapshot(&mut state, &create_sample_request()).unwrap();
    state
}
