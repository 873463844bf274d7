// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between request DTOs and planning types.
//!
//! Everything the planner receives is validated here. Conversion stops at
//! the first invalid value.

use crate::error::{ApiError, ConversionError};
use crate::request_response::{
    DayLockDto, EventDto, PlanningSnapshotRequest, ProjectDto, ScheduleResponse,
    SpacingRuleDto, TeamDto, TeamSummaryEntry, WarningDto,
};
use passage_planner::{
    Event, PlanningSnapshot, ScheduleWarning, TeamFilter, TeamMonthSummary, YearlySchedule,
};
use passage_planner_domain::{
    DayLock, DomainError, IsoWeekday, MonthlyDistribution, Project, ProjectId, SpacingRule,
    SpacingType, Team, TeamId, validate_unique_project_ids,
};
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;
use time::Month;

/// Builds a planning snapshot from a request.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for malformed values and
/// `ApiError::DomainRuleViolation` if two projects share an identifier.
pub fn snapshot_from_request(
    request: &PlanningSnapshotRequest,
) -> Result<PlanningSnapshot, ApiError> {
    let projects: Vec<Project> = request
        .projects
        .iter()
        .map(project_from_dto)
        .collect::<Result<_, _>>()?;
    validate_unique_project_ids(&projects)?;

    let mut snapshot: PlanningSnapshot = PlanningSnapshot::new();
    snapshot.projects = projects;

    let mut team_ids: BTreeSet<&str> = BTreeSet::new();
    for dto in &request.teams {
        if !team_ids.insert(dto.id.as_str()) {
            return Err(ConversionError::DuplicateTeam(dto.id.clone()).into());
        }
        snapshot = snapshot.with_team(team_from_dto(dto)?);
    }

    for dto in &request.locks {
        snapshot = snapshot.with_lock(&lock_from_dto(dto)?);
    }

    for (project_id, counts) in &request.distributions {
        require_project_id(project_id)?;
        snapshot =
            snapshot.with_distribution(project_id, MonthlyDistribution::from_counts(counts));
    }

    for dto in &request.spacing_rules {
        if snapshot
            .spacing_rules
            .contains_key(&ProjectId::new(&dto.project_id))
        {
            return Err(ConversionError::DuplicateSpacingRule(dto.project_id.clone()).into());
        }
        snapshot = snapshot.with_spacing_rule(&dto.project_id, spacing_rule_from_dto(dto)?);
    }

    Ok(snapshot)
}

fn require_project_id(id: &str) -> Result<(), DomainError> {
    if id.trim().is_empty() {
        return Err(DomainError::InvalidProjectId(String::from(
            "Project id cannot be empty",
        )));
    }
    Ok(())
}

fn project_from_dto(dto: &ProjectDto) -> Result<Project, DomainError> {
    require_project_id(&dto.id)?;

    let mut project: Project = Project::new(&dto.id, &dto.name)
        .with_visit_duration_hours(dto.visit_duration_hours);
    project.annual_visits = dto.annual_visits;
    project.is_archived = dto.is_archived;
    if let Some(team_id) = &dto.team_id {
        project = project.with_team(team_id);
    }
    if let Some(address) = &dto.address {
        project = project.with_address(address);
    }
    Ok(project)
}

fn team_from_dto(dto: &TeamDto) -> Result<Team, DomainError> {
    if dto.id.trim().is_empty() {
        return Err(DomainError::InvalidTeamId(String::from(
            "Team id cannot be empty",
        )));
    }
    Ok(Team::new(&dto.id, &dto.name, &dto.color_hex))
}

fn lock_from_dto(dto: &DayLockDto) -> Result<DayLock, DomainError> {
    require_project_id(&dto.project_id)?;
    let day: IsoWeekday = IsoWeekday::new(dto.day_of_week)?;

    let mut lock: DayLock = match dto.min_days_between_visits {
        Some(days) if days > 0 => DayLock::spacing(&dto.project_id, day, &dto.reason, days)?,
        _ => DayLock::complete(&dto.project_id, day, &dto.reason)?,
    };
    if let Some(description) = &dto.description {
        lock = lock.with_description(description);
    }
    if !dto.is_active {
        lock = lock.deactivated();
    }
    Ok(lock)
}

fn spacing_rule_from_dto(dto: &SpacingRuleDto) -> Result<SpacingRule, DomainError> {
    require_project_id(&dto.project_id)?;
    let spacing_type: SpacingType = SpacingType::from_str(&dto.spacing_type)?;
    SpacingRule::new(spacing_type, dto.spacing_value, dto.is_priority)
}

/// Resolves the team query parameters of an events request.
///
/// # Errors
///
/// Returns an error if both a team and `unassigned` are requested, or if the
/// team identifier is empty.
pub fn team_filter(team: Option<&str>, unassigned: bool) -> Result<TeamFilter, ApiError> {
    match (team, unassigned) {
        (Some(id), true) => Err(ConversionError::ConflictingTeamFilter(id.to_string()).into()),
        (Some(id), false) if id.trim().is_empty() => Err(DomainError::InvalidTeamId(
            String::from("Team id cannot be empty"),
        )
        .into()),
        (Some(id), false) => Ok(TeamFilter::Team(TeamId::new(id))),
        (None, true) => Ok(TeamFilter::Unassigned),
        (None, false) => Ok(TeamFilter::All),
    }
}

/// Converts a month number (1-12) into a month.
///
/// # Errors
///
/// Returns an error if the number is outside 1-12.
pub fn month_from_number(number: u8) -> Result<Month, ConversionError> {
    Month::try_from(number).map_err(|_| ConversionError::InvalidMonth(number))
}

/// Converts a projected event into its DTO.
#[must_use]
pub fn event_to_dto(event: &Event) -> EventDto {
    EventDto {
        date: event.date.to_string(),
        project_id: event.project_id.value().to_string(),
        project_name: event.project_name.clone(),
        team_id: event.team_id.as_ref().map(|id| id.value().to_string()),
        team_name: event.team.as_ref().map(|team| team.name.clone()),
        team_color: event.team.as_ref().map(|team| team.color_hex.clone()),
        passage_number: event.passage_number,
        total_passages: event.total_passages,
        address: event.address.clone(),
        visit_duration_hours: event.visit_duration_hours,
        min_days_between_visits: event.min_days_between_visits,
    }
}

/// Converts a scheduler warning into its DTO.
#[must_use]
pub fn warning_to_dto(warning: &ScheduleWarning) -> WarningDto {
    WarningDto {
        project_id: warning.project_id.value().to_string(),
        month: warning.month.map(u8::from),
        code: warning.kind.code().to_string(),
        message: warning.to_string(),
    }
}

/// Converts a schedule and its warnings into a response.
#[must_use]
pub fn schedule_to_response(
    schedule: &YearlySchedule,
    warnings: &[ScheduleWarning],
    show_weekends: bool,
) -> ScheduleResponse {
    let projects: BTreeMap<String, BTreeMap<String, u32>> = schedule
        .iter()
        .map(|(project_id, passages)| {
            let by_date: BTreeMap<String, u32> = passages
                .iter()
                .map(|(date, passage)| (date.to_string(), *passage))
                .collect();
            (project_id.value().to_string(), by_date)
        })
        .collect();

    ScheduleResponse {
        year: schedule.year(),
        show_weekends,
        schedule: projects,
        total_passages: schedule.total_passages(),
        warnings: warnings.iter().map(warning_to_dto).collect(),
    }
}

/// Converts a team summary into its DTO.
#[must_use]
pub fn team_summary_to_dto(summary: &TeamMonthSummary) -> TeamSummaryEntry {
    TeamSummaryEntry {
        team_id: summary.team_id.as_ref().map(|id| id.value().to_string()),
        team_name: summary.team_name.clone(),
        visits_per_month: summary.visits_per_month.to_vec(),
        total_visits: summary.total_visits,
        project_count: summary.project_count,
    }
}
