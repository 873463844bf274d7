// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod conversion;
mod error;
mod request_response;

#[cfg(test)]
mod tests;

use passage_planner::{
    EventProjector, PlanningSnapshot, ScheduleCache, ScheduleOutcome, TeamFilter,
};
use passage_planner_domain::parse_iso_date;
use std::collections::BTreeMap;
use time::{Date, Month};
use tracing::{debug, info};

pub use conversion::{
    event_to_dto, month_from_number, schedule_to_response, snapshot_from_request, team_filter,
    team_summary_to_dto, warning_to_dto,
};
pub use error::{ApiError, ConversionError, translate_core_error, translate_domain_error};
pub use request_response::{
    DayEventsRequest, DayEventsResponse, DayLockDto, EventDto, MonthEventsRequest,
    MonthEventsResponse, PlanningSnapshotRequest, ProjectDto, ScheduleRequest, ScheduleResponse,
    SnapshotSummaryResponse, SpacingRuleDto, TeamDto, TeamSummaryEntry, TeamSummaryRequest,
    TeamSummaryResponse, WarningDto,
};

/// The planner's working state: the current snapshot and its schedules.
///
/// Every schedule is derived from the snapshot. Replacing the snapshot
/// discards every cached schedule.
#[derive(Debug, Clone, Default)]
pub struct PlannerState {
    snapshot: PlanningSnapshot,
    cache: ScheduleCache,
    default_show_weekends: bool,
}

impl PlannerState {
    /// Creates a state around an initial snapshot.
    ///
    /// # Arguments
    ///
    /// * `snapshot` - The initial planning snapshot
    /// * `default_show_weekends` - Used when a request does not say
    #[must_use]
    pub fn new(snapshot: PlanningSnapshot, default_show_weekends: bool) -> Self {
        Self {
            snapshot,
            cache: ScheduleCache::new(),
            default_show_weekends,
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &PlanningSnapshot {
        &self.snapshot
    }

    /// Returns the current snapshot revision.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.cache.revision()
    }

    /// Returns the weekend setting used when a request does not say.
    #[must_use]
    pub const fn default_show_weekends(&self) -> bool {
        self.default_show_weekends
    }

    const fn show_weekends(&self, requested: Option<bool>) -> bool {
        match requested {
            Some(value) => value,
            None => self.default_show_weekends,
        }
    }
}

/// Replaces the planning snapshot.
///
/// This function:
/// - Validates and converts the request
/// - Swaps the snapshot in
/// - Discards every cached schedule
///
/// The previous snapshot is kept if the request is rejected.
///
/// # Errors
///
/// Returns an error if:
/// - Any identifier, weekday, spacing type or lock reason is invalid
/// - Two projects, teams or spacing rules share an identifier
pub fn replace_snapshot(
    state: &mut PlannerState,
    request: &PlanningSnapshotRequest,
) -> Result<SnapshotSummaryResponse, ApiError> {
    let snapshot: PlanningSnapshot = snapshot_from_request(request)?;

    state.snapshot = snapshot;
    state.cache.invalidate();

    let response: SnapshotSummaryResponse = SnapshotSummaryResponse {
        project_count: state.snapshot.projects.len(),
        schedulable_project_count: state.snapshot.schedulable_projects().count(),
        team_count: state.snapshot.teams.len(),
        active_lock_count: state.snapshot.locks.len(),
        revision: state.cache.revision(),
        message: String::from("Planning snapshot replaced"),
    };

    info!(
        revision = response.revision,
        projects = response.project_count,
        teams = response.team_count,
        locks = response.active_lock_count,
        "Planning snapshot replaced"
    );

    Ok(response)
}

/// Returns the yearly schedule of every non-archived project.
///
/// # Errors
///
/// Returns an error if the year is outside the supported range.
pub fn get_schedule(
    state: &mut PlannerState,
    request: &ScheduleRequest,
) -> Result<ScheduleResponse, ApiError> {
    let show_weekends: bool = state.show_weekends(request.show_weekends);
    let outcome: &ScheduleOutcome = state
        .cache
        .get_or_compute(&state.snapshot, request.year, show_weekends)?;

    debug!(
        year = request.year,
        show_weekends,
        passages = outcome.schedule.total_passages(),
        "Schedule served"
    );

    Ok(schedule_to_response(
        &outcome.schedule,
        &outcome.warnings,
        show_weekends,
    ))
}

/// Returns the events of one day.
///
/// # Errors
///
/// Returns an error if:
/// - The date is not `YYYY-MM-DD`
/// - The team filter is invalid
/// - The year is outside the supported range
pub fn get_day_events(
    state: &mut PlannerState,
    request: &DayEventsRequest,
) -> Result<DayEventsResponse, ApiError> {
    let date: Date = parse_iso_date(&request.date)?;
    let filter: TeamFilter = team_filter(request.team.as_deref(), request.unassigned)?;
    let show_weekends: bool = state.show_weekends(request.show_weekends);

    let outcome: &ScheduleOutcome = state
        .cache
        .get_or_compute(&state.snapshot, date.year(), show_weekends)?;
    let projector: EventProjector<'_> = EventProjector::new(&state.snapshot, &outcome.schedule);

    let events: Vec<EventDto> = projector
        .events_for_day(date, &filter)
        .iter()
        .map(event_to_dto)
        .collect();

    Ok(DayEventsResponse {
        date: date.to_string(),
        events,
    })
}

/// Returns the events of one month, keyed by date.
///
/// # Errors
///
/// Returns an error if:
/// - The month is outside 1-12
/// - The team filter is invalid
/// - The year is outside the supported range
pub fn get_month_events(
    state: &mut PlannerState,
    request: &MonthEventsRequest,
) -> Result<MonthEventsResponse, ApiError> {
    let month: Month = month_from_number(request.month)?;
    let filter: TeamFilter = team_filter(request.team.as_deref(), request.unassigned)?;
    let show_weekends: bool = state.show_weekends(request.show_weekends);

    let outcome: &ScheduleOutcome = state
        .cache
        .get_or_compute(&state.snapshot, request.year, show_weekends)?;
    let projector: EventProjector<'_> = EventProjector::new(&state.snapshot, &outcome.schedule);

    let days: BTreeMap<String, Vec<EventDto>> = projector
        .events_for_month(request.year, month, &filter)?
        .iter()
        .map(|(date, events)| (date.to_string(), events.iter().map(event_to_dto).collect()))
        .collect();
    let total_events: usize = days.values().map(Vec::len).sum();

    Ok(MonthEventsResponse {
        year: request.year,
        month: request.month,
        days,
        total_events,
    })
}

/// Returns scheduled visits per team and month.
///
/// # Errors
///
/// Returns an error if the year is outside the supported range.
pub fn get_team_summary(
    state: &mut PlannerState,
    request: &TeamSummaryRequest,
) -> Result<TeamSummaryResponse, ApiError> {
    let show_weekends: bool = state.show_weekends(request.show_weekends);

    let outcome: &ScheduleOutcome = state
        .cache
        .get_or_compute(&state.snapshot, request.year, show_weekends)?;
    let projector: EventProjector<'_> = EventProjector::new(&state.snapshot, &outcome.schedule);

    Ok(TeamSummaryResponse {
        year: request.year,
        teams: projector
            .team_summary()
            .iter()
            .map(team_summary_to_dto)
            .collect(),
    })
}
