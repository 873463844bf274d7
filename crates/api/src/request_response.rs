// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates travel as `YYYY-MM-DD` strings and months as numbers 1-12.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const fn default_true() -> bool {
    true
}

/// A project as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDto {
    /// Unique project identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Target visits per year; 12 when absent.
    #[serde(default)]
    pub annual_visits: Option<i32>,
    /// Expected duration of one visit.
    #[serde(default)]
    pub visit_duration_hours: f64,
    /// Owning team, if any.
    #[serde(default)]
    pub team_id: Option<String>,
    /// Archived projects are not scheduled.
    #[serde(default)]
    pub is_archived: bool,
    /// Site address.
    #[serde(default)]
    pub address: Option<String>,
}

/// A team as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDto {
    /// Unique team identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display colour.
    #[serde(default)]
    pub color_hex: String,
}

/// A weekday lock as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLockDto {
    /// The locked project.
    pub project_id: String,
    /// ISO weekday, 1 (Monday) through 7 (Sunday).
    pub day_of_week: u8,
    /// Why the weekday is locked. Required.
    pub reason: String,
    /// Optional free-form detail.
    #[serde(default)]
    pub description: Option<String>,
    /// Inactive locks are accepted and ignored.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Minimum gap in days; absent or 0 blocks the weekday completely.
    #[serde(default)]
    pub min_days_between_visits: Option<u32>,
}

/// A spacing rule as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingRuleDto {
    /// The project the rule belongs to.
    pub project_id: String,
    /// One of `days`, `weeks` or `months`.
    pub spacing_type: String,
    /// Interval length, greater than 0.
    pub spacing_value: u32,
    /// Whether the rule replaces the monthly distribution.
    #[serde(default)]
    pub is_priority: bool,
}

/// API request to replace the planning snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanningSnapshotRequest {
    /// All projects, archived ones included.
    #[serde(default)]
    pub projects: Vec<ProjectDto>,
    /// All teams.
    #[serde(default)]
    pub teams: Vec<TeamDto>,
    /// Weekday locks.
    #[serde(default)]
    pub locks: Vec<DayLockDto>,
    /// Explicit visit counts per month (January first) by project.
    #[serde(default)]
    pub distributions: BTreeMap<String, Vec<i64>>,
    /// Spacing rules, at most one per project.
    #[serde(default)]
    pub spacing_rules: Vec<SpacingRuleDto>,
}

/// API response for a successful snapshot replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSummaryResponse {
    /// Number of projects received.
    pub project_count: usize,
    /// Number of projects that will be scheduled.
    pub schedulable_project_count: usize,
    /// Number of teams received.
    pub team_count: usize,
    /// Number of (project, weekday) pairs carrying an active lock.
    pub active_lock_count: usize,
    /// Snapshot revision after the replacement.
    pub revision: u64,
    /// A success message.
    pub message: String,
}

/// API request for a yearly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The calendar year.
    pub year: i32,
    /// Whether weekends may receive visits; the server default when absent.
    #[serde(default)]
    pub show_weekends: Option<bool>,
}

/// A soft failure reported by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningDto {
    /// The affected project.
    pub project_id: String,
    /// The affected month (1-12), when month-specific.
    pub month: Option<u8>,
    /// Stable machine-readable code.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

/// API response carrying a yearly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// The calendar year.
    pub year: i32,
    /// Whether weekends were allowed.
    pub show_weekends: bool,
    /// Passage number by ISO date, by project.
    pub schedule: BTreeMap<String, BTreeMap<String, u32>>,
    /// Number of visits across all projects.
    pub total_passages: usize,
    /// Soft failures in the order they were found.
    pub warnings: Vec<WarningDto>,
}

/// One visit as shown in calendar and list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDto {
    /// Visit date.
    pub date: String,
    /// The visited project.
    pub project_id: String,
    /// The project's display name.
    pub project_name: String,
    /// The owning team, if assigned.
    pub team_id: Option<String>,
    /// The owning team's display name, if known.
    pub team_name: Option<String>,
    /// The owning team's colour, if known.
    pub team_color: Option<String>,
    /// 1-based passage number.
    pub passage_number: u32,
    /// The project's annual target.
    pub total_passages: u32,
    /// Site address.
    pub address: Option<String>,
    /// Expected duration.
    pub visit_duration_hours: f64,
    /// Spacing lock on this weekday, if any.
    pub min_days_between_visits: Option<u32>,
}

/// API request for the events of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEventsRequest {
    /// The day, `YYYY-MM-DD`.
    pub date: String,
    /// Restrict to one team.
    #[serde(default)]
    pub team: Option<String>,
    /// Restrict to projects without a team.
    #[serde(default)]
    pub unassigned: bool,
    /// Whether the underlying schedule allows weekends.
    #[serde(default)]
    pub show_weekends: Option<bool>,
}

/// API response listing the events of one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEventsResponse {
    /// The day, `YYYY-MM-DD`.
    pub date: String,
    /// Events in project order.
    pub events: Vec<EventDto>,
}

/// API request for the events of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthEventsRequest {
    /// The calendar year.
    pub year: i32,
    /// The month, 1-12.
    pub month: u8,
    /// Restrict to one team.
    #[serde(default)]
    pub team: Option<String>,
    /// Restrict to projects without a team.
    #[serde(default)]
    pub unassigned: bool,
    /// Whether the underlying schedule allows weekends.
    #[serde(default)]
    pub show_weekends: Option<bool>,
}

/// API response listing the events of one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthEventsResponse {
    /// The calendar year.
    pub year: i32,
    /// The month, 1-12.
    pub month: u8,
    /// Events by ISO date; days without events are omitted.
    pub days: BTreeMap<String, Vec<EventDto>>,
    /// Number of events in the month.
    pub total_events: usize,
}

/// API request for per-team visit counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummaryRequest {
    /// The calendar year.
    pub year: i32,
    /// Whether weekends may receive visits; the server default when absent.
    #[serde(default)]
    pub show_weekends: Option<bool>,
}

/// Visit counts of one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummaryEntry {
    /// The team, or `None` for unassigned projects.
    pub team_id: Option<String>,
    /// The team's display name, if known.
    pub team_name: Option<String>,
    /// Visits per month, January first, counted as the event views show
    /// them: no weekend dates and no dates on a blocked weekday.
    pub visits_per_month: Vec<u32>,
    /// Visits across the year.
    pub total_visits: u32,
    /// Number of scheduled projects owned by the team.
    pub project_count: usize,
}

/// API response with per-team visit counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummaryResponse {
    /// The calendar year.
    pub year: i32,
    /// One entry per team with projects; unassigned last.
    pub teams: Vec<TeamSummaryEntry>,
}
