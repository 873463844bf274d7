// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Projection of a yearly schedule into visit events.
//!
//! Events are re-derived on demand for calendar, list and team views. Locks
//! are checked again at projection time, so a weekday blocked after the
//! schedule was computed stops showing events immediately.
//!
//! ## Invariants
//!
//! - Events never fall on a Saturday or Sunday
//! - Events never fall on a completely blocked weekday of their project
//! - Archived projects produce no events

use crate::error::CoreError;
use crate::schedule::YearlySchedule;
use crate::snapshot::PlanningSnapshot;
use passage_planner_domain::{
    IsoWeekday, MONTHS_PER_YEAR, MonthlyQuota, Project, ProjectId, Team, TeamId, days_in_month,
    month_index,
};
use std::collections::BTreeMap;
use time::{Date, Month};

/// Which projects a view is interested in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TeamFilter {
    /// Every project.
    #[default]
    All,
    /// Projects owned by one team.
    Team(TeamId),
    /// Projects without a team.
    Unassigned,
}

impl TeamFilter {
    /// Returns whether a project's team passes the filter.
    #[must_use]
    pub fn matches(&self, team_id: Option<&TeamId>) -> bool {
        match self {
            Self::All => true,
            Self::Team(wanted) => team_id == Some(wanted),
            Self::Unassigned => team_id.is_none(),
        }
    }
}

/// Display information about the team owning a visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamInfo {
    /// The team's identifier.
    pub id: TeamId,
    /// Display name.
    pub name: String,
    /// Display colour.
    pub color_hex: String,
}

impl From<&Team> for TeamInfo {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id.clone(),
            name: team.name.clone(),
            color_hex: team.color_hex.clone(),
        }
    }
}

/// One scheduled visit as shown to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// The visit date.
    pub date: Date,
    /// The visited project.
    pub project_id: ProjectId,
    /// The project's display name.
    pub project_name: String,
    /// The owning team's identifier, if assigned.
    pub team_id: Option<TeamId>,
    /// The owning team, if it exists in the snapshot.
    pub team: Option<TeamInfo>,
    /// 1-based passage number within the year.
    pub passage_number: u32,
    /// The project's annual target.
    pub total_passages: u32,
    /// Site address.
    pub address: Option<String>,
    /// Expected duration.
    pub visit_duration_hours: f64,
    /// Minimum gap enforced by a spacing lock on this weekday, if any.
    pub min_days_between_visits: Option<u32>,
}

/// Visits per month for one team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMonthSummary {
    /// The team, or `None` for unassigned projects.
    pub team_id: Option<TeamId>,
    /// The team's display name, if known.
    pub team_name: Option<String>,
    /// Scheduled visits per month, January first.
    pub visits_per_month: MonthlyQuota,
    /// Sum of `visits_per_month`.
    pub total_visits: u32,
    /// Number of non-archived projects owned by the team.
    pub project_count: usize,
}

/// Reads a schedule back as events.
#[derive(Debug, Clone, Copy)]
pub struct EventProjector<'a> {
    snapshot: &'a PlanningSnapshot,
    schedule: &'a YearlySchedule,
}

impl<'a> EventProjector<'a> {
    /// Creates a projector over a snapshot and a schedule computed from it.
    #[must_use]
    pub const fn new(snapshot: &'a PlanningSnapshot, schedule: &'a YearlySchedule) -> Self {
        Self { snapshot, schedule }
    }

    /// Returns the events of one day, in project order.
    #[must_use]
    pub fn events_for_day(&self, date: Date, filter: &TeamFilter) -> Vec<Event> {
        let weekday: IsoWeekday = IsoWeekday::of(date);
        if weekday.is_weekend() {
            return Vec::new();
        }

        self.snapshot
            .schedulable_projects()
            .filter(|project| filter.matches(project.team_id.as_ref()))
            .filter(|project| self.is_projected(&project.id, date))
            .filter_map(|project| {
                self.schedule
                    .passage_on(&project.id, date)
                    .map(|passage| self.build_event(project, date, weekday, passage))
            })
            .collect()
    }

    /// Returns the events of an inclusive date range, keyed by date.
    ///
    /// Days without events are omitted. An inverted range yields nothing.
    #[must_use]
    pub fn events_for_range(
        &self,
        start: Date,
        end: Date,
        filter: &TeamFilter,
    ) -> BTreeMap<Date, Vec<Event>> {
        let mut by_date: BTreeMap<Date, Vec<Event>> = BTreeMap::new();
        let mut current: Option<Date> = Some(start);

        while let Some(day) = current {
            if day > end {
                break;
            }
            let events: Vec<Event> = self.events_for_day(day, filter);
            if !events.is_empty() {
                by_date.insert(day, events);
            }
            current = day.next_day();
        }

        by_date
    }

    /// Returns the events of a month, keyed by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside the supported range.
    pub fn events_for_month(
        &self,
        year: i32,
        month: Month,
        filter: &TeamFilter,
    ) -> Result<BTreeMap<Date, Vec<Event>>, CoreError> {
        let days: Vec<Date> = days_in_month(year, month)?;
        match (days.first(), days.last()) {
            (Some(first), Some(last)) => Ok(self.events_for_range(*first, *last, filter)),
            _ => Ok(BTreeMap::new()),
        }
    }

    /// Returns the events of an inclusive date range grouped by team.
    ///
    /// Unassigned projects are grouped under `None`. Within a team, events
    /// are ordered by date.
    #[must_use]
    pub fn events_by_team(&self, start: Date, end: Date) -> BTreeMap<Option<TeamId>, Vec<Event>> {
        let mut by_team: BTreeMap<Option<TeamId>, Vec<Event>> = BTreeMap::new();
        for event in self
            .events_for_range(start, end, &TeamFilter::All)
            .into_values()
            .flatten()
        {
            by_team.entry(event.team_id.clone()).or_default().push(event);
        }
        by_team
    }

    /// Counts projected visits per team and month.
    ///
    /// A visit counts only if it would appear as an event, so weekend dates
    /// and dates on a weekday blocked since scheduling are left out. Teams
    /// with no projects are omitted and unassigned projects are summarised
    /// last.
    #[must_use]
    pub fn team_summary(&self) -> Vec<TeamMonthSummary> {
        let mut summaries: BTreeMap<Option<TeamId>, TeamMonthSummary> = BTreeMap::new();

        for project in self.snapshot.schedulable_projects() {
            let entry: &mut TeamMonthSummary = summaries
                .entry(project.team_id.clone())
                .or_insert_with(|| TeamMonthSummary {
                    team_id: project.team_id.clone(),
                    team_name: project
                        .team_id
                        .as_ref()
                        .and_then(|id| self.snapshot.team(id))
                        .map(|team| team.name.clone()),
                    visits_per_month: [0; MONTHS_PER_YEAR],
                    total_visits: 0,
                    project_count: 0,
                });

            entry.project_count += 1;
            if let Some(passages) = self.schedule.passages(&project.id) {
                for date in passages
                    .keys()
                    .filter(|date| self.is_projected(&project.id, **date))
                {
                    entry.visits_per_month[month_index(date.month())] += 1;
                    entry.total_visits += 1;
                }
            }
        }

        // `None` sorts first in a BTreeMap; unassigned goes last
        let mut ordered: Vec<TeamMonthSummary> = Vec::with_capacity(summaries.len());
        let unassigned: Option<TeamMonthSummary> = summaries.remove(&None);
        ordered.extend(summaries.into_values());
        ordered.extend(unassigned);
        ordered
    }

    fn is_projected(&self, project_id: &ProjectId, date: Date) -> bool {
        let weekday: IsoWeekday = IsoWeekday::of(date);
        !weekday.is_weekend() && !self.snapshot.locks.is_complete_block(project_id, weekday)
    }

    fn build_event(
        &self,
        project: &Project,
        date: Date,
        weekday: IsoWeekday,
        passage: u32,
    ) -> Event {
        Event {
            date,
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            team_id: project.team_id.clone(),
            team: project
                .team_id
                .as_ref()
                .and_then(|id| self.snapshot.team(id))
                .map(TeamInfo::from),
            passage_number: passage,
            total_passages: project.effective_annual_visits(),
            address: project.address.clone(),
            visit_duration_hours: project.visit_duration_hours,
            min_days_between_visits: self
                .snapshot
                .locks
                .min_days_between_visits(&project.id, weekday),
        }
    }
}
