// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::IsoWeekday;
use crate::error::DomainError;
use crate::monthly_quota::MONTHS_PER_YEAR;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Annual visit count assumed when a project does not declare one.
pub const DEFAULT_ANNUAL_VISITS: i32 = 12;

/// Represents a project identifier.
///
/// Identifiers are opaque; they are compared exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates a new `ProjectId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a team identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(String);

impl TeamId {
    /// Creates a new `TeamId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A schedulable maintenance contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// The project's identifier.
    pub id: ProjectId,
    /// Display name.
    pub name: String,
    /// Target visits per calendar year. `None` means the default of 12.
    pub annual_visits: Option<i32>,
    /// Expected duration of one visit. Informational only.
    pub visit_duration_hours: f64,
    /// Owning team, if assigned.
    pub team_id: Option<TeamId>,
    /// Archived projects are never scheduled.
    pub is_archived: bool,
    /// Site address shown on events.
    pub address: Option<String>,
}

impl Project {
    /// Creates an active, unassigned project with the default visit count.
    ///
    /// # Arguments
    ///
    /// * `id` - The project identifier
    /// * `name` - The display name
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: ProjectId::new(id),
            name: name.to_string(),
            annual_visits: None,
            visit_duration_hours: 0.0,
            team_id: None,
            is_archived: false,
            address: None,
        }
    }

    /// Sets the annual visit target.
    #[must_use]
    pub const fn with_annual_visits(mut self, visits: i32) -> Self {
        self.annual_visits = Some(visits);
        self
    }

    /// Assigns the project to a team.
    #[must_use]
    pub fn with_team(mut self, team_id: &str) -> Self {
        self.team_id = Some(TeamId::new(team_id));
        self
    }

    /// Sets the site address.
    #[must_use]
    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }

    /// Sets the visit duration.
    #[must_use]
    pub const fn with_visit_duration_hours(mut self, hours: f64) -> Self {
        self.visit_duration_hours = hours;
        self
    }

    /// Marks the project as archived.
    #[must_use]
    pub const fn archived(mut self) -> Self {
        self.is_archived = true;
        self
    }

    /// Returns the annual visit target after defaulting and clamping.
    ///
    /// Absent targets become 12; negative targets become 0.
    #[must_use]
    pub fn effective_annual_visits(&self) -> u32 {
        let visits: i32 = self.annual_visits.unwrap_or(DEFAULT_ANNUAL_VISITS);
        u32::try_from(visits).unwrap_or(0)
    }
}

/// A field-service team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// The team's identifier.
    pub id: TeamId,
    /// Display name.
    pub name: String,
    /// Display colour, e.g. `#2e7d32`.
    pub color_hex: String,
}

impl Team {
    /// Creates a new `Team`.
    #[must_use]
    pub fn new(id: &str, name: &str, color_hex: &str) -> Self {
        Self {
            id: TeamId::new(id),
            name: name.to_string(),
            color_hex: color_hex.to_string(),
        }
    }
}

/// Unit of a spacing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpacingType {
    /// Spacing expressed in days.
    Days,
    /// Spacing expressed in weeks.
    Weeks,
    /// Spacing expressed in months.
    Months,
}

impl SpacingType {
    /// Converts this spacing type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
        }
    }
}

impl FromStr for SpacingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "days" => Ok(Self::Days),
            "weeks" => Ok(Self::Weeks),
            "months" => Ok(Self::Months),
            _ => Err(DomainError::InvalidSpacingType(s.to_string())),
        }
    }
}

impl std::fmt::Display for SpacingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fixed interval a project wants between visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingRule {
    spacing_type: SpacingType,
    spacing_value: u32,
    is_priority: bool,
}

impl SpacingRule {
    /// Creates a new `SpacingRule`.
    ///
    /// # Errors
    ///
    /// Returns an error if `spacing_value` is zero.
    pub const fn new(
        spacing_type: SpacingType,
        spacing_value: u32,
        is_priority: bool,
    ) -> Result<Self, DomainError> {
        if spacing_value == 0 {
            return Err(DomainError::InvalidSpacingValue(spacing_value));
        }
        Ok(Self {
            spacing_type,
            spacing_value,
            is_priority,
        })
    }

    /// Returns the spacing unit.
    #[must_use]
    pub const fn spacing_type(&self) -> SpacingType {
        self.spacing_type
    }

    /// Returns the spacing amount.
    #[must_use]
    pub const fn spacing_value(&self) -> u32 {
        self.spacing_value
    }

    /// Returns whether this rule replaces the monthly distribution.
    #[must_use]
    pub const fn is_priority(&self) -> bool {
        self.is_priority
    }
}

/// Explicit per-month visit counts for one project.
///
/// Counts are a placement guide; they may sum to more or less than the
/// project's annual target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonthlyDistribution {
    counts: [u32; MONTHS_PER_YEAR],
}

impl MonthlyDistribution {
    /// Creates a distribution from raw counts indexed by month (January = 0).
    ///
    /// Missing months default to 0, negative counts clamp to 0 and entries
    /// beyond the twelfth are ignored.
    #[must_use]
    pub fn from_counts(raw: &[i64]) -> Self {
        let mut counts: [u32; MONTHS_PER_YEAR] = [0; MONTHS_PER_YEAR];
        for (slot, value) in counts.iter_mut().zip(raw.iter()) {
            *slot = u32::try_from((*value).max(0)).unwrap_or(u32::MAX);
        }
        Self { counts }
    }

    /// Returns the count for every month.
    #[must_use]
    pub const fn counts(&self) -> [u32; MONTHS_PER_YEAR] {
        self.counts
    }

    /// Returns the count for a month index.
    ///
    /// # Errors
    ///
    /// Returns an error if `month_index` is not between 0 and 11.
    pub fn get(&self, month_index: usize) -> Result<u32, DomainError> {
        self.counts
            .get(month_index)
            .copied()
            .ok_or(DomainError::InvalidMonthIndex(month_index))
    }

    /// Returns the sum of all months.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts
            .iter()
            .fold(0_u32, |acc, count| acc.saturating_add(*count))
    }
}

/// A per-project, per-weekday scheduling restriction.
///
/// An active lock without a positive `min_days_between_visits` blocks the
/// weekday completely. With a positive value the weekday stays available but
/// any visit on it must keep that many days from every other visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLock {
    /// The project the lock applies to.
    pub project_id: ProjectId,
    /// The locked weekday.
    pub day_of_week: IsoWeekday,
    /// Why the weekday is locked.
    pub reason: String,
    /// Optional free-form detail.
    pub description: Option<String>,
    /// Inactive locks are ignored by the planner.
    pub is_active: bool,
    /// Minimum gap in days for visits on this weekday.
    pub min_days_between_visits: Option<u32>,
}

impl DayLock {
    /// Creates an active complete block of a weekday.
    ///
    /// # Errors
    ///
    /// Returns an error if `reason` is empty.
    pub fn complete(
        project_id: &str,
        day_of_week: IsoWeekday,
        reason: &str,
    ) -> Result<Self, DomainError> {
        Self::validated(project_id, day_of_week, reason, None)
    }

    /// Creates an active lock that enforces a minimum gap on a weekday.
    ///
    /// # Errors
    ///
    /// Returns an error if `reason` is empty.
    pub fn spacing(
        project_id: &str,
        day_of_week: IsoWeekday,
        reason: &str,
        min_days_between_visits: u32,
    ) -> Result<Self, DomainError> {
        Self::validated(
            project_id,
            day_of_week,
            reason,
            Some(min_days_between_visits),
        )
    }

    fn validated(
        project_id: &str,
        day_of_week: IsoWeekday,
        reason: &str,
        min_days_between_visits: Option<u32>,
    ) -> Result<Self, DomainError> {
        if reason.trim().is_empty() {
            return Err(DomainError::MissingLockReason {
                project_id: project_id.to_string(),
                day_of_week: day_of_week.number(),
            });
        }
        Ok(Self {
            project_id: ProjectId::new(project_id),
            day_of_week,
            reason: reason.to_string(),
            description: None,
            is_active: true,
            min_days_between_visits,
        })
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Marks the lock inactive.
    #[must_use]
    pub const fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}
