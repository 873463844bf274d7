// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use passage_planner_domain::{
    DayLock, LockRegistry, MonthlyDistribution, Project, ProjectId, SpacingRule, Team, TeamId,
};
use std::collections::BTreeMap;

/// A read-consistent view of everything the planner consumes.
///
/// The snapshot is supplied by the persistence layer and is never mutated by
/// the planner. If the underlying data changes, build a new snapshot and plan
/// again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanningSnapshot {
    /// All projects, archived ones included.
    pub projects: Vec<Project>,
    /// All teams, used for event enrichment only.
    pub teams: Vec<Team>,
    /// Active day locks.
    pub locks: LockRegistry,
    /// Explicit monthly distributions by project.
    pub distributions: BTreeMap<ProjectId, MonthlyDistribution>,
    /// Spacing rules by project.
    pub spacing_rules: BTreeMap<ProjectId, SpacingRule>,
}

impl PlanningSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a project.
    #[must_use]
    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    /// Adds a team.
    #[must_use]
    pub fn with_team(mut self, team: Team) -> Self {
        self.teams.push(team);
        self
    }

    /// Adds a lock. Inactive locks are accepted and ignored.
    #[must_use]
    pub fn with_lock(mut self, lock: &DayLock) -> Self {
        self.locks.insert(lock);
        self
    }

    /// Sets the explicit monthly distribution of a project.
    #[must_use]
    pub fn with_distribution(
        mut self,
        project_id: &str,
        distribution: MonthlyDistribution,
    ) -> Self {
        self.distributions
            .insert(ProjectId::new(project_id), distribution);
        self
    }

    /// Sets the spacing rule of a project.
    #[must_use]
    pub fn with_spacing_rule(mut self, project_id: &str, rule: SpacingRule) -> Self {
        self.spacing_rules.insert(ProjectId::new(project_id), rule);
        self
    }

    /// Returns the projects that take part in scheduling.
    pub fn schedulable_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|project| !project.is_archived)
    }

    /// Looks up a project by identifier.
    #[must_use]
    pub fn project(&self, project_id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| &project.id == project_id)
    }

    /// Looks up a team by identifier.
    #[must_use]
    pub fn team(&self, team_id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|team| &team.id == team_id)
    }

    /// Returns the explicit distribution of a project, if any.
    #[must_use]
    pub fn distribution(&self, project_id: &ProjectId) -> Option<&MonthlyDistribution> {
        self.distributions.get(project_id)
    }

    /// Returns the spacing rule of a project, if any.
    #[must_use]
    pub fn spacing_rule(&self, project_id: &ProjectId) -> Option<&SpacingRule> {
        self.spacing_rules.get(project_id)
    }
}
