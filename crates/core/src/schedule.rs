// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use passage_planner_domain::{MONTHS_PER_YEAR, MonthlyQuota, ProjectId, month_index};
use std::collections::BTreeMap;
use time::Date;

/// The visits of every scheduled project within one year.
///
/// Each project maps dates to 1-based passage numbers. Within a project the
/// numbers are contiguous and increase with the date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearlySchedule {
    year: i32,
    projects: BTreeMap<ProjectId, BTreeMap<Date, u32>>,
}

impl YearlySchedule {
    /// Creates an empty schedule for a year.
    #[must_use]
    pub const fn new(year: i32) -> Self {
        Self {
            year,
            projects: BTreeMap::new(),
        }
    }

    /// Records a project's visit dates, numbering them chronologically.
    ///
    /// Duplicate dates collapse into one passage.
    pub(crate) fn insert_project<I>(&mut self, project_id: ProjectId, dates: I)
    where
        I: IntoIterator<Item = Date>,
    {
        let mut sorted: Vec<Date> = dates.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();

        let passages: BTreeMap<Date, u32> = sorted
            .into_iter()
            .zip(1_u32..)
            .collect();
        self.projects.insert(project_id, passages);
    }

    /// Returns the planning year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns a project's passages, if the project was scheduled.
    #[must_use]
    pub fn passages(&self, project_id: &ProjectId) -> Option<&BTreeMap<Date, u32>> {
        self.projects.get(project_id)
    }

    /// Returns the passage number a project holds on a date.
    #[must_use]
    pub fn passage_on(&self, project_id: &ProjectId, date: Date) -> Option<u32> {
        self.projects
            .get(project_id)
            .and_then(|passages| passages.get(&date))
            .copied()
    }

    /// Returns the number of visits placed for a project.
    #[must_use]
    pub fn placed_count(&self, project_id: &ProjectId) -> usize {
        self.projects.get(project_id).map_or(0, BTreeMap::len)
    }

    /// Returns the number of visits placed per month for a project.
    #[must_use]
    pub fn monthly_counts(&self, project_id: &ProjectId) -> MonthlyQuota {
        let mut counts: MonthlyQuota = [0; MONTHS_PER_YEAR];
        if let Some(passages) = self.projects.get(project_id) {
            for date in passages.keys() {
                counts[month_index(date.month())] += 1;
            }
        }
        counts
    }

    /// Returns the total number of visits across all projects.
    #[must_use]
    pub fn total_passages(&self) -> usize {
        self.projects.values().map(BTreeMap::len).sum()
    }

    /// Iterates over projects and their passages in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProjectId, &BTreeMap<Date, u32>)> {
        self.projects.iter()
    }

    /// Returns the number of scheduled projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns whether no project was scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
