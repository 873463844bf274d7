// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Candidate days for placing visits within one month.
//!
//! A day is available when it survives two filters:
//! - weekend exclusion (unless weekends are shown)
//! - complete weekday locks of the project
//!
//! Spacing locks do not remove days here; they are enforced when a visit is
//! placed. An empty result is a normal outcome.

use crate::calendar::{IsoWeekday, days_in_month};
use crate::error::DomainError;
use crate::lock_registry::LockRegistry;
use crate::types::ProjectId;
use time::{Date, Month};

/// Produces the available days of a month for a project.
#[derive(Debug, Clone, Copy)]
pub struct DayAvailabilityFilter<'a> {
    locks: &'a LockRegistry,
    show_weekends: bool,
}

impl<'a> DayAvailabilityFilter<'a> {
    /// Creates a filter over a lock snapshot.
    ///
    /// # Arguments
    ///
    /// * `locks` - The active locks to honour
    /// * `show_weekends` - Whether Saturdays and Sundays are working days
    #[must_use]
    pub const fn new(locks: &'a LockRegistry, show_weekends: bool) -> Self {
        Self {
            locks,
            show_weekends,
        }
    }

    /// Returns whether weekends are kept.
    #[must_use]
    pub const fn show_weekends(&self) -> bool {
        self.show_weekends
    }

    /// Returns whether a single day is available to the project.
    #[must_use]
    pub fn is_available(&self, project_id: &ProjectId, day: Date) -> bool {
        let weekday: IsoWeekday = IsoWeekday::of(day);
        if !self.show_weekends && weekday.is_weekend() {
            return false;
        }
        !self.locks.is_complete_block(project_id, weekday)
    }

    /// Returns the available days of a month in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside the supported range.
    pub fn available_days(
        &self,
        project_id: &ProjectId,
        year: i32,
        month: Month,
    ) -> Result<Vec<Date>, DomainError> {
        let days: Vec<Date> = days_in_month(year, month)?;
        Ok(days
            .into_iter()
            .filter(|day| self.is_available(project_id, *day))
            .collect())
    }
}
