// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only lookup over a snapshot of active day locks.
//!
//! ## Invariants
//!
//! - Only active locks are retained
//! - At most one effective rule exists per (project, weekday)
//! - When several active locks share a (project, weekday), a complete block
//!   wins; otherwise the largest minimum gap wins

use crate::calendar::IsoWeekday;
use crate::types::{DayLock, ProjectId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The effective rule of an active lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockDetails {
    /// Minimum gap in days between visits; absent or 0 means a complete block.
    pub min_days_between_visits: Option<u32>,
}

impl LockDetails {
    /// Returns whether this lock removes the weekday entirely.
    #[must_use]
    pub const fn is_complete_block(&self) -> bool {
        matches!(self.min_days_between_visits, None | Some(0))
    }

    /// Returns the enforced gap, if this is a spacing lock.
    #[must_use]
    pub const fn spacing_days(&self) -> Option<u32> {
        match self.min_days_between_visits {
            Some(days) if days > 0 => Some(days),
            _ => None,
        }
    }

    fn merge(self, other: Self) -> Self {
        if self.is_complete_block() || other.is_complete_block() {
            return Self {
                min_days_between_visits: None,
            };
        }
        Self {
            min_days_between_visits: self.spacing_days().max(other.spacing_days()),
        }
    }
}

/// Active day locks indexed by project and weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockRegistry {
    active: BTreeMap<ProjectId, BTreeMap<IsoWeekday, LockDetails>>,
}

impl LockRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a lock snapshot. Inactive locks are skipped.
    #[must_use]
    pub fn from_locks<'a, I>(locks: I) -> Self
    where
        I: IntoIterator<Item = &'a DayLock>,
    {
        let mut registry: Self = Self::new();
        for lock in locks {
            registry.insert(lock);
        }
        registry
    }

    /// Adds a lock to the registry, merging with any existing active lock.
    pub fn insert(&mut self, lock: &DayLock) {
        if !lock.is_active {
            return;
        }

        let details: LockDetails = LockDetails {
            min_days_between_visits: lock.min_days_between_visits,
        };

        let per_weekday: &mut BTreeMap<IsoWeekday, LockDetails> =
            self.active.entry(lock.project_id.clone()).or_default();
        per_weekday
            .entry(lock.day_of_week)
            .and_modify(|existing| *existing = existing.merge(details))
            .or_insert(details);
    }

    /// Returns whether an active lock exists for the project and weekday.
    #[must_use]
    pub fn is_locked(&self, project_id: &ProjectId, weekday: IsoWeekday) -> bool {
        self.lock_details(project_id, weekday).is_some()
    }

    /// Returns the active lock's rule for the project and weekday.
    #[must_use]
    pub fn lock_details(&self, project_id: &ProjectId, weekday: IsoWeekday) -> Option<LockDetails> {
        self.active
            .get(project_id)
            .and_then(|per_weekday| per_weekday.get(&weekday))
            .copied()
    }

    /// Returns whether the weekday is completely blocked for the project.
    #[must_use]
    pub fn is_complete_block(&self, project_id: &ProjectId, weekday: IsoWeekday) -> bool {
        self.lock_details(project_id, weekday)
            .is_some_and(|details| details.is_complete_block())
    }

    /// Returns the minimum gap enforced on the weekday, if any.
    #[must_use]
    pub fn min_days_between_visits(
        &self,
        project_id: &ProjectId,
        weekday: IsoWeekday,
    ) -> Option<u32> {
        self.lock_details(project_id, weekday)
            .and_then(|details| details.spacing_days())
    }

    /// Returns the active locks of one project, ordered by weekday.
    pub fn locks_for_project(
        &self,
        project_id: &ProjectId,
    ) -> impl Iterator<Item = (IsoWeekday, LockDetails)> + '_ {
        self.active
            .get(project_id)
            .into_iter()
            .flat_map(|per_weekday| per_weekday.iter().map(|(day, details)| (*day, *details)))
    }

    /// Returns the number of effective (project, weekday) locks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.values().map(BTreeMap::len).sum()
    }

    /// Returns whether no active locks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
