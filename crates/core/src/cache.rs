// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::scheduler::{ScheduleOutcome, schedule};
use crate::snapshot::PlanningSnapshot;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Memoized schedules for one snapshot revision.
///
/// Scheduling is a pure function of the snapshot, year and weekend flag, so
/// results are reused until [`ScheduleCache::invalidate`] is called. Callers
/// must invalidate whenever the snapshot they pass in changes.
#[derive(Debug, Clone, Default)]
pub struct ScheduleCache {
    revision: u64,
    entries: HashMap<(i32, bool), ScheduleOutcome>,
}

impl ScheduleCache {
    /// Creates an empty cache at revision 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current snapshot revision.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Discards every cached schedule and advances the revision.
    pub fn invalidate(&mut self) {
        self.revision += 1;
        self.entries.clear();
        debug!(revision = self.revision, "Schedule cache invalidated");
    }

    /// Returns the cached schedule, computing it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if scheduling rejects the input; nothing is cached
    /// in that case.
    pub fn get_or_compute(
        &mut self,
        snapshot: &PlanningSnapshot,
        year: i32,
        show_weekends: bool,
    ) -> Result<&ScheduleOutcome, CoreError> {
        let revision: u64 = self.revision;
        match self.entries.entry((year, show_weekends)) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let outcome: ScheduleOutcome = schedule(snapshot, year, show_weekends)?;
                debug!(revision, year, show_weekends, "Schedule cached");
                Ok(entry.insert(outcome))
            }
        }
    }

    /// Returns the number of cached schedules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
