// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Structured diagnostics for visits the scheduler could not place.

use passage_planner_domain::ProjectId;
use time::Month;

/// Why some visits of a project were not placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Every day of the month was excluded by weekends or complete locks.
    NoAvailableDays {
        /// Visits the month was meant to receive.
        quota: u32,
    },
    /// No candidate day satisfied the spacing rules from one visit onwards.
    VisitDropped {
        /// 1-based index of the first dropped visit within its month.
        visit: u32,
        /// Visits of the month dropped, counting the first.
        dropped: u32,
        /// Number of candidate days probed.
        candidates: usize,
    },
    /// The spacing walk and back-fill left visits without a month.
    SpacingBackfillExhausted {
        /// Visits that were never assigned a month.
        unallocated: u32,
    },
    /// Fewer visits were placed than the annual target.
    AnnualShortfall {
        /// Visits placed.
        placed: u32,
        /// Annual target.
        requested: u32,
    },
}

impl WarningKind {
    /// Returns a stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NoAvailableDays { .. } => "no_available_days",
            Self::VisitDropped { .. } => "visit_dropped",
            Self::SpacingBackfillExhausted { .. } => "spacing_backfill_exhausted",
            Self::AnnualShortfall { .. } => "annual_shortfall",
        }
    }
}

/// A soft failure recorded while scheduling one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleWarning {
    /// The affected project.
    pub project_id: ProjectId,
    /// The affected month, when the warning is month-specific.
    pub month: Option<Month>,
    /// What happened.
    pub kind: WarningKind,
}

impl std::fmt::Display for ScheduleWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let project: &ProjectId = &self.project_id;
        match (self.kind, self.month) {
            (WarningKind::NoAvailableDays { quota }, Some(month)) => write!(
                f,
                "Project '{project}': no available days in {month}, {quota} visit(s) not placed"
            ),
            (
                WarningKind::VisitDropped {
                    visit,
                    dropped,
                    candidates,
                },
                Some(month),
            ) => write!(
                f,
                "Project '{project}': {dropped} visit(s) in {month} dropped from visit {visit} \
                 after {candidates} candidate(s)"
            ),
            (WarningKind::SpacingBackfillExhausted { unallocated }, _) => write!(
                f,
                "Project '{project}': spacing rule left {unallocated} visit(s) without a month"
            ),
            (WarningKind::AnnualShortfall { placed, requested }, _) => write!(
                f,
                "Project '{project}': placed {placed} of {requested} visit(s)"
            ),
            (kind, None) => write!(f, "Project '{project}': {}", kind.code()),
        }
    }
}
