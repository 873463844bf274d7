// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Yearly passage scheduling.
//!
//! Each project's annual target is split into monthly quotas, and each
//! month's visits are placed on that month's available days.
//!
//! ## Placement
//!
//! For a month with `n` visits and `d` available days:
//! - `interval = d / n`
//! - visit `v` starts probing at `v * interval`, shifted forward by
//!   `interval / 3` when `interval > 3`
//! - candidates are probed in order, wrapping around the month, at most `d`
//!   times
//! - the first candidate that keeps the required gap to every visit already
//!   placed for the project wins
//!
//! The required gap between two visits is the larger of the general 7-day
//! floor and any minimum gap carried by a spacing lock on either visit's
//! weekday.
//!
//! ## Invariants
//!
//! - Months are processed January to December
//! - A project never receives more visits than its annual target
//! - A visit that fits nowhere is dropped, never carried into a later month,
//!   along with the rest of its month
//! - Work per month is bounded by its available days, not by its quota
//! - Projects are independent of each other
//! - No randomness; identical input yields identical output

use crate::diagnostics::{ScheduleWarning, WarningKind};
use crate::error::CoreError;
use crate::schedule::YearlySchedule;
use crate::snapshot::PlanningSnapshot;
use passage_planner_domain::{
    DayAvailabilityFilter, IsoWeekday, LockRegistry, MONTHS, Project, ProjectId, QuotaPlan,
    compute_distribution, month_index, validate_unique_project_ids, validate_year,
};
use time::{Date, Month};
use tracing::{debug, warn};

/// Minimum number of days between any two visits of one project.
pub const GENERAL_MIN_SPACING_DAYS: u32 = 7;

/// The result of scheduling a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleOutcome {
    /// Placed visits by project.
    pub schedule: YearlySchedule,
    /// Soft failures, in the order they were found.
    pub warnings: Vec<ScheduleWarning>,
}

/// Schedules every non-archived project of a snapshot across a year.
///
/// # Arguments
///
/// * `snapshot` - Projects, locks, distributions and spacing rules
/// * `year` - The calendar year to plan
/// * `show_weekends` - Whether Saturdays and Sundays may receive visits
///
/// # Returns
///
/// The schedule and every soft failure encountered. Archived projects are
/// absent from the schedule; projects with no visits map to an empty set.
///
/// # Errors
///
/// Returns `CoreError::ContractViolation` if:
/// - The year is outside 1-9999
/// - Two projects share an identifier
pub fn schedule(
    snapshot: &PlanningSnapshot,
    year: i32,
    show_weekends: bool,
) -> Result<ScheduleOutcome, CoreError> {
    validate_year(year)?;
    validate_unique_project_ids(&snapshot.projects)?;

    let filter: DayAvailabilityFilter<'_> =
        DayAvailabilityFilter::new(&snapshot.locks, show_weekends);

    let mut schedule: YearlySchedule = YearlySchedule::new(year);
    let mut warnings: Vec<ScheduleWarning> = Vec::new();

    for project in snapshot.schedulable_projects() {
        let placed: Vec<Date> =
            schedule_project(snapshot, project, year, &filter, &mut warnings)?;
        schedule.insert_project(project.id.clone(), placed);
    }

    debug!(
        year,
        show_weekends,
        projects = schedule.len(),
        passages = schedule.total_passages(),
        warnings = warnings.len(),
        "Yearly schedule computed"
    );

    Ok(ScheduleOutcome { schedule, warnings })
}

/// Returns the minimum number of days two visits of a project must keep.
#[must_use]
pub fn required_gap_days(locks: &LockRegistry, project_id: &ProjectId, a: Date, b: Date) -> u32 {
    let gap_a: u32 = locks
        .min_days_between_visits(project_id, IsoWeekday::of(a))
        .unwrap_or(0);
    let gap_b: u32 = locks
        .min_days_between_visits(project_id, IsoWeekday::of(b))
        .unwrap_or(0);
    GENERAL_MIN_SPACING_DAYS.max(gap_a).max(gap_b)
}

fn schedule_project(
    snapshot: &PlanningSnapshot,
    project: &Project,
    year: i32,
    filter: &DayAvailabilityFilter<'_>,
    warnings: &mut Vec<ScheduleWarning>,
) -> Result<Vec<Date>, CoreError> {
    let requested: u32 = project.effective_annual_visits();
    let mut placed: Vec<Date> = Vec::new();

    if requested == 0 {
        return Ok(placed);
    }

    let plan: QuotaPlan = compute_distribution(
        project,
        snapshot.spacing_rule(&project.id),
        snapshot.distribution(&project.id),
    );

    if plan.unallocated > 0 {
        record(
            warnings,
            &project.id,
            None,
            WarningKind::SpacingBackfillExhausted {
                unallocated: plan.unallocated,
            },
        );
    }

    for month in MONTHS {
        let remaining: u32 = requested.saturating_sub(placed_count(&placed));
        if remaining == 0 {
            break;
        }

        let visits_this_month: u32 = plan.months[month_index(month)];
        if visits_this_month == 0 {
            continue;
        }
        let attempts: u32 = visits_this_month.min(remaining);

        let available: Vec<Date> = filter.available_days(&project.id, year, month)?;
        if available.is_empty() {
            record(
                warnings,
                &project.id,
                Some(month),
                WarningKind::NoAvailableDays { quota: attempts },
            );
            continue;
        }

        let interval: usize = available.len() / visits_this_month.max(1) as usize;
        let jitter: usize = if interval > 3 { interval / 3 } else { 0 };

        for visit in 0..attempts {
            let start: usize = (visit as usize)
                .saturating_mul(interval)
                .saturating_add(jitter);

            if let Some(day) =
                find_candidate(&snapshot.locks, &project.id, &available, start, &placed)
            {
                placed.push(day);
                continue;
            }

            // Each attempt scans the whole month; later visits fail the same way
            record(
                warnings,
                &project.id,
                Some(month),
                WarningKind::VisitDropped {
                    visit: visit + 1,
                    dropped: attempts - visit,
                    candidates: available.len(),
                },
            );
            break;
        }
    }

    let placed_total: u32 = placed_count(&placed);
    if placed_total < requested {
        record(
            warnings,
            &project.id,
            None,
            WarningKind::AnnualShortfall {
                placed: placed_total,
                requested,
            },
        );
    }

    debug!(
        project = %project.id,
        requested,
        placed = placed_total,
        "Project scheduled"
    );

    Ok(placed)
}

/// Probes available days from `start`, wrapping, for one that keeps the
/// required gap to every placed visit.
fn find_candidate(
    locks: &LockRegistry,
    project_id: &ProjectId,
    available: &[Date],
    start: usize,
    placed: &[Date],
) -> Option<Date> {
    let len: usize = available.len();
    (0..len)
        .map(|attempt| available[start.wrapping_add(attempt) % len])
        .find(|candidate| keeps_spacing(locks, project_id, *candidate, placed))
}

fn keeps_spacing(
    locks: &LockRegistry,
    project_id: &ProjectId,
    candidate: Date,
    placed: &[Date],
) -> bool {
    placed.iter().all(|existing| {
        let distance: u64 = (candidate - *existing).whole_days().unsigned_abs();
        distance >= u64::from(required_gap_days(locks, project_id, candidate, *existing))
    })
}

fn placed_count(placed: &[Date]) -> u32 {
    u32::try_from(placed.len()).unwrap_or(u32::MAX)
}

fn record(
    warnings: &mut Vec<ScheduleWarning>,
    project_id: &ProjectId,
    month: Option<Month>,
    kind: WarningKind,
) {
    let warning: ScheduleWarning = ScheduleWarning {
        project_id: project_id.clone(),
        month,
        kind,
    };
    warn!(
        project = %project_id,
        code = kind.code(),
        "{warning}"
    );
    warnings.push(warning);
}
