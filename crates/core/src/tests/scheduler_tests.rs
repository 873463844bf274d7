// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    complete_lock, create_test_project, dates_of, schedule_2024, single_project_snapshot,
    spacing_lock,
};
use crate::{
    CoreError, GENERAL_MIN_SPACING_DAYS, PlanningSnapshot, ScheduleOutcome, ScheduleWarning,
    WarningKind, required_gap_days, schedule,
};
use passage_planner_domain::{
    DomainError, IsoWeekday, LockRegistry, MonthlyDistribution, ProjectId, SpacingRule,
    SpacingType,
};
use time::Month;
use time::macros::date;

// ============================================================================
// Contract
// ============================================================================

#[test]
fn test_invalid_year_is_contract_violation() {
    let snapshot: PlanningSnapshot = single_project_snapshot(12);
    let result: Result<ScheduleOutcome, CoreError> = schedule(&snapshot, 0, false);
    assert_eq!(
        result.unwrap_err(),
        CoreError::ContractViolation(DomainError::InvalidYear(0))
    );
}

#[test]
fn test_duplicate_project_is_contract_violation() {
    let snapshot: PlanningSnapshot = PlanningSnapshot::new()
        .with_project(create_test_project("p1", 12))
        .with_project(create_test_project("p1", 6));
    let result: Result<ScheduleOutcome, CoreError> = schedule(&snapshot, 2024, false);
    assert!(matches!(
        result,
        Err(CoreError::ContractViolation(DomainError::DuplicateProject(_)))
    ));
}

#[test]
fn test_empty_snapshot_yields_empty_schedule() {
    let outcome: ScheduleOutcome = schedule_2024(&PlanningSnapshot::new());
    assert!(outcome.schedule.is_empty());
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.schedule.year(), 2024);
}

// ============================================================================
// Project selection
// ============================================================================

#[test]
fn test_archived_project_is_not_scheduled() {
    let snapshot: PlanningSnapshot = PlanningSnapshot::new()
        .with_project(create_test_project("p1", 12).archived())
        .with_project(create_test_project("p2", 12));
    let outcome: ScheduleOutcome = schedule_2024(&snapshot);

    assert!(outcome.schedule.passages(&ProjectId::new("p1")).is_none());
    assert_eq!(outcome.schedule.placed_count(&ProjectId::new("p2")), 12);
}

#[test]
fn test_zero_visits_yields_empty_map_without_warnings() {
    let outcome: ScheduleOutcome = schedule_2024(&single_project_snapshot(0));
    let passages = outcome.schedule.passages(&ProjectId::new("p1")).unwrap();
    assert!(passages.is_empty());
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_negative_visits_behave_like_zero() {
    let outcome: ScheduleOutcome = schedule_2024(&single_project_snapshot(-4));
    assert_eq!(outcome.schedule.placed_count(&ProjectId::new("p1")), 0);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_missing_visit_count_defaults_to_twelve() {
    let mut project = create_test_project("p1", 0);
    project.annual_visits = None;
    let snapshot: PlanningSnapshot = PlanningSnapshot::new().with_project(project);

    let outcome: ScheduleOutcome = schedule_2024(&snapshot);
    assert_eq!(outcome.schedule.placed_count(&ProjectId::new("p1")), 12);
}

// ============================================================================
// Placement
// ============================================================================

#[test]
fn test_one_visit_per_month_lands_on_jittered_day() {
    let outcome: ScheduleOutcome = schedule_2024(&single_project_snapshot(12));
    let dates = dates_of(&outcome, "p1");

    assert_eq!(
        dates,
        vec![
            date!(2024 - 01 - 10),
            date!(2024 - 02 - 12),
            date!(2024 - 03 - 12),
            date!(2024 - 04 - 10),
            date!(2024 - 05 - 10),
            date!(2024 - 06 - 11),
            date!(2024 - 07 - 10),
            date!(2024 - 08 - 12),
            date!(2024 - 09 - 11),
            date!(2024 - 10 - 10),
            date!(2024 - 11 - 12),
            date!(2024 - 12 - 11),
        ]
    );
}

#[test]
fn test_remainder_months_receive_two_visits() {
    let outcome: ScheduleOutcome = schedule_2024(&single_project_snapshot(14));
    let counts = outcome.schedule.monthly_counts(&ProjectId::new("p1"));

    assert_eq!(counts, [2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
    assert_eq!(
        dates_of(&outcome, "p1")[..4],
        [
            date!(2024 - 01 - 04),
            date!(2024 - 01 - 19),
            date!(2024 - 02 - 06),
            date!(2024 - 02 - 20),
        ]
    );
}

#[test]
fn test_explicit_distribution_stops_at_annual_target() {
    let snapshot: PlanningSnapshot = single_project_snapshot(3)
        .with_distribution("p1", MonthlyDistribution::from_counts(&[5; 12]));
    let outcome: ScheduleOutcome = schedule_2024(&snapshot);

    assert_eq!(
        dates_of(&outcome, "p1"),
        vec![
            date!(2024 - 01 - 02),
            date!(2024 - 01 - 09),
            date!(2024 - 01 - 16),
        ]
    );
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_explicit_distribution_below_target_reports_shortfall() {
    let snapshot: PlanningSnapshot = single_project_snapshot(6)
        .with_distribution("p1", MonthlyDistribution::from_counts(&[0, 0, 0, 1, 1, 1]));
    let outcome: ScheduleOutcome = schedule_2024(&snapshot);

    assert_eq!(
        outcome.schedule.monthly_counts(&ProjectId::new("p1")),
        [0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0]
    );
    assert_eq!(
        outcome.warnings,
        vec![ScheduleWarning {
            project_id: ProjectId::new("p1"),
            month: None,
            kind: WarningKind::AnnualShortfall {
                placed: 3,
                requested: 6,
            },
        }]
    );
}

#[test]
fn test_priority_spacing_rule_drives_months() {
    let snapshot: PlanningSnapshot = single_project_snapshot(6).with_spacing_rule(
        "p1",
        SpacingRule::new(SpacingType::Months, 2, true).unwrap(),
    );
    let outcome: ScheduleOutcome = schedule_2024(&snapshot);

    assert_eq!(
        dates_of(&outcome, "p1"),
        vec![
            date!(2024 - 01 - 10),
            date!(2024 - 03 - 12),
            date!(2024 - 05 - 10),
            date!(2024 - 07 - 10),
            date!(2024 - 09 - 11),
            date!(2024 - 11 - 12),
        ]
    );
}

#[test]
fn test_non_priority_spacing_rule_is_ignored() {
    let snapshot: PlanningSnapshot = single_project_snapshot(12).with_spacing_rule(
        "p1",
        SpacingRule::new(SpacingType::Months, 2, false).unwrap(),
    );
    let outcome: ScheduleOutcome = schedule_2024(&snapshot);

    assert_eq!(
        outcome.schedule.monthly_counts(&ProjectId::new("p1")),
        [1; 12]
    );
}

#[test]
fn test_spacing_backfill_exhausted_is_reported() {
    let snapshot: PlanningSnapshot = single_project_snapshot(14).with_spacing_rule(
        "p1",
        SpacingRule::new(SpacingType::Months, 1, true).unwrap(),
    );
    let outcome: ScheduleOutcome = schedule_2024(&snapshot);

    assert_eq!(outcome.schedule.placed_count(&ProjectId::new("p1")), 12);
    assert!(outcome.warnings.contains(&ScheduleWarning {
        project_id: ProjectId::new("p1"),
        month: None,
        kind: WarningKind::SpacingBackfillExhausted { unallocated: 2 },
    }));
    assert!(outcome.warnings.contains(&ScheduleWarning {
        project_id: ProjectId::new("p1"),
        month: None,
        kind: WarningKind::AnnualShortfall {
            placed: 12,
            requested: 14,
        },
    }));
}

// ============================================================================
// Soft failures
// ============================================================================

#[test]
fn test_visit_without_spaced_candidate_is_dropped() {
    // Only Mondays remain: February 2024 has four, a fifth visit cannot fit.
    let mut snapshot: PlanningSnapshot = single_project_snapshot(5)
        .with_distribution("p1", MonthlyDistribution::from_counts(&[0, 5]));
    for day in [
        IsoWeekday::TUESDAY,
        IsoWeekday::WEDNESDAY,
        IsoWeekday::THURSDAY,
        IsoWeekday::FRIDAY,
    ] {
        snapshot = snapshot.with_lock(&complete_lock("p1", day));
    }
    let outcome: ScheduleOutcome = schedule_2024(&snapshot);

    assert_eq!(
        dates_of(&outcome, "p1"),
        vec![
            date!(2024 - 02 - 05),
            date!(2024 - 02 - 12),
            date!(2024 - 02 - 19),
            date!(2024 - 02 - 26),
        ]
    );
    assert_eq!(
        outcome.warnings,
        vec![
            ScheduleWarning {
                project_id: ProjectId::new("p1"),
                month: Some(Month::February),
                kind: WarningKind::VisitDropped {
                    visit: 5,
                    dropped: 1,
                    candidates: 4,
                },
            },
            ScheduleWarning {
                project_id: ProjectId::new("p1"),
                month: None,
                kind: WarningKind::AnnualShortfall {
                    placed: 4,
                    requested: 5,
                },
            },
        ]
    );
}

#[test]
fn test_fully_locked_month_is_skipped_without_carry_forward() {
    let mut snapshot: PlanningSnapshot = single_project_snapshot(12);
    for number in 1..=5 {
        snapshot = snapshot.with_lock(&complete_lock("p1", IsoWeekday::new(number).unwrap()));
    }
    let outcome: ScheduleOutcome = schedule_2024(&snapshot);

    assert_eq!(outcome.schedule.placed_count(&ProjectId::new("p1")), 0);
    let empty_months: usize = outcome
        .warnings
        .iter()
        .filter(|w| matches!(w.kind, WarningKind::NoAvailableDays { quota: 1 }))
        .count();
    assert_eq!(empty_months, 12);
    assert_eq!(outcome.warnings.len(), 13);
}

#[test]
fn test_weekend_only_project_gets_visits_when_weekends_shown() {
    let mut snapshot: PlanningSnapshot = single_project_snapshot(12);
    for number in 1..=5 {
        snapshot = snapshot.with_lock(&complete_lock("p1", IsoWeekday::new(number).unwrap()));
    }
    let outcome: ScheduleOutcome = schedule(&snapshot, 2024, true).unwrap();

    let dates = dates_of(&outcome, "p1");
    assert_eq!(dates.len(), 12);
    assert!(dates.iter().all(|d| IsoWeekday::of(*d).is_weekend()));
}

#[test]
fn test_dense_project_degrades_instead_of_failing() {
    let outcome: ScheduleOutcome = schedule_2024(&single_project_snapshot(52));

    assert_eq!(outcome.schedule.placed_count(&ProjectId::new("p1")), 50);
    assert!(outcome.warnings.contains(&ScheduleWarning {
        project_id: ProjectId::new("p1"),
        month: None,
        kind: WarningKind::AnnualShortfall {
            placed: 50,
            requested: 52,
        },
    }));
}

#[test]
fn test_huge_annual_target_reports_one_drop_per_month() {
    let outcome: ScheduleOutcome = schedule_2024(&single_project_snapshot(i32::MAX));
    let placed: u32 = outcome.schedule.placed_count(&ProjectId::new("p1")).try_into().unwrap();

    assert!(placed > 0);
    for month in [Month::January, Month::June, Month::December] {
        let drops: usize = outcome
            .warnings
            .iter()
            .filter(|w| w.month == Some(month))
            .count();
        assert_eq!(drops, 1, "{month} should carry a single drop warning");
    }
    assert!(outcome.warnings.len() <= 2 * 12 + 1);
    assert!(outcome.warnings.contains(&ScheduleWarning {
        project_id: ProjectId::new("p1"),
        month: None,
        kind: WarningKind::AnnualShortfall {
            placed,
            requested: 2_147_483_647,
        },
    }));
}

#[test]
fn test_huge_month_count_is_capped_by_annual_target() {
    // January 2024 starts on a Monday; only five Mondays fit a 7-day floor
    let snapshot: PlanningSnapshot = single_project_snapshot(12).with_distribution(
        "p1",
        MonthlyDistribution::from_counts(&[i64::from(u32::MAX)]),
    );
    let outcome: ScheduleOutcome = schedule_2024(&snapshot);

    assert_eq!(
        dates_of(&outcome, "p1"),
        vec![
            date!(2024 - 01 - 01),
            date!(2024 - 01 - 08),
            date!(2024 - 01 - 15),
            date!(2024 - 01 - 22),
            date!(2024 - 01 - 29),
        ]
    );
    assert_eq!(
        outcome.warnings,
        vec![
            ScheduleWarning {
                project_id: ProjectId::new("p1"),
                month: Some(Month::January),
                kind: WarningKind::VisitDropped {
                    visit: 6,
                    dropped: 7,
                    candidates: 23,
                },
            },
            ScheduleWarning {
                project_id: ProjectId::new("p1"),
                month: None,
                kind: WarningKind::AnnualShortfall {
                    placed: 5,
                    requested: 12,
                },
            },
        ]
    );
}

#[test]
fn test_projects_are_independent() {
    let alone: ScheduleOutcome = schedule_2024(&single_project_snapshot(12));
    let together: ScheduleOutcome = schedule_2024(
        &single_project_snapshot(12)
            .with_project(create_test_project("p2", 12))
            .with_lock(&complete_lock("p2", IsoWeekday::WEDNESDAY)),
    );

    assert_eq!(dates_of(&alone, "p1"), dates_of(&together, "p1"));
    assert!(
        dates_of(&together, "p2")
            .iter()
            .all(|d| IsoWeekday::of(*d) != IsoWeekday::WEDNESDAY)
    );
}

// ============================================================================
// Spacing
// ============================================================================

#[test]
fn test_required_gap_uses_general_floor_without_locks() {
    let locks: LockRegistry = LockRegistry::new();
    let gap: u32 = required_gap_days(
        &locks,
        &ProjectId::new("p1"),
        date!(2024 - 01 - 10),
        date!(2024 - 01 - 17),
    );
    assert_eq!(gap, GENERAL_MIN_SPACING_DAYS);
}

#[test]
fn test_required_gap_uses_lock_on_either_date() {
    let lock = spacing_lock("p1", IsoWeekday::WEDNESDAY, 30);
    let locks: LockRegistry = LockRegistry::from_locks([&lock]);
    let project: ProjectId = ProjectId::new("p1");

    // Wednesday then Thursday, and Thursday then Wednesday
    assert_eq!(
        required_gap_days(&locks, &project, date!(2024 - 01 - 10), date!(2024 - 01 - 18)),
        30
    );
    assert_eq!(
        required_gap_days(&locks, &project, date!(2024 - 01 - 18), date!(2024 - 01 - 10)),
        30
    );
    // Neither date on a Wednesday
    assert_eq!(
        required_gap_days(&locks, &project, date!(2024 - 01 - 11), date!(2024 - 01 - 18)),
        7
    );
}

#[test]
fn test_short_spacing_lock_does_not_lower_floor() {
    let lock = spacing_lock("p1", IsoWeekday::MONDAY, 3);
    let locks: LockRegistry = LockRegistry::from_locks([&lock]);
    assert_eq!(
        required_gap_days(
            &locks,
            &ProjectId::new("p1"),
            date!(2024 - 01 - 08),
            date!(2024 - 01 - 15)
        ),
        GENERAL_MIN_SPACING_DAYS
    );
}
