// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly visit quotas.
//!
//! A project's annual target is split into twelve monthly counts. An explicit
//! distribution is used as given; otherwise visits are spread uniformly and
//! the remainder goes to the earliest months.

use crate::types::{MonthlyDistribution, Project};

/// Number of months in a planning year.
pub const MONTHS_PER_YEAR: usize = 12;

/// Visit counts per month, January first.
pub type MonthlyQuota = [u32; MONTHS_PER_YEAR];

/// Computes the uniform distribution of an annual target.
///
/// Every month receives `annual_visits / 12`; the first `annual_visits % 12`
/// months receive one more.
///
/// # Example
///
/// ```text
/// 14 visits -> [2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]
/// ```
#[must_use]
pub fn default_distribution(annual_visits: u32) -> MonthlyQuota {
    let months: u32 = 12;
    let base: u32 = annual_visits / months;
    let remainder: usize = (annual_visits % months) as usize;

    let mut quota: MonthlyQuota = [base; MONTHS_PER_YEAR];
    for slot in quota.iter_mut().take(remainder) {
        *slot += 1;
    }
    quota
}

/// Returns the monthly quota for a project.
///
/// # Arguments
///
/// * `project` - The project being planned
/// * `explicit` - An explicit distribution for the project, if one exists
#[must_use]
pub fn monthly_quota(project: &Project, explicit: Option<&MonthlyDistribution>) -> MonthlyQuota {
    explicit.map_or_else(
        || default_distribution(project.effective_annual_visits()),
        MonthlyDistribution::counts,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_distribution_fourteen() {
        assert_eq!(
            default_distribution(14),
            [2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]
        );
    }

    #[test]
    fn test_default_distribution_twelve_is_one_per_month() {
        assert_eq!(default_distribution(12), [1; 12]);
    }

    #[test]
    fn test_default_distribution_fewer_than_twelve() {
        assert_eq!(
            default_distribution(4),
            [1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_default_distribution_zero() {
        assert_eq!(default_distribution(0), [0; 12]);
    }

    #[test]
    fn test_default_distribution_sums_to_target() {
        for annual in 0..=365_u32 {
            let sum: u32 = default_distribution(annual).iter().sum();
            assert_eq!(sum, annual, "distribution of {annual} does not sum back");
        }
    }

    #[test]
    fn test_default_distribution_earlier_months_absorb_remainder() {
        for annual in 0..=365_u32 {
            let quota: MonthlyQuota = default_distribution(annual);
            for pair in quota.windows(2) {
                assert!(pair[0] >= pair[1]);
            }
        }
    }

    #[test]
    fn test_monthly_quota_uses_project_default() {
        let project: Project = Project::new("p1", "Park").with_annual_visits(26);
        assert_eq!(
            monthly_quota(&project, None),
            [3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2]
        );
    }

    #[test]
    fn test_monthly_quota_missing_target_defaults_to_twelve() {
        let project: Project = Project::new("p1", "Park");
        assert_eq!(monthly_quota(&project, None), [1; 12]);
    }

    #[test]
    fn test_monthly_quota_negative_target_clamps_to_zero() {
        let project: Project = Project::new("p1", "Park").with_annual_visits(-5);
        assert_eq!(monthly_quota(&project, None), [0; 12]);
    }

    #[test]
    fn test_monthly_quota_prefers_explicit_distribution() {
        let project: Project = Project::new("p1", "Park").with_annual_visits(12);
        let explicit: MonthlyDistribution =
            MonthlyDistribution::from_counts(&[0, 0, 2, 2, 2, 2, 2, 2, 0, 0, 0, 0]);
        assert_eq!(
            monthly_quota(&project, Some(&explicit)),
            [0, 0, 2, 2, 2, 2, 2, 2, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_explicit_distribution_missing_months_and_negatives() {
        let explicit: MonthlyDistribution = MonthlyDistribution::from_counts(&[3, -2, 1]);
        assert_eq!(
            explicit.counts(),
            [3, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(explicit.total(), 4);
    }
}
