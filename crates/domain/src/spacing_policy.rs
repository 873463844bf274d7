// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Priority spacing distribution.
//!
//! A project with a priority spacing rule does not use its monthly
//! distribution. Instead the year is walked in month-sized steps derived from
//! the rule, one visit per step, and any visits left over are back-filled
//! into months that received nothing.
//!
//! ## Step Conversion
//!
//! - days: `value / 30`
//! - weeks: `value / 4`
//! - months: `value`
//!
//! Each quotient is rounded to the nearest integer, halves rounding up. A
//! step of 0 keeps the walk on January.
//!
//! ## Invariants
//!
//! - The walk never passes December
//! - Back-fill only touches months whose count is still 0
//! - Visits that fit nowhere are reported as unallocated, never invented

use crate::monthly_quota::{MONTHS_PER_YEAR, MonthlyQuota, monthly_quota};
use crate::types::{MonthlyDistribution, Project, SpacingRule, SpacingType};

/// Where a project's monthly quota came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaSource {
    /// Uniform split of the annual target.
    Uniform,
    /// An explicit monthly distribution.
    Explicit,
    /// A priority spacing rule.
    Spacing,
}

/// A monthly quota together with any visits it could not place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaPlan {
    /// Visits per month, January first.
    pub months: MonthlyQuota,
    /// Visits the spacing walk and back-fill could not assign to any month.
    pub unallocated: u32,
    /// The rule that produced `months`.
    pub source: QuotaSource,
}

/// Converts a spacing rule into a whole number of months per step.
#[must_use]
pub const fn month_step(rule: &SpacingRule) -> u32 {
    let value: u32 = rule.spacing_value();
    match rule.spacing_type() {
        SpacingType::Days => value.saturating_add(15) / 30,
        SpacingType::Weeks => value.saturating_add(2) / 4,
        SpacingType::Months => value,
    }
}

/// Computes the monthly quota of a project, honouring a priority spacing rule.
///
/// # Arguments
///
/// * `project` - The project being planned
/// * `rule` - The project's spacing rule, if any
/// * `explicit` - The project's explicit monthly distribution, if any
///
/// Without a priority rule this is [`monthly_quota`].
#[must_use]
pub fn compute_distribution(
    project: &Project,
    rule: Option<&SpacingRule>,
    explicit: Option<&MonthlyDistribution>,
) -> QuotaPlan {
    match rule {
        Some(rule) if rule.is_priority() => spacing_plan(project.effective_annual_visits(), rule),
        _ => QuotaPlan {
            months: monthly_quota(project, explicit),
            unallocated: 0,
            source: if explicit.is_some() {
                QuotaSource::Explicit
            } else {
                QuotaSource::Uniform
            },
        },
    }
}

fn spacing_plan(annual_visits: u32, rule: &SpacingRule) -> QuotaPlan {
    let last_month: usize = MONTHS_PER_YEAR - 1;
    let step: usize = month_step(rule) as usize;

    let mut months: MonthlyQuota = [0; MONTHS_PER_YEAR];
    let mut remaining: u32 = annual_visits;
    let mut current: usize = 0;

    while remaining > 0 {
        months[current] += 1;
        remaining -= 1;
        if current == last_month {
            break;
        }
        current = last_month.min(current.saturating_add(step));
    }

    // Back-fill empty months, earliest first
    for slot in &mut months {
        if remaining == 0 {
            break;
        }
        if *slot == 0 {
            *slot = 1;
            remaining -= 1;
        }
    }

    QuotaPlan {
        months,
        unallocated: remaining,
        source: QuotaSource::Spacing,
    }
}
