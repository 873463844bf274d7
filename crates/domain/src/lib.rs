// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod calendar;
mod error;
mod lock_registry;
mod monthly_quota;
mod spacing_policy;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use availability::DayAvailabilityFilter;
pub use calendar::{IsoWeekday, MONTHS, days_in_month, iso_weekday, month_index, parse_iso_date};
pub use error::DomainError;
pub use lock_registry::{LockDetails, LockRegistry};
pub use monthly_quota::{MONTHS_PER_YEAR, MonthlyQuota, default_distribution, monthly_quota};
pub use spacing_policy::{QuotaPlan, QuotaSource, compute_distribution, month_step};
pub use types::{
    DEFAULT_ANNUAL_VISITS, DayLock, MonthlyDistribution, Project, ProjectId, SpacingRule,
    SpacingType, Team, TeamId,
};
pub use validation::{MAX_YEAR, MIN_YEAR, validate_unique_project_ids, validate_year};
