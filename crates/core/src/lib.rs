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

mod cache;
mod diagnostics;
mod error;
mod projector;
mod schedule;
mod scheduler;
mod snapshot;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use cache::ScheduleCache;
pub use diagnostics::{ScheduleWarning, WarningKind};
pub use error::CoreError;
pub use projector::{Event, EventProjector, TeamFilter, TeamInfo, TeamMonthSummary};
pub use schedule::YearlySchedule;
pub use scheduler::{GENERAL_MIN_SPACING_DAYS, ScheduleOutcome, required_gap_days, schedule};
pub use snapshot::PlanningSnapshot;
