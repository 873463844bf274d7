// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use passage_planner_domain::DomainError;

/// Errors that can occur while planning.
///
/// Only contract violations are errors. Visits that cannot be placed are
/// reported as [`crate::ScheduleWarning`]s instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The caller supplied input outside the planning contract.
    ContractViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContractViolation(err) => write!(f, "Contract violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::ContractViolation(err)
    }
}
