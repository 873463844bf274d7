// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use passage_planner::CoreError;
use passage_planner_domain::DomainError;
use thiserror::Error;

/// Errors raised while converting request DTOs into planning input.
///
/// These cover request-shape problems that have no domain counterpart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// Month number is outside 1 through 12.
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u8),

    /// The same team identifier appears twice.
    #[error("Team '{0}' appears more than once in the snapshot")]
    DuplicateTeam(String),

    /// A project has more than one spacing rule.
    #[error("Project '{0}' has more than one spacing rule")]
    DuplicateSpacingRule(String),

    /// A request asked for one team and for unassigned projects together.
    #[error("Cannot filter by team '{0}' and by unassigned projects at the same time")]
    ConflictingTeamFilter(String),
}

impl ConversionError {
    /// Returns the request field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidMonth(_) => "month",
            Self::DuplicateTeam(_) => "teams",
            Self::DuplicateSpacingRule(_) => "spacing_rules",
            Self::ConflictingTeamFilter(_) => "team",
        }
    }
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A planning contract rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ConversionError> for ApiError {
    fn from(err: ConversionError) -> Self {
        Self::InvalidInput {
            field: String::from(err.field()),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidProjectId(_) => ApiError::InvalidInput {
            field: String::from("project_id"),
            message,
        },
        DomainError::InvalidTeamId(_) => ApiError::InvalidInput {
            field: String::from("team_id"),
            message,
        },
        DomainError::InvalidWeekday(_) => ApiError::InvalidInput {
            field: String::from("day_of_week"),
            message,
        },
        DomainError::InvalidMonthIndex(_) => ApiError::InvalidInput {
            field: String::from("month"),
            message,
        },
        DomainError::InvalidSpacingType(_) => ApiError::InvalidInput {
            field: String::from("spacing_type"),
            message,
        },
        DomainError::InvalidSpacingValue(_) => ApiError::InvalidInput {
            field: String::from("spacing_value"),
            message,
        },
        DomainError::MissingLockReason { .. } => ApiError::InvalidInput {
            field: String::from("reason"),
            message,
        },
        DomainError::DateParseError { .. } => ApiError::InvalidInput {
            field: String::from("date"),
            message,
        },
        DomainError::InvalidYear(_) => ApiError::DomainRuleViolation {
            rule: String::from("supported_year"),
            message,
        },
        DomainError::DuplicateProject(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_project_id"),
            message,
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::ContractViolation(domain_err) => translate_domain_error(domain_err),
    }
}
