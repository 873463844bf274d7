// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
///
/// These describe inputs that fall outside the planning contract. Constraint
/// conflicts found while placing visits are never reported here; the
/// scheduler degrades to fewer visits instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Project identifier is empty or invalid.
    InvalidProjectId(String),
    /// Team identifier is empty or invalid.
    InvalidTeamId(String),
    /// Weekday number is outside 1 (Monday) through 7 (Sunday).
    InvalidWeekday(u8),
    /// Month index is outside 0 through 11.
    InvalidMonthIndex(usize),
    /// Spacing type is not one of `days`, `weeks` or `months`.
    InvalidSpacingType(String),
    /// Spacing value must be positive.
    InvalidSpacingValue(u32),
    /// A day lock was given without a reason.
    MissingLockReason {
        /// The project the lock belongs to.
        project_id: String,
        /// The locked weekday (1 = Monday).
        day_of_week: u8,
    },
    /// Planning year is outside the supported calendar range.
    InvalidYear(i32),
    /// The same project identifier appears more than once in one snapshot.
    DuplicateProject(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidProjectId(msg) => write!(f, "Invalid project id: {msg}"),
            Self::InvalidTeamId(msg) => write!(f, "Invalid team id: {msg}"),
            Self::InvalidWeekday(day) => {
                write!(
                    f,
                    "Invalid weekday: {day}. Must be between 1 (Monday) and 7 (Sunday)"
                )
            }
            Self::InvalidMonthIndex(index) => {
                write!(f, "Invalid month index: {index}. Must be between 0 and 11")
            }
            Self::InvalidSpacingType(value) => {
                write!(
                    f,
                    "Invalid spacing type '{value}'. Must be one of days, weeks, months"
                )
            }
            Self::InvalidSpacingValue(value) => {
                write!(f, "Invalid spacing value: {value}. Must be greater than 0")
            }
            Self::MissingLockReason {
                project_id,
                day_of_week,
            } => {
                write!(
                    f,
                    "Lock on weekday {day_of_week} for project '{project_id}' has no reason"
                )
            }
            Self::InvalidYear(year) => {
                write!(f, "Invalid planning year: {year}. Must be between 1 and 9999")
            }
            Self::DuplicateProject(id) => {
                write!(f, "Project '{id}' appears more than once in the snapshot")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
