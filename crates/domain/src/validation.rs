// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Project, ProjectId};
use std::collections::HashSet;

/// Earliest supported planning year.
pub const MIN_YEAR: i32 = 1;

/// Latest supported planning year.
pub const MAX_YEAR: i32 = 9999;

/// Validates that a planning year is a supported calendar year.
///
/// # Errors
///
/// Returns an error if the year is outside 1-9999.
pub const fn validate_year(year: i32) -> Result<(), DomainError> {
    if year < MIN_YEAR || year > MAX_YEAR {
        return Err(DomainError::InvalidYear(year));
    }
    Ok(())
}

/// Validates that no project identifier appears twice.
///
/// A schedule maps each identifier to one set of dates, so two projects
/// sharing an identifier cannot both be represented.
///
/// # Errors
///
/// Returns an error naming the first repeated identifier.
pub fn validate_unique_project_ids(projects: &[Project]) -> Result<(), DomainError> {
    let mut seen: HashSet<&ProjectId> = HashSet::with_capacity(projects.len());

    for project in projects {
        if project.id.value().is_empty() {
            return Err(DomainError::InvalidProjectId(String::from(
                "Project id cannot be empty",
            )));
        }
        if !seen.insert(&project.id) {
            return Err(DomainError::DuplicateProject(project.id.value().to_string()));
        }
    }

    Ok(())
}
