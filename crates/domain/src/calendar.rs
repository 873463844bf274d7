// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar helpers shared by every planning rule.
//!
//! All weekday comparisons go through [`iso_weekday`] / [`IsoWeekday`] so the
//! numbering is the same everywhere: Monday is 1 and Sunday is 7.

use crate::error::DomainError;
use crate::validation::validate_year;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Iso8601;
use time::{Date, Month};

/// The twelve months in calendar order.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Returns the ISO weekday number of a date (Monday = 1 ... Sunday = 7).
#[must_use]
pub const fn iso_weekday(date: Date) -> u8 {
    date.weekday().number_from_monday()
}

/// Returns the 0-based index of a month (January = 0).
#[must_use]
pub const fn month_index(month: Month) -> usize {
    (month as u8 - 1) as usize
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns an error if the string is not a valid ISO 8601 calendar date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, &Iso8601::DEFAULT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Returns every day of a month in ascending order.
///
/// # Errors
///
/// Returns an error if the year is outside the supported range.
pub fn days_in_month(year: i32, month: Month) -> Result<Vec<Date>, DomainError> {
    validate_year(year)?;

    let first: Date =
        Date::from_calendar_date(year, month, 1).map_err(|_| DomainError::InvalidYear(year))?;

    let mut days: Vec<Date> = Vec::with_capacity(31);
    let mut current: Option<Date> = Some(first);
    while let Some(day) = current {
        if day.month() != month {
            break;
        }
        days.push(day);
        current = day.next_day();
    }

    Ok(days)
}

/// An ISO weekday number, Monday = 1 through Sunday = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IsoWeekday(u8);

impl IsoWeekday {
    /// Monday.
    pub const MONDAY: Self = Self(1);
    /// Tuesday.
    pub const TUESDAY: Self = Self(2);
    /// Wednesday.
    pub const WEDNESDAY: Self = Self(3);
    /// Thursday.
    pub const THURSDAY: Self = Self(4);
    /// Friday.
    pub const FRIDAY: Self = Self(5);
    /// Saturday.
    pub const SATURDAY: Self = Self(6);
    /// Sunday.
    pub const SUNDAY: Self = Self(7);

    /// Creates a weekday from its ISO number.
    ///
    /// # Errors
    ///
    /// Returns an error if `number` is not between 1 and 7.
    pub const fn new(number: u8) -> Result<Self, DomainError> {
        if number < 1 || number > 7 {
            return Err(DomainError::InvalidWeekday(number));
        }
        Ok(Self(number))
    }

    /// Returns the weekday a date falls on.
    #[must_use]
    pub const fn of(date: Date) -> Self {
        Self(iso_weekday(date))
    }

    /// Returns the ISO number (1-7).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Returns whether this is Saturday or Sunday.
    #[must_use]
    pub const fn is_weekend(self) -> bool {
        self.0 >= 6
    }
}

impl std::fmt::Display for IsoWeekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &str = match self.0 {
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            6 => "Saturday",
            _ => "Sunday",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_iso_weekday_monday_is_one() {
        assert_eq!(iso_weekday(date!(2024 - 01 - 01)), 1);
    }

    #[test]
    fn test_iso_weekday_sunday_is_seven() {
        assert_eq!(iso_weekday(date!(2024 - 01 - 07)), 7);
    }

    #[test]
    fn test_iso_weekday_matches_weekday_type() {
        let day: Date = date!(2024 - 03 - 13);
        assert_eq!(IsoWeekday::of(day), IsoWeekday::WEDNESDAY);
        assert_eq!(IsoWeekday::of(day).number(), iso_weekday(day));
    }

    #[test]
    fn test_weekday_new_rejects_out_of_range() {
        assert!(matches!(
            IsoWeekday::new(0),
            Err(DomainError::InvalidWeekday(0))
        ));
        assert!(matches!(
            IsoWeekday::new(8),
            Err(DomainError::InvalidWeekday(8))
        ));
        assert_eq!(IsoWeekday::new(7).unwrap(), IsoWeekday::SUNDAY);
    }

    #[test]
    fn test_weekend_detection() {
        assert!(IsoWeekday::SATURDAY.is_weekend());
        assert!(IsoWeekday::SUNDAY.is_weekend());
        assert!(!IsoWeekday::FRIDAY.is_weekend());
    }

    #[test]
    fn test_month_index() {
        assert_eq!(month_index(Month::January), 0);
        assert_eq!(month_index(Month::December), 11);
        for (index, month) in MONTHS.iter().enumerate() {
            assert_eq!(month_index(*month), index);
        }
    }

    #[test]
    fn test_days_in_month_leap_february() {
        let days: Vec<Date> = days_in_month(2024, Month::February).unwrap();
        assert_eq!(days.len(), 29);
        assert_eq!(days[0], date!(2024 - 02 - 01));
        assert_eq!(days[28], date!(2024 - 02 - 29));
    }

    #[test]
    fn test_days_in_month_december_stops_at_year_end() {
        let days: Vec<Date> = days_in_month(2025, Month::December).unwrap();
        assert_eq!(days.len(), 31);
        assert_eq!(days[30], date!(2025 - 12 - 31));
    }

    #[test]
    fn test_days_in_month_rejects_invalid_year() {
        assert!(matches!(
            days_in_month(0, Month::January),
            Err(DomainError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-03-12").unwrap(), date!(2024 - 03 - 12));
        assert!(matches!(
            parse_iso_date("2024-02-30"),
            Err(DomainError::DateParseError { .. })
        ));
        assert!(parse_iso_date("12/03/2024").is_err());
    }
}
