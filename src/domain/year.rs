use crate::utils::error::{LeapYearError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
///
/// A year is leap when it is divisible by 4, except century years, which must
/// also be divisible by 400. Zero and negative years follow the same rule.
///
/// ```
/// use leap_year::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(-400));
/// ```
#[inline]
pub const fn is_leap_year(year: i64) -> bool {
    // A zero remainder has no sign, so truncating `%` is safe for negative years.
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// A calendar year. Any `i64` is accepted, including zero and negative years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(i64);

impl Year {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// Whether this year has 366 days.
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }
}

impl From<i16> for Year {
    fn from(value: i16) -> Self {
        Self(i64::from(value))
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl From<i64> for Year {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Year> for i64 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = LeapYearError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            tracing::debug!("Rejected empty year input");
            return Err(LeapYearError::EmptyInput);
        }

        trimmed.parse::<i64>().map(Self).map_err(|source| {
            tracing::debug!("Rejected year input '{}': {}", trimmed, source);
            LeapYearError::InvalidYear {
                value: trimmed.to_string(),
                source,
            }
        })
    }
}
