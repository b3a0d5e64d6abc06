use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::error::DomainError;

/// Gregorian calendar date parsed from strict `YYYY-MM-DD` text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Create a date, validating month and day against the calendar
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::MonthOutOfRange(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(DomainError::DayOutOfRange { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Parse one numeric component; a leading sign is a format error
fn component<N>(field: &'static str, text: &str, input: &str) -> Result<N, DomainError>
where
    N: FromStr<Err = std::num::ParseIntError>,
{
    if text.starts_with(['+', '-']) {
        return Err(DomainError::InvalidFormat(input.to_string()));
    }
    text.parse()
        .map_err(|source| DomainError::InvalidNumber { field, source })
}

impl FromStr for CalendarDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        let parts: Vec<&str> = input.split('-').collect();
        let (year, month, day) = match parts.as_slice() {
            [year, month, day] if year.len() == 4 && month.len() == 2 && day.len() == 2 => {
                (*year, *month, *day)
            }
            _ => return Err(DomainError::InvalidFormat(input.to_string())),
        };

        Self::new(
            component("year", year, input)?,
            component("month", month, input)?,
            component("day", day, input)?,
        )
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
