//! Validated Gregorian date keyed as a `YYYYMMDD` integer.

use crate::error::CalendarError;

/// A validated Gregorian calendar day.
///
/// Ordered chronologically, so climate records sorted by `DayId` are in
/// simulation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayId {
    year: i32,
    month: u8,
    day: u8,
}

/// Number of days in the given month, accounting for leap years.
fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl DayId {
    /// Creates a new `DayId` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month or day is invalid for the
    /// Gregorian calendar.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Parses a compact `YYYYMMDD` integer as used by the `TagesID`
    /// columns of the climate and observation tables.
    pub fn from_yyyymmdd(id: u32) -> Result<Self, CalendarError> {
        let year = (id / 10_000) as i32;
        let month = ((id / 100) % 100) as u8;
        let day = (id % 100) as u8;
        Self::new(year, month, day)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Renders the compact `YYYYMMDD` form used in artifact keys.
    pub fn as_yyyymmdd(self) -> u32 {
        self.year as u32 * 10_000 + self.month as u32 * 100 + self.day as u32
    }

    /// Renders the zero-padded `dd.mm.yyyy` form used in result tables.
    pub fn format_dotted(self) -> String {
        format!("{:02}.{:02}.{}", self.day, self.month, self.year)
    }
}

impl std::fmt::Display for DayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_yyyymmdd())
    }
}
