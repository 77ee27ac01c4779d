//! Error types for the swm-calendar crate.

/// Error type for all fallible operations in the swm-calendar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the month is outside 1..=12.
    #[error("month must be in 1..=12, got {month}")]
    InvalidMonth {
        /// The invalid month value.
        month: u8,
    },

    /// Returned when the day is invalid for the given month and year.
    #[error("day {day} is invalid for {month}/{year} (max {max_day})")]
    InvalidDay {
        /// The invalid day value.
        day: u8,
        /// Month the day was checked against.
        month: u8,
        /// Year the day was checked against (leap years matter).
        year: i32,
        /// Last valid day of that month.
        max_day: u8,
    },
}
