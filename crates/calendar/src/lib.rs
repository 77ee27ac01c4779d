//! # swm-calendar
//!
//! Gregorian day identifiers for daily climate records.
//!
//! Climate and precipitation tables key their rows by a compact
//! `YYYYMMDD` integer (the `TagesID` column). [`DayId`] validates such
//! values once at the boundary and then offers cheap, infallible access
//! to year, month and day, a total order for chronological iteration,
//! and the `dd.mm.yyyy` rendering used in result tables.
//!
//! ## Quick Start
//!
//! ```
//! use swm_calendar::DayId;
//!
//! let day = DayId::from_yyyymmdd(20040229).unwrap(); // 2004 is a leap year
//! assert_eq!(day.month(), 2);
//! assert_eq!(day.format_dotted(), "29.02.2004");
//! assert!(day < DayId::new(2004, 3, 1).unwrap());
//! ```

mod day_id;
mod error;

pub use day_id::DayId;
pub use error::CalendarError;
