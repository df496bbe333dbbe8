//! Error types for calendar and time-scale handling.

use drishti_math::BlobError;
use thiserror::Error;

/// Errors from calendar validation, leap-second lookup or table loading.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TimeError {
    #[error("year {0} is before the start of the Gregorian day count")]
    BadYear(i32),

    #[error("month {0} is outside 1..=12")]
    BadMonth(u32),

    #[error("day {day} is not valid for {year}-{month:02}")]
    BadDay { year: i32, month: u32, day: u32 },

    #[error("day fraction {0} is outside 0..=1")]
    BadFraction(f64),

    #[error("Julian Date {0} is outside the supported range")]
    DateOutOfRange(f64),

    #[error("{year}-{month:02} precedes the leap-second table (1960-01)")]
    DateBeforeLeapSecondTable { year: i32, month: u32 },

    #[error("clock time {hour:02}:{minute:02}:{second} is not valid for this day")]
    BadClockTime { hour: u32, minute: u32, second: f64 },

    #[error("series table: {0}")]
    Table(#[from] BlobError),
}
