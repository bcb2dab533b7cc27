//! Day-of-year utilities
//!
//! The ETo pipeline keys its solar geometry off the 1-based ordinal day of
//! the year (January 1 = day 1, up to 366 on leap years).

use chrono::{Datelike, NaiveDate, Utc};

/// Ordinal day of the year for a calendar date (1-366)
pub fn day_of_year(date: NaiveDate) -> u16 {
    date.ordinal() as u16
}

/// Ordinal day of the year for today (UTC)
pub fn current_day_of_year() -> u16 {
    day_of_year(Utc::now().date_naive())
}
