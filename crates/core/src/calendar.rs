//! Calendar arithmetic for audit scheduling.

use chrono::{Datelike, NaiveDate};

/// The same month and day one year later.
///
/// Feb 29 advanced into a non-leap year rolls over to Mar 1, matching the
/// date-library behaviour of the system being modelled.
pub fn next_annual(date: NaiveDate) -> NaiveDate {
    let year = date.year() + 1;
    match date.with_year(year) {
        Some(next) => next,
        // Only Feb 29 fails to exist in the target year.
        None => NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or(date),
    }
}
