//! Current-date provider.
//!
//! Handover stamps records with "today" and the audit view filters on it,
//! so the wall clock is an explicit seam instead of an ambient call. Tests
//! pin it with [`FixedClock`].

use chrono::{NaiveDate, Utc};

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock dates in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to one date. Intended for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
