//! Week-commencing key shared by the sales and production ledgers.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The Monday that identifies a ledger week.
///
/// Any date can be turned into a `WeekCommencing`; it is always normalized
/// to the Monday of the ISO week containing that date, so two entries made
/// on different days of the same week land on the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "NaiveDate", into = "NaiveDate")]
pub struct WeekCommencing(NaiveDate);

impl WeekCommencing {
    /// Returns the week commencing for the week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let offset = i64::from(date.weekday().num_days_from_monday());
        Self(date - Duration::days(offset))
    }

    /// Returns the Monday date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Returns true if this week starts in the same calendar month as `date`.
    pub fn in_month_of(&self, date: NaiveDate) -> bool {
        self.0.year() == date.year() && self.0.month() == date.month()
    }

    /// Returns the week commencing `weeks` weeks later (negative for earlier).
    pub fn plus_weeks(&self, weeks: i64) -> Self {
        Self(self.0 + Duration::weeks(weeks))
    }
}

impl From<NaiveDate> for WeekCommencing {
    fn from(date: NaiveDate) -> Self {
        Self::containing(date)
    }
}

impl From<WeekCommencing> for NaiveDate {
    fn from(week: WeekCommencing) -> Self {
        week.0
    }
}

impl fmt::Display for WeekCommencing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
