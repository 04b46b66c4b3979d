//! Reporting calendar - pins "today" to an explicit time zone.

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Time zone used to turn an instant into the business day.
///
/// Month-to-date windows move with the zone, so the engine never consults
/// the host's local time; the zone is configured and the instant is injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingCalendar {
    timezone: Tz,
}

impl ReportingCalendar {
    pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::London;

    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Parses an IANA zone name such as `Europe/London`.
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        name.parse::<Tz>()
            .map(Self::new)
            .map_err(|_| ValidationError::invalid_format("timezone", format!("unknown time zone '{}'", name)))
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The business date at instant `now`.
    pub fn today(&self, now: Timestamp) -> NaiveDate {
        now.date_in(self.timezone)
    }
}

impl Default for ReportingCalendar {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMEZONE)
    }
}
