//! Weekly production ledger row.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{LedgerSeries, LedgerWarning, WeeklyRecord};
use crate::domain::foundation::{Ratio, ValidationError, WeekCommencing};

/// One week of production, keyed by its week commencing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProductionRecord {
    pub week_commencing: WeekCommencing,
    pub boxes_produced: u32,
    pub installs_completed: u32,
    #[serde(default)]
    pub boxes_over_cost: u32,
    #[serde(default)]
    pub rework_hours: Decimal,
    #[serde(default)]
    pub right_first_time_pct: Option<Ratio>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl WeeklyProductionRecord {
    /// Largest rework figure `weekly_production` can hold (`NUMERIC(8, 2)`).
    pub const MAX_REWORK_HOURS: Decimal = dec!(999999.99);

    /// Creates a record with no over-cost boxes, no rework and no RFT reading.
    pub fn new(week_commencing: WeekCommencing, boxes_produced: u32, installs_completed: u32) -> Self {
        Self {
            week_commencing,
            boxes_produced,
            installs_completed,
            boxes_over_cost: 0,
            rework_hours: Decimal::ZERO,
            right_first_time_pct: None,
            notes: None,
        }
    }

    pub fn with_over_cost(mut self, boxes_over_cost: u32) -> Self {
        self.boxes_over_cost = boxes_over_cost;
        self
    }

    pub fn with_rework_hours(mut self, rework_hours: Decimal) -> Self {
        self.rework_hours = rework_hours;
        self
    }

    pub fn with_right_first_time(mut self, pct: Ratio) -> Self {
        self.right_first_time_pct = Some(pct);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Checks the field domains a data-entry form is expected to enforce.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.rework_hours < Decimal::ZERO {
            return Err(ValidationError::negative("rework_hours", self.rework_hours));
        }
        if self.rework_hours > Self::MAX_REWORK_HOURS {
            return Err(ValidationError::out_of_range(
                "rework_hours",
                Decimal::ZERO,
                Self::MAX_REWORK_HOURS,
                self.rework_hours,
            ));
        }
        Ok(())
    }

    /// Business anomalies worth showing the person entering the week.
    pub fn warnings(&self) -> Vec<LedgerWarning> {
        let mut warnings = Vec::new();
        if self.boxes_over_cost > self.boxes_produced {
            warnings.push(LedgerWarning::OverCostExceedsProduced {
                week_commencing: self.week_commencing,
                boxes_over_cost: self.boxes_over_cost,
                boxes_produced: self.boxes_produced,
            });
        }
        warnings
    }
}

impl WeeklyRecord for WeeklyProductionRecord {
    const SERIES: LedgerSeries = LedgerSeries::Production;

    fn week_commencing(&self) -> WeekCommencing {
        self.week_commencing
    }
}
