//! Weekly sales ledger row.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{LedgerSeries, LedgerWarning, WeeklyRecord};
use crate::domain::foundation::{ValidationError, WeekCommencing};

/// One week of sales, keyed by its week commencing.
///
/// Upserting a record replaces every field of the stored row; revenue and
/// notes omitted on input fall back to zero and `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySalesRecord {
    pub week_commencing: WeekCommencing,
    pub boxes_sold: u32,
    pub installs_sold: u32,
    #[serde(default)]
    pub box_revenue: Decimal,
    #[serde(default)]
    pub extras_revenue: Decimal,
    #[serde(default)]
    pub install_revenue: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
}

impl WeeklySalesRecord {
    /// Largest revenue line `weekly_sales` can hold (`NUMERIC(14, 2)`).
    pub const MAX_REVENUE: Decimal = dec!(999999999999.99);

    /// Creates a record with zero revenue and no notes.
    pub fn new(week_commencing: WeekCommencing, boxes_sold: u32, installs_sold: u32) -> Self {
        Self {
            week_commencing,
            boxes_sold,
            installs_sold,
            box_revenue: Decimal::ZERO,
            extras_revenue: Decimal::ZERO,
            install_revenue: Decimal::ZERO,
            notes: None,
        }
    }

    /// Sets the three revenue lines.
    pub fn with_revenue(mut self, box_revenue: Decimal, extras_revenue: Decimal, install_revenue: Decimal) -> Self {
        self.box_revenue = box_revenue;
        self.extras_revenue = extras_revenue;
        self.install_revenue = install_revenue;
        self
    }

    /// Attaches free-text notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Checks the field domains a data-entry form is expected to enforce.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("box_revenue", self.box_revenue),
            ("extras_revenue", self.extras_revenue),
            ("install_revenue", self.install_revenue),
        ] {
            if value < Decimal::ZERO {
                return Err(ValidationError::negative(field, value));
            }
            if value > Self::MAX_REVENUE {
                return Err(ValidationError::out_of_range(field, Decimal::ZERO, Self::MAX_REVENUE, value));
            }
        }
        Ok(())
    }

    /// Business anomalies worth showing the person entering the week.
    ///
    /// These never block persistence.
    pub fn warnings(&self) -> Vec<LedgerWarning> {
        let mut warnings = Vec::new();
        if self.installs_sold > self.boxes_sold {
            warnings.push(LedgerWarning::InstallsExceedBoxes {
                week_commencing: self.week_commencing,
                installs_sold: self.installs_sold,
                boxes_sold: self.boxes_sold,
            });
        }
        warnings
    }
}

impl WeeklyRecord for WeeklySalesRecord {
    const SERIES: LedgerSeries = LedgerSeries::Sales;

    fn week_commencing(&self) -> WeekCommencing {
        self.week_commencing
    }
}
