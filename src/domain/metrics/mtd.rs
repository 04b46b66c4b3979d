//! Month-to-date totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::foundation::bounded_add;
use crate::domain::ledger::{WeeklyProductionRecord, WeeklySalesRecord};

/// Sales summed over the weeks commencing in the current calendar month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesMtdTotals {
    pub weeks: u32,
    pub boxes_sold: u64,
    pub installs_sold: u64,
    pub box_revenue: Decimal,
    pub extras_revenue: Decimal,
    pub install_revenue: Decimal,
}

impl SalesMtdTotals {
    /// Sums every record whose week commencing falls in the month of `today`.
    pub fn for_month_of<'a>(
        records: impl IntoIterator<Item = &'a WeeklySalesRecord>,
        today: NaiveDate,
    ) -> Self {
        records
            .into_iter()
            .filter(|r| r.week_commencing.in_month_of(today))
            .fold(Self::default(), |mut totals, r| {
                totals.weeks += 1;
                totals.boxes_sold += u64::from(r.boxes_sold);
                totals.installs_sold += u64::from(r.installs_sold);
                totals.box_revenue = bounded_add(totals.box_revenue, r.box_revenue);
                totals.extras_revenue = bounded_add(totals.extras_revenue, r.extras_revenue);
                totals.install_revenue = bounded_add(totals.install_revenue, r.install_revenue);
                totals
            })
    }

    pub fn total_revenue(&self) -> Decimal {
        bounded_add(bounded_add(self.box_revenue, self.extras_revenue), self.install_revenue)
    }
}

/// Production summed over the weeks commencing in the current calendar month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionMtdTotals {
    pub weeks: u32,
    pub boxes_produced: u64,
    pub installs_completed: u64,
    pub boxes_over_cost: u64,
    pub rework_hours: Decimal,
}

impl ProductionMtdTotals {
    pub fn for_month_of<'a>(
        records: impl IntoIterator<Item = &'a WeeklyProductionRecord>,
        today: NaiveDate,
    ) -> Self {
        records
            .into_iter()
            .filter(|r| r.week_commencing.in_month_of(today))
            .fold(Self::default(), |mut totals, r| {
                totals.weeks += 1;
                totals.boxes_produced += u64::from(r.boxes_produced);
                totals.installs_completed += u64::from(r.installs_completed);
                totals.boxes_over_cost += u64::from(r.boxes_over_cost);
                totals.rework_hours = bounded_add(totals.rework_hours, r.rework_hours);
                totals
            })
    }
}

/// Both month-to-date views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MtdTotals {
    pub sales: SalesMtdTotals,
    pub production: ProductionMtdTotals,
}
