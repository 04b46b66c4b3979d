//! Metrics Aggregator - derives every dashboard figure from one ledger read.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{
    ForwardLook, MtdTotals, ProductionMtdTotals, Rolling4Metrics, RollingProductionMetrics,
    RollingSalesMetrics, SalesMtdTotals,
};
use crate::domain::foundation::{bounded_mul, ratio_or_zero};
use crate::domain::ledger::{WeeklyProductionRecord, WeeklySalesRecord};
use crate::domain::settings::Settings;

/// Both weekly series as read from the store for a single computation.
#[derive(Debug, Clone, Default)]
pub struct LedgerSnapshot {
    pub sales: Vec<WeeklySalesRecord>,
    pub production: Vec<WeeklyProductionRecord>,
}

/// Month-to-date contribution figures.
///
/// `contribution_per_box_target` is the configured constant;
/// `contribution_per_box_actual` is derived from this month's sales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionMetrics {
    pub contribution_mtd: Decimal,
    pub contribution_per_box_target: Decimal,
    pub contribution_per_box_actual: Decimal,
}

/// Everything the classifier and the dashboard need, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsBundle {
    pub today: NaiveDate,
    pub mtd_totals: MtdTotals,
    pub rolling4: Rolling4Metrics,
    pub forward_look: ForwardLook,
    pub contribution: ContributionMetrics,
}

/// Stateless aggregator over a settings snapshot and a ledger snapshot.
///
/// Results are never cached: "today" moves, and so does the month.
pub struct MetricsAggregator;

impl MetricsAggregator {
    /// Computes the full metrics bundle.
    pub fn compute(settings: &Settings, ledger: &LedgerSnapshot, today: NaiveDate) -> MetricsBundle {
        let mtd_totals = MtdTotals {
            sales: SalesMtdTotals::for_month_of(&ledger.sales, today),
            production: ProductionMtdTotals::for_month_of(&ledger.production, today),
        };
        let rolling4 = Rolling4Metrics {
            sales: RollingSalesMetrics::from_records(&ledger.sales),
            production: RollingProductionMetrics::from_records(&ledger.production),
        };
        let forward_look = ForwardLook::from_records(&ledger.sales, today, settings.contribution_per_box);
        let contribution = Self::contribution(settings, &mtd_totals.sales);

        MetricsBundle {
            today,
            mtd_totals,
            rolling4,
            forward_look,
            contribution,
        }
    }

    /// Contribution for the month: boxes sold times the per-box target.
    pub fn contribution(settings: &Settings, mtd_sales: &SalesMtdTotals) -> ContributionMetrics {
        let boxes = Decimal::from(mtd_sales.boxes_sold);
        let contribution_mtd = bounded_mul(boxes, settings.contribution_per_box);

        ContributionMetrics {
            contribution_mtd,
            contribution_per_box_target: settings.contribution_per_box,
            contribution_per_box_actual: ratio_or_zero(contribution_mtd, boxes),
        }
    }
}
