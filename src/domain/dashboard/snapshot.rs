use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::metrics::{
    ContributionMetrics, ForwardLook, LedgerSnapshot, MetricsAggregator, MtdTotals, Rolling4Metrics,
};
use crate::domain::rag::{RagBands, RagPolicy, RagStatuses};
use crate::domain::settings::Settings;

/// The dashboard as rendered for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub today: NaiveDate,

    /// Targets the statuses were measured against
    pub settings: Settings,

    pub mtd_totals: MtdTotals,
    pub rolling4_metrics: Rolling4Metrics,
    pub forward_look: ForwardLook,
    pub contribution: ContributionMetrics,

    pub rag_statuses: RagStatuses,
}

impl DashboardSnapshot {
    pub fn build(settings: Settings, ledger: &LedgerSnapshot, today: NaiveDate, bands: &RagBands) -> Self {
        let metrics = MetricsAggregator::compute(&settings, ledger, today);
        let policy = RagPolicy::from_settings(&settings, bands);
        let rag_statuses = RagStatuses::classify(&metrics, &policy);

        Self {
            today,
            settings,
            mtd_totals: metrics.mtd_totals,
            rolling4_metrics: metrics.rolling4,
            forward_look: metrics.forward_look,
            contribution: metrics.contribution,
            rag_statuses,
        }
    }
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;
