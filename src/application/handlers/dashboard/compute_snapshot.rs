//! ComputeDashboardSnapshotHandler - Query handler assembling the dashboard.
//!
//! Reads settings and both ledgers, then runs the pure aggregation and
//! classification for the requested day.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

use crate::application::EngineError;
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::ledger::{WeeklyProductionRecord, WeeklySalesRecord};
use crate::domain::metrics::{LedgerSnapshot, ReportingCalendar};
use crate::domain::rag::RagBands;
use crate::ports::{Clock, SettingsRepository, WeeklyLedger};

/// Query for the dashboard as of `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputeDashboardSnapshotQuery {
    pub today: NaiveDate,
}

impl ComputeDashboardSnapshotQuery {
    /// The local date `clock` reports in the reporting timezone.
    pub fn for_now(calendar: &ReportingCalendar, clock: &dyn Clock) -> Self {
        Self {
            today: calendar.today(clock.now()),
        }
    }
}

pub struct ComputeDashboardSnapshotHandler {
    settings: Arc<dyn SettingsRepository>,
    sales: Arc<dyn WeeklyLedger<WeeklySalesRecord>>,
    production: Arc<dyn WeeklyLedger<WeeklyProductionRecord>>,
    bands: RagBands,
}

impl ComputeDashboardSnapshotHandler {
    pub fn new(
        settings: Arc<dyn SettingsRepository>,
        sales: Arc<dyn WeeklyLedger<WeeklySalesRecord>>,
        production: Arc<dyn WeeklyLedger<WeeklyProductionRecord>>,
        bands: RagBands,
    ) -> Self {
        Self {
            settings,
            sales,
            production,
            bands,
        }
    }

    pub async fn handle(&self, query: ComputeDashboardSnapshotQuery) -> Result<DashboardSnapshot, EngineError> {
        let settings = self.settings.get_or_create_default().await?;
        let ledger = LedgerSnapshot {
            sales: self.sales.list().await?,
            production: self.production.list().await?,
        };

        let snapshot = DashboardSnapshot::build(settings, &ledger, query.today, &self.bands);

        debug!(
            today = %query.today,
            sales_weeks = ledger.sales.len(),
            production_weeks = ledger.production.len(),
            rolling_sales_weeks = snapshot.rolling4_metrics.sales.weeks,
            forward_weeks = snapshot.forward_look.weeks.len(),
            "Computed dashboard snapshot"
        );

        Ok(snapshot)
    }
}
