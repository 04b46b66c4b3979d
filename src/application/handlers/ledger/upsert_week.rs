//! UpsertWeekHandler - Command handler for entering a week's figures.
//!
//! The submitted record replaces whatever was stored for its week. Advisory
//! warnings are computed before the write and returned with the stored row;
//! they never prevent persistence.

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::EngineError;
use crate::domain::ledger::{LedgerWarning, WeeklyProductionRecord, WeeklyRecord, WeeklySalesRecord};
use crate::ports::WeeklyLedger;

/// A full week's record for one series.
#[derive(Debug, Clone)]
pub enum UpsertWeekCommand {
    Sales(WeeklySalesRecord),
    Production(WeeklyProductionRecord),
}

/// The row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "series", content = "record", rename_all = "lowercase")]
pub enum UpsertedRecord {
    Sales(WeeklySalesRecord),
    Production(WeeklyProductionRecord),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertWeekResult {
    pub record: UpsertedRecord,
    pub warning: Option<LedgerWarning>,
}

pub struct UpsertWeekHandler {
    sales: Arc<dyn WeeklyLedger<WeeklySalesRecord>>,
    production: Arc<dyn WeeklyLedger<WeeklyProductionRecord>>,
}

impl UpsertWeekHandler {
    pub fn new(
        sales: Arc<dyn WeeklyLedger<WeeklySalesRecord>>,
        production: Arc<dyn WeeklyLedger<WeeklyProductionRecord>>,
    ) -> Self {
        Self { sales, production }
    }

    pub async fn handle(&self, cmd: UpsertWeekCommand) -> Result<UpsertWeekResult, EngineError> {
        match cmd {
            UpsertWeekCommand::Sales(record) => {
                record.validate()?;
                let warning = record.warnings().into_iter().next();
                let stored = store(self.sales.as_ref(), &record, warning.as_ref()).await?;
                Ok(UpsertWeekResult {
                    record: UpsertedRecord::Sales(stored),
                    warning,
                })
            }
            UpsertWeekCommand::Production(record) => {
                record.validate()?;
                let warning = record.warnings().into_iter().next();
                let stored = store(self.production.as_ref(), &record, warning.as_ref()).await?;
                Ok(UpsertWeekResult {
                    record: UpsertedRecord::Production(stored),
                    warning,
                })
            }
        }
    }
}

async fn store<R: WeeklyRecord>(
    ledger: &dyn WeeklyLedger<R>,
    record: &R,
    warning: Option<&LedgerWarning>,
) -> Result<R, EngineError> {
    if let Some(warning) = warning {
        warn!(series = %R::SERIES, %warning, "Ledger entry accepted with warning");
    }

    let stored = ledger.upsert(record).await?;

    info!(
        series = %R::SERIES,
        week_commencing = %stored.week_commencing(),
        "Upserted weekly record"
    );

    Ok(stored)
}
