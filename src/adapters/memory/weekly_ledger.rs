//! In-Memory Weekly Ledger

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::WeekCommencing;
use crate::domain::ledger::{WeeklyProductionRecord, WeeklyRecord, WeeklySalesRecord};
use crate::ports::{StoreError, WeeklyLedger};

/// Weekly rows keyed by week commencing.
#[derive(Debug, Clone)]
pub struct InMemoryWeeklyLedger<R> {
    rows: Arc<RwLock<BTreeMap<WeekCommencing, R>>>,
}

pub type InMemorySalesLedger = InMemoryWeeklyLedger<WeeklySalesRecord>;
pub type InMemoryProductionLedger = InMemoryWeeklyLedger<WeeklyProductionRecord>;

impl<R: WeeklyRecord> InMemoryWeeklyLedger<R> {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Number of stored weeks
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl<R: WeeklyRecord> Default for InMemoryWeeklyLedger<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: WeeklyRecord> WeeklyLedger<R> for InMemoryWeeklyLedger<R> {
    async fn find(&self, week: WeekCommencing) -> Result<Option<R>, StoreError> {
        Ok(self.rows.read().await.get(&week).cloned())
    }

    async fn list(&self) -> Result<Vec<R>, StoreError> {
        Ok(self.rows.read().await.values().rev().cloned().collect())
    }

    async fn upsert(&self, record: &R) -> Result<R, StoreError> {
        self.rows
            .write()
            .await
            .insert(record.week_commencing(), record.clone());
        Ok(record.clone())
    }
}
