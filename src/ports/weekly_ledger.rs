//! Weekly ledger port.
//!
//! One ledger per series (sales, production), each keyed by week commencing.
//! Upsert is a whole-row replace: fields omitted by the caller revert to
//! their defaults rather than keeping the previously stored value.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::foundation::WeekCommencing;
use crate::domain::ledger::WeeklyRecord;

#[async_trait]
pub trait WeeklyLedger<R: WeeklyRecord>: Send + Sync {
    /// Find the row for a week, if one has been recorded.
    async fn find(&self, week: WeekCommencing) -> Result<Option<R>, StoreError>;

    /// All rows, most recent week first.
    async fn list(&self) -> Result<Vec<R>, StoreError>;

    /// Insert or fully replace the row for the record's week.
    ///
    /// Returns the row as stored.
    async fn upsert(&self, record: &R) -> Result<R, StoreError>;
}
