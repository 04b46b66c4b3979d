//! GetWeekHandler - Query handler for a single week of one series.

use std::sync::Arc;

use crate::application::EngineError;
use crate::domain::foundation::WeekCommencing;
use crate::domain::ledger::WeeklyRecord;
use crate::ports::WeeklyLedger;

pub struct GetWeekHandler<R: WeeklyRecord> {
    ledger: Arc<dyn WeeklyLedger<R>>,
}

impl<R: WeeklyRecord> GetWeekHandler<R> {
    pub fn new(ledger: Arc<dyn WeeklyLedger<R>>) -> Self {
        Self { ledger }
    }

    /// The stored record for `week`, if any.
    pub async fn find(&self, week: WeekCommencing) -> Result<Option<R>, EngineError> {
        Ok(self.ledger.find(week).await?)
    }

    /// Like [`find`](Self::find) but a missing week is an error.
    pub async fn require(&self, week: WeekCommencing) -> Result<R, EngineError> {
        self.find(week).await?.ok_or(EngineError::WeekNotFound(week))
    }
}
