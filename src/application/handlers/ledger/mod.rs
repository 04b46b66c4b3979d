//! Weekly ledger command and query handlers.

mod get_week;
mod upsert_week;

pub use get_week::GetWeekHandler;
pub use upsert_week::{UpsertWeekCommand, UpsertWeekHandler, UpsertWeekResult, UpsertedRecord};
