//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dashboard;
pub mod ledger;
pub mod settings;

pub use dashboard::{ComputeDashboardSnapshotHandler, ComputeDashboardSnapshotQuery};
pub use ledger::{GetWeekHandler, UpsertWeekCommand, UpsertWeekHandler, UpsertWeekResult, UpsertedRecord};
pub use settings::{GetSettingsHandler, UpdateSettingsHandler};
