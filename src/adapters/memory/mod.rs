//! In-memory adapters.
//!
//! Used by tests and local development; state lives for the life of the
//! process.

mod settings_repository;
mod weekly_ledger;

pub use settings_repository::InMemorySettingsRepository;
pub use weekly_ledger::{InMemoryProductionLedger, InMemorySalesLedger, InMemoryWeeklyLedger};
