//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

mod error;
pub mod handlers;

pub use error::EngineError;
pub use handlers::{
    // Dashboard
    ComputeDashboardSnapshotHandler, ComputeDashboardSnapshotQuery,
    // Ledger
    GetWeekHandler, UpsertWeekCommand, UpsertWeekHandler, UpsertWeekResult, UpsertedRecord,
    // Settings
    GetSettingsHandler, UpdateSettingsHandler,
};
