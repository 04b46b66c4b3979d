//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `SettingsRepository` - The singleton settings record
//! - `WeeklyLedger` - Keyed weekly rows for one series
//!
//! ## Infrastructure Ports
//!
//! - `Clock` - Current instant, injectable for tests

mod clock;
mod settings_repository;
mod store_error;
mod weekly_ledger;

pub use clock::Clock;
pub use settings_repository::SettingsRepository;
pub use store_error::StoreError;
pub use weekly_ledger::WeeklyLedger;
