//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory settings and ledgers (tests, local runs)
//! - `postgres` - PostgreSQL-backed settings and ledgers
//! - `clock` - System and fixed clocks

pub mod clock;
pub mod memory;
pub mod postgres;

pub use clock::{FixedClock, SystemClock};
pub use memory::{InMemoryProductionLedger, InMemorySalesLedger, InMemorySettingsRepository};
pub use postgres::{PostgresProductionLedger, PostgresSalesLedger, PostgresSettingsRepository};
