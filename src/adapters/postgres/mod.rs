//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresSettingsRepository` - The singleton `settings` row
//! - `PostgresSalesLedger` - `weekly_sales` rows
//! - `PostgresProductionLedger` - `weekly_production` rows
//!
//! Counts are stored as BIGINT and money/ratios as NUMERIC so no value
//! passes through floating point.

mod production_ledger;
mod sales_ledger;
mod settings_repository;

pub use production_ledger::PostgresProductionLedger;
pub use sales_ledger::PostgresSalesLedger;
pub use settings_repository::PostgresSettingsRepository;

use chrono::NaiveDate;

use crate::domain::foundation::{Ratio, WeekCommencing};
use crate::ports::StoreError;

/// Converts a stored count back to the domain's unsigned width.
fn count(table: &'static str, column: &str, value: i64) -> Result<u32, StoreError> {
    u32::try_from(value)
        .map_err(|_| StoreError::corrupt(table, format!("{} out of range: {}", column, value)))
}

fn ratio(table: &'static str, column: &str, value: rust_decimal::Decimal) -> Result<Ratio, StoreError> {
    Ratio::try_new(column, value.normalize()).map_err(|e| StoreError::corrupt(table, e.to_string()))
}

/// Stored keys must already be Mondays.
fn week_key(table: &'static str, date: NaiveDate) -> Result<WeekCommencing, StoreError> {
    let week = WeekCommencing::containing(date);
    if week.date() != date {
        return Err(StoreError::corrupt(
            table,
            format!("week_commencing {} is not a Monday", date),
        ));
    }
    Ok(week)
}
