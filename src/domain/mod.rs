//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (week key, ratio, timestamp, errors)
//! - `settings` - The singleton business-targets record
//! - `ledger` - Weekly sales and production rows
//! - `metrics` - Pure aggregation: MTD, rolling windows, forward look
//! - `rag` - Threshold policies and the Red/Amber/Green classifier
//! - `dashboard` - The snapshot assembled for rendering

pub mod dashboard;
pub mod foundation;
pub mod ledger;
pub mod metrics;
pub mod rag;
pub mod settings;
