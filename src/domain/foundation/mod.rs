//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, the week key, the division policy and the
//! validation error type that the settings, ledger and metrics modules share.

mod arithmetic;
mod errors;
mod ratio;
mod timestamp;
mod week;

pub use arithmetic::{bounded_add, bounded_mul, ratio_or_zero, safe_divide};
pub use errors::{ErrorCode, ValidationError};
pub use ratio::Ratio;
pub use timestamp::Timestamp;
pub use week::WeekCommencing;
