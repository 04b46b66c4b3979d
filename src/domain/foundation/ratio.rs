//! Ratio value object (0-1 scale).

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A fraction between 0 and 1 inclusive, e.g. a target install rate.
///
/// Held to [`Ratio::SCALE`] decimal places, matching the `NUMERIC(6, 4)`
/// columns it is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Ratio(Decimal);

impl Ratio {
    /// Zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One (100%).
    pub const ONE: Self = Self(Decimal::ONE);

    /// Decimal places kept.
    pub const SCALE: u32 = 4;

    /// Creates a Ratio, returning an error naming `field` if out of range.
    ///
    /// In-range values are rounded half away from zero to [`Ratio::SCALE`]
    /// places, as Postgres does on insert.
    pub fn try_new(field: &str, value: Decimal) -> Result<Self, ValidationError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(ValidationError::out_of_range(
                field,
                Decimal::ZERO,
                Decimal::ONE,
                value,
            ));
        }
        Ok(Self(value.round_dp_with_strategy(
            Self::SCALE,
            RoundingStrategy::MidpointAwayFromZero,
        )))
    }

    /// Creates a Ratio from a whole percentage, clamping to 100.
    pub fn from_percent(percent: u8) -> Self {
        Self(Decimal::new(i64::from(percent.min(100)), 2))
    }

    /// Returns the underlying fraction.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Ratio {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Ratio::try_new("ratio", value)
    }
}

impl From<Ratio> for Decimal {
    fn from(ratio: Ratio) -> Self {
        ratio.0
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * Decimal::ONE_HUNDRED).normalize())
    }
}
