//! Threshold policies.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Which direction of travel is good for a KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Polarity {
    HigherIsBetter,
    HigherIsWorse,
}

/// How a single metric value maps to a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ThresholdPolicy {
    /// Two cuts with an amber band between them.
    ///
    /// Higher is better: `v < low` red, `low <= v < high` amber, `v >= high` green.
    /// Higher is worse: `v > high` red, `low <= v <= high` amber, `v < low` green.
    Band {
        low: Decimal,
        high: Decimal,
        polarity: Polarity,
    },
    /// One cut, no amber.
    ///
    /// Higher is better: `v < target` red, otherwise green.
    /// Higher is worse: `v > target` red, otherwise green.
    PassFail { target: Decimal, polarity: Polarity },
}

impl ThresholdPolicy {
    pub fn band(low: Decimal, high: Decimal, polarity: Polarity) -> Self {
        ThresholdPolicy::Band { low, high, polarity }
    }

    pub fn pass_fail(target: Decimal, polarity: Polarity) -> Self {
        ThresholdPolicy::PassFail { target, polarity }
    }
}

/// Cut points for the two banded KPIs that are not held in `Settings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagBands {
    /// Contribution per box below this is red.
    pub per_box_low: Decimal,
    /// Contribution per box at or above this is green.
    pub per_box_high: Decimal,
    /// Rework hours per box below this is green.
    pub rework_low: Decimal,
    /// Rework hours per box above this is red.
    pub rework_high: Decimal,
}

impl RagBands {
    pub const DEFAULT_PER_BOX_LOW: Decimal = dec!(600);
    pub const DEFAULT_PER_BOX_HIGH: Decimal = dec!(640);
    pub const DEFAULT_REWORK_LOW: Decimal = dec!(0.25);
    pub const DEFAULT_REWORK_HIGH: Decimal = dec!(0.5);

    /// Checks each band is ordered low <= high.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.per_box_low > self.per_box_high {
            return Err(ValidationError::inconsistent(
                "per_box_low",
                format!("{} is above per_box_high {}", self.per_box_low, self.per_box_high),
            ));
        }
        if self.rework_low > self.rework_high {
            return Err(ValidationError::inconsistent(
                "rework_low",
                format!("{} is above rework_high {}", self.rework_low, self.rework_high),
            ));
        }
        Ok(())
    }
}

impl Default for RagBands {
    fn default() -> Self {
        Self {
            per_box_low: Self::DEFAULT_PER_BOX_LOW,
            per_box_high: Self::DEFAULT_PER_BOX_HIGH,
            rework_low: Self::DEFAULT_REWORK_LOW,
            rework_high: Self::DEFAULT_REWORK_HIGH,
        }
    }
}
