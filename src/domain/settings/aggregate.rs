//! The singleton business-targets record.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::SettingsPatch;
use crate::domain::foundation::{Ratio, Timestamp, ValidationError};

/// Business targets every RAG status is measured against.
///
/// Exactly one live instance exists. It is read through
/// `SettingsRepository::get_or_create_default` and changed only through
/// [`Settings::apply`], which validates a whole patch before touching any
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub monthly_contribution_target: Decimal,
    /// Minimum viable monthly contribution; never above the target.
    pub survival_contribution: Decimal,
    pub target_boxes_per_month: u32,
    pub target_boxes_per_week: u32,
    pub target_install_pct: Ratio,
    pub target_extras_pct: Ratio,
    /// Target contribution per box sold.
    pub contribution_per_box: Decimal,
    pub cost_compliance_target: Ratio,
    pub right_first_time_target: Ratio,
    pub updated_at: Timestamp,
}

impl Settings {
    /// Largest monthly amount the `settings` table can hold (`NUMERIC(14, 2)`).
    pub const MAX_MONTHLY_AMOUNT: Decimal = dec!(999999999999.99);

    /// Largest per-box amount the `settings` table can hold (`NUMERIC(12, 2)`).
    pub const MAX_PER_BOX_AMOUNT: Decimal = dec!(9999999999.99);

    /// Builds the documented default targets, stamped at `at`.
    pub fn defaults(at: Timestamp) -> Self {
        Self {
            monthly_contribution_target: dec!(55000),
            survival_contribution: dec!(41900),
            target_boxes_per_month: 86,
            target_boxes_per_week: 20,
            target_install_pct: Ratio::from_percent(60),
            target_extras_pct: Ratio::from_percent(15),
            contribution_per_box: dec!(640),
            cost_compliance_target: Ratio::from_percent(95),
            right_first_time_target: Ratio::from_percent(95),
            updated_at: at,
        }
    }

    /// Returns a new snapshot with every supplied field of `patch` applied.
    ///
    /// Fields are checked in declaration order and the first invalid one is
    /// reported. On error `self` is untouched and no partial result escapes.
    /// Amounts are rounded to whole cents and ratios to four places, the
    /// precision they are stored at.
    pub fn apply(&self, patch: &SettingsPatch, at: Timestamp) -> Result<Settings, ValidationError> {
        let mut next = self.clone();

        if let Some(value) = patch.monthly_contribution_target {
            next.monthly_contribution_target =
                currency("monthly_contribution_target", value, Self::MAX_MONTHLY_AMOUNT)?;
        }
        if let Some(value) = patch.survival_contribution {
            next.survival_contribution =
                currency("survival_contribution", value, Self::MAX_MONTHLY_AMOUNT)?;
        }
        if let Some(value) = patch.target_boxes_per_month {
            next.target_boxes_per_month = count("target_boxes_per_month", value)?;
        }
        if let Some(value) = patch.target_boxes_per_week {
            next.target_boxes_per_week = count("target_boxes_per_week", value)?;
        }
        if let Some(value) = patch.target_install_pct {
            next.target_install_pct = Ratio::try_new("target_install_pct", value)?;
        }
        if let Some(value) = patch.target_extras_pct {
            next.target_extras_pct = Ratio::try_new("target_extras_pct", value)?;
        }
        if let Some(value) = patch.contribution_per_box {
            next.contribution_per_box =
                currency("contribution_per_box", value, Self::MAX_PER_BOX_AMOUNT)?;
        }
        if let Some(value) = patch.cost_compliance_target {
            next.cost_compliance_target = Ratio::try_new("cost_compliance_target", value)?;
        }
        if let Some(value) = patch.right_first_time_target {
            next.right_first_time_target = Ratio::try_new("right_first_time_target", value)?;
        }

        if next.survival_contribution > next.monthly_contribution_target {
            return Err(ValidationError::inconsistent(
                "survival_contribution",
                format!(
                    "{} exceeds monthly_contribution_target {}",
                    next.survival_contribution, next.monthly_contribution_target
                ),
            ));
        }

        next.updated_at = at;
        Ok(next)
    }
}

fn currency(field: &str, value: Decimal, max: Decimal) -> Result<Decimal, ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::negative(field, value));
    }
    let cents = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if cents > max {
        return Err(ValidationError::out_of_range(field, Decimal::ZERO, max, value));
    }
    Ok(cents)
}

fn count(field: &str, value: i64) -> Result<u32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::negative(field, Decimal::from(value)));
    }
    u32::try_from(value).map_err(|_| {
        ValidationError::out_of_range(
            field,
            Decimal::ZERO,
            Decimal::from(u32::MAX),
            Decimal::from(value),
        )
    })
}
