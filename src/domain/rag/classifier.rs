//! RAG Classifier - maps a metric value and a policy to a status.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Polarity, RagBands, ThresholdPolicy};
use crate::domain::metrics::MetricsBundle;
use crate::domain::settings::Settings;

/// Red/Amber/Green health of a KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RagStatus {
    Red,
    Amber,
    Green,
}

impl fmt::Display for RagStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RagStatus::Red => write!(f, "red"),
            RagStatus::Amber => write!(f, "amber"),
            RagStatus::Green => write!(f, "green"),
        }
    }
}

/// Stateless classifier. Never reads the ledger; inputs are scalars.
pub struct RagClassifier;

impl RagClassifier {
    pub fn classify(value: Decimal, policy: &ThresholdPolicy) -> RagStatus {
        match *policy {
            ThresholdPolicy::Band {
                low,
                high,
                polarity: Polarity::HigherIsBetter,
            } => {
                if value < low {
                    RagStatus::Red
                } else if value < high {
                    RagStatus::Amber
                } else {
                    RagStatus::Green
                }
            }
            ThresholdPolicy::Band {
                low,
                high,
                polarity: Polarity::HigherIsWorse,
            } => {
                if value > high {
                    RagStatus::Red
                } else if value >= low {
                    RagStatus::Amber
                } else {
                    RagStatus::Green
                }
            }
            ThresholdPolicy::PassFail {
                target,
                polarity: Polarity::HigherIsBetter,
            } => {
                if value < target {
                    RagStatus::Red
                } else {
                    RagStatus::Green
                }
            }
            ThresholdPolicy::PassFail {
                target,
                polarity: Polarity::HigherIsWorse,
            } => {
                if value > target {
                    RagStatus::Red
                } else {
                    RagStatus::Green
                }
            }
        }
    }
}

/// The threshold policy for every dashboard KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RagPolicy {
    pub contribution: ThresholdPolicy,
    pub contribution_per_box: ThresholdPolicy,
    pub rework_per_box: ThresholdPolicy,
    pub install_pct: ThresholdPolicy,
    pub extras_pct: ThresholdPolicy,
    pub cost_compliance: ThresholdPolicy,
    pub right_first_time: ThresholdPolicy,
}

impl RagPolicy {
    pub fn from_settings(settings: &Settings, bands: &RagBands) -> Self {
        Self {
            contribution: ThresholdPolicy::band(
                settings.survival_contribution,
                settings.monthly_contribution_target,
                Polarity::HigherIsBetter,
            ),
            contribution_per_box: ThresholdPolicy::band(
                bands.per_box_low,
                bands.per_box_high,
                Polarity::HigherIsBetter,
            ),
            rework_per_box: ThresholdPolicy::band(
                bands.rework_low,
                bands.rework_high,
                Polarity::HigherIsWorse,
            ),
            install_pct: ThresholdPolicy::pass_fail(
                settings.target_install_pct.value(),
                Polarity::HigherIsBetter,
            ),
            extras_pct: ThresholdPolicy::pass_fail(
                settings.target_extras_pct.value(),
                Polarity::HigherIsBetter,
            ),
            cost_compliance: ThresholdPolicy::pass_fail(
                settings.cost_compliance_target.value(),
                Polarity::HigherIsBetter,
            ),
            right_first_time: ThresholdPolicy::pass_fail(
                settings.right_first_time_target.value(),
                Polarity::HigherIsBetter,
            ),
        }
    }
}

/// Status per KPI.
///
/// `right_first_time` is `None` when no week in the window recorded a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RagStatuses {
    pub contribution: RagStatus,
    pub contribution_per_box: RagStatus,
    pub rework_per_box: RagStatus,
    pub install_pct: RagStatus,
    pub extras_pct: RagStatus,
    pub cost_compliance: RagStatus,
    pub right_first_time: Option<RagStatus>,
}

impl RagStatuses {
    pub fn classify(metrics: &MetricsBundle, policy: &RagPolicy) -> Self {
        let sales = &metrics.rolling4.sales;
        let production = &metrics.rolling4.production;

        Self {
            contribution: RagClassifier::classify(metrics.contribution.contribution_mtd, &policy.contribution),
            contribution_per_box: RagClassifier::classify(
                metrics.contribution.contribution_per_box_actual,
                &policy.contribution_per_box,
            ),
            rework_per_box: RagClassifier::classify(production.rework_per_box, &policy.rework_per_box),
            install_pct: RagClassifier::classify(sales.install_pct, &policy.install_pct),
            extras_pct: RagClassifier::classify(sales.extras_pct, &policy.extras_pct),
            cost_compliance: RagClassifier::classify(production.cost_compliance_pct, &policy.cost_compliance),
            right_first_time: production
                .right_first_time_pct
                .map(|pct| RagClassifier::classify(pct, &policy.right_first_time)),
        }
    }
}
