//! Partial settings update.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Fields a caller wants to change; `None` leaves the current value alone.
///
/// Keys follow the camelCase of serialized [`Settings`](super::Settings), so
/// a settings document can be edited and sent straight back; snake_case
/// spellings are accepted too. Counts are carried as `i64` so that a
/// negative entry is reported as a validation failure on its field rather
/// than a type error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(alias = "monthly_contribution_target")]
    pub monthly_contribution_target: Option<Decimal>,
    #[serde(alias = "survival_contribution")]
    pub survival_contribution: Option<Decimal>,
    #[serde(alias = "target_boxes_per_month")]
    pub target_boxes_per_month: Option<i64>,
    #[serde(alias = "target_boxes_per_week")]
    pub target_boxes_per_week: Option<i64>,
    #[serde(alias = "target_install_pct")]
    pub target_install_pct: Option<Decimal>,
    #[serde(alias = "target_extras_pct")]
    pub target_extras_pct: Option<Decimal>,
    #[serde(alias = "contribution_per_box")]
    pub contribution_per_box: Option<Decimal>,
    #[serde(alias = "cost_compliance_target")]
    pub cost_compliance_target: Option<Decimal>,
    #[serde(alias = "right_first_time_target")]
    pub right_first_time_target: Option<Decimal>,
}

impl SettingsPatch {
    /// Builds a patch from a loosely typed key/value map, e.g. a submitted form.
    ///
    /// Keys may be snake_case or camelCase. Unknown keys are ignored and
    /// `null` counts as "not supplied". Values may be JSON numbers or numeric
    /// strings; anything else fails on that field.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            monthly_contribution_target: decimal_field(map, "monthly_contribution_target", "monthlyContributionTarget")?,
            survival_contribution: decimal_field(map, "survival_contribution", "survivalContribution")?,
            target_boxes_per_month: integer_field(map, "target_boxes_per_month", "targetBoxesPerMonth")?,
            target_boxes_per_week: integer_field(map, "target_boxes_per_week", "targetBoxesPerWeek")?,
            target_install_pct: decimal_field(map, "target_install_pct", "targetInstallPct")?,
            target_extras_pct: decimal_field(map, "target_extras_pct", "targetExtrasPct")?,
            contribution_per_box: decimal_field(map, "contribution_per_box", "contributionPerBox")?,
            cost_compliance_target: decimal_field(map, "cost_compliance_target", "costComplianceTarget")?,
            right_first_time_target: decimal_field(map, "right_first_time_target", "rightFirstTimeTarget")?,
        })
    }

    /// Returns true when no field is supplied.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Looks a field up under either spelling; the snake_case key wins.
fn lookup<'a>(map: &'a Map<String, Value>, field: &str, camel: &str) -> Option<&'a Value> {
    map.get(field).or_else(|| map.get(camel))
}

fn decimal_field(map: &Map<String, Value>, field: &str, camel: &str) -> Result<Option<Decimal>, ValidationError> {
    let text = match lookup(map, field, camel) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(_) => return Err(ValidationError::invalid_format(field, "expected a number")),
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map(Some)
        .map_err(|_| ValidationError::invalid_format(field, format!("'{}' is not a number", text)))
}

fn integer_field(map: &Map<String, Value>, field: &str, camel: &str) -> Result<Option<i64>, ValidationError> {
    match lookup(map, field, camel) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| ValidationError::invalid_format(field, "expected a whole number")),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ValidationError::invalid_format(field, format!("'{}' is not a whole number", s))),
        Some(_) => Err(ValidationError::invalid_format(field, "expected a whole number")),
    }
}
