//! Reporting configuration - timezone and RAG bands

use rust_decimal::Decimal;
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::metrics::ReportingCalendar;
use crate::domain::rag::RagBands;

/// How "today" is determined and where the banded KPIs turn amber and green.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// IANA timezone name
    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default = "default_per_box_low")]
    pub per_box_low: Decimal,

    #[serde(default = "default_per_box_high")]
    pub per_box_high: Decimal,

    #[serde(default = "default_rework_low")]
    pub rework_low: Decimal,

    #[serde(default = "default_rework_high")]
    pub rework_high: Decimal,
}

impl ReportingConfig {
    /// The reporting calendar for the configured timezone.
    pub fn calendar(&self) -> Result<ReportingCalendar, ValidationError> {
        ReportingCalendar::from_name(&self.timezone)
            .map_err(|_| ValidationError::InvalidTimezone(self.timezone.clone()))
    }

    pub fn bands(&self) -> RagBands {
        RagBands {
            per_box_low: self.per_box_low,
            per_box_high: self.per_box_high,
            rework_low: self.rework_low,
            rework_high: self.rework_high,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.calendar()?;
        self.bands()
            .validate()
            .map_err(|e| ValidationError::InvalidRagBand(e.to_string()))
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            per_box_low: default_per_box_low(),
            per_box_high: default_per_box_high(),
            rework_low: default_rework_low(),
            rework_high: default_rework_high(),
        }
    }
}

fn default_timezone() -> String {
    "Europe/London".to_string()
}

fn default_per_box_low() -> Decimal {
    RagBands::DEFAULT_PER_BOX_LOW
}

fn default_per_box_high() -> Decimal {
    RagBands::DEFAULT_PER_BOX_HIGH
}

fn default_rework_low() -> Decimal {
    RagBands::DEFAULT_REWORK_LOW
}

fn default_rework_high() -> Decimal {
    RagBands::DEFAULT_REWORK_HIGH
}
