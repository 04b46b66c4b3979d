//! Ledger module - the weekly sales and production series.
//!
//! Both series share the [`WeekCommencing`] key space but are stored
//! independently; a week may have a sales row, a production row, both or
//! neither.

mod production;
mod sales;

pub use production::WeeklyProductionRecord;
pub use sales::WeeklySalesRecord;

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::WeekCommencing;

/// Which weekly series a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerSeries {
    Sales,
    Production,
}

impl fmt::Display for LedgerSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sales => write!(f, "sales"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// A row in one of the weekly series.
pub trait WeeklyRecord: Clone + Send + Sync + 'static {
    const SERIES: LedgerSeries;

    /// The upsert key.
    fn week_commencing(&self) -> WeekCommencing;
}

/// Advisory raised on entry; the record is persisted regardless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LedgerWarning {
    #[serde(rename_all = "camelCase")]
    InstallsExceedBoxes {
        week_commencing: WeekCommencing,
        installs_sold: u32,
        boxes_sold: u32,
    },
    #[serde(rename_all = "camelCase")]
    OverCostExceedsProduced {
        week_commencing: WeekCommencing,
        boxes_over_cost: u32,
        boxes_produced: u32,
    },
}

impl fmt::Display for LedgerWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InstallsExceedBoxes {
                week_commencing,
                installs_sold,
                boxes_sold,
            } => write!(
                f,
                "Installs sold ({}) exceed boxes sold ({}) for week commencing {}",
                installs_sold, boxes_sold, week_commencing
            ),
            Self::OverCostExceedsProduced {
                week_commencing,
                boxes_over_cost,
                boxes_produced,
            } => write!(
                f,
                "Boxes over cost ({}) exceed boxes produced ({}) for week commencing {}",
                boxes_over_cost, boxes_produced, week_commencing
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn warning_message_names_the_week() {
        let warning = LedgerWarning::InstallsExceedBoxes {
            week_commencing: WeekCommencing::containing(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()),
            installs_sold: 22,
            boxes_sold: 20,
        };
        assert_eq!(
            warning.to_string(),
            "Installs sold (22) exceed boxes sold (20) for week commencing 2024-03-04"
        );
    }

    #[test]
    fn warning_serializes_with_kind_tag() {
        let warning = LedgerWarning::InstallsExceedBoxes {
            week_commencing: WeekCommencing::containing(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()),
            installs_sold: 3,
            boxes_sold: 1,
        };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "installsExceedBoxes");
        assert_eq!(json["installsSold"], 3);
    }

    #[test]
    fn series_display_is_lowercase() {
        assert_eq!(LedgerSeries::Sales.to_string(), "sales");
        assert_eq!(LedgerSeries::Production.to_string(), "production");
    }
}
