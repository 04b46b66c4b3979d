//! Forward look over pre-booked sales weeks.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::foundation::bounded_mul;
use crate::domain::ledger::WeeklySalesRecord;

/// Number of upcoming weeks shown in the forward look.
pub const FORWARD_LOOK_WEEKS: usize = 4;

/// The soonest already-entered sales weeks starting on or after today.
///
/// Display only; nothing here feeds back into the rolling metrics or RAG.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardLook {
    /// Oldest first.
    pub weeks: Vec<WeeklySalesRecord>,
    pub projected_boxes: u64,
    pub projected_contribution: Decimal,
}

impl ForwardLook {
    pub fn from_records(records: &[WeeklySalesRecord], today: NaiveDate, contribution_per_box: Decimal) -> Self {
        let mut weeks: Vec<WeeklySalesRecord> = records
            .iter()
            .filter(|r| r.week_commencing.date() >= today)
            .cloned()
            .collect();
        weeks.sort_by_key(|r| r.week_commencing);
        weeks.truncate(FORWARD_LOOK_WEEKS);

        let projected_boxes: u64 = weeks.iter().map(|r| u64::from(r.boxes_sold)).sum();
        Self {
            projected_contribution: bounded_mul(Decimal::from(projected_boxes), contribution_per_box),
            projected_boxes,
            weeks,
        }
    }
}
