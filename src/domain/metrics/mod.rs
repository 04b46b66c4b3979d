//! Metrics Module - pure aggregation over the weekly ledger.
//!
//! # Components
//!
//! - `SalesMtdTotals` / `ProductionMtdTotals` - calendar-month sums
//! - `RollingSalesMetrics` / `RollingProductionMetrics` - weighted 4-week ratios
//! - `ForwardLook` - upcoming pre-booked sales weeks
//! - `MetricsAggregator` - computes all of the above plus contribution
//! - `ReportingCalendar` - maps an instant to the business date
//!
//! Every function here is a pure function of its inputs. Ratios with a zero
//! denominator resolve to zero through `foundation::safe_divide`.

mod aggregator;
mod calendar;
mod forward_look;
mod mtd;
mod rolling;

pub use aggregator::{ContributionMetrics, LedgerSnapshot, MetricsAggregator, MetricsBundle};
pub use calendar::ReportingCalendar;
pub use forward_look::{ForwardLook, FORWARD_LOOK_WEEKS};
pub use mtd::{MtdTotals, ProductionMtdTotals, SalesMtdTotals};
pub use rolling::{
    most_recent, Rolling4Metrics, RollingProductionMetrics, RollingSalesMetrics,
    ROLLING_WINDOW_WEEKS,
};
