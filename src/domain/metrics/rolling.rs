//! Rolling four-week window metrics.
//!
//! Ratios are weighted over the window (sum of numerators over sum of
//! denominators), not averages of weekly ratios, so a quiet week counts for
//! less than a busy one.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::foundation::{bounded_add, ratio_or_zero};
use crate::domain::ledger::{WeeklyProductionRecord, WeeklyRecord, WeeklySalesRecord};

/// Number of most-recent weeks in a rolling window.
pub const ROLLING_WINDOW_WEEKS: usize = 4;

/// The `size` most recent records by week commencing, newest first.
///
/// Short histories yield a shorter window; nothing is padded.
pub fn most_recent<R: WeeklyRecord>(records: &[R], size: usize) -> Vec<&R> {
    let mut window: Vec<&R> = records.iter().collect();
    window.sort_by(|a, b| b.week_commencing().cmp(&a.week_commencing()));
    window.truncate(size);
    window
}

/// Sales KPIs over the rolling window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollingSalesMetrics {
    pub weeks: u32,
    pub boxes_sold: u64,
    pub installs_sold: u64,
    pub box_revenue: Decimal,
    pub extras_revenue: Decimal,
    /// Installs per box sold; above 1 when installs outrun boxes.
    pub install_pct: Decimal,
    /// Extras revenue relative to box revenue.
    pub extras_pct: Decimal,
}

impl RollingSalesMetrics {
    pub fn from_records(records: &[WeeklySalesRecord]) -> Self {
        let window = most_recent(records, ROLLING_WINDOW_WEEKS);

        let mut metrics = Self {
            weeks: window.len() as u32,
            ..Self::default()
        };
        for r in &window {
            metrics.boxes_sold += u64::from(r.boxes_sold);
            metrics.installs_sold += u64::from(r.installs_sold);
            metrics.box_revenue = bounded_add(metrics.box_revenue, r.box_revenue);
            metrics.extras_revenue = bounded_add(metrics.extras_revenue, r.extras_revenue);
        }

        metrics.install_pct = ratio_or_zero(
            Decimal::from(metrics.installs_sold),
            Decimal::from(metrics.boxes_sold),
        );
        metrics.extras_pct = ratio_or_zero(metrics.extras_revenue, metrics.box_revenue);
        metrics
    }
}

/// Production KPIs over the rolling window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollingProductionMetrics {
    pub weeks: u32,
    pub boxes_produced: u64,
    pub boxes_over_cost: u64,
    pub rework_hours: Decimal,
    /// Share of produced boxes that came in at or under cost.
    pub cost_compliance_pct: Decimal,
    pub rework_per_box: Decimal,
    pub avg_boxes_per_week: Decimal,
    /// Mean of the weeks that recorded a right-first-time reading.
    pub right_first_time_pct: Option<Decimal>,
}

impl RollingProductionMetrics {
    pub fn from_records(records: &[WeeklyProductionRecord]) -> Self {
        let window = most_recent(records, ROLLING_WINDOW_WEEKS);

        let mut metrics = Self {
            weeks: window.len() as u32,
            ..Self::default()
        };
        for r in &window {
            metrics.boxes_produced += u64::from(r.boxes_produced);
            metrics.boxes_over_cost += u64::from(r.boxes_over_cost);
            metrics.rework_hours = bounded_add(metrics.rework_hours, r.rework_hours);
        }

        let produced = Decimal::from(metrics.boxes_produced);
        let compliant = produced - Decimal::from(metrics.boxes_over_cost);
        metrics.cost_compliance_pct = ratio_or_zero(compliant, produced);
        metrics.rework_per_box = ratio_or_zero(metrics.rework_hours, produced);
        metrics.avg_boxes_per_week = ratio_or_zero(produced, Decimal::from(metrics.weeks));

        let readings: Vec<Decimal> = window
            .iter()
            .filter_map(|r| r.right_first_time_pct.map(|p| p.value()))
            .collect();
        if !readings.is_empty() {
            let sum: Decimal = readings.iter().copied().sum();
            metrics.right_first_time_pct =
                Some(ratio_or_zero(sum, Decimal::from(readings.len() as u64)));
        }

        metrics
    }
}

/// Both rolling windows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rolling4Metrics {
    pub sales: RollingSalesMetrics,
    pub production: RollingProductionMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Ratio, WeekCommencing};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn week(offset: i64) -> WeekCommencing {
        WeekCommencing::containing(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()).plus_weeks(offset)
    }

    #[test]
    fn install_pct_is_weighted_across_the_window() {
        let records = vec![
            WeeklySalesRecord::new(week(0), 10, 8),
            WeeklySalesRecord::new(week(1), 20, 18),
        ];

        let metrics = RollingSalesMetrics::from_records(&records);

        assert_eq!(metrics.weeks, 2);
        assert_eq!(metrics.install_pct.round_dp(4), dec!(0.8667));
    }

    #[test]
    fn window_keeps_only_the_four_most_recent_weeks() {
        let records: Vec<WeeklySalesRecord> = (0..6)
            .map(|i| WeeklySalesRecord::new(week(i), (i as u32 + 1) * 10, 0))
            .collect();

        let metrics = RollingSalesMetrics::from_records(&records);

        assert_eq!(metrics.weeks, 4);
        // weeks 2..=5 => 30 + 40 + 50 + 60
        assert_eq!(metrics.boxes_sold, 180);
    }

    #[test]
    fn window_ignores_input_order() {
        let records = vec![
            WeeklySalesRecord::new(week(0), 1, 0),
            WeeklySalesRecord::new(week(4), 5, 0),
            WeeklySalesRecord::new(week(2), 3, 0),
            WeeklySalesRecord::new(week(3), 4, 0),
            WeeklySalesRecord::new(week(1), 2, 0),
        ];

        let window = most_recent(&records, ROLLING_WINDOW_WEEKS);
        let weeks: Vec<WeekCommencing> = window.iter().map(|r| r.week_commencing).collect();
        assert_eq!(weeks, vec![week(4), week(3), week(2), week(1)]);
    }

    #[test]
    fn extras_pct_zero_without_box_revenue() {
        let records = vec![WeeklySalesRecord::new(week(0), 3, 1).with_revenue(dec!(0), dec!(50), dec!(0))];
        assert_eq!(RollingSalesMetrics::from_records(&records).extras_pct, Decimal::ZERO);
    }

    #[test]
    fn extras_pct_uses_revenue_sums() {
        let records = vec![
            WeeklySalesRecord::new(week(0), 1, 0).with_revenue(dec!(1000), dec!(100), dec!(0)),
            WeeklySalesRecord::new(week(1), 1, 0).with_revenue(dec!(3000), dec!(500), dec!(0)),
        ];
        assert_eq!(RollingSalesMetrics::from_records(&records).extras_pct, dec!(0.15));
    }

    #[test]
    fn empty_sales_window_is_zero() {
        let metrics = RollingSalesMetrics::from_records(&[]);
        assert_eq!(metrics, RollingSalesMetrics::default());
    }

    #[test]
    fn single_week_average_equals_that_week() {
        let records = vec![WeeklyProductionRecord::new(week(0), 17, 12)];
        let metrics = RollingProductionMetrics::from_records(&records);
        assert_eq!(metrics.weeks, 1);
        assert_eq!(metrics.avg_boxes_per_week, dec!(17));
    }

    #[test]
    fn cost_compliance_and_rework_are_weighted() {
        let records = vec![
            WeeklyProductionRecord::new(week(0), 10, 10)
                .with_over_cost(1)
                .with_rework_hours(dec!(2)),
            WeeklyProductionRecord::new(week(1), 30, 25)
                .with_over_cost(3)
                .with_rework_hours(dec!(8)),
        ];

        let metrics = RollingProductionMetrics::from_records(&records);

        assert_eq!(metrics.cost_compliance_pct, dec!(0.9));
        assert_eq!(metrics.rework_per_box, dec!(0.25));
        assert_eq!(metrics.avg_boxes_per_week, dec!(20));
    }

    #[test]
    fn nothing_produced_gives_zero_ratios() {
        let records = vec![WeeklyProductionRecord::new(week(0), 0, 0).with_rework_hours(dec!(4))];
        let metrics = RollingProductionMetrics::from_records(&records);
        assert_eq!(metrics.cost_compliance_pct, Decimal::ZERO);
        assert_eq!(metrics.rework_per_box, Decimal::ZERO);
        assert_eq!(metrics.avg_boxes_per_week, Decimal::ZERO);
    }

    #[test]
    fn empty_production_window_is_zero() {
        let metrics = RollingProductionMetrics::from_records(&[]);
        assert_eq!(metrics.weeks, 0);
        assert_eq!(metrics.avg_boxes_per_week, Decimal::ZERO);
        assert!(metrics.right_first_time_pct.is_none());
    }

    #[test]
    fn right_first_time_averages_recorded_weeks_only() {
        let records = vec![
            WeeklyProductionRecord::new(week(0), 10, 10).with_right_first_time(Ratio::from_percent(90)),
            WeeklyProductionRecord::new(week(1), 10, 10),
            WeeklyProductionRecord::new(week(2), 10, 10).with_right_first_time(Ratio::from_percent(80)),
        ];
        let metrics = RollingProductionMetrics::from_records(&records);
        assert_eq!(metrics.right_first_time_pct, Some(dec!(0.85)));
    }
}
