//! Integration tests for the dashboard engine.
//!
//! Wires every handler to the in-memory adapters and drives the flows a
//! data-entry screen and the dashboard page would: entering weeks, changing
//! targets and reading the snapshot back.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;
use std::sync::Arc;

use kpi_dashboard::adapters::{FixedClock, InMemoryProductionLedger, InMemorySalesLedger, InMemorySettingsRepository};
use kpi_dashboard::application::{
    ComputeDashboardSnapshotHandler, ComputeDashboardSnapshotQuery, EngineError, GetSettingsHandler, GetWeekHandler,
    UpdateSettingsHandler, UpsertWeekCommand, UpsertWeekHandler, UpsertedRecord,
};
use kpi_dashboard::domain::foundation::{ErrorCode, Ratio, Timestamp, ValidationError, WeekCommencing};
use kpi_dashboard::domain::ledger::{LedgerWarning, WeeklyProductionRecord, WeeklySalesRecord};
use kpi_dashboard::domain::rag::{RagBands, RagStatus};
use kpi_dashboard::domain::settings::{Settings, SettingsPatch};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Engine {
    settings_repo: Arc<InMemorySettingsRepository>,
    snapshot: ComputeDashboardSnapshotHandler,
    upsert: UpsertWeekHandler,
    update_settings: UpdateSettingsHandler,
    get_settings: GetSettingsHandler,
    get_sales_week: GetWeekHandler<WeeklySalesRecord>,
    get_production_week: GetWeekHandler<WeeklyProductionRecord>,
}

impl Engine {
    fn new() -> Self {
        let settings_repo = Arc::new(InMemorySettingsRepository::new());
        let sales = Arc::new(InMemorySalesLedger::new());
        let production = Arc::new(InMemoryProductionLedger::new());
        let clock = Arc::new(FixedClock::new(Timestamp::from_datetime(
            Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap(),
        )));

        Self {
            snapshot: ComputeDashboardSnapshotHandler::new(
                settings_repo.clone(),
                sales.clone(),
                production.clone(),
                RagBands::default(),
            ),
            upsert: UpsertWeekHandler::new(sales.clone(), production.clone()),
            update_settings: UpdateSettingsHandler::new(settings_repo.clone(), clock),
            get_settings: GetSettingsHandler::new(settings_repo.clone()),
            get_sales_week: GetWeekHandler::new(sales),
            get_production_week: GetWeekHandler::new(production),
            settings_repo,
        }
    }

    async fn enter_sales(&self, record: WeeklySalesRecord) -> Option<LedgerWarning> {
        self.upsert
            .handle(UpsertWeekCommand::Sales(record))
            .await
            .unwrap()
            .warning
    }

    async fn enter_production(&self, record: WeeklyProductionRecord) {
        self.upsert
            .handle(UpsertWeekCommand::Production(record))
            .await
            .unwrap();
    }

    async fn dashboard(&self, today: NaiveDate) -> kpi_dashboard::domain::dashboard::DashboardSnapshot {
        self.snapshot
            .handle(ComputeDashboardSnapshotQuery { today })
            .await
            .unwrap()
    }
}

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, d).unwrap()
}

fn week(m: u32, d: u32) -> WeekCommencing {
    WeekCommencing::containing(date(m, d))
}

// =============================================================================
// End-to-end
// =============================================================================

#[tokio::test]
async fn installs_exceeding_boxes_are_warned_stored_and_reported() {
    let engine = Engine::new();
    let record = WeeklySalesRecord::new(week(3, 18), 20, 22).with_revenue(dec!(20000), dec!(3000), dec!(4400));

    let warning = engine.enter_sales(record.clone()).await;
    let snapshot = engine.dashboard(date(3, 20)).await;

    assert_eq!(
        warning,
        Some(LedgerWarning::InstallsExceedBoxes {
            week_commencing: week(3, 18),
            installs_sold: 22,
            boxes_sold: 20,
        })
    );
    assert_eq!(engine.get_sales_week.require(week(3, 18)).await.unwrap(), record);
    assert_eq!(snapshot.rolling4_metrics.sales.install_pct, dec!(1.1));
    assert_eq!(snapshot.rag_statuses.install_pct, RagStatus::Green);
    assert_eq!(snapshot.settings.monthly_contribution_target, dec!(55000));
}

#[tokio::test]
async fn full_month_produces_expected_dashboard() {
    let engine = Engine::new();
    for (d, boxes, installs) in [(4, 22, 15), (11, 21, 13), (18, 23, 14), (25, 22, 14)] {
        engine
            .enter_sales(
                WeeklySalesRecord::new(week(3, d), boxes, installs).with_revenue(
                    Decimal::from(boxes) * dec!(1000),
                    Decimal::from(boxes) * dec!(180),
                    Decimal::from(installs) * dec!(200),
                ),
            )
            .await;
        engine
            .enter_production(
                WeeklyProductionRecord::new(week(3, d), boxes, installs)
                    .with_rework_hours(dec!(4))
                    .with_right_first_time(Ratio::from_percent(96)),
            )
            .await;
    }

    let snapshot = engine.dashboard(date(3, 28)).await;

    assert_eq!(snapshot.mtd_totals.sales.weeks, 4);
    assert_eq!(snapshot.mtd_totals.sales.boxes_sold, 88);
    assert_eq!(snapshot.contribution.contribution_mtd, dec!(56320));
    assert_eq!(snapshot.contribution.contribution_per_box_actual, dec!(640));
    assert_eq!(snapshot.rolling4_metrics.production.avg_boxes_per_week, dec!(22));
    assert_eq!(snapshot.rolling4_metrics.production.cost_compliance_pct, dec!(1));
    assert_eq!(snapshot.rolling4_metrics.production.rework_per_box, dec!(16) / dec!(88));
    assert_eq!(snapshot.rag_statuses.contribution, RagStatus::Green);
    assert_eq!(snapshot.rag_statuses.contribution_per_box, RagStatus::Green);
    assert_eq!(snapshot.rag_statuses.extras_pct, RagStatus::Green);
    assert_eq!(snapshot.rag_statuses.rework_per_box, RagStatus::Green);
    assert_eq!(snapshot.rag_statuses.right_first_time, Some(RagStatus::Green));
    assert!(snapshot.forward_look.weeks.is_empty());
}

#[tokio::test]
async fn forward_look_lists_entered_future_weeks() {
    let engine = Engine::new();
    for d in [25, 4, 11] {
        engine.enter_sales(WeeklySalesRecord::new(week(3, d), 20, 12)).await;
    }
    engine.enter_sales(WeeklySalesRecord::new(week(4, 1), 18, 10)).await;

    let snapshot = engine.dashboard(date(3, 20)).await;

    let weeks: Vec<_> = snapshot.forward_look.weeks.iter().map(|r| r.week_commencing).collect();
    assert_eq!(weeks, vec![week(3, 25), week(4, 1)]);
    assert_eq!(snapshot.forward_look.projected_boxes, 38);
    assert_eq!(snapshot.forward_look.projected_contribution, dec!(24320));
}

// =============================================================================
// Upsert semantics
// =============================================================================

#[tokio::test]
async fn second_upsert_replaces_whole_row() {
    let engine = Engine::new();
    engine
        .enter_production(
            WeeklyProductionRecord::new(week(3, 4), 21, 15)
                .with_over_cost(2)
                .with_rework_hours(dec!(6))
                .with_right_first_time(Ratio::from_percent(90))
                .with_notes("new press"),
        )
        .await;

    engine
        .enter_production(WeeklyProductionRecord::new(week(3, 6), 22, 16))
        .await;

    let stored = engine.get_production_week.require(week(3, 4)).await.unwrap();
    assert_eq!(stored.boxes_produced, 22);
    assert_eq!(stored.boxes_over_cost, 0);
    assert_eq!(stored.rework_hours, dec!(0));
    assert_eq!(stored.right_first_time_pct, None);
    assert_eq!(stored.notes, None);
}

#[tokio::test]
async fn upsert_result_carries_stored_row() {
    let engine = Engine::new();
    let record = WeeklyProductionRecord::new(week(3, 4), 20, 12).with_over_cost(25);

    let result = engine
        .upsert
        .handle(UpsertWeekCommand::Production(record.clone()))
        .await
        .unwrap();

    assert_eq!(result.record, UpsertedRecord::Production(record));
    assert!(matches!(result.warning, Some(LedgerWarning::OverCostExceedsProduced { .. })));
}

#[tokio::test]
async fn missing_week_is_reported() {
    let engine = Engine::new();

    assert!(engine.get_sales_week.find(week(3, 4)).await.unwrap().is_none());
    let err = engine.get_sales_week.require(week(3, 4)).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::WeekNotFound);
}

// =============================================================================
// Settings
// =============================================================================

#[tokio::test]
async fn out_of_range_update_leaves_settings_unchanged() {
    let engine = Engine::new();
    let before = engine.get_settings.handle().await.unwrap();

    let err = engine
        .update_settings
        .handle(SettingsPatch {
            contribution_per_box: Some(dec!(700)),
            cost_compliance_target: Some(dec!(1.2)),
            ..SettingsPatch::default()
        })
        .await
        .unwrap_err();

    match &err {
        EngineError::Validation(ValidationError::OutOfRange { field, .. }) => {
            assert_eq!(field, "cost_compliance_target");
        }
        other => panic!("Expected out of range, got {:?}", other),
    }
    assert_eq!(err.code(), ErrorCode::ValidationFailed);
    assert_eq!(engine.get_settings.handle().await.unwrap(), before);
}

#[tokio::test]
async fn form_update_changes_dashboard_targets() {
    let engine = Engine::new();
    engine
        .enter_sales(WeeklySalesRecord::new(week(3, 4), 20, 11).with_revenue(dec!(20000), dec!(2600), dec!(2200)))
        .await;
    let form = json!({
        "target_install_pct": "0.5",
        "monthly_contribution_target": 12000,
        "survival_contribution": 10000,
        "colour_scheme": "dark"
    });
    let patch = SettingsPatch::from_map(form.as_object().unwrap()).unwrap();

    let updated = engine.update_settings.handle(patch).await.unwrap();
    let snapshot = engine.dashboard(date(3, 20)).await;

    assert_eq!(updated.target_install_pct, Ratio::from_percent(50));
    assert_eq!(snapshot.settings, updated);
    // 11 / 20 = 0.55 passes 0.5 but not the default 0.6
    assert_eq!(snapshot.rag_statuses.install_pct, RagStatus::Green);
    // 20 * 640 = 12800 >= 12000
    assert_eq!(snapshot.rag_statuses.contribution, RagStatus::Green);
}

#[tokio::test]
async fn unstorable_amounts_are_rejected_and_dashboard_still_computes() {
    let engine = Engine::new();
    let before = engine.get_settings.handle().await.unwrap();

    let err = engine
        .update_settings
        .handle(SettingsPatch {
            contribution_per_box: Some(Decimal::MAX / dec!(2)),
            monthly_contribution_target: Some(Decimal::MAX),
            ..SettingsPatch::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(ValidationError::OutOfRange { .. })));
    assert_eq!(engine.get_settings.handle().await.unwrap(), before);

    engine
        .update_settings
        .handle(SettingsPatch {
            monthly_contribution_target: Some(Settings::MAX_MONTHLY_AMOUNT),
            contribution_per_box: Some(Settings::MAX_PER_BOX_AMOUNT),
            ..SettingsPatch::default()
        })
        .await
        .unwrap();
    engine.enter_sales(WeeklySalesRecord::new(week(3, 25), u32::MAX, 3)).await;

    let snapshot = engine.dashboard(date(3, 20)).await;

    let expected = Decimal::from(u32::MAX) * Settings::MAX_PER_BOX_AMOUNT;
    assert_eq!(snapshot.contribution.contribution_mtd, expected);
    assert_eq!(snapshot.forward_look.projected_contribution, expected);
}

#[tokio::test]
async fn settings_json_can_be_sent_back_as_a_patch() {
    let engine = Engine::new();
    let mut echoed = serde_json::to_value(engine.get_settings.handle().await.unwrap()).unwrap();
    echoed["targetBoxesPerWeek"] = json!(24);

    let patch: SettingsPatch = serde_json::from_value(echoed).unwrap();
    let updated = engine.update_settings.handle(patch).await.unwrap();

    assert_eq!(updated.target_boxes_per_week, 24);
    assert_eq!(updated.monthly_contribution_target, dec!(55000));
}

#[tokio::test]
async fn settings_are_created_once() {
    let engine = Engine::new();
    assert!(!engine.settings_repo.is_initialized().await);

    let first = engine.get_settings.handle().await.unwrap();
    let second = engine.get_settings.handle().await.unwrap();

    assert!(engine.settings_repo.is_initialized().await);
    assert_eq!(first, second);
}
