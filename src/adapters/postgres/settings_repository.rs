//! PostgreSQL implementation of SettingsRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::{count, ratio};
use crate::domain::foundation::Timestamp;
use crate::domain::settings::Settings;
use crate::ports::{SettingsRepository, StoreError};

const TABLE: &str = "settings";

/// The settings table holds at most one row, `id = 1`.
const SINGLETON_ID: i16 = 1;

#[derive(Clone)]
pub struct PostgresSettingsRepository {
    pool: PgPool,
}

impl PostgresSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn write(&self, settings: &Settings, overwrite: bool) -> Result<(), StoreError> {
        let conflict = if overwrite {
            r#"DO UPDATE SET
                monthly_contribution_target = EXCLUDED.monthly_contribution_target,
                survival_contribution = EXCLUDED.survival_contribution,
                target_boxes_per_month = EXCLUDED.target_boxes_per_month,
                target_boxes_per_week = EXCLUDED.target_boxes_per_week,
                target_install_pct = EXCLUDED.target_install_pct,
                target_extras_pct = EXCLUDED.target_extras_pct,
                contribution_per_box = EXCLUDED.contribution_per_box,
                cost_compliance_target = EXCLUDED.cost_compliance_target,
                right_first_time_target = EXCLUDED.right_first_time_target,
                updated_at = EXCLUDED.updated_at"#
        } else {
            "DO NOTHING"
        };

        let sql = format!(
            r#"
            INSERT INTO settings (
                id, monthly_contribution_target, survival_contribution,
                target_boxes_per_month, target_boxes_per_week,
                target_install_pct, target_extras_pct, contribution_per_box,
                cost_compliance_target, right_first_time_target, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) {}
            "#,
            conflict
        );

        sqlx::query(&sql)
            .bind(SINGLETON_ID)
            .bind(settings.monthly_contribution_target)
            .bind(settings.survival_contribution)
            .bind(i64::from(settings.target_boxes_per_month))
            .bind(i64::from(settings.target_boxes_per_week))
            .bind(settings.target_install_pct.value())
            .bind(settings.target_extras_pct.value())
            .bind(settings.contribution_per_box)
            .bind(settings.cost_compliance_target.value())
            .bind(settings.right_first_time_target.value())
            .bind(settings.updated_at.as_datetime())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SettingsRow {
    monthly_contribution_target: Decimal,
    survival_contribution: Decimal,
    target_boxes_per_month: i64,
    target_boxes_per_week: i64,
    target_install_pct: Decimal,
    target_extras_pct: Decimal,
    contribution_per_box: Decimal,
    cost_compliance_target: Decimal,
    right_first_time_target: Decimal,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SettingsRow> for Settings {
    type Error = StoreError;

    fn try_from(row: SettingsRow) -> Result<Self, Self::Error> {
        Ok(Settings {
            monthly_contribution_target: row.monthly_contribution_target,
            survival_contribution: row.survival_contribution,
            target_boxes_per_month: count(TABLE, "target_boxes_per_month", row.target_boxes_per_month)?,
            target_boxes_per_week: count(TABLE, "target_boxes_per_week", row.target_boxes_per_week)?,
            target_install_pct: ratio(TABLE, "target_install_pct", row.target_install_pct)?,
            target_extras_pct: ratio(TABLE, "target_extras_pct", row.target_extras_pct)?,
            contribution_per_box: row.contribution_per_box,
            cost_compliance_target: ratio(TABLE, "cost_compliance_target", row.cost_compliance_target)?,
            right_first_time_target: ratio(TABLE, "right_first_time_target", row.right_first_time_target)?,
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepository {
    async fn get_or_create_default(&self) -> Result<Settings, StoreError> {
        // Concurrent first reads race on the insert; DO NOTHING lets the loser
        // fall through to the select.
        self.write(&Settings::defaults(Timestamp::now()), false).await?;

        let row: SettingsRow = sqlx::query_as(
            r#"
            SELECT monthly_contribution_target, survival_contribution,
                   target_boxes_per_month, target_boxes_per_week,
                   target_install_pct, target_extras_pct, contribution_per_box,
                   cost_compliance_target, right_first_time_target, updated_at
            FROM settings
            WHERE id = $1
            "#,
        )
        .bind(SINGLETON_ID)
        .fetch_one(&self.pool)
        .await?;

        Settings::try_from(row)
    }

    async fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        self.write(settings, true).await
    }
}
