//! PostgreSQL implementation of the production ledger.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::{count, ratio, week_key};
use crate::domain::foundation::WeekCommencing;
use crate::domain::ledger::WeeklyProductionRecord;
use crate::ports::{StoreError, WeeklyLedger};

const TABLE: &str = "weekly_production";

const COLUMNS: &str = "week_commencing, boxes_produced, installs_completed, boxes_over_cost, \
                       rework_hours, right_first_time_pct, notes";

#[derive(Clone)]
pub struct PostgresProductionLedger {
    pool: PgPool,
}

impl PostgresProductionLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProductionRow {
    week_commencing: NaiveDate,
    boxes_produced: i64,
    installs_completed: i64,
    boxes_over_cost: i64,
    rework_hours: Decimal,
    right_first_time_pct: Option<Decimal>,
    notes: Option<String>,
}

impl TryFrom<ProductionRow> for WeeklyProductionRecord {
    type Error = StoreError;

    fn try_from(row: ProductionRow) -> Result<Self, Self::Error> {
        Ok(WeeklyProductionRecord {
            week_commencing: week_key(TABLE, row.week_commencing)?,
            boxes_produced: count(TABLE, "boxes_produced", row.boxes_produced)?,
            installs_completed: count(TABLE, "installs_completed", row.installs_completed)?,
            boxes_over_cost: count(TABLE, "boxes_over_cost", row.boxes_over_cost)?,
            rework_hours: row.rework_hours,
            right_first_time_pct: row
                .right_first_time_pct
                .map(|pct| ratio(TABLE, "right_first_time_pct", pct))
                .transpose()?,
            notes: row.notes,
        })
    }
}

#[async_trait]
impl WeeklyLedger<WeeklyProductionRecord> for PostgresProductionLedger {
    async fn find(&self, week: WeekCommencing) -> Result<Option<WeeklyProductionRecord>, StoreError> {
        let row: Option<ProductionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM weekly_production WHERE week_commencing = $1",
            COLUMNS
        ))
        .bind(week.date())
        .fetch_optional(&self.pool)
        .await?;

        row.map(WeeklyProductionRecord::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<WeeklyProductionRecord>, StoreError> {
        let rows: Vec<ProductionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM weekly_production ORDER BY week_commencing DESC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(WeeklyProductionRecord::try_from).collect()
    }

    async fn upsert(&self, record: &WeeklyProductionRecord) -> Result<WeeklyProductionRecord, StoreError> {
        let row: ProductionRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO weekly_production ({columns})
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (week_commencing) DO UPDATE SET
                boxes_produced = EXCLUDED.boxes_produced,
                installs_completed = EXCLUDED.installs_completed,
                boxes_over_cost = EXCLUDED.boxes_over_cost,
                rework_hours = EXCLUDED.rework_hours,
                right_first_time_pct = EXCLUDED.right_first_time_pct,
                notes = EXCLUDED.notes
            RETURNING {columns}
            "#,
            columns = COLUMNS
        ))
        .bind(record.week_commencing.date())
        .bind(i64::from(record.boxes_produced))
        .bind(i64::from(record.installs_completed))
        .bind(i64::from(record.boxes_over_cost))
        .bind(record.rework_hours)
        .bind(record.right_first_time_pct.map(|pct| pct.value()))
        .bind(record.notes.as_deref())
        .fetch_one(&self.pool)
        .await?;

        WeeklyProductionRecord::try_from(row)
    }
}
