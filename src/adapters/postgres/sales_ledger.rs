//! PostgreSQL implementation of the sales ledger.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::{count, week_key};
use crate::domain::foundation::WeekCommencing;
use crate::domain::ledger::WeeklySalesRecord;
use crate::ports::{StoreError, WeeklyLedger};

const TABLE: &str = "weekly_sales";

const COLUMNS: &str =
    "week_commencing, boxes_sold, installs_sold, box_revenue, extras_revenue, install_revenue, notes";

#[derive(Clone)]
pub struct PostgresSalesLedger {
    pool: PgPool,
}

impl PostgresSalesLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SalesRow {
    week_commencing: NaiveDate,
    boxes_sold: i64,
    installs_sold: i64,
    box_revenue: Decimal,
    extras_revenue: Decimal,
    install_revenue: Decimal,
    notes: Option<String>,
}

impl TryFrom<SalesRow> for WeeklySalesRecord {
    type Error = StoreError;

    fn try_from(row: SalesRow) -> Result<Self, Self::Error> {
        Ok(WeeklySalesRecord {
            week_commencing: week_key(TABLE, row.week_commencing)?,
            boxes_sold: count(TABLE, "boxes_sold", row.boxes_sold)?,
            installs_sold: count(TABLE, "installs_sold", row.installs_sold)?,
            box_revenue: row.box_revenue,
            extras_revenue: row.extras_revenue,
            install_revenue: row.install_revenue,
            notes: row.notes,
        })
    }
}

#[async_trait]
impl WeeklyLedger<WeeklySalesRecord> for PostgresSalesLedger {
    async fn find(&self, week: WeekCommencing) -> Result<Option<WeeklySalesRecord>, StoreError> {
        let row: Option<SalesRow> = sqlx::query_as(&format!(
            "SELECT {} FROM weekly_sales WHERE week_commencing = $1",
            COLUMNS
        ))
        .bind(week.date())
        .fetch_optional(&self.pool)
        .await?;

        row.map(WeeklySalesRecord::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<WeeklySalesRecord>, StoreError> {
        let rows: Vec<SalesRow> = sqlx::query_as(&format!(
            "SELECT {} FROM weekly_sales ORDER BY week_commencing DESC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(WeeklySalesRecord::try_from).collect()
    }

    async fn upsert(&self, record: &WeeklySalesRecord) -> Result<WeeklySalesRecord, StoreError> {
        let row: SalesRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO weekly_sales ({columns})
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (week_commencing) DO UPDATE SET
                boxes_sold = EXCLUDED.boxes_sold,
                installs_sold = EXCLUDED.installs_sold,
                box_revenue = EXCLUDED.box_revenue,
                extras_revenue = EXCLUDED.extras_revenue,
                install_revenue = EXCLUDED.install_revenue,
                notes = EXCLUDED.notes
            RETURNING {columns}
            "#,
            columns = COLUMNS
        ))
        .bind(record.week_commencing.date())
        .bind(i64::from(record.boxes_sold))
        .bind(i64::from(record.installs_sold))
        .bind(record.box_revenue)
        .bind(record.extras_revenue)
        .bind(record.install_revenue)
        .bind(record.notes.as_deref())
        .fetch_one(&self.pool)
        .await?;

        WeeklySalesRecord::try_from(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(date: NaiveDate) -> SalesRow {
        SalesRow {
            week_commencing: date,
            boxes_sold: 20,
            installs_sold: 12,
            box_revenue: dec!(20000),
            extras_revenue: dec!(3000),
            install_revenue: dec!(2400),
            notes: Some("steady week".to_string()),
        }
    }

    #[test]
    fn row_converts_to_record() {
        let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();

        let record = WeeklySalesRecord::try_from(row(monday)).unwrap();

        assert_eq!(record.week_commencing.date(), monday);
        assert_eq!(record.boxes_sold, 20);
        assert_eq!(record.extras_revenue, dec!(3000));
        assert_eq!(record.notes.as_deref(), Some("steady week"));
    }

    #[test]
    fn row_keyed_off_monday_is_corrupt() {
        let friday = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();

        assert!(matches!(
            WeeklySalesRecord::try_from(row(friday)),
            Err(StoreError::CorruptRow { table: "weekly_sales", .. })
        ));
    }
}
