//! Errors raised by persistence adapters.

/// Errors that can occur while reading or writing the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Corrupt {table} row: {reason}")]
    CorruptRow { table: &'static str, reason: String },
}

impl StoreError {
    pub fn corrupt(table: &'static str, reason: impl Into<String>) -> Self {
        StoreError::CorruptRow {
            table,
            reason: reason.into(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}
