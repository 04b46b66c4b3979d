//! Errors surfaced by application handlers.

use crate::domain::foundation::{ErrorCode, ValidationError, WeekCommencing};
use crate::ports::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("No entry for week commencing {0}")]
    WeekNotFound(WeekCommencing),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EngineError {
    /// Stable code for caller-side presentation.
    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::Validation(_) => ErrorCode::ValidationFailed,
            EngineError::WeekNotFound(_) => ErrorCode::WeekNotFound,
            EngineError::Store(_) => ErrorCode::DatabaseError,
        }
    }
}
