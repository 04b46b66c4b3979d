//! Settings repository port.
//!
//! Exactly one settings record exists per store. The first read of an empty
//! store persists the defaults and returns them.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::settings::Settings;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Load the singleton record, creating it from defaults if absent.
    ///
    /// # Errors
    ///
    /// - `Database` on persistence failure
    /// - `CorruptRow` if the stored record cannot be read back
    async fn get_or_create_default(&self) -> Result<Settings, StoreError>;

    /// Replace the singleton record.
    async fn save(&self, settings: &Settings) -> Result<(), StoreError>;
}
