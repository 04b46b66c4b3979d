//! GetSettingsHandler - Query handler for the current targets.

use std::sync::Arc;

use crate::application::EngineError;
use crate::domain::settings::Settings;
use crate::ports::SettingsRepository;

pub struct GetSettingsHandler {
    repository: Arc<dyn SettingsRepository>,
}

impl GetSettingsHandler {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    /// Current settings; an empty store is seeded with the defaults.
    pub async fn handle(&self) -> Result<Settings, EngineError> {
        Ok(self.repository.get_or_create_default().await?)
    }
}
