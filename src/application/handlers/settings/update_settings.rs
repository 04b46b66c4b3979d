//! UpdateSettingsHandler - Command handler for changing targets.
//!
//! The patch is validated against the current record as a whole; nothing is
//! written unless every supplied field is in range.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::application::EngineError;
use crate::domain::settings::{Settings, SettingsPatch};
use crate::ports::{Clock, SettingsRepository};

pub struct UpdateSettingsHandler {
    repository: Arc<dyn SettingsRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateSettingsHandler {
    pub fn new(repository: Arc<dyn SettingsRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, patch: SettingsPatch) -> Result<Settings, EngineError> {
        let current = self.repository.get_or_create_default().await?;

        if patch.is_empty() {
            debug!("Empty settings patch, nothing to update");
            return Ok(current);
        }

        let next = match current.apply(&patch, self.clock.now()) {
            Ok(next) => next,
            Err(err) => {
                warn!(field = err.field(), error = %err, "Rejected settings update");
                return Err(err.into());
            }
        };

        self.repository.save(&next).await?;

        info!(
            monthly_contribution_target = %next.monthly_contribution_target,
            contribution_per_box = %next.contribution_per_box,
            "Settings updated"
        );

        Ok(next)
    }
}
