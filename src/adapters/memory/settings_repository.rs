//! In-Memory Settings Repository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::domain::settings::Settings;
use crate::ports::{SettingsRepository, StoreError};

/// Holds the singleton settings record in memory.
#[derive(Debug, Clone)]
pub struct InMemorySettingsRepository {
    settings: Arc<RwLock<Option<Settings>>>,
}

impl InMemorySettingsRepository {
    /// Create an empty repository; defaults are created on first read.
    pub fn new() -> Self {
        Self {
            settings: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a repository already holding `settings`.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(Some(settings))),
        }
    }

    /// Whether a record has been persisted yet.
    pub async fn is_initialized(&self) -> bool {
        self.settings.read().await.is_some()
    }
}

impl Default for InMemorySettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn get_or_create_default(&self) -> Result<Settings, StoreError> {
        let mut settings = self.settings.write().await;
        Ok(settings
            .get_or_insert_with(|| Settings::defaults(Timestamp::now()))
            .clone())
    }

    async fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        *self.settings.write().await = Some(settings.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn first_read_creates_defaults() {
        let repo = InMemorySettingsRepository::new();
        assert!(!repo.is_initialized().await);

        let settings = repo.get_or_create_default().await.unwrap();

        assert!(repo.is_initialized().await);
        assert_eq!(settings.monthly_contribution_target, dec!(55000));
        assert_eq!(settings.target_boxes_per_week, 20);
    }

    #[tokio::test]
    async fn repeated_reads_return_same_record() {
        let repo = InMemorySettingsRepository::new();

        let first = repo.get_or_create_default().await.unwrap();
        let second = repo.get_or_create_default().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn save_replaces_record() {
        let repo = InMemorySettingsRepository::new();
        let mut settings = repo.get_or_create_default().await.unwrap();
        settings.contribution_per_box = dec!(700);

        repo.save(&settings).await.unwrap();

        let loaded = repo.get_or_create_default().await.unwrap();
        assert_eq!(loaded.contribution_per_box, dec!(700));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let repo = InMemorySettingsRepository::new();
        let clone = repo.clone();

        clone.get_or_create_default().await.unwrap();

        assert!(repo.is_initialized().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_first_reads_create_one_record() {
        let repo = InMemorySettingsRepository::new();
        let mut readers = tokio::task::JoinSet::new();
        for _ in 0..32 {
            let repo = repo.clone();
            readers.spawn(async move { repo.get_or_create_default().await.unwrap() });
        }

        let mut seen = Vec::new();
        while let Some(result) = readers.join_next().await {
            seen.push(result.unwrap());
        }

        assert_eq!(seen.len(), 32);
        let first = &seen[0];
        assert!(seen.iter().all(|s| s == first));
        assert!(seen.iter().all(|s| s.updated_at == first.updated_at));
        assert_eq!(repo.get_or_create_default().await.unwrap(), *first);
    }
}
