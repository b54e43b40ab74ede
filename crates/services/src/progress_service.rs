use std::sync::Arc;

use molar_core::model::ProgressRecord;
use storage::repository::ProgressRepository;

use crate::error::ProgressServiceError;

/// Load/save discipline for the single progress slot.
///
/// Every mutation persists the whole record immediately so state survives a
/// reload at any point.
#[derive(Clone)]
pub struct ProgressService {
    repo: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(repo: Arc<dyn ProgressRepository>) -> Self {
        Self { repo }
    }

    /// Load the persisted record, or the default record if none exists.
    ///
    /// A corrupt slot is reported as absent by the repository, so corrupt
    /// data also lands here as the default record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn load(&self) -> Result<ProgressRecord, ProgressServiceError> {
        let record = self.repo.load().await?;
        Ok(record.unwrap_or_default())
    }

    /// Persist the full record, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn save(&self, record: &ProgressRecord) -> Result<(), ProgressServiceError> {
        self.repo.save(record).await?;
        Ok(())
    }

    /// Flip the sound preference, persist, and return the new value.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn toggle_sound(
        &self,
        record: &mut ProgressRecord,
    ) -> Result<bool, ProgressServiceError> {
        let enabled = record.toggle_sound();
        self.save(record).await?;
        Ok(enabled)
    }

    /// Count a visit, persist, and return the new count.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn record_visit(
        &self,
        record: &mut ProgressRecord,
    ) -> Result<u32, ProgressServiceError> {
        let count = record.record_visit();
        self.save(record).await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;

    #[tokio::test]
    async fn load_without_prior_value_returns_defaults() {
        let service = ProgressService::new(Arc::new(InMemoryRepository::new()));
        let record = service.load().await.unwrap();
        assert_eq!(record, ProgressRecord::default());
        assert!(record.sound_enabled());
        assert_eq!(record.visit_count(), 0);
    }

    #[tokio::test]
    async fn record_visit_increments_and_persists() {
        let repo = InMemoryRepository::new();
        let service = ProgressService::new(Arc::new(repo.clone()));

        let mut record = service.load().await.unwrap();
        assert_eq!(service.record_visit(&mut record).await.unwrap(), 1);
        assert_eq!(service.record_visit(&mut record).await.unwrap(), 2);

        let reloaded = service.load().await.unwrap();
        assert_eq!(reloaded.visit_count(), 2);
    }
}
