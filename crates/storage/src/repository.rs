use async_trait::async_trait;
use molar_core::model::ProgressRecord;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the single persisted progress slot.
///
/// The record is replaced wholesale on every save, so no partial write is
/// ever observable. There is exactly one writer (single-threaded
/// cooperative execution), so no conflict handling is needed.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the persisted record, if any.
    ///
    /// A slot whose contents fail to parse is reported as absent; corrupt
    /// data is recovered by substituting defaults upstream, never surfaced.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only for storage-level failures, not for
    /// unparsable contents.
    async fn load(&self) -> Result<Option<ProgressRecord>, StorageError>;

    /// Persist the full record, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save(&self, record: &ProgressRecord) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    slot: Arc<Mutex<Option<ProgressRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load(&self) -> Result<Option<ProgressRecord>, StorageError> {
        let guard = self
            .slot
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(record.clone());
        Ok(())
    }
}

/// Aggregates the progress repository behind a trait object for easy
/// backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let progress: Arc<dyn ProgressRepository> = Arc::new(InMemoryRepository::new());
        Self { progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use molar_core::model::{Badge, ProcedureId};
    use molar_core::time::fixed_now;

    #[tokio::test]
    async fn load_before_save_reports_absent() {
        let repo = InMemoryRepository::new();
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let repo = InMemoryRepository::new();

        let mut record = ProgressRecord::new();
        record.mark_completed(ProcedureId::Cleaning);
        record.add_badge(Badge::new(
            "completed-cleaning",
            "Cleaning Champ",
            "🪥",
            fixed_now(),
        ));
        record.toggle_sound();
        record.record_visit();

        repo.save(&record).await.unwrap();
        let loaded = repo.load().await.unwrap().expect("record persisted");
        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn save_replaces_prior_value_wholesale() {
        let repo = InMemoryRepository::new();

        let mut first = ProgressRecord::new();
        first.mark_completed(ProcedureId::Xray);
        repo.save(&first).await.unwrap();

        let second = ProgressRecord::new();
        repo.save(&second).await.unwrap();

        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded, second);
    }
}
