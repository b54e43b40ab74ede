use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{ProgressRepository, StorageError};
use molar_core::model::ProgressRecord;

use super::SqliteRepository;

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn load(&self) -> Result<Option<ProgressRecord>, StorageError> {
        let row = sqlx::query("SELECT record FROM progress WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let raw: String = row
            .try_get("record")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        // A slot that fails to parse counts as absent: the caller falls back
        // to the default record instead of crashing on corrupt data.
        Ok(serde_json::from_str(&raw).ok())
    }

    async fn save(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let raw = serde_json::to_string(record)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO progress (id, record, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                record = excluded.record,
                updated_at = excluded.updated_at
            ",
        )
        .bind(1_i64)
        .bind(raw)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
