use std::sync::Arc;

use molar_core::Clock;
use molar_core::content::procedure_info;
use molar_core::model::{Badge, ProcedureId, ProgressRecord};
use storage::repository::ProgressRepository;

use crate::error::ProgressServiceError;

/// Notification payload for a newly earned badge.
///
/// How long it stays on screen (enter, hold, exit) is a presentation
/// concern; the engine only says that it should appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeEarned {
    pub name: String,
    pub icon: String,
}

/// Derives badge awards from progress and persists them.
#[derive(Clone)]
pub struct BadgeEngine {
    clock: Clock,
    repo: Arc<dyn ProgressRepository>,
}

impl BadgeEngine {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn ProgressRepository>) -> Self {
        Self { clock, repo }
    }

    /// Award a badge by id, idempotently.
    ///
    /// If the record already holds a badge with this id, nothing changes and
    /// no notification is produced. Otherwise the badge is appended with the
    /// clock's current time, the record is persisted, and a notification
    /// payload is returned.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn award(
        &self,
        record: &mut ProgressRecord,
        id: &str,
        name: &str,
        icon: &str,
    ) -> Result<Option<BadgeEarned>, ProgressServiceError> {
        let badge = Badge::new(id, name, icon, self.clock.now());
        if !record.add_badge(badge) {
            return Ok(None);
        }
        self.repo.save(record).await?;
        Ok(Some(BadgeEarned {
            name: name.to_string(),
            icon: icon.to_string(),
        }))
    }

    /// Mark a procedure completed and award its badge, idempotently.
    ///
    /// Persists once whether or not the badge is new; the completed set may
    /// have changed even when the badge already exists.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn complete_procedure(
        &self,
        record: &mut ProgressRecord,
        procedure: ProcedureId,
    ) -> Result<Option<BadgeEarned>, ProgressServiceError> {
        record.mark_completed(procedure);

        let info = procedure_info(procedure);
        let id = format!("completed-{procedure}");
        let badge = Badge::new(&id, info.badge_name, info.icon, self.clock.now());
        let earned = record.add_badge(badge).then(|| BadgeEarned {
            name: info.badge_name.to_string(),
            icon: info.icon.to_string(),
        });

        self.repo.save(record).await?;
        Ok(earned)
    }
}
