use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::{Badge, ProcedureId};

/// The single persisted record for an installation.
///
/// Field names follow the wire shape of the persisted slot
/// (camelCase JSON); missing fields deserialize to the defaults so
/// older records keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default)]
    completed_procedures: BTreeSet<ProcedureId>,
    #[serde(default)]
    badges: Vec<Badge>,
    #[serde(default = "default_sound_enabled")]
    sound_enabled: bool,
    #[serde(default)]
    visit_count: u32,
}

fn default_sound_enabled() -> bool {
    true
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            completed_procedures: BTreeSet::new(),
            badges: Vec::new(),
            sound_enabled: true,
            visit_count: 0,
        }
    }
}

impl ProgressRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn completed_procedures(&self) -> &BTreeSet<ProcedureId> {
        &self.completed_procedures
    }

    #[must_use]
    pub fn is_completed(&self, procedure: ProcedureId) -> bool {
        self.completed_procedures.contains(&procedure)
    }

    #[must_use]
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    #[must_use]
    pub fn visit_count(&self) -> u32 {
        self.visit_count
    }

    /// Marks a procedure as completed. Returns whether it was newly added.
    pub fn mark_completed(&mut self, procedure: ProcedureId) -> bool {
        self.completed_procedures.insert(procedure)
    }

    /// Appends a badge unless one with the same id already exists.
    ///
    /// Returns whether the badge was appended; awarding is idempotent by id.
    pub fn add_badge(&mut self, badge: Badge) -> bool {
        if self.badges.iter().any(|existing| existing.id == badge.id) {
            return false;
        }
        self.badges.push(badge);
        true
    }

    /// Flips the sound preference and returns the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Increments the visit counter and returns the new count.
    pub fn record_visit(&mut self) -> u32 {
        self.visit_count = self.visit_count.saturating_add(1);
        self.visit_count
    }

    /// Completion rate in whole percent, rounded.
    ///
    /// The denominator is the fixed size of the procedure set, not whatever
    /// happens to be stored.
    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        let completed = self.completed_procedures.len() as u32;
        let rounded = (100 * completed + ProcedureId::COUNT / 2) / ProcedureId::COUNT;
        rounded as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn badge(id: &str) -> Badge {
        Badge::new(id, "Test Badge", "⭐", fixed_now())
    }

    #[test]
    fn awarding_same_badge_id_twice_keeps_one() {
        let mut record = ProgressRecord::new();
        assert!(record.add_badge(badge("completed-cleaning")));
        assert!(!record.add_badge(badge("completed-cleaning")));
        assert_eq!(record.badges().len(), 1);
    }

    #[test]
    fn completion_percent_steps_in_quarters() {
        let mut record = ProgressRecord::new();
        assert_eq!(record.completion_percent(), 0);

        record.mark_completed(ProcedureId::Cleaning);
        record.mark_completed(ProcedureId::Xray);
        assert_eq!(record.completion_percent(), 50);

        record.mark_completed(ProcedureId::Filling);
        record.mark_completed(ProcedureId::Checkup);
        assert_eq!(record.completion_percent(), 100);
    }

    #[test]
    fn marking_completed_is_idempotent() {
        let mut record = ProgressRecord::new();
        assert!(record.mark_completed(ProcedureId::Filling));
        assert!(!record.mark_completed(ProcedureId::Filling));
        assert_eq!(record.completed_procedures().len(), 1);
    }

    #[test]
    fn defaults_match_first_load_contract() {
        let record = ProgressRecord::default();
        assert!(record.completed_procedures().is_empty());
        assert!(record.badges().is_empty());
        assert!(record.sound_enabled());
        assert_eq!(record.visit_count(), 0);
    }

    #[test]
    fn toggling_sound_twice_restores_original() {
        let mut record = ProgressRecord::new();
        assert!(!record.toggle_sound());
        assert!(record.toggle_sound());
        assert!(record.sound_enabled());
    }

    #[test]
    fn serializes_to_wire_field_names() {
        let mut record = ProgressRecord::new();
        record.mark_completed(ProcedureId::Cleaning);
        record.add_badge(badge("completed-cleaning"));
        record.record_visit();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["completedProcedures"][0], "cleaning");
        assert_eq!(json["soundEnabled"], true);
        assert_eq!(json["visitCount"], 1);
        assert!(json["badges"][0]["earnedAt"].is_string());

        let back: ProgressRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let record: ProgressRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, ProgressRecord::default());
    }
}
