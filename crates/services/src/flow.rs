use std::sync::Arc;

use molar_core::Clock;
use molar_core::content::{TIP_CARDS, procedure_cards};
use molar_core::intent::{Intent, RenderIntent, SectionData};
use molar_core::modal::{AdvanceOutcome, ModalState};
use molar_core::model::{ProcedureId, ProgressRecord, SectionId};
use molar_core::nav::NavigationState;
use storage::repository::ProgressRepository;

use crate::badge_engine::BadgeEngine;
use crate::error::{FlowError, ProgressServiceError};
use crate::progress_service::ProgressService;

/// The app controller: owns navigation, modal, and progress state, and turns
/// user intents into render intents.
///
/// One instance lives at the composition root and is handed to whatever
/// translates raw input events into [`Intent`] values. All transitions run
/// to completion before the next one starts; the flow owns no timers, so a
/// stale animation can never reach back into it.
pub struct AppFlow {
    nav: NavigationState,
    modal: ModalState,
    record: ProgressRecord,
    progress: ProgressService,
    badges: BadgeEngine,
}

impl AppFlow {
    /// Load persisted progress and start at the home section.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn start(
        clock: Clock,
        repo: Arc<dyn ProgressRepository>,
    ) -> Result<Self, ProgressServiceError> {
        let progress = ProgressService::new(Arc::clone(&repo));
        let record = progress.load().await?;
        Ok(Self {
            nav: NavigationState::new(),
            modal: ModalState::Closed,
            record,
            progress,
            badges: BadgeEngine::new(clock, repo),
        })
    }

    #[must_use]
    pub fn current_section(&self) -> SectionId {
        self.nav.current()
    }

    #[must_use]
    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    #[must_use]
    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    /// Dispatch one user intent and return the render intents it produced.
    ///
    /// Invalid section/procedure ids are rejected with all state unchanged.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidSection` / `FlowError::InvalidProcedure`
    /// for unknown ids, or `FlowError::Storage` if persistence fails.
    pub async fn dispatch(&mut self, intent: Intent) -> Result<Vec<RenderIntent>, FlowError> {
        match intent {
            Intent::Navigate(raw) => {
                let section = raw
                    .parse::<SectionId>()
                    .map_err(|err| FlowError::InvalidSection(err.0))?;
                self.nav.navigate(section);
                Ok(self.section_effects(section))
            }
            Intent::OpenProcedure(raw) => {
                let procedure = raw
                    .parse::<ProcedureId>()
                    .map_err(|err| FlowError::InvalidProcedure(err.0))?;
                let step = self.modal.open(procedure);
                Ok(vec![RenderIntent::ModalStep { procedure, step }])
            }
            Intent::AdvanceStep => self.advance_step().await,
            Intent::CloseModal => {
                // Interrupt path: permitted from any step, never an error.
                let was_open = self.modal.is_open();
                self.modal.close();
                Ok(if was_open {
                    vec![RenderIntent::ModalClosed]
                } else {
                    Vec::new()
                })
            }
            Intent::ToggleSound => {
                self.progress.toggle_sound(&mut self.record).await?;
                Ok(Vec::new())
            }
        }
    }

    async fn advance_step(&mut self) -> Result<Vec<RenderIntent>, FlowError> {
        match self.modal.advance() {
            AdvanceOutcome::NotOpen => Ok(Vec::new()),
            AdvanceOutcome::Advanced { procedure, step } => {
                Ok(vec![RenderIntent::ModalStep { procedure, step }])
            }
            AdvanceOutcome::Completed(procedure) => {
                // The single point where completing a procedure awards its badge.
                let earned = self
                    .badges
                    .complete_procedure(&mut self.record, procedure)
                    .await?;

                let mut effects = vec![RenderIntent::ModalClosed];
                if let Some(earned) = earned {
                    effects.push(RenderIntent::BadgeNotification {
                        name: earned.name,
                        icon: earned.icon,
                    });
                }
                effects.push(self.progress_effect());
                Ok(effects)
            }
        }
    }

    fn section_effects(&self, section: SectionId) -> Vec<RenderIntent> {
        match section {
            SectionId::Home => vec![RenderIntent::Section {
                section,
                data: SectionData::Home,
            }],
            SectionId::Procedures => vec![RenderIntent::Section {
                section,
                data: SectionData::Cards(procedure_cards()),
            }],
            SectionId::Tips => vec![RenderIntent::Section {
                section,
                data: SectionData::Cards(TIP_CARDS.to_vec()),
            }],
            SectionId::Progress => vec![
                RenderIntent::Section {
                    section,
                    data: SectionData::Progress {
                        percent: self.record.completion_percent(),
                        badges: self.record.badges().to_vec(),
                    },
                },
                self.progress_effect(),
            ],
        }
    }

    fn progress_effect(&self) -> RenderIntent {
        RenderIntent::Progress {
            percent: self.record.completion_percent(),
            completed_count: self.record.completed_procedures().len(),
            badge_count: self.record.badges().len(),
        }
    }
}
