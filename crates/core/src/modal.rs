use crate::model::{ProcedureId, Step};

/// State of the Show-Tell-Do explainer modal.
///
/// The modal is transient: it is never persisted and closing destroys it.
/// Close is reachable from any open step directly (explicit close button,
/// outside click, escape key); that is an intentional interrupt path, not
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open { procedure: ProcedureId, step: Step },
}

/// Result of asking the modal to advance one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the next step of the open procedure.
    Advanced { procedure: ProcedureId, step: Step },
    /// Advanced past `Do`: the modal closed and the procedure finished.
    Completed(ProcedureId),
    /// The modal was not open; nothing happened.
    NotOpen,
}

impl ModalState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    /// Opens the modal at the `Show` step, replacing any open state.
    pub fn open(&mut self, procedure: ProcedureId) -> Step {
        *self = ModalState::Open {
            procedure,
            step: Step::Show,
        };
        Step::Show
    }

    /// Advances Show → Tell → Do; past `Do` the modal closes and the
    /// procedure counts as completed.
    pub fn advance(&mut self) -> AdvanceOutcome {
        match *self {
            ModalState::Closed => AdvanceOutcome::NotOpen,
            ModalState::Open { procedure, step } => match step.next() {
                Some(next) => {
                    *self = ModalState::Open {
                        procedure,
                        step: next,
                    };
                    AdvanceOutcome::Advanced {
                        procedure,
                        step: next,
                    }
                }
                None => {
                    *self = ModalState::Closed;
                    AdvanceOutcome::Completed(procedure)
                }
            },
        }
    }

    /// Closes the modal from any state. Always succeeds.
    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_starts_at_show() {
        let mut modal = ModalState::default();
        assert_eq!(modal.open(ProcedureId::Cleaning), Step::Show);
        assert_eq!(
            modal,
            ModalState::Open {
                procedure: ProcedureId::Cleaning,
                step: Step::Show
            }
        );
    }

    #[test]
    fn advancing_walks_show_tell_do_then_closes() {
        let mut modal = ModalState::default();
        modal.open(ProcedureId::Cleaning);

        assert_eq!(
            modal.advance(),
            AdvanceOutcome::Advanced {
                procedure: ProcedureId::Cleaning,
                step: Step::Tell
            }
        );
        assert_eq!(
            modal.advance(),
            AdvanceOutcome::Advanced {
                procedure: ProcedureId::Cleaning,
                step: Step::Do
            }
        );
        assert_eq!(
            modal.advance(),
            AdvanceOutcome::Completed(ProcedureId::Cleaning)
        );
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn advancing_while_closed_is_a_no_op() {
        let mut modal = ModalState::default();
        assert_eq!(modal.advance(), AdvanceOutcome::NotOpen);
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn close_interrupts_any_step() {
        let mut modal = ModalState::default();
        modal.open(ProcedureId::Xray);
        modal.advance();
        modal.close();
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn opening_over_an_open_modal_resets_to_show() {
        let mut modal = ModalState::default();
        modal.open(ProcedureId::Xray);
        modal.advance();
        modal.open(ProcedureId::Filling);
        assert_eq!(
            modal,
            ModalState::Open {
                procedure: ProcedureId::Filling,
                step: Step::Show
            }
        );
    }
}
