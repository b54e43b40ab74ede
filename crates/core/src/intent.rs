//! Typed intents crossing the presentation boundary.
//!
//! The presentation layer translates raw input events (clicks, key presses)
//! into [`Intent`] values and fulfills the [`RenderIntent`] values the flow
//! emits back. Nothing else crosses the boundary.

use crate::model::{Badge, ProcedureId, SectionId, Step};

/// A user action, as reported by the presentation layer.
///
/// Navigation and procedure targets arrive as raw string ids so the flow
/// layer can reject unknown ones instead of trusting the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Navigate(String),
    OpenProcedure(String),
    AdvanceStep,
    CloseModal,
    ToggleSound,
}

/// Data accompanying a section render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionData {
    Home,
    /// Static card ids, in staggered-reveal order.
    Cards(Vec<&'static str>),
    Progress {
        percent: u8,
        badges: Vec<Badge>,
    },
}

/// An instruction to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderIntent {
    Section {
        section: SectionId,
        data: SectionData,
    },
    ModalStep {
        procedure: ProcedureId,
        step: Step,
    },
    ModalClosed,
    BadgeNotification {
        name: String,
        icon: String,
    },
    Progress {
        percent: u8,
        completed_count: usize,
        badge_count: usize,
    },
}
