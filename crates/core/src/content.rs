//! Static explainer content, keyed by procedure.
//!
//! Content is a data table rather than markup so a renderer can present it
//! any way it likes and tests never have to match strings inside templates.

use crate::model::{ProcedureId, Step};

/// Text for one Show-Tell-Do step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepContent {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Everything the presentation layer needs for one procedure explainer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcedureInfo {
    pub id: ProcedureId,
    pub title: &'static str,
    pub icon: &'static str,
    pub badge_name: &'static str,
    pub steps: [StepContent; 3],
}

impl ProcedureInfo {
    #[must_use]
    pub fn step(&self, step: Step) -> &StepContent {
        &self.steps[step.index()]
    }
}

/// Card ids for the tips section, in reveal order.
pub const TIP_CARDS: [&str; 4] = [
    "brush-twice",
    "floss-daily",
    "healthy-snacks",
    "visit-dentist",
];

/// Card ids for the procedures section, in reveal order.
#[must_use]
pub fn procedure_cards() -> Vec<&'static str> {
    ProcedureId::ALL.iter().map(ProcedureId::as_str).collect()
}

/// Looks up the content table entry for a procedure.
#[must_use]
pub fn procedure_info(id: ProcedureId) -> &'static ProcedureInfo {
    match id {
        ProcedureId::Cleaning => &CLEANING,
        ProcedureId::Xray => &XRAY,
        ProcedureId::Filling => &FILLING,
        ProcedureId::Checkup => &CHECKUP,
    }
}

static CLEANING: ProcedureInfo = ProcedureInfo {
    id: ProcedureId::Cleaning,
    title: "Teeth Cleaning",
    icon: "🪥",
    badge_name: "Cleaning Champ",
    steps: [
        StepContent {
            heading: "Show",
            body: "This is the tooth tickler! It spins gently and sounds like a tiny electric toothbrush.",
        },
        StepContent {
            heading: "Tell",
            body: "The dentist uses it to brush away sugar bugs hiding where your toothbrush can't reach.",
        },
        StepContent {
            heading: "Do",
            body: "Open wide and count to ten while the tickler polishes each tooth shiny and smooth.",
        },
    ],
};

static XRAY: ProcedureInfo = ProcedureInfo {
    id: ProcedureId::Xray,
    title: "Tooth Pictures",
    icon: "📸",
    badge_name: "Picture Explorer",
    steps: [
        StepContent {
            heading: "Show",
            body: "This camera takes super-hero pictures that can see right inside your teeth.",
        },
        StepContent {
            heading: "Tell",
            body: "The pictures show the dentist how your grown-up teeth are growing under your gums.",
        },
        StepContent {
            heading: "Do",
            body: "Hold very still like a statue, bite softly on the little wing, and click! All done.",
        },
    ],
};

static FILLING: ProcedureInfo = ProcedureInfo {
    id: ProcedureId::Filling,
    title: "Tooth Patch",
    icon: "✨",
    badge_name: "Patch Hero",
    steps: [
        StepContent {
            heading: "Show",
            body: "This is magic tooth clay. It starts soft and squishy and dries sparkly hard.",
        },
        StepContent {
            heading: "Tell",
            body: "If a sugar bug left a tiny hole, the dentist fills it so the tooth is strong again.",
        },
        StepContent {
            heading: "Do",
            body: "Relax in the big chair while the dentist pats the clay in place and shines a light on it.",
        },
    ],
};

static CHECKUP: ProcedureInfo = ProcedureInfo {
    id: ProcedureId::Checkup,
    title: "Smile Checkup",
    icon: "🦷",
    badge_name: "Checkup Star",
    steps: [
        StepContent {
            heading: "Show",
            body: "This tiny mirror on a stick lets the dentist peek at every single tooth.",
        },
        StepContent {
            heading: "Tell",
            body: "The dentist counts your teeth and makes sure each one is happy and healthy.",
        },
        StepContent {
            heading: "Do",
            body: "Open wide and say ahh while the dentist counts. Can you count along too?",
        },
    ],
};
