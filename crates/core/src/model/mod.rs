mod badge;
mod ids;
mod progress;

pub use badge::Badge;
pub use ids::{ProcedureId, SectionId, Step, UnknownProcedure, UnknownSection};
pub use progress::ProgressRecord;
