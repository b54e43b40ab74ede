use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier for a dental procedure explainer.
///
/// This is a closed set: the completion rate divides by `COUNT`, so adding a
/// variant means updating the persisted-wire expectations too.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcedureId {
    Cleaning,
    Xray,
    Filling,
    Checkup,
}

impl ProcedureId {
    /// All procedures, in presentation order.
    pub const ALL: [ProcedureId; 4] = [
        ProcedureId::Cleaning,
        ProcedureId::Xray,
        ProcedureId::Filling,
        ProcedureId::Checkup,
    ];

    /// Fixed size of the procedure set, the denominator of the completion rate.
    pub const COUNT: u32 = Self::ALL.len() as u32;

    /// Returns the wire-format string id.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcedureId::Cleaning => "cleaning",
            ProcedureId::Xray => "xray",
            ProcedureId::Filling => "filling",
            ProcedureId::Checkup => "checkup",
        }
    }
}

/// Identifier for a top-level app section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Procedures,
    Progress,
    Tips,
}

impl SectionId {
    /// Returns the wire-format string id.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Procedures => "procedures",
            SectionId::Progress => "progress",
            SectionId::Tips => "tips",
        }
    }
}

/// One step of the Show-Tell-Do sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    Show,
    Tell,
    Do,
}

impl Step {
    /// The step that follows this one, or `None` after `Do`.
    #[must_use]
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Show => Some(Step::Tell),
            Step::Tell => Some(Step::Do),
            Step::Do => None,
        }
    }

    /// Zero-based position within the sequence.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Step::Show => 0,
            Step::Tell => 1,
            Step::Do => 2,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown procedure id: {0}")]
pub struct UnknownProcedure(pub String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown section id: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for ProcedureId {
    type Err = UnknownProcedure;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "cleaning" => Ok(ProcedureId::Cleaning),
            "xray" => Ok(ProcedureId::Xray),
            "filling" => Ok(ProcedureId::Filling),
            "checkup" => Ok(ProcedureId::Checkup),
            other => Err(UnknownProcedure(other.to_string())),
        }
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "home" => Ok(SectionId::Home),
            "procedures" => Ok(SectionId::Procedures),
            "progress" => Ok(SectionId::Progress),
            "tips" => Ok(SectionId::Tips),
            other => Err(UnknownSection(other.to_string())),
        }
    }
}

impl fmt::Debug for ProcedureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProcedureId({})", self.as_str())
    }
}

impl fmt::Display for ProcedureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn procedure_ids_round_trip_through_strings() {
        for id in ProcedureId::ALL {
            assert_eq!(id.as_str().parse::<ProcedureId>().unwrap(), id);
        }
    }

    #[test]
    fn unknown_procedure_is_rejected() {
        let err = "root-canal".parse::<ProcedureId>().unwrap_err();
        assert_eq!(err, UnknownProcedure("root-canal".to_string()));
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!("settings".parse::<SectionId>().is_err());
    }

    #[test]
    fn steps_advance_show_tell_do() {
        assert_eq!(Step::Show.next(), Some(Step::Tell));
        assert_eq!(Step::Tell.next(), Some(Step::Do));
        assert_eq!(Step::Do.next(), None);
    }
}
