use crate::model::SectionId;

/// Tracks which top-level section is active.
///
/// Exactly one section is active at any time and there is no terminal state.
/// Navigation is re-entrant: navigating to the current section still counts
/// as entering it, since the data behind the view may have changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current: SectionId,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    /// Starts at `home`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: SectionId::Home,
        }
    }

    #[must_use]
    pub fn current(&self) -> SectionId {
        self.current
    }

    /// Enters the given section unconditionally and returns it.
    ///
    /// Unknown section ids are rejected upstream, at the string boundary;
    /// every typed `SectionId` is a valid target.
    pub fn navigate(&mut self, section: SectionId) -> SectionId {
        self.current = section;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        assert_eq!(NavigationState::new().current(), SectionId::Home);
    }

    #[test]
    fn navigate_overwrites_current() {
        let mut nav = NavigationState::new();
        nav.navigate(SectionId::Tips);
        assert_eq!(nav.current(), SectionId::Tips);
        nav.navigate(SectionId::Progress);
        assert_eq!(nav.current(), SectionId::Progress);
    }

    #[test]
    fn navigate_to_current_is_idempotent() {
        let mut nav = NavigationState::new();
        nav.navigate(SectionId::Procedures);
        let entered = nav.navigate(SectionId::Procedures);
        assert_eq!(entered, SectionId::Procedures);
        assert_eq!(nav.current(), SectionId::Procedures);
    }
}
