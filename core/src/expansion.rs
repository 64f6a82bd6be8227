use crate::catalog::{EntryId, CASE_STUDY_COUNT};

/// Which case-study card is flipped open. At most one is open at a time;
/// [`ExpansionState::toggle`] is the only way to change it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpansionState {
    open: [bool; CASE_STUDY_COUNT],
}

impl Default for ExpansionState {
    fn default() -> Self {
        Self {
            open: [false; CASE_STUDY_COUNT],
        }
    }
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes every card except `id`, which flips: an open card closes, a
    /// closed one opens.
    #[must_use]
    pub fn toggle(self, id: EntryId) -> Self {
        let mut open = [false; CASE_STUDY_COUNT];
        open[id.index()] = !self.open[id.index()];
        Self { open }
    }

    pub fn any_expanded(&self) -> bool {
        self.open.iter().any(|open| *open)
    }

    pub fn is_expanded(&self, id: EntryId) -> bool {
        self.open[id.index()]
    }

    pub fn expanded(&self) -> Option<EntryId> {
        EntryId::all().find(|id| self.open[id.index()])
    }

    pub fn expanded_count(&self) -> usize {
        self.open.iter().filter(|open| **open).count()
    }
}
