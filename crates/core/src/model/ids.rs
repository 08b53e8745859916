use std::fmt;

/// Position of a milestone inside its `Catalog`.
///
/// Milestones have no identity beyond their catalog slot, so the id is only
/// meaningful for the catalog that produced it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MilestoneId(usize);

impl MilestoneId {
    #[must_use]
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    /// Returns the catalog position.
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for MilestoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MilestoneId({})", self.0)
    }
}

impl fmt::Display for MilestoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
