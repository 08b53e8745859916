//! Decade + free-text filtering over catalog milestones.
//!
//! Filtering is recomputed from scratch on every change. Results always keep
//! catalog order and may be empty.

use std::fmt;

use crate::model::{DecadeLabel, Milestone, MilestoneId};

/// Decade restriction of a filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DecadeSelector {
    #[default]
    All,
    Decade(DecadeLabel),
}

impl DecadeSelector {
    #[must_use]
    pub fn matches(&self, milestone: &Milestone) -> bool {
        match self {
            Self::All => true,
            Self::Decade(label) => milestone.decade() == *label,
        }
    }
}

impl fmt::Display for DecadeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Decade(label) => write!(f, "{label}"),
        }
    }
}

/// User-owned filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub decade: DecadeSelector,
    pub query: String,
}

impl FilterState {
    #[must_use]
    pub fn new(decade: DecadeSelector, query: impl Into<String>) -> Self {
        Self {
            decade,
            query: query.into(),
        }
    }

    /// True when neither restriction applies.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.decade == DecadeSelector::All && self.query.trim().is_empty()
    }

    fn matcher(&self) -> Matcher {
        let needle = self.query.trim().to_lowercase();
        Matcher {
            decade: self.decade,
            needle: (!needle.is_empty()).then_some(needle),
        }
    }
}

struct Matcher {
    decade: DecadeSelector,
    needle: Option<String>,
}

impl Matcher {
    fn matches(&self, milestone: &Milestone) -> bool {
        if !self.decade.matches(milestone) {
            return false;
        }
        match &self.needle {
            None => true,
            Some(needle) => milestone.search_text().contains(needle.as_str()),
        }
    }
}

/// Milestones matching `state`, in catalog order.
#[must_use]
pub fn filter<'a>(milestones: &'a [Milestone], state: &FilterState) -> Vec<&'a Milestone> {
    let matcher = state.matcher();
    milestones
        .iter()
        .filter(|milestone| matcher.matches(milestone))
        .collect()
}

/// Catalog positions of the milestones matching `state`, ascending.
#[must_use]
pub fn filter_ids(milestones: &[Milestone], state: &FilterState) -> Vec<MilestoneId> {
    let matcher = state.matcher();
    milestones
        .iter()
        .enumerate()
        .filter(|(_, milestone)| matcher.matches(milestone))
        .map(|(position, _)| MilestoneId::new(position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn years(view: &[&Milestone]) -> Vec<i32> {
        view.iter().map(|milestone| milestone.year()).collect()
    }

    fn decade(raw: &str) -> DecadeSelector {
        DecadeSelector::Decade(raw.parse().unwrap())
    }

    #[test]
    fn unrestricted_state_returns_full_catalog_in_order() {
        let catalog = Catalog::builtin();
        let view = filter(catalog.milestones(), &FilterState::default());
        assert_eq!(view.len(), catalog.len());
        assert!(
            view.iter()
                .zip(catalog.milestones())
                .all(|(left, right)| std::ptr::eq(*left, right))
        );
    }

    #[test]
    fn decade_filter_keeps_only_that_decade() {
        let catalog = Catalog::builtin();
        let view = filter(catalog.milestones(), &FilterState::new(decade("1990s"), ""));
        assert_eq!(years(&view), [1992, 1995, 1999]);
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let catalog = Catalog::builtin();
        let view = filter(
            catalog.milestones(),
            &FilterState::new(DecadeSelector::All, "  SHADER "),
        );
        assert_eq!(years(&view), [1999, 2006]);
    }

    #[test]
    fn query_matches_year_text() {
        let catalog = Catalog::builtin();
        let view = filter(
            catalog.milestones(),
            &FilterState::new(DecadeSelector::All, "1968"),
        );
        assert_eq!(years(&view), [1968]);
    }

    #[test]
    fn restrictions_are_conjunctive() {
        let catalog = Catalog::builtin();
        let view = filter(catalog.milestones(), &FilterState::new(decade("2000s"), "shader"));
        assert_eq!(years(&view), [2006]);

        let view = filter(catalog.milestones(), &FilterState::new(decade("1950s"), "shader"));
        assert!(view.is_empty());
    }

    #[test]
    fn whitespace_query_is_no_restriction() {
        let state = FilterState::new(DecadeSelector::All, "   ");
        assert!(state.is_unrestricted());
        let catalog = Catalog::builtin();
        assert_eq!(filter(catalog.milestones(), &state).len(), catalog.len());
    }

    #[test]
    fn empty_catalog_yields_empty_view() {
        let state = FilterState::new(decade("1990s"), "gpu");
        assert!(filter(&[], &state).is_empty());
        assert!(filter_ids(&[], &state).is_empty());
    }

    #[test]
    fn ids_are_an_ascending_subsequence() {
        let catalog = Catalog::builtin();
        let states = [
            FilterState::default(),
            FilterState::new(decade("1970s"), ""),
            FilterState::new(DecadeSelector::All, "gui"),
            FilterState::new(DecadeSelector::All, "no-such-thing"),
        ];
        for state in &states {
            let ids = filter_ids(catalog.milestones(), state);
            assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
            let by_id: Vec<_> = ids.iter().filter_map(|id| catalog.get(*id)).collect();
            assert_eq!(by_id, filter(catalog.milestones(), state));
        }
    }
}
