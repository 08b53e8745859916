use std::fmt;
use std::sync::Arc;

use timeline_core::model::{Milestone, MilestoneId};
use timeline_core::{Catalog, DecadeSelector, FilterState, filter_ids};

//
// ─── BROWSER ───────────────────────────────────────────────────────────────────
//

/// Session state for browsing the timeline.
///
/// Owns the filter inputs, the derived view (catalog positions, catalog order)
/// and the selected position inside that view. Every filter change rebuilds
/// the view and moves the selection back to the first entry.
pub struct TimelineBrowser {
    catalog: Arc<Catalog>,
    filter: FilterState,
    view: Vec<MilestoneId>,
    selected: usize,
}

impl TimelineBrowser {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let filter = FilterState::default();
        let view = filter_ids(catalog.milestones(), &filter);
        Self {
            catalog,
            filter,
            view,
            selected: 0,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// "all" followed by every decade present in the catalog.
    #[must_use]
    pub fn decade_options(&self) -> Vec<DecadeSelector> {
        std::iter::once(DecadeSelector::All)
            .chain(self.catalog.decades().into_iter().map(DecadeSelector::Decade))
            .collect()
    }

    pub fn set_decade(&mut self, decade: DecadeSelector) {
        self.filter.decade = decade;
        self.refilter();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.refilter();
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.refilter();
    }

    /// Back to every decade and an empty query.
    pub fn clear_filters(&mut self) {
        self.set_filter(FilterState::default());
    }

    fn refilter(&mut self) {
        self.view = filter_ids(self.catalog.milestones(), &self.filter);
        self.selected = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.view.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    #[must_use]
    pub fn visible_ids(&self) -> &[MilestoneId] {
        &self.view
    }

    /// Milestones currently visible, in catalog order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Milestone> {
        self.view
            .iter()
            .filter_map(|id| self.catalog.get(*id))
            .collect()
    }

    /// Selected position inside the view, `None` when the view is empty.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        (!self.view.is_empty()).then_some(self.selected)
    }

    #[must_use]
    pub fn current(&self) -> Option<&Milestone> {
        self.view
            .get(self.selected)
            .and_then(|id| self.catalog.get(*id))
    }

    /// Select a view position, clamped into the view.
    pub fn select(&mut self, index: usize) -> Option<&Milestone> {
        if self.view.is_empty() {
            return None;
        }
        self.selected = index.min(self.view.len() - 1);
        self.current()
    }

    /// Move to the next entry, wrapping to the first.
    pub fn next(&mut self) -> Option<&Milestone> {
        if self.view.is_empty() {
            return None;
        }
        self.selected = (self.selected + 1) % self.view.len();
        self.current()
    }

    /// Move to the previous entry, wrapping to the last.
    pub fn prev(&mut self) -> Option<&Milestone> {
        if self.view.is_empty() {
            return None;
        }
        let len = self.view.len();
        self.selected = (self.selected + len - 1) % len;
        self.current()
    }
}

impl fmt::Debug for TimelineBrowser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimelineBrowser")
            .field("catalog_len", &self.catalog.len())
            .field("filter", &self.filter)
            .field("view_len", &self.view.len())
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
