use std::path::PathBuf;
use std::sync::Arc;

use services::{
    AppServices, AssetResolver, ExportFormat, ExportService, NarrationController,
    NarrationTicket, TimelineBrowser,
};
use timeline_core::DecadeSelector;
use timeline_core::model::Milestone;

use crate::platform::FilePicker;
use crate::vm::export_vm::export_message;
use crate::vm::narration_vm::{NarrationState, NarrationStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimelineIntent {
    SelectDecade(DecadeSelector),
    Search(String),
    ClearFilters,
    Select(usize),
    Next,
    Prev,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecadeOptionVm {
    pub selector: DecadeSelector,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MilestoneRowVm {
    pub position: usize,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MilestoneDetailVm {
    pub title: String,
    pub meta: String,
    pub body: String,
    pub image: Option<PathBuf>,
}

impl MilestoneDetailVm {
    fn no_results() -> Self {
        Self {
            title: "No results".to_string(),
            meta: String::new(),
            body: String::new(),
            image: None,
        }
    }

    fn from_milestone(milestone: &Milestone, assets: &AssetResolver) -> Self {
        Self {
            title: milestone.title().to_string(),
            meta: format!(
                "Year: {} • Decade: {} • Tags: {}",
                milestone.year(),
                milestone.decade(),
                milestone.tags().join(", ")
            ),
            body: milestone.description().to_string(),
            image: assets.image_for(milestone),
        }
    }
}

#[must_use]
pub fn decade_option_label(selector: DecadeSelector) -> String {
    match selector {
        DecadeSelector::All => "All decades".to_string(),
        DecadeSelector::Decade(label) => label.to_string(),
    }
}

/// Timeline page state: browsing, narration status and the last export message.
pub struct TimelineVm {
    browser: TimelineBrowser,
    narration: Arc<NarrationController>,
    narration_state: NarrationState,
    assets: AssetResolver,
    export: ExportService,
    export_message: Option<String>,
}

impl TimelineVm {
    #[must_use]
    pub fn new(services: &AppServices) -> Self {
        Self {
            browser: services.browser(),
            narration: services.narration(),
            narration_state: NarrationState::default(),
            assets: services.assets().clone(),
            export: services.export(),
            export_message: None,
        }
    }

    /// Apply a browsing intent. The shown milestone may change, so any
    /// narration is stopped and its status cleared.
    pub fn dispatch(&mut self, intent: TimelineIntent) {
        match intent {
            TimelineIntent::SelectDecade(decade) => self.browser.set_decade(decade),
            TimelineIntent::Search(query) => self.browser.set_query(query),
            TimelineIntent::ClearFilters => self.browser.clear_filters(),
            TimelineIntent::Select(position) => {
                self.browser.select(position);
            }
            TimelineIntent::Next => {
                self.browser.next();
            }
            TimelineIntent::Prev => {
                self.browser.prev();
            }
        }
        self.narration_state.reset(&self.narration);
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.browser.filter_state().query
    }

    #[must_use]
    pub fn decade(&self) -> DecadeSelector {
        self.browser.filter_state().decade
    }

    #[must_use]
    pub fn decade_options(&self) -> Vec<DecadeOptionVm> {
        self.browser
            .decade_options()
            .into_iter()
            .map(|selector| DecadeOptionVm {
                selector,
                label: decade_option_label(selector),
            })
            .collect()
    }

    #[must_use]
    pub fn rows(&self) -> Vec<MilestoneRowVm> {
        let selected = self.browser.selected_index();
        self.browser
            .visible()
            .into_iter()
            .enumerate()
            .map(|(position, milestone)| MilestoneRowVm {
                position,
                label: format!("{} — {}", milestone.year(), milestone.title()),
                selected: selected == Some(position),
            })
            .collect()
    }

    #[must_use]
    pub fn detail(&self) -> MilestoneDetailVm {
        self.browser.current().map_or_else(MilestoneDetailVm::no_results, |milestone| {
            MilestoneDetailVm::from_milestone(milestone, &self.assets)
        })
    }

    #[must_use]
    pub fn narration_available(&self) -> bool {
        self.narration.is_available()
    }

    #[must_use]
    pub fn narration_status(&self) -> NarrationStatus {
        self.narration_state.status()
    }

    /// Narrate the selected milestone. `None` when nothing is selected or
    /// narration is unavailable.
    pub fn speak_current<F>(&mut self, on_complete: F) -> Option<NarrationTicket>
    where
        F: FnOnce() + Send + 'static,
    {
        let text = self.browser.current()?.narration_text();
        self.narration_state.speak(&self.narration, text, on_complete)
    }

    pub fn narration_finished(&mut self, ticket: NarrationTicket) {
        self.narration_state.finished(ticket);
    }

    pub fn narration_ended(&mut self, ticket: NarrationTicket) {
        self.narration_state.ended(ticket);
    }

    pub fn stop_narration(&mut self) {
        self.narration_state.stop(&self.narration);
    }

    #[must_use]
    pub fn export_message(&self) -> Option<&str> {
        self.export_message.as_deref()
    }

    /// Export the visible milestones, asking `picker` for the destination.
    ///
    /// An empty view is reported without opening the picker; cancelling the
    /// picker leaves the previous message untouched.
    pub fn export_with(&mut self, format: ExportFormat, picker: &dyn FilePicker) {
        let view = self.browser.visible();
        if view.is_empty() {
            self.export_message = Some(export_message(&Err(services::ExportError::NothingToExport)));
            return;
        }
        let Some(path) = picker.save_path(format) else {
            return;
        };
        let result = self.export.export(format, &view, &path);
        if let Err(err) = &result {
            tracing::warn!(error = %err, "export failed");
        }
        self.export_message = Some(export_message(&result));
    }
}
