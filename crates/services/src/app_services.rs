use std::sync::Arc;

use timeline_core::Catalog;
use timeline_core::model::{AppSettings, AppSettingsDraft};

use crate::Clock;
use crate::assets::AssetResolver;
use crate::error::{AppServicesError, QuizError};
use crate::export_service::ExportService;
use crate::narration::{CommandSpeech, NarrationController, SpeechSettings};
use crate::quiz::QuizSession;
use crate::timeline_service::TimelineBrowser;

/// Assembles app-facing services around one shared catalog.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    settings: AppSettings,
    catalog: Arc<Catalog>,
    narration: Arc<NarrationController>,
    export: ExportService,
    assets: AssetResolver,
}

impl AppServices {
    /// Build services with the platform synthesizer when narration is enabled.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Settings` if the draft does not validate.
    pub fn new(
        catalog: Catalog,
        draft: AppSettingsDraft,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let settings = draft.validate()?;
        let narration = if settings.narration_enabled() {
            NarrationController::from_init(CommandSpeech::detect(SpeechSettings::from(&settings)))
        } else {
            tracing::info!("narration disabled by settings");
            NarrationController::unavailable()
        };
        Ok(Self::with_narration(catalog, settings, clock, narration))
    }

    /// Build services around an already constructed narration controller.
    #[must_use]
    pub fn with_narration(
        catalog: Catalog,
        settings: AppSettings,
        clock: Clock,
        narration: NarrationController,
    ) -> Self {
        let assets = AssetResolver::new(settings.assets_dir());
        Self {
            clock,
            settings,
            catalog: Arc::new(catalog),
            narration: Arc::new(narration),
            export: ExportService::new(),
            assets,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn narration(&self) -> Arc<NarrationController> {
        Arc::clone(&self.narration)
    }

    #[must_use]
    pub fn export(&self) -> ExportService {
        self.export
    }

    #[must_use]
    pub fn assets(&self) -> &AssetResolver {
        &self.assets
    }

    /// Fresh browsing state over the shared catalog.
    #[must_use]
    pub fn browser(&self) -> TimelineBrowser {
        TimelineBrowser::new(self.catalog())
    }

    /// Start a quiz over the catalog's question bank.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyBank` if the catalog has no questions.
    pub fn start_quiz(&self) -> Result<QuizSession, QuizError> {
        QuizSession::start(self.catalog.quiz(), self.clock)
    }
}
