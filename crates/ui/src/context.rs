use std::sync::Arc;

use services::{AppServices, NarrationController};
use timeline_core::Catalog;

use crate::platform::FilePickerRef;

pub trait UiApp: Send + Sync {
    fn services(&self) -> AppServices;
    fn file_picker(&self) -> FilePickerRef;
}

#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
    file_picker: FilePickerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            services: app.services(),
            file_picker: app.file_picker(),
        }
    }

    #[must_use]
    pub fn services(&self) -> &AppServices {
        &self.services
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    #[must_use]
    pub fn narration(&self) -> Arc<NarrationController> {
        self.services.narration()
    }

    #[must_use]
    pub fn file_picker(&self) -> FilePickerRef {
        Arc::clone(&self.file_picker)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
