use std::path::PathBuf;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, Clock, ExportFormat, NarrationController};
use timeline_core::Catalog;
use timeline_core::model::AppSettings;
use timeline_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::platform::{FilePicker, FilePickerRef};
use crate::views::{ErasView, QuizView, TimelineView};

struct CancelledPicker;

impl FilePicker for CancelledPicker {
    fn save_path(&self, _format: ExportFormat) -> Option<PathBuf> {
        None
    }
}

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn file_picker(&self) -> FilePickerRef {
        Arc::new(CancelledPicker)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Timeline,
    Eras,
    Quiz,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Timeline => rsx! { TimelineView {} },
        ViewKind::Eras => rsx! { ErasView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, catalog: Catalog) -> ViewHarness {
    let services = AppServices::with_narration(
        catalog,
        AppSettings::default(),
        Clock::fixed(fixed_now()),
        NarrationController::unavailable(),
    );
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { services }),
            view,
        },
    );
    ViewHarness { dom }
}
