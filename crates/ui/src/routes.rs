use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ErasView, QuizView, TimelineView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", TimelineView)] Timeline {},
        #[route("/eras", ErasView)] Eras {},
        #[route("/quiz", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Computer Graphics Timeline" }
            ul {
                li { Link { to: Route::Timeline {}, "Timeline" } }
                li { Link { to: Route::Eras {}, "Eras" } }
                li { Link { to: Route::Quiz {}, "Quiz" } }
            }
        }
    }
}
