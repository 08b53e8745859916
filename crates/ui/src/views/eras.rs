use dioxus::prelude::*;
use tokio::sync::oneshot;

use crate::context::AppContext;
use crate::vm::NarrationState;

/// Short overviews of each era, with the same narration controls as the timeline.
#[component]
pub fn ErasView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let controller = ctx.narration();
    let mut selected = use_signal(|| 0_usize);
    let mut narration = use_signal(NarrationState::default);

    let for_drop = controller.clone();
    use_drop(move || for_drop.stop());

    let eras = catalog.eras().to_vec();
    let current = eras.get(selected()).cloned();
    let available = controller.is_available();
    let status = narration.read().status();

    let select_controller = controller.clone();
    let stop_controller = controller.clone();
    let speak_text = current
        .as_ref()
        .map(|era| format!("{}. {}", era.label(), era.text()));
    let can_speak = available && speak_text.is_some();

    rsx! {
        div { class: "page eras",
            h2 { "Eras of computer graphics" }
            div { class: "era-tabs",
                for (index, era) in eras.iter().enumerate() {
                    button {
                        key: "{index}",
                        class: if index == selected() { "active" } else { "" },
                        onclick: {
                            let controller = select_controller.clone();
                            move |_: Event<MouseData>| {
                                narration.write().reset(&controller);
                                selected.set(index);
                            }
                        },
                        "{era.label()}"
                    }
                }
            }
            match current {
                Some(era) => rsx! {
                    article { class: "era",
                        h3 { "{era.label()}" }
                        p { "{era.text()}" }
                    }
                },
                None => rsx! {
                    p { class: "empty", "No era overviews available." }
                },
            }
            div { class: "narration",
                button {
                    disabled: !can_speak,
                    onclick: move |_| {
                        let Some(text) = speak_text.clone() else {
                            return;
                        };
                        let (tx, rx) = oneshot::channel::<()>();
                        let ticket = narration.write().speak(&controller, text, move || {
                            let _ = tx.send(());
                        });
                        if let Some(ticket) = ticket {
                            spawn(async move {
                                match rx.await {
                                    Ok(()) => narration.write().finished(ticket),
                                    Err(_) => narration.write().ended(ticket),
                                }
                            });
                        }
                    },
                    "Read aloud"
                }
                button {
                    disabled: !available,
                    onclick: move |_| narration.write().stop(&stop_controller),
                    "Stop"
                }
                span { class: "status", "{status.label()}" }
            }
        }
    }
}
