use dioxus::prelude::*;
use tokio::sync::oneshot;

use services::ExportFormat;

use crate::context::AppContext;
use crate::vm::{TimelineIntent, TimelineVm};

#[component]
pub fn TimelineView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_signal(|| TimelineVm::new(ctx.services()));
    let picker = ctx.file_picker();

    let narration = ctx.narration();
    use_drop(move || narration.stop());

    let (query, decade_options, selected_decade, rows, detail) = {
        let vm = vm.read();
        let selected = vm.decade();
        let options = vm.decade_options();
        let selected_decade = options
            .iter()
            .position(|option| option.selector == selected)
            .unwrap_or(0);
        (vm.query().to_string(), options, selected_decade, vm.rows(), vm.detail())
    };
    let options_for_change = decade_options.clone();
    let narration_available = vm.read().narration_available();
    let status = vm.read().narration_status();
    let export_message = vm.read().export_message().map(str::to_string);
    let has_rows = !rows.is_empty();

    let speak = move |_: Event<MouseData>| {
        let (tx, rx) = oneshot::channel::<()>();
        let ticket = vm.write().speak_current(move || {
            let _ = tx.send(());
        });
        if let Some(ticket) = ticket {
            spawn(async move {
                match rx.await {
                    Ok(()) => vm.write().narration_finished(ticket),
                    Err(_) => vm.write().narration_ended(ticket),
                }
            });
        }
    };

    let csv_picker = picker.clone();
    let json_picker = picker;

    rsx! {
        div { class: "page timeline",
            section { class: "filters",
                label { r#for: "decade", "Decade" }
                select {
                    id: "decade",
                    value: "{selected_decade}",
                    onchange: move |evt| {
                        let chosen = evt
                            .value()
                            .parse::<usize>()
                            .ok()
                            .and_then(|index| options_for_change.get(index))
                            .map(|option| option.selector);
                        if let Some(selector) = chosen {
                            vm.write().dispatch(TimelineIntent::SelectDecade(selector));
                        }
                    },
                    for (index, option) in decade_options.iter().enumerate() {
                        option {
                            key: "{index}",
                            value: "{index}",
                            selected: index == selected_decade,
                            "{option.label}"
                        }
                    }
                }
                input {
                    r#type: "search",
                    placeholder: "Search milestones",
                    value: "{query}",
                    oninput: move |evt| vm.write().dispatch(TimelineIntent::Search(evt.value())),
                }
                button {
                    id: "timeline-clear",
                    onclick: move |_| vm.write().dispatch(TimelineIntent::ClearFilters),
                    "Clear filters"
                }
            }
            section { class: "milestones",
                if has_rows {
                    ul { class: "milestone-list",
                        for row in rows {
                            li {
                                key: "{row.position}",
                                class: if row.selected { "selected" } else { "" },
                                onclick: move |_| vm.write().dispatch(TimelineIntent::Select(row.position)),
                                "{row.label}"
                            }
                        }
                    }
                } else {
                    p { class: "empty", "No milestones match the current filters." }
                }
                div { class: "nav",
                    button {
                        disabled: !has_rows,
                        onclick: move |_| vm.write().dispatch(TimelineIntent::Prev),
                        "Previous"
                    }
                    button {
                        disabled: !has_rows,
                        onclick: move |_| vm.write().dispatch(TimelineIntent::Next),
                        "Next"
                    }
                }
            }
            article { class: "detail",
                h2 { "{detail.title}" }
                p { class: "meta", "{detail.meta}" }
                if let Some(image) = detail.image.as_ref() {
                    img { src: "{image.display()}", alt: "{detail.title}" }
                }
                p { class: "body", "{detail.body}" }
                div { class: "narration",
                    button {
                        id: "timeline-speak",
                        disabled: !narration_available || !has_rows,
                        onclick: speak,
                        "Read aloud"
                    }
                    button {
                        id: "timeline-stop",
                        disabled: !narration_available,
                        onclick: move |_| vm.write().stop_narration(),
                        "Stop"
                    }
                    if !narration_available {
                        span { class: "hint", "Speech is not available on this system." }
                    }
                    span { class: "status", "{status.label()}" }
                }
                div { class: "export",
                    button {
                        id: "timeline-export-csv",
                        onclick: move |_| vm.write().export_with(ExportFormat::Tabular, csv_picker.as_ref()),
                        "Export CSV"
                    }
                    button {
                        id: "timeline-export-json",
                        onclick: move |_| vm.write().export_with(ExportFormat::Structured, json_picker.as_ref()),
                        "Export JSON"
                    }
                    if let Some(message) = export_message {
                        p { class: "export-message", "{message}" }
                    }
                }
            }
        }
    }
}
