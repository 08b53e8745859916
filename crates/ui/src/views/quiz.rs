use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizStage};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let services = ctx.services().clone();
    let mut stage = use_signal(QuizStage::default);
    let mut error = use_signal(|| None::<String>);

    let question = stage.read().question();
    let report = match &*stage.read() {
        QuizStage::Finished(report) => Some(report.clone()),
        _ => None,
    };
    let not_started = matches!(&*stage.read(), QuizStage::NotStarted);

    let start = move |_: Event<MouseData>| match services.start_quiz() {
        Ok(session) => {
            error.set(None);
            stage.write().start(session);
        }
        Err(err) => {
            tracing::warn!(error = %err, "quiz could not start");
            error.set(Some(err.to_string()));
        }
    };

    rsx! {
        div { class: "page quiz",
            h2 { "Quiz" }
            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }
            if not_started {
                p { "Test what you know about the history of computer graphics." }
                button { id: "quiz-start", onclick: start, "Start quiz" }
            }
            if let Some(question) = question {
                div { class: "question",
                    p { class: "progress", "{question.progress_label}" }
                    h3 { "{question.prompt}" }
                    ul { class: "options",
                        for option in question.options {
                            li {
                                key: "{option.option}",
                                button {
                                    class: if option.selected { "option selected" } else { "option" },
                                    onclick: move |_| stage.write().apply(QuizIntent::Select(option.option)),
                                    "{option.option}) {option.text}"
                                }
                            }
                        }
                    }
                    div { class: "nav",
                        button { onclick: move |_| stage.write().apply(QuizIntent::Prev), "Previous" }
                        button { onclick: move |_| stage.write().apply(QuizIntent::Next), "Next" }
                        button { id: "quiz-finish", onclick: move |_| stage.write().apply(QuizIntent::Finish), "Finish" }
                    }
                }
            }
            if let Some(report) = report {
                div { class: "report",
                    h3 { "Results" }
                    p { class: "score", "{report.score_line}" }
                    p { class: "grade", "{report.grade_label}" }
                    p { class: "elapsed", "{report.elapsed_label}" }
                    ul {
                        for (index, outcome) in report.outcomes.iter().enumerate() {
                            li {
                                key: "{index}",
                                class: if outcome.is_correct { "correct" } else { "incorrect" },
                                p { "{outcome.heading}" }
                                p { "Your answer: {outcome.your_answer}" }
                                p { "Correct answer: {outcome.correct_answer}" }
                            }
                        }
                    }
                    button { onclick: move |_| stage.write().apply(QuizIntent::Close), "Close" }
                }
            }
        }
    }
}
