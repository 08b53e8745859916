use timeline_core::Catalog;

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn timeline_view_smoke_renders_list_and_detail() {
    let mut harness = setup_view_harness(ViewKind::Timeline, Catalog::builtin());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("All decades"), "missing decade filter in {html}");
    assert!(html.contains("1963 — Sketchpad (Ivan Sutherland)"), "missing row in {html}");
    assert!(
        html.contains("Pantallas CRT en investigación"),
        "missing first milestone detail in {html}"
    );
    assert!(html.contains("Year: 1950"), "missing meta line in {html}");
    assert!(
        html.contains("Speech is not available on this system."),
        "missing narration hint in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn timeline_view_smoke_renders_empty_catalog() {
    let mut harness = setup_view_harness(ViewKind::Timeline, Catalog::new(vec![], vec![], vec![]));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("No results"), "missing empty detail in {html}");
    assert!(
        html.contains("No milestones match the current filters."),
        "missing empty list message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn eras_view_smoke_renders_first_era() {
    let mut harness = setup_view_harness(ViewKind::Eras, Catalog::builtin());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("1950-1960"), "missing era tab in {html}");
    assert!(html.contains("2010 en adelante"), "missing last era tab in {html}");
    assert!(html.contains("muy primitivos"), "missing era text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_starts_idle() {
    let mut harness = setup_view_harness(ViewKind::Quiz, Catalog::builtin());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Start quiz"), "missing start button in {html}");
    assert!(!html.contains("Question 1 of"), "quiz should not be running in {html}");
}
