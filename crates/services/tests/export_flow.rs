use std::sync::Arc;

use services::{ExportError, ExportRecord, ExportService, TimelineBrowser};
use timeline_core::{Catalog, DecadeSelector};

fn browser() -> TimelineBrowser {
    TimelineBrowser::new(Arc::new(Catalog::builtin()))
}

#[test]
fn structured_export_round_trips_the_visible_subset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timeline.json");
    let mut browser = browser();
    browser.set_query("shader");

    let summary = ExportService::new()
        .export_structured(&browser.visible(), &path)
        .unwrap();
    assert_eq!(summary.records, 2);
    assert_eq!(summary.path, path);

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<ExportRecord> = serde_json::from_str(&raw).unwrap();
    let expected: Vec<ExportRecord> = browser
        .visible()
        .into_iter()
        .map(ExportRecord::from)
        .collect();
    assert_eq!(parsed, expected);
    assert_eq!(parsed[0].tags, ["GPU", "shaders"]);
}

#[test]
fn tabular_export_reads_back_with_semicolon_tags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timeline.csv");
    let mut browser = browser();
    browser.set_decade(DecadeSelector::Decade("1960s".parse().unwrap()));

    ExportService::new()
        .export_tabular(&browser.visible(), &path)
        .unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    // Sketchpad's description lists "selección, arrastre, zoom", so the field is quoted.
    assert!(raw.contains(",\"Sistema pionero CAD con lápiz óptico: selección, arrastre, zoom"));

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        ["year", "title", "description", "tags"]
    );
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    let years: Vec<&str> = rows.iter().map(|row| &row[0]).collect();
    assert_eq!(years, ["1963", "1968"]);
    assert_eq!(&rows[0][3], "CAD;Sketchpad;interacción");
    for (row, milestone) in rows.iter().zip(browser.visible()) {
        assert!(milestone.description().contains(", "));
        assert_eq!(&row[1], milestone.title());
        assert_eq!(&row[2], milestone.description());
    }
}

#[test]
fn tabular_export_of_1990s_keeps_year_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nineties.csv");
    let mut browser = browser();
    browser.set_decade(DecadeSelector::Decade("1990s".parse().unwrap()));

    let summary = ExportService::new()
        .export_tabular(&browser.visible(), &path)
        .unwrap();
    assert_eq!(summary.records, 3);

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let years: Vec<String> = reader
        .records()
        .map(|row| row.unwrap()[0].to_string())
        .collect();
    assert_eq!(years, ["1992", "1995", "1999"]);
}

#[test]
fn empty_view_reports_nothing_to_export_and_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    let mut browser = browser();
    browser.set_query("zzz");

    let err = ExportService::new()
        .export_tabular(&browser.visible(), &path)
        .unwrap_err();
    assert!(matches!(err, ExportError::NothingToExport));
    let err = ExportService::new()
        .export_structured(&browser.visible(), &path)
        .unwrap_err();
    assert!(matches!(err, ExportError::NothingToExport));
    assert!(!path.exists());
}

#[test]
fn unwritable_destination_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("timeline.json");
    let browser = browser();

    let err = ExportService::new()
        .export_structured(&browser.visible(), &path)
        .unwrap_err();
    match err {
        ExportError::Io { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(browser.len(), 13);
}
