//! Tabular (CSV) and structured (JSON) export of the visible milestones.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use timeline_core::model::Milestone;

use crate::error::ExportError;

/// Separator used inside the tabular `tags` column.
pub const TAG_SEPARATOR: &str = ";";

const TABULAR_HEADER: [&str; 4] = ["year", "title", "description", "tags"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Tabular,
    Structured,
}

impl ExportFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Tabular => "csv",
            Self::Structured => "json",
        }
    }

    #[must_use]
    pub fn suggested_file_name(self) -> String {
        format!("timeline.{}", self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tabular => f.write_str("CSV"),
            Self::Structured => f.write_str("JSON"),
        }
    }
}

/// Serialized shape of one milestone in the structured export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub year: i32,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl From<&Milestone> for ExportRecord {
    fn from(milestone: &Milestone) -> Self {
        Self {
            year: milestone.year(),
            title: milestone.title().to_string(),
            description: milestone.description().to_string(),
            tags: milestone.tags().to_vec(),
        }
    }
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub records: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportService;

impl ExportService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Write `view` as CSV to `destination`.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::NothingToExport` for an empty view (no file is
    /// created) and `ExportError::Io` when the destination cannot be written.
    pub fn export_tabular(
        &self,
        view: &[&Milestone],
        destination: &Path,
    ) -> Result<ExportSummary, ExportError> {
        self.export(ExportFormat::Tabular, view, destination)
    }

    /// Write `view` as pretty-printed JSON to `destination`.
    ///
    /// # Errors
    ///
    /// Same as [`ExportService::export_tabular`].
    pub fn export_structured(
        &self,
        view: &[&Milestone],
        destination: &Path,
    ) -> Result<ExportSummary, ExportError> {
        self.export(ExportFormat::Structured, view, destination)
    }

    /// Dispatch on `format`.
    ///
    /// # Errors
    ///
    /// Same as [`ExportService::export_tabular`].
    pub fn export(
        &self,
        format: ExportFormat,
        view: &[&Milestone],
        destination: &Path,
    ) -> Result<ExportSummary, ExportError> {
        if view.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        // Encode fully before touching the destination.
        let mut buf = Vec::new();
        match format {
            ExportFormat::Tabular => write_tabular(&mut buf, view)?,
            ExportFormat::Structured => write_structured(&mut buf, view)?,
        }

        std::fs::write(destination, &buf).map_err(|source| ExportError::Io {
            path: destination.to_path_buf(),
            source,
        })?;

        tracing::info!(
            format = %format,
            path = %destination.display(),
            records = view.len(),
            "timeline exported"
        );

        Ok(ExportSummary {
            format,
            path: destination.to_path_buf(),
            records: view.len(),
        })
    }
}

/// Header row then one CSV record per milestone; tags are `;`-joined.
///
/// # Errors
///
/// Returns `ExportError::Csv` if the writer fails.
pub fn write_tabular<W: Write>(out: W, view: &[&Milestone]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(TABULAR_HEADER)?;
    for milestone in view {
        writer.write_record([
            milestone.year().to_string().as_str(),
            milestone.title(),
            milestone.description(),
            milestone.tags().join(TAG_SEPARATOR).as_str(),
        ])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// JSON array of `ExportRecord`s, two-space indented.
///
/// # Errors
///
/// Returns `ExportError::Json` if serialization fails.
pub fn write_structured<W: Write>(out: W, view: &[&Milestone]) -> Result<(), ExportError> {
    let records: Vec<ExportRecord> = view.iter().map(|milestone| ExportRecord::from(*milestone)).collect();
    serde_json::to_writer_pretty(out, &records)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quoted() -> Milestone {
        Milestone::new(
            1984,
            "GUI, \"personal\"",
            "Mac; Windows",
            vec!["GUI".to_string(), "Mac".to_string()],
            None,
        )
    }

    #[test]
    fn tabular_quotes_delimiters_and_joins_tags() {
        let milestone = quoted();
        let mut buf = Vec::new();
        write_tabular(&mut buf, &[&milestone]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "year,title,description,tags\n1984,\"GUI, \"\"personal\"\"\",Mac; Windows,GUI;Mac\n"
        );
    }

    #[test]
    fn structured_is_pretty_printed() {
        let milestone = quoted();
        let mut buf = Vec::new();
        write_structured(&mut buf, &[&milestone]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("[\n  {\n    \"year\": 1984,"));
        assert!(text.contains("\"tags\": [\n      \"GUI\",\n      \"Mac\"\n    ]"));
    }

    #[test]
    fn suggested_names_follow_format() {
        assert_eq!(ExportFormat::Tabular.suggested_file_name(), "timeline.csv");
        assert_eq!(ExportFormat::Structured.suggested_file_name(), "timeline.json");
    }
}
