use services::{ExportError, ExportSummary};

/// User-facing message for an export attempt.
#[must_use]
pub fn export_message(result: &Result<ExportSummary, ExportError>) -> String {
    match result {
        Ok(summary) => format!(
            "Saved {} milestones to {}",
            summary.records,
            summary.path.display()
        ),
        Err(ExportError::NothingToExport) => "Nothing to export.".to_string(),
        Err(err) => format!("Could not save the file: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::ExportFormat;
    use std::path::PathBuf;

    #[test]
    fn messages_distinguish_outcomes() {
        let ok = Ok(ExportSummary {
            format: ExportFormat::Tabular,
            path: PathBuf::from("out.csv"),
            records: 3,
        });
        assert_eq!(export_message(&ok), "Saved 3 milestones to out.csv");
        assert_eq!(
            export_message(&Err(ExportError::NothingToExport)),
            "Nothing to export."
        );
        let io = Err(ExportError::Io {
            path: PathBuf::from("/nope/out.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        });
        assert!(export_message(&io).starts_with("Could not save the file: failed to write /nope/out.csv"));
    }
}
