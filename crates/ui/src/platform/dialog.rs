use std::path::PathBuf;

use services::ExportFormat;

use super::FilePicker;

/// Native save dialog.
pub struct DialogFilePicker;

impl FilePicker for DialogFilePicker {
    fn save_path(&self, format: ExportFormat) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(format!("Save timeline ({format})"))
            .add_filter(format.to_string(), &[format.extension()])
            .set_file_name(format.suggested_file_name())
            .save_file()
    }
}
