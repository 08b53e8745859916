use std::path::PathBuf;
use std::sync::Arc;

use services::ExportFormat;

mod dialog;

/// Asks the user where to save an export. `None` means the user cancelled.
pub trait FilePicker: Send + Sync {
    fn save_path(&self, format: ExportFormat) -> Option<PathBuf>;
}

pub type FilePickerRef = Arc<dyn FilePicker>;

pub use dialog::DialogFilePicker;
