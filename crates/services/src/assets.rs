use std::path::{Path, PathBuf};

use timeline_core::model::Milestone;

/// Resolves milestone image references against a local assets directory.
///
/// Missing files are not an error; the milestone simply has no image.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    dir: PathBuf,
}

impl AssetResolver {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn resolve(&self, image_ref: &str) -> Option<PathBuf> {
        let image_ref = image_ref.trim();
        if image_ref.is_empty() {
            return None;
        }
        let path = self.dir.join(image_ref);
        path.is_file().then_some(path)
    }

    #[must_use]
    pub fn image_for(&self, milestone: &Milestone) -> Option<PathBuf> {
        milestone.image_ref().and_then(|image| self.resolve(image))
    }
}
