use thiserror::Error;

use crate::model::{AppSettingsError, DecadeLabelError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    DecadeLabel(#[from] DecadeLabelError),
    #[error(transparent)]
    Settings(#[from] AppSettingsError),
}
