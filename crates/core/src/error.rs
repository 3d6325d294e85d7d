use thiserror::Error;

use crate::model::{ContentError, SettingsError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
