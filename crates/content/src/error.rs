use std::path::PathBuf;

use lingo_core::model::ContentError;
use thiserror::Error;

/// Errors surfaced while loading site content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentSourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {document}: {source}")]
    Json {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Invalid(#[from] ContentError),
}
