#![forbid(unsafe_code)]

pub mod error;
pub mod repository;

pub use error::ContentSourceError;
pub use repository::{
    ContentRepository, DirectoryContent, EmbeddedContent, InMemoryContent, SiteContent,
};
