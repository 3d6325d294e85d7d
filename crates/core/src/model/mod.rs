mod ids;
mod lesson;
mod quiz;
mod settings;

pub use ids::{LessonId, QuizCategory, TabId};
pub use lesson::{Lesson, LessonLibrary, LessonTab};
pub use quiz::{Question, QuizBank, QuizCatalog};
pub use settings::{SettingsError, SiteSettings};

use thiserror::Error;

/// Validation failures for hand-authored site content.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("identifier cannot be empty")]
    EmptyId,

    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("question needs at least two options, got {count}")]
    TooFewOptions { count: usize },

    #[error("correct option {index} is out of range for {count} options")]
    CorrectOptionOutOfRange { index: usize, count: usize },

    #[error("quiz bank {category} has no questions")]
    EmptyBank { category: String },

    #[error("duplicate identifier: {id}")]
    Duplicate { id: String },
}
