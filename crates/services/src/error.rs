//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("unknown quiz category: {0}")]
    UnknownCategory(String),
    #[error("no quiz in progress")]
    NotInProgress,
    #[error("option {index} is out of range for {count} options")]
    OptionOutOfRange { index: usize, count: usize },
}

/// Errors emitted by `LessonModal`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("unknown lesson: {0}")]
    UnknownLesson(String),
}
