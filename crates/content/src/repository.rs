use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use lingo_core::model::{Lesson, LessonLibrary, LessonTab, QuizBank, QuizCatalog};

use crate::error::ContentSourceError;

const EMBEDDED_LESSONS: &str = include_str!("../data/lessons.json");
const EMBEDDED_QUIZZES: &str = include_str!("../data/quizzes.json");

/// File names expected inside a content directory.
pub const LESSONS_FILE: &str = "lessons.json";
pub const QUIZZES_FILE: &str = "quizzes.json";

/// Read-only lesson and quiz data the site is built from.
///
/// Cheap to clone; both dictionaries are shared.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    lessons: Arc<LessonLibrary>,
    quizzes: Arc<QuizCatalog>,
}

impl SiteContent {
    #[must_use]
    pub fn new(lessons: LessonLibrary, quizzes: QuizCatalog) -> Self {
        Self {
            lessons: Arc::new(lessons),
            quizzes: Arc::new(quizzes),
        }
    }

    #[must_use]
    pub fn lessons(&self) -> &LessonLibrary {
        &self.lessons
    }

    #[must_use]
    pub fn quizzes(&self) -> &QuizCatalog {
        &self.quizzes
    }

    #[must_use]
    pub fn shared_lessons(&self) -> Arc<LessonLibrary> {
        Arc::clone(&self.lessons)
    }

    #[must_use]
    pub fn shared_quizzes(&self) -> Arc<QuizCatalog> {
        Arc::clone(&self.quizzes)
    }
}

/// A source of site content, loaded once at startup.
pub trait ContentRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `ContentSourceError` if the source cannot be read or fails validation.
    fn load(&self) -> Result<SiteContent, ContentSourceError>;
}

#[derive(Deserialize)]
struct LessonsDocument {
    tabs: Vec<LessonTab>,
    lessons: Vec<Lesson>,
}

#[derive(Deserialize)]
struct QuizzesDocument {
    banks: Vec<QuizBank>,
}

fn parse(lessons: &str, quizzes: &str) -> Result<SiteContent, ContentSourceError> {
    let lessons: LessonsDocument =
        serde_json::from_str(lessons).map_err(|source| ContentSourceError::Json {
            document: LESSONS_FILE,
            source,
        })?;
    let quizzes: QuizzesDocument =
        serde_json::from_str(quizzes).map_err(|source| ContentSourceError::Json {
            document: QUIZZES_FILE,
            source,
        })?;

    Ok(SiteContent::new(
        LessonLibrary::new(lessons.tabs, lessons.lessons)?,
        QuizCatalog::new(quizzes.banks)?,
    ))
}

/// The content set compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedContent;

impl ContentRepository for EmbeddedContent {
    fn load(&self) -> Result<SiteContent, ContentSourceError> {
        parse(EMBEDDED_LESSONS, EMBEDDED_QUIZZES)
    }
}

/// Loads `lessons.json` and `quizzes.json` from a directory.
#[derive(Debug, Clone)]
pub struct DirectoryContent {
    root: PathBuf,
}

impl DirectoryContent {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, name: &str) -> Result<String, ContentSourceError> {
        let path = self.root.join(name);
        std::fs::read_to_string(&path).map_err(|source| ContentSourceError::Io { path, source })
    }
}

impl ContentRepository for DirectoryContent {
    fn load(&self) -> Result<SiteContent, ContentSourceError> {
        let lessons = self.read(LESSONS_FILE)?;
        let quizzes = self.read(QUIZZES_FILE)?;
        parse(&lessons, &quizzes)
    }
}

/// Fixture repository for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContent {
    content: SiteContent,
}

impl InMemoryContent {
    #[must_use]
    pub fn new(lessons: LessonLibrary, quizzes: QuizCatalog) -> Self {
        Self {
            content: SiteContent::new(lessons, quizzes),
        }
    }
}

impl ContentRepository for InMemoryContent {
    fn load(&self) -> Result<SiteContent, ContentSourceError> {
        Ok(self.content.clone())
    }
}
