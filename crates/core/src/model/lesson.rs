use serde::{Deserialize, Serialize};

use super::ContentError;
use super::ids::{LessonId, TabId};

/// A study document shown in the lesson modal.
///
/// `content` is Markdown; the UI renders and sanitizes it before display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LessonRecord")]
pub struct Lesson {
    id: LessonId,
    tab: TabId,
    title: String,
    summary: String,
    content: String,
}

#[derive(Deserialize)]
struct LessonRecord {
    id: LessonId,
    tab: TabId,
    title: String,
    #[serde(default)]
    summary: String,
    content: String,
}

impl TryFrom<LessonRecord> for Lesson {
    type Error = ContentError;

    fn try_from(record: LessonRecord) -> Result<Self, Self::Error> {
        Lesson::new(record.id, record.tab, record.title, record.summary, record.content)
    }
}

impl Lesson {
    /// # Errors
    ///
    /// Returns `ContentError::EmptyTitle` if the title is blank.
    pub fn new(
        id: LessonId,
        tab: TabId,
        title: impl Into<String>,
        summary: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ContentError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ContentError::EmptyTitle);
        }
        Ok(Self {
            id,
            tab,
            title,
            summary: summary.into(),
            content: content.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn tab(&self) -> &TabId {
        &self.tab
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A tab in the lesson browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonTab {
    pub id: TabId,
    pub label: String,
}

/// Immutable, ordered set of lessons and the tabs that group them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonLibrary {
    tabs: Vec<LessonTab>,
    lessons: Vec<Lesson>,
}

impl LessonLibrary {
    /// # Errors
    ///
    /// Returns `ContentError::Duplicate` if two lessons or two tabs share an id.
    pub fn new(tabs: Vec<LessonTab>, lessons: Vec<Lesson>) -> Result<Self, ContentError> {
        for (idx, tab) in tabs.iter().enumerate() {
            if tabs[..idx].iter().any(|other| other.id == tab.id) {
                return Err(ContentError::Duplicate {
                    id: tab.id.to_string(),
                });
            }
        }
        for (idx, lesson) in lessons.iter().enumerate() {
            if lessons[..idx].iter().any(|other| other.id == lesson.id) {
                return Err(ContentError::Duplicate {
                    id: lesson.id.to_string(),
                });
            }
        }
        Ok(Self { tabs, lessons })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id.as_str() == id)
    }

    #[must_use]
    pub fn tabs(&self) -> &[LessonTab] {
        &self.tabs
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Lessons shown in the given tab pane, in authoring order.
    pub fn in_tab<'a>(&'a self, tab: &'a TabId) -> impl Iterator<Item = &'a Lesson> + 'a {
        self.lessons.iter().filter(move |lesson| &lesson.tab == tab)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: &str, tab: &str) -> Lesson {
        Lesson::new(
            LessonId::new(id).unwrap(),
            TabId::new(tab).unwrap(),
            format!("Lesson {id}"),
            "",
            "# Body",
        )
        .unwrap()
    }

    #[test]
    fn library_finds_lessons_and_groups_by_tab() {
        let grammar = TabId::new("grammar").unwrap();
        let library = LessonLibrary::new(
            vec![LessonTab {
                id: grammar.clone(),
                label: "Grammar".into(),
            }],
            vec![lesson("tenses", "grammar"), lesson("idioms", "vocabulary")],
        )
        .unwrap();

        assert_eq!(library.get("tenses").map(Lesson::title), Some("Lesson tenses"));
        assert!(library.get("missing").is_none());
        assert_eq!(library.in_tab(&grammar).count(), 1);
    }

    #[test]
    fn duplicate_lessons_are_rejected() {
        let err = LessonLibrary::new(vec![], vec![lesson("a", "t"), lesson("a", "t")]).unwrap_err();
        assert_eq!(err, ContentError::Duplicate { id: "a".into() });
    }

    #[test]
    fn lesson_json_requires_title() {
        let json = r#"{"id":"x","tab":"t","title":" ","content":"hi"}"#;
        assert!(serde_json::from_str::<Lesson>(json).is_err());

        let json = r#"{"id":"x","tab":"t","title":"Hi","content":"hi"}"#;
        let lesson: Lesson = serde_json::from_str(json).unwrap();
        assert_eq!(lesson.summary(), "");
    }
}
