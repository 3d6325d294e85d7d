use lingo_core::model::{Lesson, LessonLibrary};

use super::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub reveal_index: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabPaneVm {
    pub id: String,
    pub label: String,
    pub lessons: Vec<LessonCardVm>,
}

/// One pane per tab, cards in library order.
///
/// Reveal indices are handed out in page order starting at `first_reveal_index`.
#[must_use]
pub fn map_tab_panes(library: &LessonLibrary, first_reveal_index: usize) -> Vec<TabPaneVm> {
    let mut next_index = first_reveal_index;
    library
        .tabs()
        .iter()
        .map(|tab| {
            let lessons = library
                .in_tab(&tab.id)
                .map(|lesson| {
                    let card = LessonCardVm {
                        id: lesson.id().as_str().to_owned(),
                        title: lesson.title().to_owned(),
                        summary: lesson.summary().to_owned(),
                        reveal_index: next_index,
                    };
                    next_index += 1;
                    card
                })
                .collect();
            TabPaneVm {
                id: tab.id.as_str().to_owned(),
                label: tab.label.clone(),
                lessons,
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonDetailVm {
    pub title: String,
    pub body_html: String,
}

#[must_use]
pub fn map_lesson_detail(lesson: &Lesson) -> LessonDetailVm {
    LessonDetailVm {
        title: lesson.title().to_owned(),
        body_html: markdown_to_html(lesson.content()),
    }
}
