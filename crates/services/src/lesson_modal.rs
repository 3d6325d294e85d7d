use lingo_core::model::{Lesson, LessonId, LessonLibrary};

use crate::error::LessonError;

/// Overlays that can hold the page scroll lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Lesson,
    Quiz,
}

/// Background scrolling is disabled while any overlay holds the lock.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Vec<Overlay>,
}

impl ScrollLock {
    /// Returns `true` when this call locked a previously scrollable page.
    pub fn acquire(&mut self, overlay: Overlay) -> bool {
        if self.holders.contains(&overlay) {
            return false;
        }
        self.holders.push(overlay);
        self.holders.len() == 1
    }

    /// Returns `true` when this call restored scrolling.
    pub fn release(&mut self, overlay: Overlay) -> bool {
        let before = self.holders.len();
        self.holders.retain(|held| *held != overlay);
        before > 0 && self.holders.is_empty()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }
}

/// Which lesson, if any, the study-material modal is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonModal {
    open: Option<LessonId>,
}

impl LessonModal {
    /// Opens the modal on `id`, replacing whatever was shown.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::UnknownLesson` and leaves the modal untouched if
    /// `id` is not in the library.
    pub fn open<'a>(
        &mut self,
        library: &'a LessonLibrary,
        id: &str,
    ) -> Result<&'a Lesson, LessonError> {
        let lesson = library
            .get(id)
            .ok_or_else(|| LessonError::UnknownLesson(id.to_owned()))?;
        self.open = Some(lesson.id().clone());
        Ok(lesson)
    }

    /// Returns whether the modal was open. Closing a closed modal is a no-op.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    #[must_use]
    pub fn current(&self) -> Option<&LessonId> {
        self.open.as_ref()
    }
}
