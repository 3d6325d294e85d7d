mod about;
mod hero;
mod lesson_modal;
mod lessons;
mod loader;
mod navbar;
mod quiz_modal;
mod quizzes;
mod scroll_top;

pub use about::{AboutSection, SiteFooter};
pub use hero::HeroSection;
pub use lesson_modal::LessonModalView;
pub use lessons::LessonsSection;
pub use loader::Loader;
pub use navbar::Navbar;
pub use quiz_modal::QuizModalView;
pub use quizzes::QuizzesSection;
pub use scroll_top::ScrollTopButton;
