mod lesson_vm;
mod markdown_vm;
mod quiz_vm;
mod reveal_vm;

pub use lesson_vm::{LessonCardVm, LessonDetailVm, TabPaneVm, map_lesson_detail, map_tab_panes};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use quiz_vm::{
    OptionVm, QuestionVm, QuizCardVm, ResultsVm, ReviewItemVm, map_question_view, map_quiz_cards,
    map_results_view, option_letter,
};
pub use reveal_vm::reveal_style;
