use dioxus::prelude::*;
use lingo_services::Region;
use lingo_services::delegate::LESSON_MODAL_ID;

use crate::vm::map_lesson_detail;

use super::super::actions::SiteActions;

#[component]
pub fn LessonModalView() -> Element {
    let actions = use_context::<SiteActions>();
    let state = actions.state();
    let library = actions.context().content().shared_lessons();
    let lesson = state.lesson;

    let detail = use_memo(move || {
        lesson
            .read()
            .current()
            .and_then(|id| library.get(id.as_str()))
            .map(map_lesson_detail)
    });
    let visible = (state.lesson_visible)();
    let class = if visible { "modal show" } else { "modal" };
    let display = if visible { "flex" } else { "none" };
    let hidden = !visible;
    let actions_for_close = actions.clone();

    rsx! {
        div {
            id: LESSON_MODAL_ID,
            class: "{class}",
            style: "display: {display}",
            role: "dialog",
            aria_modal: "true",
            aria_hidden: "{hidden}",
            div { class: "modal-content",
                button {
                    class: "modal-close",
                    r#type: "button",
                    aria_label: "Close lesson",
                    onmounted: actions.on_mounted(Region::LessonModalClose),
                    onclick: move |_| actions_for_close.close_lesson_modal(),
                    "×"
                }
                if let Some(detail) = detail() {
                    h2 { class: "modal-title", "{detail.title}" }
                    div { class: "lesson-body", dangerous_inner_html: "{detail.body_html}" }
                }
            }
        }
    }
}
