use dioxus::prelude::*;
use lingo_services::Region;

use super::super::actions::SiteActions;

#[component]
pub fn HeroSection() -> Element {
    let actions = use_context::<SiteActions>();
    let actions_for_lessons = actions.clone();
    let actions_for_quizzes = actions.clone();

    rsx! {
        section {
            id: "home",
            class: "hero",
            onmounted: actions.on_mounted(Region::section("home")),
            div { class: "hero-content",
                h1 { class: "hero-title", "Speak English with confidence" }
                p { class: "hero-subtitle",
                    "Short lessons, everyday vocabulary and quick quizzes that show you what to review next."
                }
                div { class: "hero-buttons",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| actions_for_lessons.scroll_to_section("lessons"),
                        "Start learning"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| actions_for_quizzes.scroll_to_section("quizzes"),
                        "Take a quiz"
                    }
                }
            }
        }
    }
}
