use dioxus::prelude::*;
use lingo_services::Region;

use crate::vm::{QuizCardVm, map_quiz_cards, reveal_style};

use super::super::actions::SiteActions;

#[component]
pub fn QuizzesSection() -> Element {
    let actions = use_context::<SiteActions>();
    let cards = use_hook(|| {
        let content = actions.context().content();
        map_quiz_cards(content.quizzes(), content.lessons().len())
    });

    rsx! {
        section {
            id: "quizzes",
            class: "section quizzes",
            onmounted: actions.on_mounted(Region::section("quizzes")),
            div { class: "container",
                h2 { class: "section-title", "Test yourself" }
                p { class: "section-subtitle", "Every quiz ends with a review of each answer." }
                div { class: "card-grid",
                    for card in cards {
                        QuizCard { key: "{card.category}", card }
                    }
                }
            }
        }
    }
}

#[component]
fn QuizCard(card: QuizCardVm) -> Element {
    let actions = use_context::<SiteActions>();
    let style = {
        let reveal = actions.state().reveal;
        let reveal = reveal.read();
        reveal
            .state(card.reveal_index)
            .map(|state| reveal_style(state, reveal.delay(card.reveal_index)))
            .unwrap_or_default()
    };
    let category = card.category.clone();

    rsx! {
        article {
            class: "card quiz-card",
            "data-reveal-index": "{card.reveal_index}",
            style: "{style}",
            h3 { class: "card-title", "{card.title}" }
            p { class: "card-text", "{card.description}" }
            p { class: "card-meta", "{card.question_count_label}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| actions.start_quiz(&category),
                "Start quiz"
            }
        }
    }
}
