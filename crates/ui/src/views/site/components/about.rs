use dioxus::prelude::*;
use lingo_services::Region;

use crate::vm::reveal_style;

use super::super::actions::SiteActions;
use super::super::state::FEATURE_COUNT;

const FEATURES: [(&str, &str); FEATURE_COUNT] = [
    (
        "Bite-sized lessons",
        "Each lesson fits in a coffee break and ends with examples you can reuse.",
    ),
    (
        "Instant feedback",
        "Quizzes score you on the spot and explain every answer.",
    ),
    (
        "Real conversations",
        "Vocabulary and phrases chosen from everyday situations.",
    ),
];

#[component]
pub fn AboutSection() -> Element {
    let actions = use_context::<SiteActions>();
    let first_index = {
        let content = actions.context().content();
        content.lessons().len() + content.quizzes().banks().len()
    };
    let features: Vec<(usize, &str, &str, String)> = {
        let reveal = actions.state().reveal;
        let reveal = reveal.read();
        FEATURES
            .iter()
            .enumerate()
            .map(|(offset, (title, text))| {
                let index = first_index + offset;
                let style = reveal
                    .state(index)
                    .map(|state| reveal_style(state, reveal.delay(index)))
                    .unwrap_or_default();
                (index, *title, *text, style)
            })
            .collect()
    };

    rsx! {
        section {
            id: "about",
            class: "section about",
            onmounted: actions.on_mounted(Region::section("about")),
            div { class: "container",
                h2 { class: "section-title", "Why learn with us" }
                div { class: "card-grid",
                    for (index, title, text, style) in features {
                        article {
                            key: "{index}",
                            class: "card feature-card",
                            "data-reveal-index": "{index}",
                            style: "{style}",
                            h3 { class: "card-title", "{title}" }
                            p { class: "card-text", "{text}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "footer",
            p { "Lingo · practice a little every day" }
        }
    }
}
