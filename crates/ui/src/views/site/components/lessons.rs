use dioxus::prelude::*;
use lingo_core::model::TabId;
use lingo_services::Region;
use lingo_services::delegate::TAB_BUTTON_CLASS;

use crate::vm::{LessonCardVm, map_tab_panes, reveal_style};

use super::super::actions::SiteActions;

#[component]
pub fn LessonsSection() -> Element {
    let actions = use_context::<SiteActions>();
    let panes = use_hook(|| map_tab_panes(actions.context().content().lessons(), 0));

    let (button_classes, pane_classes): (Vec<_>, Vec<_>) = {
        let state = actions.state();
        let tabs = state.tabs.read();
        panes
            .iter()
            .map(|pane| {
                let id = TabId::new(pane.id.as_str()).ok();
                let active = id.as_ref().is_some_and(|id| tabs.is_active(id));
                let visible = id.as_ref().is_some_and(|id| tabs.is_visible(id));
                (
                    if active { format!("{TAB_BUTTON_CLASS} active") } else { TAB_BUTTON_CLASS.to_string() },
                    if visible { "tab-pane active" } else { "tab-pane" },
                )
            })
            .unzip()
    };

    rsx! {
        section {
            id: "lessons",
            class: "section lessons",
            onmounted: actions.on_mounted(Region::section("lessons")),
            div { class: "container",
                h2 { class: "section-title", "Study materials" }
                p { class: "section-subtitle", "Pick a topic and read at your own pace." }
                div { class: "tabs", onmounted: actions.on_mounted(Region::TabContainer),
                    div { class: "tab-buttons", role: "tablist",
                        for (pane, class) in panes.iter().zip(button_classes) {
                            button {
                                key: "{pane.id}",
                                class: "{class}",
                                r#type: "button",
                                role: "tab",
                                "data-tab": "{pane.id}",
                                "{pane.label}"
                            }
                        }
                    }
                    for (pane, class) in panes.iter().zip(pane_classes) {
                        div { key: "{pane.id}", id: "{pane.id}", class: "{class}", role: "tabpanel",
                            div { class: "card-grid",
                                for card in pane.lessons.iter() {
                                    LessonCard { key: "{card.id}", card: card.clone() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LessonCard(card: LessonCardVm) -> Element {
    let actions = use_context::<SiteActions>();
    let reveal = actions.state().reveal;
    let style = {
        let reveal = reveal.read();
        reveal
            .state(card.reveal_index)
            .map(|state| reveal_style(state, reveal.delay(card.reveal_index)))
            .unwrap_or_default()
    };
    let lesson_id = card.id.clone();

    rsx! {
        article {
            class: "card lesson-card",
            "data-reveal-index": "{card.reveal_index}",
            style: "{style}",
            h3 { class: "card-title", "{card.title}" }
            p { class: "card-text", "{card.summary}" }
            button {
                class: "btn btn-outline",
                r#type: "button",
                onclick: move |_| actions.open_lesson_modal(&lesson_id),
                "Read lesson"
            }
        }
    }
}
