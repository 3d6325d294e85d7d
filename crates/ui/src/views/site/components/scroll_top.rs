use dioxus::prelude::*;
use lingo_services::Region;

use super::super::actions::SiteActions;

#[component]
pub fn ScrollTopButton() -> Element {
    let actions = use_context::<SiteActions>();
    let visible = actions.state().scroll_top.read().is_visible();
    let class = if visible { "scroll-top visible" } else { "scroll-top" };
    let actions_for_click = actions.clone();

    rsx! {
        button {
            id: "scroll-top",
            class: "{class}",
            r#type: "button",
            aria_label: "Scroll to top",
            onmounted: actions.on_mounted(Region::ScrollTopButton),
            onclick: move |_| actions_for_click.scroll_to_top(),
            "↑"
        }
    }
}
