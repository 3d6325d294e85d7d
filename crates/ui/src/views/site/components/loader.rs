use dioxus::prelude::*;
use lingo_services::{LoadingPhase, Region};

use super::super::actions::SiteActions;

#[component]
pub fn Loader() -> Element {
    let actions = use_context::<SiteActions>();
    let loading = actions.state().loading;

    let (phase, percent, status) = {
        let loading = loading.read();
        (loading.phase(), loading.percent(), loading.status().to_owned())
    };
    if phase == LoadingPhase::Done {
        return rsx! {};
    }

    let class = if phase == LoadingPhase::FadingOut {
        "loader loader--fading"
    } else {
        "loader"
    };

    rsx! {
        div { id: "loader", class: "{class}", onmounted: actions.on_mounted(Region::Loader),
            div { class: "loader-content",
                div { class: "loader-brand", "Lingo" }
                div { class: "loader-track",
                    div { class: "loader-bar", style: "width: {percent:.0}%" }
                }
                p { class: "loader-percent", "{percent:.0}%" }
                p { class: "loader-status", "{status}" }
            }
        }
    }
}
